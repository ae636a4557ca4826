use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

pub struct HomeScreen<'a> {
    pub status_message: Option<&'a str>,
}

impl<'a> HomeScreen<'a> {
    pub fn new() -> Self {
        Self {
            status_message: None,
        }
    }

    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status_message = status;
        self
    }
}

impl Default for HomeScreen<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for HomeScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Banner
                Constraint::Min(10),   // Feature list
                Constraint::Length(1), // Status
                Constraint::Length(1), // Nav
            ])
            .split(area);

        self.render_banner(chunks[0], buf);
        self.render_features(chunks[1], buf);

        if let Some(status) = self.status_message {
            Paragraph::new(Span::styled(status, Theme::dim())).render(chunks[2], buf);
        }

        let nav = Line::from(vec![
            Span::styled("[1-5]", Theme::nav_key()),
            Span::styled("Switch View ", Theme::nav_label()),
            Span::styled("[q]", Theme::nav_key()),
            Span::styled("Quit", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[3], buf);
    }
}

impl HomeScreen<'_> {
    fn render_banner(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Theme::border());
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(Span::styled("AgriTech", Theme::title())),
            Line::from(Span::styled("Modern Farming Made Simple", Theme::header())),
            Line::from(Span::styled(
                "Empowering farmers with technology, knowledge, and community",
                Theme::dim(),
            )),
        ];
        Paragraph::new(lines).wrap(Wrap { trim: true }).render(inner, buf);
    }

    fn render_features(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Features")
            .borders(Borders::ALL)
            .border_style(Theme::border());
        let inner = block.inner(area);
        block.render(area, buf);

        let features = [
            (
                "2",
                "Crop Guide",
                "Comprehensive information on crops, seasons, and soil requirements",
            ),
            (
                "3",
                "Weather Data",
                "Live weather updates and farming advice for your region",
            ),
            (
                "4",
                "Recommendations",
                "Smart fertilizer and pesticide recommendations for optimal yield",
            ),
            (
                "5",
                "Discussion Forum",
                "Connect with farmers and experts to share knowledge",
            ),
        ];

        let items: Vec<ListItem> = features
            .iter()
            .map(|(key, title, description)| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(format!("[{}] ", key), Theme::nav_key()),
                        Span::styled(*title, Theme::header()),
                    ]),
                    Line::from(Span::styled(format!("    {}", description), Theme::dim())),
                    Line::from(""),
                ])
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}

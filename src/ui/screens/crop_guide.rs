use crate::app::{CropGuideFocus, CropGuideState};
use crate::data;
use crate::models::{Crop, Season};
use crate::ui::components::{InputWidget, SelectWidget};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

/// Crop catalog browser: search box, season and soil selectors, result list
/// and a detail panel for the highlighted crop.
pub struct CropGuideScreen<'a> {
    crops: &'a [&'a Crop],
    state: &'a CropGuideState,
}

impl<'a> CropGuideScreen<'a> {
    pub fn new(crops: &'a [&'a Crop], state: &'a CropGuideState) -> Self {
        Self { crops, state }
    }
}

impl Widget for CropGuideScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Length(3), // Filters
                Constraint::Min(8),    // List + detail
                Constraint::Length(1), // Nav
            ])
            .split(area);

        Paragraph::new(Span::styled("Crop Guide", Theme::title())).render(chunks[0], buf);

        self.render_filters(chunks[1], buf);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[2]);

        self.render_list(body[0], buf);
        self.render_detail(body[1], buf);

        let nav = Line::from(vec![
            Span::styled("[Tab]", Theme::nav_key()),
            Span::styled("Focus ", Theme::nav_label()),
            Span::styled("[←/→]", Theme::nav_key()),
            Span::styled("Change ", Theme::nav_label()),
            Span::styled("[↑/↓]", Theme::nav_key()),
            Span::styled("Select ", Theme::nav_label()),
            Span::styled("[1-5]", Theme::nav_key()),
            Span::styled("View ", Theme::nav_label()),
            Span::styled("[q]", Theme::nav_key()),
            Span::styled("Quit", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[3], buf);
    }
}

impl CropGuideScreen<'_> {
    fn render_filters(&self, area: Rect, buf: &mut Buffer) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(50),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(area);

        InputWidget::new("Search", &self.state.query)
            .placeholder("Search crops...")
            .focused(self.state.focus == CropGuideFocus::Search)
            .render(cols[0], buf);

        let mut seasons: Vec<&str> = vec!["All Seasons"];
        seasons.extend(Season::all().iter().map(|s| s.as_str()));
        SelectWidget::new("Season", &seasons, self.state.season_index)
            .focused(self.state.focus == CropGuideFocus::Season)
            .render(cols[1], buf);

        let mut soils: Vec<&str> = vec!["All Soil Types"];
        soils.extend(data::SOIL_TYPES.iter().copied());
        SelectWidget::new("Soil Type", &soils, self.state.soil_index)
            .focused(self.state.focus == CropGuideFocus::Soil)
            .render(cols[2], buf);
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.state.focus == CropGuideFocus::List {
            Theme::border_focused()
        } else {
            Theme::border()
        };
        let block = Block::default()
            .title(format!("Crops ({})", self.crops.len()))
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.crops.is_empty() {
            Paragraph::new(Span::styled(
                "No crops found matching your criteria.",
                Theme::dim(),
            ))
            .wrap(Wrap { trim: true })
            .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .crops
            .iter()
            .enumerate()
            .map(|(i, crop)| {
                let style = if i == self.state.selected_index {
                    Theme::selected()
                } else {
                    Theme::normal()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(crop.name.clone(), style),
                    Span::styled(format!("  {}", crop.season), Theme::dim()),
                ]))
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    fn render_detail(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Details")
            .borders(Borders::ALL)
            .border_style(Theme::border());
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(crop) = self.crops.get(self.state.selected_index) else {
            return;
        };

        let soils = crop.soil_types.join(", ");
        let lines = vec![
            Line::from(Span::styled(crop.name.clone(), Theme::header())),
            Line::from(""),
            Line::from(Span::raw(crop.description.clone())),
            Line::from(""),
            detail_line("Season", crop.season.as_str()),
            detail_line("Soil Types", &soils),
            detail_line("Water Need", crop.water_requirement.as_str()),
            detail_line("Temperature", &crop.temperature_range),
            detail_line("Duration", &crop.growing_duration),
        ];

        Paragraph::new(lines).wrap(Wrap { trim: true }).render(inner, buf);
    }
}

fn detail_line<'a>(label: &'a str, value: &str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Theme::dim()),
        Span::raw(value.to_string()),
    ])
}

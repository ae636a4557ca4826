use crate::app::{RecFocus, RecTab, RecommendationsState};
use crate::data;
use crate::models::{Fertilizer, Pesticide};
use crate::ui::components::{InputWidget, SelectWidget};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

/// Fertilizer and pesticide recommendation browser with a tab toggle, search
/// box and crop selector.
pub struct RecommendationsScreen<'a> {
    state: &'a RecommendationsState,
    fertilizers: &'a [&'a Fertilizer],
    pesticides: &'a [&'a Pesticide],
}

impl<'a> RecommendationsScreen<'a> {
    pub fn new(state: &'a RecommendationsState) -> Self {
        Self {
            state,
            fertilizers: &[],
            pesticides: &[],
        }
    }

    pub fn fertilizers(mut self, fertilizers: &'a [&'a Fertilizer]) -> Self {
        self.fertilizers = fertilizers;
        self
    }

    pub fn pesticides(mut self, pesticides: &'a [&'a Pesticide]) -> Self {
        self.pesticides = pesticides;
        self
    }

    fn visible_count(&self) -> usize {
        match self.state.tab {
            RecTab::Fertilizers => self.fertilizers.len(),
            RecTab::Pesticides => self.pesticides.len(),
        }
    }
}

impl Widget for RecommendationsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title + tabs
                Constraint::Length(3), // Filters
                Constraint::Min(8),    // List + detail
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let header = Line::from(vec![
            Span::styled("Recommendations  ", Theme::title()),
            tab_span(RecTab::Fertilizers, self.state.tab),
            Span::raw("  "),
            tab_span(RecTab::Pesticides, self.state.tab),
        ]);
        Paragraph::new(header).render(chunks[0], buf);

        self.render_filters(chunks[1], buf);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[2]);

        self.render_list(body[0], buf);
        self.render_detail(body[1], buf);

        let nav = Line::from(vec![
            Span::styled("[t]", Theme::nav_key()),
            Span::styled("Toggle Tab ", Theme::nav_label()),
            Span::styled("[Tab]", Theme::nav_key()),
            Span::styled("Focus ", Theme::nav_label()),
            Span::styled("[←/→]", Theme::nav_key()),
            Span::styled("Crop ", Theme::nav_label()),
            Span::styled("[↑/↓]", Theme::nav_key()),
            Span::styled("Select ", Theme::nav_label()),
            Span::styled("[q]", Theme::nav_key()),
            Span::styled("Quit", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[3], buf);
    }
}

fn tab_span(tab: RecTab, active: RecTab) -> Span<'static> {
    if tab == active {
        Span::styled(format!("[{}]", tab.label()), Theme::highlight())
    } else {
        Span::styled(format!(" {} ", tab.label()), Theme::dim())
    }
}

impl RecommendationsScreen<'_> {
    fn render_filters(&self, area: Rect, buf: &mut Buffer) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        InputWidget::new("Search", &self.state.query)
            .placeholder("Search by name or target...")
            .focused(self.state.focus == RecFocus::Search)
            .render(cols[0], buf);

        let mut crops: Vec<&str> = vec!["All Crops"];
        crops.extend(data::CROP_OPTIONS.iter().copied());
        SelectWidget::new("Crop", &crops, self.state.crop_index)
            .focused(self.state.focus == RecFocus::Crop)
            .render(cols[1], buf);
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.state.focus == RecFocus::List {
            Theme::border_focused()
        } else {
            Theme::border()
        };
        let block = Block::default()
            .title(format!("{} ({})", self.state.tab.label(), self.visible_count()))
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.visible_count() == 0 {
            let message = match self.state.tab {
                RecTab::Fertilizers => "No fertilizers found for the selected filters.",
                RecTab::Pesticides => "No pesticides found for the selected filters.",
            };
            Paragraph::new(Span::styled(message, Theme::dim()))
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = match self.state.tab {
            RecTab::Fertilizers => self
                .fertilizers
                .iter()
                .enumerate()
                .map(|(i, f)| {
                    let style = if i == self.state.selected_index {
                        Theme::selected()
                    } else {
                        Theme::normal()
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(f.name.clone(), style),
                        Span::styled(format!("  {}", f.kind.as_str()), Theme::dim()),
                    ]))
                })
                .collect(),
            RecTab::Pesticides => self
                .pesticides
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    let style = if i == self.state.selected_index {
                        Theme::selected()
                    } else {
                        Theme::normal()
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(p.name.clone(), style),
                        Span::styled(format!("  {}", p.kind.as_str()), Theme::dim()),
                    ]))
                })
                .collect(),
        };

        List::new(items).render(inner, buf);
    }

    fn render_detail(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Details")
            .borders(Borders::ALL)
            .border_style(Theme::border());
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = match self.state.tab {
            RecTab::Fertilizers => {
                let Some(f) = self.fertilizers.get(self.state.selected_index) else {
                    return;
                };
                vec![
                    Line::from(Span::styled(f.name.clone(), Theme::header())),
                    Line::from(""),
                    detail_line("Type", f.kind.as_str()),
                    detail_line("Composition", &f.composition),
                    detail_line("Suitable For", &f.suitable_for.join(", ")),
                    detail_line("Application", &f.application_method),
                    detail_line("Dosage", &f.dosage),
                ]
            }
            RecTab::Pesticides => {
                let Some(p) = self.pesticides.get(self.state.selected_index) else {
                    return;
                };
                vec![
                    Line::from(Span::styled(p.name.clone(), Theme::header())),
                    Line::from(""),
                    detail_line("Type", p.kind.as_str()),
                    detail_line("Target Pest", &p.target_pest),
                    detail_line("Suitable For", &p.suitable_for.join(", ")),
                    detail_line("Application", &p.application_method),
                    detail_line("Safety Period", &p.safety_period),
                ]
            }
        };

        Paragraph::new(lines).wrap(Wrap { trim: true }).render(inner, buf);
    }
}

fn detail_line<'a>(label: &'a str, value: &str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Theme::dim()),
        Span::raw(value.to_string()),
    ])
}

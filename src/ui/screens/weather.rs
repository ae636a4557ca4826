use crate::app::WeatherState;
use crate::models::Advisory;
use crate::ui::components::{humidity_gauge, temperature_gauge, wind_gauge, InputWidget};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

/// Weather view: city lookup, current conditions with gauges, derived farming
/// advisories and temperature-band crop suggestions.
pub struct WeatherScreen<'a> {
    state: &'a WeatherState,
    advisories: &'a [Advisory],
    suggestions: Option<&'static [&'static str]>,
}

impl<'a> WeatherScreen<'a> {
    pub fn new(state: &'a WeatherState) -> Self {
        Self {
            state,
            advisories: &[],
            suggestions: None,
        }
    }

    pub fn advisories(mut self, advisories: &'a [Advisory]) -> Self {
        self.advisories = advisories;
        self
    }

    pub fn suggestions(mut self, suggestions: Option<&'static [&'static str]>) -> Self {
        self.suggestions = suggestions;
        self
    }
}

impl Widget for WeatherScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Length(3), // City input
                Constraint::Length(7), // Conditions
                Constraint::Min(6),    // Advisories + suggestions
                Constraint::Length(1), // Nav
            ])
            .split(area);

        Paragraph::new(Span::styled("Weather & Farming Advice", Theme::title()))
            .render(chunks[0], buf);

        InputWidget::new("City", &self.state.input)
            .placeholder("Enter city name...")
            .focused(true)
            .render(chunks[1], buf);

        self.render_conditions(chunks[2], buf);
        self.render_advice(chunks[3], buf);

        let nav = Line::from(vec![
            Span::styled("[Enter]", Theme::nav_key()),
            Span::styled("Search ", Theme::nav_label()),
            Span::styled("[Esc]", Theme::nav_key()),
            Span::styled("Home ", Theme::nav_label()),
            Span::styled("[Ctrl-c]", Theme::nav_key()),
            Span::styled("Quit", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[4], buf);
    }
}

impl WeatherScreen<'_> {
    fn render_conditions(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Current Conditions")
            .borders(Borders::ALL)
            .border_style(Theme::border());
        let inner = block.inner(area);
        block.render(area, buf);

        if self.state.loading {
            Paragraph::new(Span::styled("Fetching weather data...", Theme::dim()))
                .render(inner, buf);
            return;
        }

        if let Some(error) = &self.state.error {
            Paragraph::new(Span::styled(error.clone(), Theme::error()))
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            return;
        }

        let Some(snapshot) = &self.state.snapshot else {
            Paragraph::new(Span::styled(
                "Search for a city to see current conditions.",
                Theme::dim(),
            ))
            .render(inner, buf);
            return;
        };

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(22),
                Constraint::Percentage(22),
                Constraint::Percentage(22),
            ])
            .split(inner);

        let summary = vec![
            Line::from(Span::styled(snapshot.location.clone(), Theme::header())),
            Line::from(Span::styled(
                snapshot.description.clone(),
                Theme::normal(),
            )),
            Line::from(Span::styled(
                format!("{}°C", snapshot.temperature_c),
                Style::default().fg(Theme::temp_color(snapshot.temperature_c)),
            )),
        ];
        Paragraph::new(summary).render(cols[0], buf);

        temperature_gauge("Temperature", Some(snapshot.temperature_c as f64))
            .render(cols[1], buf);
        humidity_gauge("Humidity", Some(snapshot.humidity_percent)).render(cols[2], buf);
        wind_gauge("Wind", Some(snapshot.wind_speed_ms)).render(cols[3], buf);
    }

    fn render_advice(&self, area: Rect, buf: &mut Buffer) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(area);

        let block = Block::default()
            .title("Farming Advisories")
            .borders(Borders::ALL)
            .border_style(Theme::border());
        let inner = block.inner(cols[0]);
        block.render(cols[0], buf);

        if self.advisories.is_empty() {
            Paragraph::new(Span::styled(
                "Advisories appear here once weather data is loaded.",
                Theme::dim(),
            ))
            .render(inner, buf);
        } else {
            let items: Vec<ListItem> = self
                .advisories
                .iter()
                .map(|advisory| {
                    ListItem::new(vec![
                        Line::from(vec![
                            Span::styled(
                                format!("{} ", advisory.severity.symbol()),
                                Style::default().fg(advisory.severity.color()),
                            ),
                            Span::styled(advisory.title.clone(), Theme::header()),
                            Span::styled(
                                format!(" [{}]", advisory.category.as_str()),
                                Style::default().fg(advisory.category.color()),
                            ),
                        ]),
                        Line::from(Span::styled(
                            format!("  {}", advisory.detail),
                            Theme::normal(),
                        )),
                    ])
                })
                .collect();
            List::new(items).render(inner, buf);
        }

        let block = Block::default()
            .title("Recommended Crops")
            .borders(Borders::ALL)
            .border_style(Theme::border());
        let inner = block.inner(cols[1]);
        block.render(cols[1], buf);

        match self.suggestions {
            Some(crops) => {
                let items: Vec<ListItem> = crops
                    .iter()
                    .map(|name| {
                        ListItem::new(Line::from(vec![
                            Span::styled("• ", Theme::success()),
                            Span::raw(*name),
                        ]))
                    })
                    .collect();
                List::new(items).render(inner, buf);
            }
            None => {
                Paragraph::new(Span::styled("Needs weather data.", Theme::dim()))
                    .render(inner, buf);
            }
        }
    }
}

use super::AdvisoryRule;
use crate::models::{Advisory, AdvisoryCategory, Severity, WeatherSnapshot};

/// Windy conditions notice.
///
/// Fires above 5 m/s: spray drift makes pesticide application unsafe and
/// tall crops may lodge.
pub struct WindRule;

impl AdvisoryRule for WindRule {
    fn id(&self) -> &'static str {
        "windy_conditions"
    }

    fn name(&self) -> &'static str {
        "Windy Conditions"
    }

    fn evaluate(&self, snapshot: &WeatherSnapshot) -> Option<Advisory> {
        if snapshot.wind_speed_ms <= 5.0 {
            return None;
        }

        Some(Advisory::new(
            self.id(),
            AdvisoryCategory::SprayingHazard,
            Severity::Advisory,
            "Windy Conditions",
            "Avoid spraying pesticides. Provide support to tall crops.",
        ))
    }
}

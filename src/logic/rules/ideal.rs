use super::AdvisoryRule;
use crate::models::{Advisory, AdvisoryCategory, Severity, WeatherSnapshot};

/// Ideal conditions notice: temperature in 15-30°C and humidity at or
/// below 70%.
pub struct IdealConditionsRule;

impl AdvisoryRule for IdealConditionsRule {
    fn id(&self) -> &'static str {
        "ideal_conditions"
    }

    fn name(&self) -> &'static str {
        "Ideal Conditions"
    }

    fn evaluate(&self, snapshot: &WeatherSnapshot) -> Option<Advisory> {
        let mild = (15..=30).contains(&snapshot.temperature_c);
        if !mild || snapshot.humidity_percent > 70.0 {
            return None;
        }

        Some(Advisory::new(
            self.id(),
            AdvisoryCategory::Ideal,
            Severity::Info,
            "Ideal Conditions",
            "Excellent weather for most farming activities. Good time for planting and \
             field work.",
        ))
    }
}

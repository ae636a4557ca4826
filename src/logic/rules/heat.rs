use super::AdvisoryRule;
use crate::models::{Advisory, AdvisoryCategory, Severity, WeatherSnapshot};

/// High temperature alert.
///
/// Fires above 30°C: soil moisture evaporates quickly and standing crops
/// need more frequent irrigation.
pub struct HeatRule;

impl AdvisoryRule for HeatRule {
    fn id(&self) -> &'static str {
        "high_temperature"
    }

    fn name(&self) -> &'static str {
        "High Temperature Alert"
    }

    fn evaluate(&self, snapshot: &WeatherSnapshot) -> Option<Advisory> {
        if snapshot.temperature_c <= 30 {
            return None;
        }

        Some(Advisory::new(
            self.id(),
            AdvisoryCategory::Irrigation,
            Severity::Warning,
            "High Temperature Alert",
            "Increase irrigation frequency. Consider mulching to retain soil moisture.",
        ))
    }
}

use super::AdvisoryRule;
use crate::models::{Advisory, AdvisoryCategory, Severity, WeatherSnapshot};

/// Cool weather notice.
///
/// Fires below 15°C: favourable for Rabi sowing, but frost-sensitive
/// plants need protection.
pub struct CoolWeatherRule;

impl AdvisoryRule for CoolWeatherRule {
    fn id(&self) -> &'static str {
        "cool_weather"
    }

    fn name(&self) -> &'static str {
        "Cool Weather Notice"
    }

    fn evaluate(&self, snapshot: &WeatherSnapshot) -> Option<Advisory> {
        if snapshot.temperature_c >= 15 {
            return None;
        }

        Some(Advisory::new(
            self.id(),
            AdvisoryCategory::FrostWarning,
            Severity::Advisory,
            "Cool Weather Notice",
            "Good conditions for Rabi crops. Protect sensitive plants from frost.",
        ))
    }
}

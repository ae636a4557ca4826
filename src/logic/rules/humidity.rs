use super::AdvisoryRule;
use crate::models::{Advisory, AdvisoryCategory, Severity, WeatherSnapshot};

/// High humidity warning.
///
/// Fires above 70% relative humidity, the band where fungal pathogens
/// spread fastest in standing crops.
pub struct HumidityRule;

impl AdvisoryRule for HumidityRule {
    fn id(&self) -> &'static str {
        "high_humidity"
    }

    fn name(&self) -> &'static str {
        "High Humidity"
    }

    fn evaluate(&self, snapshot: &WeatherSnapshot) -> Option<Advisory> {
        if snapshot.humidity_percent <= 70.0 {
            return None;
        }

        Some(Advisory::new(
            self.id(),
            AdvisoryCategory::DiseasePressure,
            Severity::Warning,
            "High Humidity",
            "Watch for fungal diseases. Ensure proper ventilation for crops.",
        ))
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Normalized result of one weather lookup. Replaced wholesale on each
/// successful lookup and discarded on error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: String,
    /// Rounded to the nearest whole degree Celsius.
    pub temperature_c: i32,
    pub description: String,
    pub humidity_percent: f64,
    pub wind_speed_ms: f64,
    /// Provider icon code, carried verbatim.
    pub icon: String,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    pub fn icon_url(&self) -> String {
        format!("https://openweathermap.org/img/wn/{}@2x.png", self.icon)
    }
}

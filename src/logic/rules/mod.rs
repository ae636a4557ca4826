pub mod cool_weather;
pub mod crop_bands;
pub mod engine;
pub mod heat;
pub mod humidity;
pub mod ideal;
pub mod wind;

pub use crop_bands::recommended_crops;
pub use engine::AdvisoryEngine;

use crate::models::{Advisory, WeatherSnapshot};

/// Trait for weather advisory rules. Rules are independent and
/// non-exclusive: zero or more may fire for a given snapshot.
pub trait AdvisoryRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule and return an advisory if conditions are met
    fn evaluate(&self, snapshot: &WeatherSnapshot) -> Option<Advisory>;
}

use super::{
    cool_weather::CoolWeatherRule, heat::HeatRule, humidity::HumidityRule,
    ideal::IdealConditionsRule, wind::WindRule, AdvisoryRule,
};
use crate::models::{Advisory, WeatherSnapshot};

pub struct AdvisoryEngine {
    rules: Vec<Box<dyn AdvisoryRule>>,
}

impl AdvisoryEngine {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn AdvisoryRule>> = vec![
            Box::new(HeatRule),
            Box::new(CoolWeatherRule),
            Box::new(HumidityRule),
            Box::new(WindRule),
            Box::new(IdealConditionsRule),
        ];

        Self { rules }
    }

    /// Evaluate every rule against the snapshot. Rules are independent;
    /// zero or more advisories may be returned.
    pub fn evaluate(&self, snapshot: &WeatherSnapshot) -> Vec<Advisory> {
        self.rules
            .iter()
            .filter_map(|rule| rule.evaluate(snapshot))
            .collect()
    }

    pub fn evaluate_rule(&self, rule_id: &str, snapshot: &WeatherSnapshot) -> Option<Advisory> {
        self.rules
            .iter()
            .find(|r| r.id() == rule_id)
            .and_then(|rule| rule.evaluate(snapshot))
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for AdvisoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AdvisoryCategory;
    use chrono::Utc;

    fn snapshot(temperature_c: i32, humidity_percent: f64, wind_speed_ms: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            location: "Delhi".into(),
            temperature_c,
            description: "clear sky".into(),
            humidity_percent,
            wind_speed_ms,
            icon: "01d".into(),
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn hot_dry_calm_fires_only_heat() {
        let advisories = AdvisoryEngine::new().evaluate(&snapshot(35, 40.0, 2.0));
        assert_eq!(advisories.len(), 1);
        assert_eq!(advisories[0].category, AdvisoryCategory::Irrigation);
    }

    #[test]
    fn mild_humid_fires_only_humidity() {
        let advisories = AdvisoryEngine::new().evaluate(&snapshot(20, 80.0, 2.0));
        assert_eq!(advisories.len(), 1);
        assert_eq!(advisories[0].category, AdvisoryCategory::DiseasePressure);
    }

    #[test]
    fn mild_dry_fires_ideal() {
        let advisories = AdvisoryEngine::new().evaluate(&snapshot(22, 50.0, 2.0));
        assert_eq!(advisories.len(), 1);
        assert_eq!(advisories[0].category, AdvisoryCategory::Ideal);
    }

    #[test]
    fn humidity_at_70_still_counts_as_ideal() {
        let advisories = AdvisoryEngine::new().evaluate(&snapshot(22, 70.0, 2.0));
        assert_eq!(advisories.len(), 1);
        assert_eq!(advisories[0].category, AdvisoryCategory::Ideal);
    }

    #[test]
    fn rules_are_non_exclusive() {
        // Cold, humid, and windy at once: three independent advisories.
        let advisories = AdvisoryEngine::new().evaluate(&snapshot(10, 85.0, 7.0));
        let categories: Vec<AdvisoryCategory> =
            advisories.iter().map(|a| a.category).collect();
        assert_eq!(
            categories,
            vec![
                AdvisoryCategory::FrostWarning,
                AdvisoryCategory::DiseasePressure,
                AdvisoryCategory::SprayingHazard,
            ]
        );
    }

    #[test]
    fn boundary_values_fire_nothing_extreme() {
        // Exactly 30°C is not hot, exactly 15°C is not cool, exactly
        // 5 m/s is not windy.
        let advisories = AdvisoryEngine::new().evaluate(&snapshot(30, 50.0, 5.0));
        assert_eq!(advisories.len(), 1);
        assert_eq!(advisories[0].category, AdvisoryCategory::Ideal);
    }

    #[test]
    fn evaluate_single_rule_by_id() {
        let engine = AdvisoryEngine::new();
        assert!(engine
            .evaluate_rule("high_temperature", &snapshot(35, 40.0, 2.0))
            .is_some());
        assert!(engine
            .evaluate_rule("high_temperature", &snapshot(25, 40.0, 2.0))
            .is_none());
        assert!(engine.evaluate_rule("unknown", &snapshot(35, 40.0, 2.0)).is_none());
    }

    #[test]
    fn lists_all_rules() {
        assert_eq!(AdvisoryEngine::new().list_rules().len(), 5);
    }
}

use crate::models::WeatherSnapshot;

/// Crops recommended for the current temperature band. The bands are
/// disjoint, so exactly one list is returned for any snapshot.
///
/// - above 25°C: warm-season crops
/// - 15-25°C: shoulder-season crops
/// - below 15°C: cold-season crops
pub fn recommended_crops(snapshot: &WeatherSnapshot) -> &'static [&'static str] {
    match snapshot.temperature_c {
        t if t > 25 => &["Rice", "Cotton", "Maize"],
        t if t >= 15 => &["Wheat", "Potato", "Mustard"],
        _ => &["Wheat", "Peas", "Lentils"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn snapshot(temperature_c: i32) -> WeatherSnapshot {
        WeatherSnapshot {
            location: "Delhi".into(),
            temperature_c,
            description: "clear sky".into(),
            humidity_percent: 50.0,
            wind_speed_ms: 2.0,
            icon: "01d".into(),
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn warm_band_above_25() {
        assert_eq!(
            recommended_crops(&snapshot(26)),
            &["Rice", "Cotton", "Maize"]
        );
        assert_eq!(
            recommended_crops(&snapshot(35)),
            &["Rice", "Cotton", "Maize"]
        );
    }

    #[test]
    fn shoulder_band_15_to_25_inclusive() {
        assert_eq!(
            recommended_crops(&snapshot(15)),
            &["Wheat", "Potato", "Mustard"]
        );
        assert_eq!(
            recommended_crops(&snapshot(25)),
            &["Wheat", "Potato", "Mustard"]
        );
    }

    #[test]
    fn cold_band_below_15() {
        assert_eq!(
            recommended_crops(&snapshot(14)),
            &["Wheat", "Peas", "Lentils"]
        );
        assert_eq!(
            recommended_crops(&snapshot(-2)),
            &["Wheat", "Peas", "Lentils"]
        );
    }
}

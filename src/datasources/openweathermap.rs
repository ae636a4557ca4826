use crate::config::WeatherConfig;
use crate::error::{AgriTechError, Result};
use crate::models::WeatherSnapshot;
use chrono::Utc;
use serde::Deserialize;

const API_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

pub struct OpenWeatherMapClient {
    client: reqwest::Client,
    config: WeatherConfig,
}

// OpenWeatherMap current-weather API response structures
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    name: String,
    main: OwmMain,
    weather: Vec<OwmCondition>,
    wind: OwmWind,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

impl OpenWeatherMapClient {
    pub fn new(config: WeatherConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn default_city(&self) -> &str {
        &self.config.default_city
    }

    /// Fetch current weather for a city and normalize it into a snapshot.
    pub async fn fetch_current(&self, city: &str) -> Result<WeatherSnapshot> {
        let url = format!(
            "{}/weather?q={}&appid={}&units=metric",
            API_BASE_URL, city, self.config.api_key
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            AgriTechError::DataSourceUnavailable(format!("OpenWeatherMap: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AgriTechError::DataSourceUnavailable(format!(
                "OpenWeatherMap returned {}",
                status
            )));
        }

        let payload: OwmCurrentResponse = response.json().await.map_err(|e| {
            AgriTechError::DataSourceUnavailable(format!(
                "Failed to parse OpenWeatherMap response: {}",
                e
            ))
        })?;

        convert_response(payload)
    }

    /// Test connection to the OpenWeatherMap API using the default city.
    pub async fn test_connection(&self) -> Result<bool> {
        let url = format!(
            "{}/weather?q={}&appid={}&units=metric",
            API_BASE_URL, self.config.default_city, self.config.api_key
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            AgriTechError::DataSourceUnavailable(format!("OpenWeatherMap: {}", e))
        })?;

        Ok(response.status().is_success())
    }
}

fn convert_response(payload: OwmCurrentResponse) -> Result<WeatherSnapshot> {
    // A payload without a weather condition entry is malformed.
    let condition = payload.weather.first().ok_or_else(|| {
        AgriTechError::InvalidData("OpenWeatherMap payload missing weather conditions".into())
    })?;

    Ok(WeatherSnapshot {
        location: payload.name,
        temperature_c: payload.main.temp.round() as i32,
        description: condition.description.clone(),
        humidity_percent: payload.main.humidity,
        wind_speed_ms: payload.wind.speed,
        icon: condition.icon.clone(),
        fetched_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PAYLOAD: &str = r#"{
        "name": "Delhi",
        "main": { "temp": 31.6, "humidity": 48, "pressure": 1008 },
        "weather": [ { "id": 721, "main": "Haze", "description": "haze", "icon": "50d" } ],
        "wind": { "speed": 3.1, "deg": 290 }
    }"#;

    #[test]
    fn convert_rounds_temperature_and_carries_fields() {
        let payload: OwmCurrentResponse = serde_json::from_str(SAMPLE_PAYLOAD).unwrap();
        let snapshot = convert_response(payload).unwrap();

        assert_eq!(snapshot.location, "Delhi");
        assert_eq!(snapshot.temperature_c, 32);
        assert_eq!(snapshot.description, "haze");
        assert_eq!(snapshot.humidity_percent, 48.0);
        assert_eq!(snapshot.wind_speed_ms, 3.1);
        assert_eq!(snapshot.icon, "50d");
    }

    #[test]
    fn convert_rounds_half_degrees_up() {
        let payload: OwmCurrentResponse = serde_json::from_str(
            r#"{
                "name": "Pune",
                "main": { "temp": 24.5, "humidity": 60 },
                "weather": [ { "description": "clear sky", "icon": "01d" } ],
                "wind": { "speed": 1.0 }
            }"#,
        )
        .unwrap();
        assert_eq!(convert_response(payload).unwrap().temperature_c, 25);
    }

    #[test]
    fn convert_rejects_empty_conditions() {
        let payload: OwmCurrentResponse = serde_json::from_str(
            r#"{
                "name": "Nowhere",
                "main": { "temp": 20.0, "humidity": 50 },
                "weather": [],
                "wind": { "speed": 2.0 }
            }"#,
        )
        .unwrap();
        assert!(convert_response(payload).is_err());
    }

    #[test]
    fn client_creation() {
        let client = OpenWeatherMapClient::new(WeatherConfig {
            api_key: "test_key".to_string(),
            default_city: "Delhi".to_string(),
        });
        assert_eq!(client.default_city(), "Delhi");
    }
}

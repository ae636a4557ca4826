use serde::{Deserialize, Serialize};

/// Indian cropping seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Kharif,
    Rabi,
    Zaid,
    YearRound,
}

impl Season {
    pub fn all() -> &'static [Season] {
        &[Season::Kharif, Season::Rabi, Season::Zaid, Season::YearRound]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Kharif => "Kharif",
            Season::Rabi => "Rabi",
            Season::Zaid => "Zaid",
            Season::YearRound => "Year-round",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "kharif" => Some(Season::Kharif),
            "rabi" => Some(Season::Rabi),
            "zaid" => Some(Season::Zaid),
            "yearround" | "year-round" | "year round" => Some(Season::YearRound),
            _ => None,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterNeed {
    Low,
    Medium,
    High,
}

impl WaterNeed {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterNeed::Low => "Low",
            WaterNeed::Medium => "Medium",
            WaterNeed::High => "High",
        }
    }
}

impl std::fmt::Display for WaterNeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One crop reference-data record. Loaded once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    pub name: String,
    pub description: String,
    pub season: Season,
    pub soil_types: Vec<String>,
    pub water_requirement: WaterNeed,
    pub temperature_range: String,
    pub growing_duration: String,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_from_str_valid() {
        assert_eq!(Season::from_str("Kharif"), Some(Season::Kharif));
        assert_eq!(Season::from_str("rabi"), Some(Season::Rabi));
        assert_eq!(Season::from_str("ZAID"), Some(Season::Zaid));
        assert_eq!(Season::from_str("Year-round"), Some(Season::YearRound));
        assert_eq!(Season::from_str("year round"), Some(Season::YearRound));
    }

    #[test]
    fn season_from_str_invalid() {
        assert_eq!(Season::from_str("monsoon"), None);
        assert_eq!(Season::from_str(""), None);
    }

    #[test]
    fn season_display_round_trip() {
        for season in Season::all() {
            assert_eq!(Season::from_str(season.as_str()), Some(*season));
        }
    }
}

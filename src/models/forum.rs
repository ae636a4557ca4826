use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostCategory {
    CropManagement,
    PestControl,
    Fertilizers,
    Weather,
    Equipment,
    MarketPrices,
    Other,
}

impl PostCategory {
    pub fn all() -> &'static [PostCategory] {
        &[
            PostCategory::CropManagement,
            PostCategory::PestControl,
            PostCategory::Fertilizers,
            PostCategory::Weather,
            PostCategory::Equipment,
            PostCategory::MarketPrices,
            PostCategory::Other,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PostCategory::CropManagement => "Crop Management",
            PostCategory::PestControl => "Pest Control",
            PostCategory::Fertilizers => "Fertilizers",
            PostCategory::Weather => "Weather",
            PostCategory::Equipment => "Equipment",
            PostCategory::MarketPrices => "Market Prices",
            PostCategory::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cropmanagement" | "crop management" => Some(PostCategory::CropManagement),
            "pestcontrol" | "pest control" => Some(PostCategory::PestControl),
            "fertilizers" => Some(PostCategory::Fertilizers),
            "weather" => Some(PostCategory::Weather),
            "equipment" => Some(PostCategory::Equipment),
            "marketprices" | "market prices" => Some(PostCategory::MarketPrices),
            "other" => Some(PostCategory::Other),
            _ => None,
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            PostCategory::CropManagement => Color::Green,
            PostCategory::PestControl => Color::LightRed,
            PostCategory::Fertilizers => Color::Cyan,
            PostCategory::Weather => Color::Blue,
            PostCategory::Equipment => Color::Yellow,
            PostCategory::MarketPrices => Color::Magenta,
            PostCategory::Other => Color::Gray,
        }
    }
}

impl std::fmt::Display for PostCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One reply, owned solely by its parent post. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumReply {
    pub id: u64,
    pub content: String,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}

/// A discussion post with its ordered reply list. Never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author_name: String,
    pub category: PostCategory,
    pub created_at: DateTime<Utc>,
    pub replies: Vec<ForumReply>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_from_str_valid() {
        assert_eq!(
            PostCategory::from_str("Crop Management"),
            Some(PostCategory::CropManagement)
        );
        assert_eq!(
            PostCategory::from_str("pest control"),
            Some(PostCategory::PestControl)
        );
        assert_eq!(
            PostCategory::from_str("MarketPrices"),
            Some(PostCategory::MarketPrices)
        );
    }

    #[test]
    fn category_from_str_invalid() {
        assert_eq!(PostCategory::from_str("gossip"), None);
        assert_eq!(PostCategory::from_str(""), None);
    }

    #[test]
    fn category_display_round_trip() {
        for category in PostCategory::all() {
            assert_eq!(PostCategory::from_str(category.as_str()), Some(*category));
        }
    }
}

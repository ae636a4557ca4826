use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FertilizerKind {
    Organic,
    Inorganic,
}

impl FertilizerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FertilizerKind::Organic => "Organic",
            FertilizerKind::Inorganic => "Inorganic",
        }
    }
}

impl std::fmt::Display for FertilizerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One fertilizer reference-data record. Loaded once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fertilizer {
    pub name: String,
    pub kind: FertilizerKind,
    pub composition: String,
    /// Crop names this product suits; "All crops" marks universal products.
    pub suitable_for: Vec<String>,
    pub application_method: String,
    pub dosage: String,
}

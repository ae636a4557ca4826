use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PesticideKind {
    Insecticide,
    Fungicide,
    Herbicide,
    OrganicInsecticide,
}

impl PesticideKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PesticideKind::Insecticide => "Insecticide",
            PesticideKind::Fungicide => "Fungicide",
            PesticideKind::Herbicide => "Herbicide",
            PesticideKind::OrganicInsecticide => "Organic Insecticide",
        }
    }

    pub fn is_organic(&self) -> bool {
        matches!(self, PesticideKind::OrganicInsecticide)
    }
}

impl std::fmt::Display for PesticideKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One pesticide reference-data record. Loaded once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pesticide {
    pub name: String,
    pub kind: PesticideKind,
    pub target_pest: String,
    pub suitable_for: Vec<String>,
    pub application_method: String,
    /// Waiting period between last application and harvest.
    pub safety_period: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organic_classification() {
        assert!(PesticideKind::OrganicInsecticide.is_organic());
        assert!(!PesticideKind::Insecticide.is_organic());
        assert!(!PesticideKind::Fungicide.is_organic());
        assert!(!PesticideKind::Herbicide.is_organic());
    }
}

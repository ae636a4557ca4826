use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvisoryCategory {
    Irrigation,
    FrostWarning,
    DiseasePressure,
    SprayingHazard,
    Ideal,
}

impl AdvisoryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdvisoryCategory::Irrigation => "Irrigation",
            AdvisoryCategory::FrostWarning => "Frost Warning",
            AdvisoryCategory::DiseasePressure => "Disease Pressure",
            AdvisoryCategory::SprayingHazard => "Spraying Hazard",
            AdvisoryCategory::Ideal => "Ideal Conditions",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            AdvisoryCategory::Irrigation => Color::Red,
            AdvisoryCategory::FrostWarning => Color::LightBlue,
            AdvisoryCategory::DiseasePressure => Color::Magenta,
            AdvisoryCategory::SprayingHazard => Color::Yellow,
            AdvisoryCategory::Ideal => Color::Green,
        }
    }
}

impl std::fmt::Display for AdvisoryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Advisory,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Advisory => "Advisory",
            Severity::Warning => "Warning",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Severity::Info => Color::Gray,
            Severity::Advisory => Color::Blue,
            Severity::Warning => Color::Yellow,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Severity::Info => "ℹ",
            Severity::Advisory => "→",
            Severity::Warning => "⚠",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived, rule-based advice computed from one weather snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub id: String,
    pub category: AdvisoryCategory,
    pub severity: Severity,
    pub title: String,
    pub detail: String,
}

impl Advisory {
    pub fn new(
        id: impl Into<String>,
        category: AdvisoryCategory,
        severity: Severity,
        title: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            severity,
            title: title.into(),
            detail: detail.into(),
        }
    }
}

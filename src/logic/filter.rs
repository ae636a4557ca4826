//! Pure catalog filtering over the bundled reference data. Filters never
//! mutate the underlying collections and preserve original record order.

use crate::models::{Crop, Fertilizer, Pesticide, Season};

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Membership test against a list-valued field: the selector matches when it
/// is a case-insensitive substring of at least one entry. The universal
/// "All crops" entry matches every selector.
fn list_matches(entries: &[String], selector: &str) -> bool {
    entries
        .iter()
        .any(|entry| contains_ci(entry, selector) || entry.eq_ignore_ascii_case("All crops"))
}

#[derive(Debug, Clone, Default)]
pub struct CropFilter {
    /// Case-insensitive substring match against name or description.
    pub query: String,
    /// `None` means the "All" sentinel: the predicate is always true.
    pub season: Option<Season>,
    pub soil: Option<String>,
}

impl CropFilter {
    pub fn matches(&self, crop: &Crop) -> bool {
        let matches_query = self.query.is_empty()
            || contains_ci(&crop.name, &self.query)
            || contains_ci(&crop.description, &self.query);
        let matches_season = self.season.map_or(true, |s| crop.season == s);
        let matches_soil = self
            .soil
            .as_deref()
            .map_or(true, |soil| crop.soil_types.iter().any(|t| contains_ci(t, soil)));
        matches_query && matches_season && matches_soil
    }
}

pub fn filter_crops<'a>(crops: &'a [Crop], filter: &CropFilter) -> Vec<&'a Crop> {
    crops.iter().filter(|c| filter.matches(c)).collect()
}

#[derive(Debug, Clone, Default)]
pub struct FertilizerFilter {
    pub query: String,
    /// Crop selector; `None` means "All".
    pub crop: Option<String>,
}

impl FertilizerFilter {
    pub fn matches(&self, fertilizer: &Fertilizer) -> bool {
        let matches_query = self.query.is_empty()
            || contains_ci(&fertilizer.name, &self.query)
            || contains_ci(fertilizer.kind.as_str(), &self.query);
        let matches_crop = self
            .crop
            .as_deref()
            .map_or(true, |crop| list_matches(&fertilizer.suitable_for, crop));
        matches_query && matches_crop
    }
}

pub fn filter_fertilizers<'a>(
    fertilizers: &'a [Fertilizer],
    filter: &FertilizerFilter,
) -> Vec<&'a Fertilizer> {
    fertilizers.iter().filter(|f| filter.matches(f)).collect()
}

#[derive(Debug, Clone, Default)]
pub struct PesticideFilter {
    pub query: String,
    pub crop: Option<String>,
}

impl PesticideFilter {
    pub fn matches(&self, pesticide: &Pesticide) -> bool {
        let matches_query = self.query.is_empty()
            || contains_ci(&pesticide.name, &self.query)
            || contains_ci(pesticide.kind.as_str(), &self.query)
            || contains_ci(&pesticide.target_pest, &self.query);
        let matches_crop = self
            .crop
            .as_deref()
            .map_or(true, |crop| list_matches(&pesticide.suitable_for, crop));
        matches_query && matches_crop
    }
}

pub fn filter_pesticides<'a>(
    pesticides: &'a [Pesticide],
    filter: &PesticideFilter,
) -> Vec<&'a Pesticide> {
    pesticides.iter().filter(|p| filter.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{sample_crops, sample_fertilizers, sample_pesticides};

    #[test]
    fn empty_filter_returns_all_crops_in_order() {
        let crops = sample_crops();
        let filtered = filter_crops(&crops, &CropFilter::default());
        assert_eq!(filtered.len(), crops.len());
        for (original, kept) in crops.iter().zip(filtered) {
            assert_eq!(original, kept);
        }
    }

    #[test]
    fn search_rice_by_name_case_insensitive() {
        let crops = sample_crops();
        let filter = CropFilter {
            query: "rIcE".into(),
            ..Default::default()
        };
        let filtered = filter_crops(&crops, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Rice");
    }

    #[test]
    fn search_matches_description_text() {
        let crops = sample_crops();
        let filter = CropFilter {
            query: "tubers".into(),
            ..Default::default()
        };
        let filtered = filter_crops(&crops, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Potato");
    }

    #[test]
    fn season_and_soil_predicates_combine() {
        let crops = sample_crops();
        let filter = CropFilter {
            query: String::new(),
            season: Some(Season::Rabi),
            soil: Some("Sandy Loam".into()),
        };
        let names: Vec<&str> = filter_crops(&crops, &filter)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Mustard", "Potato"]);
    }

    #[test]
    fn soil_selector_is_substring_membership() {
        let crops = sample_crops();
        // "Sandy" matches crops listing "Sandy Loam" even though none list
        // plain "Sandy".
        let filter = CropFilter {
            soil: Some("Sandy".into()),
            ..Default::default()
        };
        let filtered = filter_crops(&crops, &filter);
        assert!(filtered.iter().any(|c| c.name == "Maize"));
    }

    #[test]
    fn no_matches_yields_empty_sequence() {
        let crops = sample_crops();
        let filter = CropFilter {
            query: "quinoa".into(),
            ..Default::default()
        };
        assert!(filter_crops(&crops, &filter).is_empty());
    }

    #[test]
    fn fertilizers_for_cotton() {
        let fertilizers = sample_fertilizers();
        let filter = FertilizerFilter {
            query: String::new(),
            crop: Some("Cotton".into()),
        };
        let names: Vec<&str> = filter_fertilizers(&fertilizers, &filter)
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        for expected in [
            "Urea",
            "DAP (Diammonium Phosphate)",
            "Potash (MOP)",
            "Vermicompost",
            "NPK 19:19:19",
        ] {
            assert!(names.contains(&expected), "missing {}", expected);
        }
        assert!(!names.contains(&"Neem Cake"));
    }

    #[test]
    fn fertilizer_search_matches_kind_label() {
        let fertilizers = sample_fertilizers();
        let filter = FertilizerFilter {
            query: "organic".into(),
            crop: None,
        };
        let filtered = filter_fertilizers(&fertilizers, &filter);
        // "organic" is a substring of both "Organic" and "Inorganic".
        assert_eq!(filtered.len(), fertilizers.len());
    }

    #[test]
    fn pesticide_search_matches_target_pest() {
        let pesticides = sample_pesticides();
        let filter = PesticideFilter {
            query: "aphids".into(),
            crop: None,
        };
        let names: Vec<&str> = filter_pesticides(&pesticides, &filter)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Imidacloprid 17.8% SL", "Neem Oil"]);
    }

    #[test]
    fn pesticides_for_maize_includes_universal_products() {
        let pesticides = sample_pesticides();
        let filter = PesticideFilter {
            query: String::new(),
            crop: Some("Maize".into()),
        };
        let names: Vec<&str> = filter_pesticides(&pesticides, &filter)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert!(names.contains(&"2,4-D Sodium Salt"));
        // "All crops" entries match any crop selector.
        assert!(names.contains(&"Neem Oil"));
    }

    #[test]
    fn filtering_does_not_mutate_source() {
        let crops = sample_crops();
        let before = crops.clone();
        let _ = filter_crops(
            &crops,
            &CropFilter {
                query: "rice".into(),
                ..Default::default()
            },
        );
        assert_eq!(crops, before);
    }
}

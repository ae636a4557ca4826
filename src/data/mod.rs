//! Bundled reference datasets. These are fixed in-process collections; the
//! application never mutates them.

use crate::models::{
    Crop, Fertilizer, FertilizerKind, ForumPost, ForumReply, Pesticide, PesticideKind,
    PostCategory, Season, WaterNeed,
};
use chrono::{Duration, Utc};

/// Soil selector options shown on the crop guide screen.
pub const SOIL_TYPES: &[&str] = &["Loamy", "Clay", "Sandy", "Sandy Loam", "Black"];

/// Crop selector options shown on the recommendations screen.
pub const CROP_OPTIONS: &[&str] = &[
    "Rice",
    "Wheat",
    "Maize",
    "Cotton",
    "Tomato",
    "Potato",
    "Sugarcane",
    "Vegetables",
    "Fruits",
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn sample_crops() -> Vec<Crop> {
    vec![
        Crop {
            name: "Rice".into(),
            description: "Rice is a staple food crop grown in flooded fields. It requires warm \
                          temperatures and high humidity. Best suited for areas with adequate \
                          water supply."
                .into(),
            season: Season::Kharif,
            soil_types: strings(&["Clay", "Loamy"]),
            water_requirement: WaterNeed::High,
            temperature_range: "20-35°C".into(),
            growing_duration: "120-150 days".into(),
            image_url: "https://images.pexels.com/photos/2589457/pexels-photo-2589457.jpeg".into(),
        },
        Crop {
            name: "Wheat".into(),
            description: "Wheat is a major cereal crop grown in cooler seasons. It thrives in \
                          moderate temperatures and well-drained soil."
                .into(),
            season: Season::Rabi,
            soil_types: strings(&["Loamy", "Clay"]),
            water_requirement: WaterNeed::Medium,
            temperature_range: "10-25°C".into(),
            growing_duration: "120-150 days".into(),
            image_url: "https://images.pexels.com/photos/265216/pexels-photo-265216.jpeg".into(),
        },
        Crop {
            name: "Maize".into(),
            description: "Maize is a versatile crop that can be grown in multiple seasons. It \
                          requires moderate water and warm temperatures."
                .into(),
            season: Season::Kharif,
            soil_types: strings(&["Loamy", "Sandy Loam"]),
            water_requirement: WaterNeed::Medium,
            temperature_range: "18-32°C".into(),
            growing_duration: "90-120 days".into(),
            image_url: "https://images.pexels.com/photos/547263/pexels-photo-547263.jpeg".into(),
        },
        Crop {
            name: "Cotton".into(),
            description: "Cotton is a major cash crop requiring warm temperatures and moderate \
                          rainfall. It grows best in black cotton soil."
                .into(),
            season: Season::Kharif,
            soil_types: strings(&["Black", "Loamy"]),
            water_requirement: WaterNeed::Medium,
            temperature_range: "21-30°C".into(),
            growing_duration: "180-200 days".into(),
            image_url: "https://images.pexels.com/photos/6044266/pexels-photo-6044266.jpeg".into(),
        },
        Crop {
            name: "Tomato".into(),
            description: "Tomatoes are grown year-round in suitable climates. They require \
                          well-drained soil and regular watering."
                .into(),
            season: Season::YearRound,
            soil_types: strings(&["Loamy", "Sandy Loam"]),
            water_requirement: WaterNeed::Medium,
            temperature_range: "20-30°C".into(),
            growing_duration: "60-90 days".into(),
            image_url: "https://images.pexels.com/photos/1327838/pexels-photo-1327838.jpeg".into(),
        },
        Crop {
            name: "Sugarcane".into(),
            description: "Sugarcane is a tropical crop requiring high water and warm \
                          temperatures throughout its long growing period."
                .into(),
            season: Season::YearRound,
            soil_types: strings(&["Loamy", "Clay"]),
            water_requirement: WaterNeed::High,
            temperature_range: "20-35°C".into(),
            growing_duration: "300-365 days".into(),
            image_url: "https://images.pexels.com/photos/2131784/pexels-photo-2131784.jpeg".into(),
        },
        Crop {
            name: "Mustard".into(),
            description: "Mustard is a winter crop grown for its seeds and oil. It thrives in \
                          cool temperatures and well-drained soil."
                .into(),
            season: Season::Rabi,
            soil_types: strings(&["Loamy", "Sandy Loam"]),
            water_requirement: WaterNeed::Low,
            temperature_range: "10-25°C".into(),
            growing_duration: "90-120 days".into(),
            image_url: "https://images.pexels.com/photos/2255935/pexels-photo-2255935.jpeg".into(),
        },
        Crop {
            name: "Potato".into(),
            description: "Potatoes are a cool-season crop grown for tubers. They require \
                          well-drained soil and moderate watering."
                .into(),
            season: Season::Rabi,
            soil_types: strings(&["Loamy", "Sandy Loam"]),
            water_requirement: WaterNeed::Medium,
            temperature_range: "15-25°C".into(),
            growing_duration: "90-120 days".into(),
            image_url:
                "https://images.pexels.com/photos/144248/potatoes-vegetables-erdfrucht-bio-144248.jpeg"
                    .into(),
        },
    ]
}

pub fn sample_fertilizers() -> Vec<Fertilizer> {
    vec![
        Fertilizer {
            name: "Urea".into(),
            kind: FertilizerKind::Inorganic,
            composition: "46% Nitrogen".into(),
            suitable_for: strings(&["Rice", "Wheat", "Maize", "Cotton"]),
            application_method: "Broadcast or band application".into(),
            dosage: "100-150 kg per hectare".into(),
        },
        Fertilizer {
            name: "DAP (Diammonium Phosphate)".into(),
            kind: FertilizerKind::Inorganic,
            composition: "18% N, 46% P2O5".into(),
            suitable_for: strings(&["All crops"]),
            application_method: "Basal application during sowing".into(),
            dosage: "100-125 kg per hectare".into(),
        },
        Fertilizer {
            name: "Potash (MOP)".into(),
            kind: FertilizerKind::Inorganic,
            composition: "60% K2O".into(),
            suitable_for: strings(&["Cotton", "Sugarcane", "Fruits", "Vegetables"]),
            application_method: "Soil application".into(),
            dosage: "50-100 kg per hectare".into(),
        },
        Fertilizer {
            name: "Vermicompost".into(),
            kind: FertilizerKind::Organic,
            composition: "NPK 1.5-2-1.5, Rich in micronutrients".into(),
            suitable_for: strings(&["All crops"]),
            application_method: "Mix with soil before sowing".into(),
            dosage: "5-10 tonnes per hectare".into(),
        },
        Fertilizer {
            name: "Neem Cake".into(),
            kind: FertilizerKind::Organic,
            composition: "NPK 5-1-2, Natural pest repellent".into(),
            suitable_for: strings(&["Vegetables", "Fruits", "Cereals"]),
            application_method: "Mix with soil or as top dressing".into(),
            dosage: "250-500 kg per hectare".into(),
        },
        Fertilizer {
            name: "NPK 19:19:19".into(),
            kind: FertilizerKind::Inorganic,
            composition: "19% each N, P2O5, K2O".into(),
            suitable_for: strings(&["All crops"]),
            application_method: "Foliar spray or fertigation".into(),
            dosage: "2-3 kg per hectare for foliar".into(),
        },
    ]
}

pub fn sample_pesticides() -> Vec<Pesticide> {
    vec![
        Pesticide {
            name: "Chlorpyrifos 20% EC".into(),
            kind: PesticideKind::Insecticide,
            target_pest: "Termites, Root grubs, Stem borers".into(),
            suitable_for: strings(&["Rice", "Wheat", "Cotton", "Sugarcane"]),
            application_method: "Soil application or foliar spray".into(),
            safety_period: "15 days before harvest".into(),
        },
        Pesticide {
            name: "Mancozeb 75% WP".into(),
            kind: PesticideKind::Fungicide,
            target_pest: "Late blight, Early blight, Leaf spots".into(),
            suitable_for: strings(&["Potato", "Tomato", "Vegetables"]),
            application_method: "Foliar spray".into(),
            safety_period: "7 days before harvest".into(),
        },
        Pesticide {
            name: "Imidacloprid 17.8% SL".into(),
            kind: PesticideKind::Insecticide,
            target_pest: "Aphids, Jassids, Whiteflies, Thrips".into(),
            suitable_for: strings(&["Cotton", "Rice", "Vegetables"]),
            application_method: "Foliar spray or seed treatment".into(),
            safety_period: "21 days before harvest".into(),
        },
        Pesticide {
            name: "Propiconazole 25% EC".into(),
            kind: PesticideKind::Fungicide,
            target_pest: "Rust, Powdery mildew, Leaf spot".into(),
            suitable_for: strings(&["Wheat", "Rice", "Fruits"]),
            application_method: "Foliar spray".into(),
            safety_period: "14 days before harvest".into(),
        },
        Pesticide {
            name: "Neem Oil".into(),
            kind: PesticideKind::OrganicInsecticide,
            target_pest: "Various insects, Aphids, Mites".into(),
            suitable_for: strings(&["All crops"]),
            application_method: "Foliar spray".into(),
            safety_period: "Safe up to harvest".into(),
        },
        Pesticide {
            name: "2,4-D Sodium Salt".into(),
            kind: PesticideKind::Herbicide,
            target_pest: "Broad-leaved weeds".into(),
            suitable_for: strings(&["Wheat", "Rice", "Sugarcane", "Maize"]),
            application_method: "Post-emergence spray".into(),
            safety_period: "30 days before harvest".into(),
        },
    ]
}

/// Starter discussion threads so the forum is not empty on first launch.
pub fn seed_posts() -> Vec<ForumPost> {
    let now = Utc::now();
    vec![
        ForumPost {
            id: 1,
            title: "Best practices for wheat cultivation in winter".into(),
            content: "I am planning to sow wheat this season. What are the best practices for \
                      getting a good yield? Any suggestions on seed varieties and fertilizer \
                      application?"
                .into(),
            author_name: "Ramesh Kumar".into(),
            category: PostCategory::CropManagement,
            created_at: now - Duration::days(2),
            replies: vec![ForumReply {
                id: 1,
                content: "PBW-343 and HD-2967 are excellent varieties for winter wheat. Make \
                          sure to apply DAP at the time of sowing."
                    .into(),
                author_name: "Suresh Patel".into(),
                created_at: now - Duration::days(1),
            }],
        },
        ForumPost {
            id: 2,
            title: "Organic pest control methods".into(),
            content: "Looking for organic alternatives to chemical pesticides. What has worked \
                      well for you?"
                .into(),
            author_name: "Anjali Sharma".into(),
            category: PostCategory::PestControl,
            created_at: now - Duration::days(5),
            replies: vec![
                ForumReply {
                    id: 2,
                    content: "Neem oil spray has been very effective for me against aphids and \
                              whiteflies. Mix 5ml neem oil per liter of water."
                        .into(),
                    author_name: "Prakash Singh".into(),
                    created_at: now - Duration::days(4),
                },
                ForumReply {
                    id: 3,
                    content: "I use a mixture of garlic and chili spray. Works great and \
                              completely natural!"
                        .into(),
                    author_name: "Meena Devi".into(),
                    created_at: now - Duration::days(3),
                },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datasets_have_expected_sizes() {
        assert_eq!(sample_crops().len(), 8);
        assert_eq!(sample_fertilizers().len(), 6);
        assert_eq!(sample_pesticides().len(), 6);
        assert_eq!(seed_posts().len(), 2);
    }

    #[test]
    fn seed_post_ids_unique() {
        let posts = seed_posts();
        let mut post_ids: Vec<u64> = posts.iter().map(|p| p.id).collect();
        post_ids.dedup();
        assert_eq!(post_ids.len(), posts.len());

        let mut reply_ids: Vec<u64> = posts
            .iter()
            .flat_map(|p| p.replies.iter().map(|r| r.id))
            .collect();
        reply_ids.sort_unstable();
        reply_ids.dedup();
        assert_eq!(reply_ids.len(), 3);
    }
}

pub mod filter;
pub mod forum;
pub mod rules;

pub use filter::{
    filter_crops, filter_fertilizers, filter_pesticides, CropFilter, FertilizerFilter,
    PesticideFilter,
};
pub use forum::{relative_age, ForumStore};
pub use rules::AdvisoryEngine;

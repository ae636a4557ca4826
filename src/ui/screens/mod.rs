pub mod crop_guide;
pub mod forum;
pub mod home;
pub mod recommendations;
pub mod weather;

pub use crop_guide::CropGuideScreen;
pub use forum::ForumScreen;
pub use home::HomeScreen;
pub use recommendations::RecommendationsScreen;
pub use weather::WeatherScreen;

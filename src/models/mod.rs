pub mod advisory;
pub mod crop;
pub mod fertilizer;
pub mod forum;
pub mod pesticide;
pub mod weather;

pub use advisory::*;
pub use crop::*;
pub use fertilizer::*;
pub use forum::*;
pub use pesticide::*;
pub use weather::*;

use crate::error::Result;
use crate::models::{Crop, Fertilizer, ForumPost, ForumReply, Pesticide};

/// Data-access seam for reference data and forum records. The application
/// core only depends on this trait, so an in-memory implementation and a
/// future remote data API are interchangeable.
pub trait Repository {
    fn list_crops(&self) -> Result<Vec<Crop>>;
    fn list_fertilizers(&self) -> Result<Vec<Fertilizer>>;
    fn list_pesticides(&self) -> Result<Vec<Pesticide>>;
    fn list_posts(&self) -> Result<Vec<ForumPost>>;
    fn create_post(&mut self, post: &ForumPost) -> Result<()>;
    fn create_reply(&mut self, post_id: u64, reply: &ForumReply) -> Result<()>;
}

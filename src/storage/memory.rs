use super::Repository;
use crate::data;
use crate::error::{AgriTechError, Result};
use crate::models::{Crop, Fertilizer, ForumPost, ForumReply, Pesticide};

/// In-process repository backed by the bundled datasets. Forum writes are
/// held in memory for the lifetime of the process.
pub struct InMemoryRepository {
    crops: Vec<Crop>,
    fertilizers: Vec<Fertilizer>,
    pesticides: Vec<Pesticide>,
    posts: Vec<ForumPost>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self {
            crops: data::sample_crops(),
            fertilizers: data::sample_fertilizers(),
            pesticides: data::sample_pesticides(),
            posts: data::seed_posts(),
        }
    }

    pub fn posts(&self) -> &[ForumPost] {
        &self.posts
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for InMemoryRepository {
    fn list_crops(&self) -> Result<Vec<Crop>> {
        Ok(self.crops.clone())
    }

    fn list_fertilizers(&self) -> Result<Vec<Fertilizer>> {
        Ok(self.fertilizers.clone())
    }

    fn list_pesticides(&self) -> Result<Vec<Pesticide>> {
        Ok(self.pesticides.clone())
    }

    fn list_posts(&self) -> Result<Vec<ForumPost>> {
        Ok(self.posts.clone())
    }

    fn create_post(&mut self, post: &ForumPost) -> Result<()> {
        self.posts.insert(0, post.clone());
        Ok(())
    }

    fn create_reply(&mut self, post_id: u64, reply: &ForumReply) -> Result<()> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| AgriTechError::NotFound(format!("post {}", post_id)))?;
        post.replies.push(reply.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PostCategory;
    use chrono::Utc;

    #[test]
    fn lists_bundled_reference_data() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.list_crops().unwrap().len(), 8);
        assert_eq!(repo.list_fertilizers().unwrap().len(), 6);
        assert_eq!(repo.list_pesticides().unwrap().len(), 6);
    }

    #[test]
    fn create_post_prepends() {
        let mut repo = InMemoryRepository::new();
        let post = ForumPost {
            id: 42,
            title: "Canal water schedule".into(),
            content: "When does rotation start this month?".into(),
            author_name: "Kiran Rao".into(),
            category: PostCategory::Other,
            created_at: Utc::now(),
            replies: Vec::new(),
        };
        repo.create_post(&post).unwrap();
        assert_eq!(repo.posts()[0].id, 42);
    }

    #[test]
    fn create_reply_requires_existing_post() {
        let mut repo = InMemoryRepository::new();
        let reply = ForumReply {
            id: 99,
            content: "Rotation starts on the 5th.".into(),
            author_name: "Suresh Patel".into(),
            created_at: Utc::now(),
        };
        assert!(repo.create_reply(1, &reply).is_ok());
        assert!(repo.create_reply(404, &reply).is_err());
    }
}

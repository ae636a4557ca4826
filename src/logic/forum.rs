use crate::models::{ForumPost, ForumReply, PostCategory};
use chrono::{DateTime, Utc};

/// In-memory discussion store: a newest-first post list, the currently open
/// post, and the new-post composer flag. Posts and replies are append-only;
/// every state transition builds a fresh collection so before/after snapshots
/// compare by equality.
#[derive(Debug, Clone, PartialEq)]
pub struct ForumStore {
    posts: Vec<ForumPost>,
    selected: Option<u64>,
    composer_open: bool,
    next_post_id: u64,
    next_reply_id: u64,
}

impl ForumStore {
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            selected: None,
            composer_open: false,
            next_post_id: 1,
            next_reply_id: 1,
        }
    }

    /// Build a store from existing posts, advancing the id counters past the
    /// highest seeded identifiers.
    pub fn with_posts(posts: Vec<ForumPost>) -> Self {
        let next_post_id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let next_reply_id = posts
            .iter()
            .flat_map(|p| p.replies.iter().map(|r| r.id))
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            posts,
            selected: None,
            composer_open: false,
            next_post_id,
            next_reply_id,
        }
    }

    pub fn posts(&self) -> &[ForumPost] {
        &self.posts
    }

    /// Read-only projection by category. `None` is the "All" sentinel.
    pub fn filter_by_category(&self, category: Option<PostCategory>) -> Vec<&ForumPost> {
        self.posts
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .collect()
    }

    pub fn selected_post(&self) -> Option<&ForumPost> {
        let id = self.selected?;
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn select_post(&mut self, id: u64) -> bool {
        if self.posts.iter().any(|p| p.id == id) {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    pub fn close_post(&mut self) {
        self.selected = None;
    }

    pub fn composer_open(&self) -> bool {
        self.composer_open
    }

    pub fn open_composer(&mut self) {
        self.composer_open = true;
    }

    pub fn close_composer(&mut self) {
        self.composer_open = false;
    }

    /// Create a post. All fields are required non-empty; a missing field
    /// silently blocks submission and leaves the store untouched. On success
    /// the post is prepended (newest first) and the composer closes.
    pub fn create_post(
        &mut self,
        title: &str,
        content: &str,
        author_name: &str,
        category: PostCategory,
    ) -> Option<u64> {
        if title.trim().is_empty() || content.trim().is_empty() || author_name.trim().is_empty() {
            return None;
        }

        let id = self.next_post_id;
        self.next_post_id += 1;

        let post = ForumPost {
            id,
            title: title.to_string(),
            content: content.to_string(),
            author_name: author_name.to_string(),
            category,
            created_at: Utc::now(),
            replies: Vec::new(),
        };

        let previous = std::mem::take(&mut self.posts);
        self.posts = std::iter::once(post).chain(previous).collect();
        self.composer_open = false;
        Some(id)
    }

    /// Append a reply to the currently selected post. Requires a selected,
    /// still-existing post and non-empty fields; otherwise no mutation.
    pub fn create_reply(&mut self, content: &str, author_name: &str) -> Option<u64> {
        let post_id = self.selected?;
        if content.trim().is_empty() || author_name.trim().is_empty() {
            return None;
        }
        if !self.posts.iter().any(|p| p.id == post_id) {
            return None;
        }

        let id = self.next_reply_id;
        self.next_reply_id += 1;

        let reply = ForumReply {
            id,
            content: content.to_string(),
            author_name: author_name.to_string(),
            created_at: Utc::now(),
        };

        let previous = std::mem::take(&mut self.posts);
        self.posts = previous
            .into_iter()
            .map(|mut post| {
                if post.id == post_id {
                    let mut replies = std::mem::take(&mut post.replies);
                    replies.push(reply.clone());
                    post.replies = replies;
                }
                post
            })
            .collect();
        Some(id)
    }
}

impl Default for ForumStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Display age of a timestamp: whole hours when under a day, else whole
/// days. Recomputed on each render, never stored.
pub fn relative_age(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - timestamp).num_hours().max(0);
    if hours < 24 {
        format!("{} hours ago", hours)
    } else {
        format!("{} days ago", hours / 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_posts;
    use chrono::Duration;

    fn seeded() -> ForumStore {
        ForumStore::with_posts(seed_posts())
    }

    #[test]
    fn create_post_prepends_with_empty_replies() {
        let mut store = seeded();
        let before = store.posts().len();

        let id = store
            .create_post(
                "Drip irrigation layout",
                "How far apart should emitters be for tomato rows?",
                "Kiran Rao",
                PostCategory::Equipment,
            )
            .expect("valid post should be created");

        assert_eq!(store.posts().len(), before + 1);
        let first = &store.posts()[0];
        assert_eq!(first.id, id);
        assert_eq!(first.title, "Drip irrigation layout");
        assert!(first.replies.is_empty());
    }

    #[test]
    fn create_post_with_empty_title_is_a_no_op() {
        let mut store = seeded();
        let before = store.clone();

        assert_eq!(
            store.create_post("", "content", "author", PostCategory::Other),
            None
        );
        assert_eq!(store, before);
    }

    #[test]
    fn create_post_with_blank_author_is_a_no_op() {
        let mut store = seeded();
        let before = store.clone();

        assert_eq!(
            store.create_post("title", "content", "   ", PostCategory::Other),
            None
        );
        assert_eq!(store, before);
    }

    #[test]
    fn create_post_closes_composer() {
        let mut store = seeded();
        store.open_composer();
        store.create_post("t", "c", "a", PostCategory::Weather);
        assert!(!store.composer_open());
    }

    #[test]
    fn post_ids_are_unique_across_creations() {
        let mut store = seeded();
        let a = store.create_post("a", "c", "x", PostCategory::Other).unwrap();
        let b = store.create_post("b", "c", "x", PostCategory::Other).unwrap();
        assert_ne!(a, b);
        let mut ids: Vec<u64> = store.posts().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), store.posts().len());
    }

    #[test]
    fn create_reply_appends_and_is_read_your_write() {
        let mut store = seeded();
        assert!(store.select_post(2));
        let prior: Vec<u64> = store
            .selected_post()
            .unwrap()
            .replies
            .iter()
            .map(|r| r.id)
            .collect();

        let id = store
            .create_reply("Try neem cake in the soil as well.", "Kiran Rao")
            .expect("valid reply should be created");

        // Visible in the store and through the selected-post view.
        let selected = store.selected_post().unwrap();
        assert_eq!(selected.replies.len(), prior.len() + 1);
        assert_eq!(selected.replies.last().unwrap().id, id);
        // Prior replies keep their order.
        let kept: Vec<u64> = selected.replies[..prior.len()]
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(kept, prior);
    }

    #[test]
    fn create_reply_without_selection_is_a_no_op() {
        let mut store = seeded();
        let before = store.clone();
        assert_eq!(store.create_reply("content", "author"), None);
        assert_eq!(store, before);
    }

    #[test]
    fn create_reply_with_empty_body_is_a_no_op() {
        let mut store = seeded();
        store.select_post(1);
        let before = store.clone();
        assert_eq!(store.create_reply("", "author"), None);
        assert_eq!(store, before);
    }

    #[test]
    fn select_post_requires_existence() {
        let mut store = seeded();
        assert!(!store.select_post(999));
        assert!(store.selected_post().is_none());
        assert!(store.select_post(1));
        assert_eq!(store.selected_post().unwrap().id, 1);
        store.close_post();
        assert!(store.selected_post().is_none());
    }

    #[test]
    fn filter_by_category_projects_without_mutating() {
        let store = seeded();
        let pest = store.filter_by_category(Some(PostCategory::PestControl));
        assert_eq!(pest.len(), 1);
        assert_eq!(pest[0].title, "Organic pest control methods");

        let all = store.filter_by_category(None);
        assert_eq!(all.len(), store.posts().len());

        let empty = store.filter_by_category(Some(PostCategory::MarketPrices));
        assert!(empty.is_empty());
    }

    #[test]
    fn relative_age_formats_hours_then_days() {
        let now = Utc::now();
        assert_eq!(relative_age(now - Duration::hours(3), now), "3 hours ago");
        assert_eq!(relative_age(now - Duration::hours(23), now), "23 hours ago");
        assert_eq!(relative_age(now - Duration::hours(24), now), "1 days ago");
        assert_eq!(relative_age(now - Duration::days(5), now), "5 days ago");
    }
}

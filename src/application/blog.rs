//! Post management over an injected repository.

use std::sync::Arc;

use metrics::{counter, gauge};
use thiserror::Error;
use tracing::{debug, info};

use crate::application::events::{EventBus, PostEvent};
use crate::application::repos::{RepoError, Repository};
use crate::domain::entities::{NewPost, PostPatch, PostRecord};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlogError {
    #[error("post `{0}` not found")]
    NotFound(u64),
}

impl From<RepoError> for BlogError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { id, .. } => BlogError::NotFound(id),
        }
    }
}

/// Owns the authoritative sequence of posts.
///
/// Writes are announced on the event bus after they have been applied.
#[derive(Clone)]
pub struct BlogService {
    posts: Arc<dyn Repository<PostRecord>>,
    events: Arc<EventBus<PostEvent>>,
}

impl BlogService {
    pub fn new(posts: Arc<dyn Repository<PostRecord>>, events: Arc<EventBus<PostEvent>>) -> Self {
        Self { posts, events }
    }

    pub fn events(&self) -> &Arc<EventBus<PostEvent>> {
        &self.events
    }

    pub fn create(&self, post: NewPost) -> PostRecord {
        let stored = self.posts.create(post.into_record());
        info!(
            post_id = stored.id,
            author_id = stored.author_id,
            title = %stored.title,
            "Post created"
        );
        counter!("folio_posts_created_total").increment(1);
        self.record_size();

        self.events.publish(&PostEvent::Created(stored.clone()));
        stored
    }

    pub fn get_all(&self) -> Vec<PostRecord> {
        let posts = self.posts.get_all();
        debug!(count = posts.len(), "Listing posts");
        posts
    }

    pub fn get_by_id(&self, id: u64) -> Result<PostRecord, BlogError> {
        debug!(post_id = id, "Loading post");
        self.posts.get_by_id(id).map_err(BlogError::from)
    }

    pub fn update(&self, id: u64, patch: PostPatch) -> Result<PostRecord, BlogError> {
        let updated = self.posts.update(id, &mut |post: &mut PostRecord| patch.apply(post))?;
        info!(post_id = id, "Post updated");
        counter!("folio_posts_updated_total").increment(1);

        self.events.publish(&PostEvent::Updated(updated.clone()));
        Ok(updated)
    }

    pub fn delete(&self, id: u64) -> Result<(), BlogError> {
        self.posts.delete(id)?;
        info!(post_id = id, "Post deleted");
        counter!("folio_posts_deleted_total").increment(1);
        self.record_size();

        self.events.publish(&PostEvent::Deleted { id });
        Ok(())
    }

    pub fn posts_by_author(&self, author_id: u64) -> Vec<PostRecord> {
        self.posts
            .get_all()
            .into_iter()
            .filter(|post| post.author_id == author_id)
            .collect()
    }

    fn record_size(&self) {
        gauge!("folio_posts_stored").set(self.posts.len() as f64);
    }
}

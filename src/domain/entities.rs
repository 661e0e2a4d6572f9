//! Domain entities held by the content library.

use serde::{Deserialize, Serialize};

use super::record::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    pub id: u64,
    pub name: String,
    pub bio: String,
}

impl Record for PostRecord {
    const ENTITY: &'static str = "post";

    fn id(&self) -> u64 {
        self.id
    }

    fn with_id(self, id: u64) -> Self {
        Self { id, ..self }
    }
}

impl Record for AuthorRecord {
    const ENTITY: &'static str = "author";

    fn id(&self) -> u64 {
        self.id
    }

    fn with_id(self, id: u64) -> Self {
        Self { id, ..self }
    }
}

/// Input for creating a post; the id is assigned on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author_id: u64,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>, author_id: u64) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author_id,
        }
    }

    pub(crate) fn into_record(self) -> PostRecord {
        PostRecord {
            id: 0,
            title: self.title,
            content: self.content,
            author_id: self.author_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: String,
    pub bio: String,
}

impl NewAuthor {
    pub fn new(name: impl Into<String>, bio: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bio: bio.into(),
        }
    }

    pub(crate) fn into_record(self) -> AuthorRecord {
        AuthorRecord {
            id: 0,
            name: self.name,
            bio: self.bio,
        }
    }
}

/// Partial update for a post. Present fields replace stored ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author_id: Option<u64>,
}

impl PostPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn author_id(mut self, author_id: u64) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author_id.is_none()
    }

    pub(crate) fn apply(&self, post: &mut PostRecord) {
        if let Some(title) = self.title.as_ref() {
            post.title = title.clone();
        }
        if let Some(content) = self.content.as_ref() {
            post.content = content.clone();
        }
        if let Some(author_id) = self.author_id {
            post.author_id = author_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_post() -> PostRecord {
        PostRecord {
            id: 7,
            title: "Hello".to_string(),
            content: "World".to_string(),
            author_id: 1,
        }
    }

    #[test]
    fn patch_replaces_only_present_fields() {
        let mut post = stored_post();
        PostPatch::default().content("Updated").apply(&mut post);

        assert_eq!(post.title, "Hello");
        assert_eq!(post.content, "Updated");
        assert_eq!(post.author_id, 1);
        assert_eq!(post.id, 7);
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let patch = PostPatch::default();
        assert!(patch.is_empty());

        let mut post = stored_post();
        patch.apply(&mut post);
        assert_eq!(post, stored_post());
    }

    #[test]
    fn with_id_keeps_other_fields() {
        let author = NewAuthor::new("Ada", "Engines").into_record().with_id(3);
        assert_eq!(author.id(), 3);
        assert_eq!(author.name, "Ada");
        assert_eq!(author.bio, "Engines");
    }
}

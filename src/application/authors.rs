//! Author directory. Authors are immutable once created.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::application::repos::{RepoError, Repository};
use crate::domain::entities::{AuthorRecord, NewAuthor};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorError {
    #[error("author `{0}` not found")]
    NotFound(u64),
}

impl From<RepoError> for AuthorError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { id, .. } => AuthorError::NotFound(id),
        }
    }
}

#[derive(Clone)]
pub struct AuthorService {
    authors: Arc<dyn Repository<AuthorRecord>>,
}

impl AuthorService {
    pub fn new(authors: Arc<dyn Repository<AuthorRecord>>) -> Self {
        Self { authors }
    }

    pub fn create(&self, author: NewAuthor) -> AuthorRecord {
        let stored = self.authors.create(author.into_record());
        info!(author_id = stored.id, name = %stored.name, "Author created");
        stored
    }

    pub fn get_all(&self) -> Vec<AuthorRecord> {
        self.authors.get_all()
    }

    pub fn get_by_id(&self, id: u64) -> Result<AuthorRecord, AuthorError> {
        self.authors.get_by_id(id).map_err(AuthorError::from)
    }
}

//! Import/export of library content as a TOML archive.

use std::{
    collections::{HashMap, HashSet},
    fs,
    path::Path,
};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    application::{authors::AuthorService, blog::BlogService, error::AppError},
    domain::entities::{NewAuthor, NewPost},
    infra::error::InfraError,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteArchive {
    #[serde(default)]
    pub authors: Vec<ArchivedAuthor>,
    #[serde(default)]
    pub posts: Vec<ArchivedPost>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivedAuthor {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivedPost {
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub author_id: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub authors: usize,
    pub posts: usize,
}

impl SiteArchive {
    pub fn parse(data: &str) -> Result<Self, AppError> {
        let archive: Self = toml::from_str(data)
            .map_err(|err| AppError::validation(format!("invalid archive: {err}")))?;
        archive.ensure_unique_author_ids()?;
        Ok(archive)
    }

    /// Posts are attributed through archived author ids, so each id must name
    /// exactly one author.
    fn ensure_unique_author_ids(&self) -> Result<(), AppError> {
        let mut seen = HashSet::new();
        for author in &self.authors {
            if !seen.insert(author.id) {
                return Err(AppError::validation(format!(
                    "invalid archive: author id `{}` is used more than once",
                    author.id
                )));
            }
        }
        Ok(())
    }

    pub fn encode(&self) -> Result<String, AppError> {
        toml::to_string_pretty(self)
            .map_err(|err| AppError::unexpected(format!("failed to encode archive: {err}")))
    }

    /// Snapshot current content in insertion order.
    pub fn gather(authors: &AuthorService, blog: &BlogService) -> Self {
        Self {
            authors: authors
                .get_all()
                .into_iter()
                .map(|author| ArchivedAuthor {
                    id: author.id,
                    name: author.name,
                    bio: author.bio,
                })
                .collect(),
            posts: blog
                .get_all()
                .into_iter()
                .map(|post| ArchivedPost {
                    title: post.title,
                    content: post.content,
                    author_id: post.author_id,
                })
                .collect(),
        }
    }

    /// Create authors, then posts, in archive order.
    ///
    /// Archived author ids are remapped to the ids assigned on creation. A post
    /// pointing at an author that is not in the archive keeps its raw id.
    pub fn apply(self, authors: &AuthorService, blog: &BlogService) -> ImportSummary {
        let mut summary = ImportSummary::default();
        let mut author_ids = HashMap::new();
        for author in self.authors {
            let stored = authors.create(NewAuthor::new(author.name, author.bio));
            author_ids.insert(author.id, stored.id);
            summary.authors += 1;
        }

        for post in self.posts {
            let author_id = match author_ids.get(&post.author_id) {
                Some(id) => *id,
                None => {
                    warn!(
                        author_id = post.author_id,
                        title = %post.title,
                        "Archived post references an unknown author"
                    );
                    post.author_id
                }
            };
            blog.create(NewPost::new(post.title, post.content, author_id));
            summary.posts += 1;
        }
        summary
    }
}

pub fn import_archive(
    path: &Path,
    authors: &AuthorService,
    blog: &BlogService,
) -> Result<ImportSummary, AppError> {
    let data = fs::read_to_string(path).map_err(|err| AppError::from(InfraError::Io(err)))?;
    let summary = SiteArchive::parse(&data)?.apply(authors, blog);
    info!(
        path = %path.display(),
        authors = summary.authors,
        posts = summary.posts,
        "Archive imported"
    );
    Ok(summary)
}

pub fn export_archive(
    path: &Path,
    authors: &AuthorService,
    blog: &BlogService,
) -> Result<(), AppError> {
    let encoded = SiteArchive::gather(authors, blog).encode()?;
    fs::write(path, encoded).map_err(|err| AppError::from(InfraError::Io(err)))?;
    info!(path = %path.display(), "Archive exported");
    Ok(())
}

//! Author directory rendering.

use std::sync::Arc;

use askama::Template;

use crate::application::authors::AuthorService;

use super::component::Component;
use super::views::{ListView, ViewError};

const EMPTY_STATE: &str = "No authors yet.";

#[derive(Template)]
#[template(path = "author.txt")]
struct AuthorTemplate<'a> {
    name: &'a str,
    bio: &'a str,
}

pub struct AuthorComponent {
    authors: Arc<AuthorService>,
    list: ListView,
}

impl AuthorComponent {
    pub fn new(authors: Arc<AuthorService>) -> Self {
        Self {
            authors,
            list: ListView::new("author", EMPTY_STATE),
        }
    }
}

impl Component for AuthorComponent {
    fn name(&self) -> &'static str {
        "authors"
    }

    fn refresh(&self) -> Result<String, ViewError> {
        let authors = self.authors.get_all();
        self.list.render(authors.iter().map(|author| AuthorTemplate {
            name: &author.name,
            bio: &author.bio,
        }))
    }
}

//! Post listing and single-post rendering.

use std::sync::Arc;

use askama::Template;
use tracing::debug;

use crate::application::{authors::AuthorService, blog::BlogService};
use crate::domain::entities::PostRecord;

use super::component::Component;
use super::views::{ListView, ViewError, render_template};

const UNKNOWN_AUTHOR: &str = "unknown author";

#[derive(Template)]
#[template(path = "post.txt")]
struct PostTemplate<'a> {
    title: &'a str,
    author: &'a str,
    content: &'a str,
}

pub struct PostComponent {
    blog: Arc<BlogService>,
    authors: Arc<AuthorService>,
    list: ListView,
}

impl PostComponent {
    pub fn new(
        blog: Arc<BlogService>,
        authors: Arc<AuthorService>,
        empty_state: impl Into<String>,
    ) -> Self {
        Self {
            blog,
            authors,
            list: ListView::new("post", empty_state),
        }
    }

    /// Render a single post. A missing post renders as the empty state.
    pub fn render_post(&self, id: u64) -> Result<String, ViewError> {
        match self.blog.get_by_id(id) {
            Ok(post) => {
                let author = self.author_name(post.author_id);
                render_template("post", &template_for(&post, &author))
            }
            Err(err) => {
                debug!(post_id = id, error = %err, "Rendering empty state");
                Ok(self.list.empty_state().to_string())
            }
        }
    }

    fn author_name(&self, author_id: u64) -> String {
        self.authors
            .get_by_id(author_id)
            .map(|author| author.name)
            .unwrap_or_else(|_| UNKNOWN_AUTHOR.to_string())
    }
}

impl Component for PostComponent {
    fn name(&self) -> &'static str {
        "posts"
    }

    fn refresh(&self) -> Result<String, ViewError> {
        let posts = self.blog.get_all();
        let authors: Vec<String> = posts
            .iter()
            .map(|post| self.author_name(post.author_id))
            .collect();

        self.list.render(
            posts
                .iter()
                .zip(&authors)
                .map(|(post, author)| template_for(post, author)),
        )
    }
}

fn template_for<'a>(post: &'a PostRecord, author: &'a str) -> PostTemplate<'a> {
    PostTemplate {
        title: &post.title,
        author,
        content: &post.content,
    }
}

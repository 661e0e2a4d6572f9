use std::sync::Arc;

use folio::application::authors::AuthorService;
use folio::application::blog::BlogService;
use folio::application::events::EventBus;
use folio::domain::entities::{AuthorRecord, NewAuthor, NewPost, PostRecord};
use folio::infra::memory::MemoryRepository;
use folio::presentation::{AuthorComponent, Component, PostComponent};

struct Fixture {
    blog: Arc<BlogService>,
    authors: Arc<AuthorService>,
    posts: PostComponent,
}

fn fixture() -> Fixture {
    let blog = Arc::new(BlogService::new(
        Arc::new(MemoryRepository::<PostRecord>::new()),
        Arc::new(EventBus::new()),
    ));
    let authors = Arc::new(AuthorService::new(Arc::new(
        MemoryRepository::<AuthorRecord>::new(),
    )));
    let posts = PostComponent::new(blog.clone(), authors.clone(), "No posts yet.");
    Fixture {
        blog,
        authors,
        posts,
    }
}

#[test]
fn empty_blog_renders_empty_state() {
    let fixture = fixture();
    assert_eq!(fixture.posts.refresh().unwrap(), "No posts yet.");
    assert_eq!(fixture.posts.name(), "posts");
}

#[test]
fn refresh_renders_posts_in_insertion_order() {
    let fixture = fixture();
    let ada = fixture.authors.create(NewAuthor::new("Ada", "Engines"));
    fixture.blog.create(NewPost::new("Hello", "World", ada.id));
    fixture.blog.create(NewPost::new("Second", "Body", 42));

    insta::assert_snapshot!(fixture.posts.refresh().unwrap(), @r"
    # Hello
    by Ada

    World

    # Second
    by unknown author

    Body
    ");
}

#[test]
fn refresh_pulls_current_state_each_time() {
    let fixture = fixture();
    let post = fixture.blog.create(NewPost::new("Gone soon", "", 1));
    assert!(fixture.posts.refresh().unwrap().contains("Gone soon"));

    fixture.blog.delete(post.id).unwrap();
    assert_eq!(fixture.posts.refresh().unwrap(), "No posts yet.");
}

#[test]
fn render_post_shows_a_single_post() {
    let fixture = fixture();
    let ada = fixture.authors.create(NewAuthor::new("Ada", ""));
    fixture.blog.create(NewPost::new("First", "one", ada.id));
    let second = fixture.blog.create(NewPost::new("Second", "two", ada.id));

    insta::assert_snapshot!(fixture.posts.render_post(second.id).unwrap(), @r"
    # Second
    by Ada

    two
    ");
}

#[test]
fn render_post_keeps_trailing_whitespace_in_content() {
    let fixture = fixture();
    let post = fixture
        .blog
        .create(NewPost::new("Poem", "line one\nline two\n\n", 7));

    assert_eq!(
        fixture.posts.render_post(post.id).unwrap(),
        "# Poem\nby unknown author\n\nline one\nline two\n\n"
    );
}

#[test]
fn author_without_bio_renders_name_only() {
    let fixture = fixture();
    let directory = AuthorComponent::new(fixture.authors.clone());
    fixture.authors.create(NewAuthor::new("Ada", ""));

    assert_eq!(directory.refresh().unwrap(), "Ada");
}

#[test]
fn render_post_recovers_not_found_as_empty_state() {
    let fixture = fixture();
    assert_eq!(fixture.posts.render_post(5).unwrap(), "No posts yet.");
}

#[test]
fn author_directory_renders_name_and_bio() {
    let fixture = fixture();
    let directory = AuthorComponent::new(fixture.authors.clone());
    assert_eq!(directory.refresh().unwrap(), "No authors yet.");

    fixture.authors.create(NewAuthor::new("Ada", "Engines"));
    fixture.authors.create(NewAuthor::new("Grace", "Compilers"));

    assert_eq!(
        directory.refresh().unwrap(),
        "Ada\n  Engines\n\nGrace\n  Compilers"
    );
}

#[test]
fn components_share_one_capability() {
    let fixture = fixture();
    let directory = AuthorComponent::new(fixture.authors.clone());
    let components: [&dyn Component; 2] = [&fixture.posts, &directory];

    let names: Vec<&str> = components.iter().map(|c| c.name()).collect();
    assert_eq!(names, ["posts", "authors"]);
}

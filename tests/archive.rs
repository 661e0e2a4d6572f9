use std::fs;
use std::sync::Arc;

use folio::application::archive::{ImportSummary, SiteArchive, export_archive, import_archive};
use folio::application::authors::AuthorService;
use folio::application::blog::BlogService;
use folio::application::error::AppError;
use folio::application::events::EventBus;
use folio::domain::entities::{AuthorRecord, NewAuthor, NewPost, PostRecord};
use folio::infra::error::InfraError;
use folio::infra::memory::MemoryRepository;

fn services() -> (AuthorService, BlogService) {
    let authors = AuthorService::new(Arc::new(MemoryRepository::<AuthorRecord>::new()));
    let blog = BlogService::new(
        Arc::new(MemoryRepository::<PostRecord>::new()),
        Arc::new(EventBus::new()),
    );
    (authors, blog)
}

const SEED: &str = r#"
[[authors]]
id = 10
name = "Ada"
bio = "Writes about engines."

[[authors]]
id = 20
name = "Grace"
bio = "Writes about compilers."

[[posts]]
title = "Hello"
content = "World"
author_id = 20

[[posts]]
title = "Orphan"
content = "No author"
author_id = 99
"#;

#[test]
fn import_remaps_author_ids() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("seed.toml");
    fs::write(&path, SEED).expect("write seed");

    let (authors, blog) = services();
    let summary = import_archive(&path, &authors, &blog).expect("import seed");

    assert_eq!(
        summary,
        ImportSummary {
            authors: 2,
            posts: 2
        }
    );
    let grace = authors.get_by_id(2).expect("second author");
    assert_eq!(grace.name, "Grace");

    let posts = blog.get_all();
    assert_eq!(posts[0].author_id, grace.id);
    assert_eq!(posts[1].author_id, 99);
}

#[test]
fn export_then_import_reproduces_content() {
    let (authors, blog) = services();
    let ada = authors.create(NewAuthor::new("Ada", "Engines"));
    blog.create(NewPost::new("One", "first", ada.id));
    blog.create(NewPost::new("Two", "second", ada.id));

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("export.toml");
    export_archive(&path, &authors, &blog).expect("export");

    let (restored_authors, restored_blog) = services();
    import_archive(&path, &restored_authors, &restored_blog).expect("import");

    assert_eq!(restored_authors.get_all(), authors.get_all());
    assert_eq!(restored_blog.get_all(), blog.get_all());
    assert_eq!(
        SiteArchive::gather(&restored_authors, &restored_blog),
        SiteArchive::gather(&authors, &blog)
    );
}

#[test]
fn missing_archive_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let (authors, blog) = services();

    let err = import_archive(&dir.path().join("absent.toml"), &authors, &blog)
        .expect_err("file does not exist");

    assert!(matches!(err, AppError::Infra(InfraError::Io(_))));
    assert!(blog.get_all().is_empty());
}

#[test]
fn invalid_archive_is_rejected_before_any_write() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[[posts]]\ntitle = \"No author id\"\n").expect("write archive");

    let (authors, blog) = services();
    let err = import_archive(&path, &authors, &blog).expect_err("author_id is required");

    assert!(matches!(err, AppError::Validation(_)));
    assert!(blog.get_all().is_empty());
}

#[test]
fn duplicate_author_ids_are_rejected_before_any_write() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("duplicate.toml");
    fs::write(
        &path,
        r#"
[[authors]]
id = 1
name = "Ada"

[[authors]]
id = 1
name = "Grace"

[[posts]]
title = "Whose post?"
author_id = 1
"#,
    )
    .expect("write archive");

    let (authors, blog) = services();
    let err = import_archive(&path, &authors, &blog).expect_err("author ids collide");

    assert!(matches!(err, AppError::Validation(ref message) if message.contains("`1`")));
    assert!(authors.get_all().is_empty());
    assert!(blog.get_all().is_empty());
}

use std::{path::Path, process, sync::Arc};

use folio::{
    application::{
        archive,
        authors::AuthorService,
        blog::BlogService,
        error::AppError,
        events::{EventBus, PostEvent},
    },
    config,
    domain::entities::{AuthorRecord, PostRecord},
    infra::{error::InfraError, memory::MemoryRepository, telemetry},
    presentation::{AuthorComponent, Component, PostComponent},
};
use tracing::{Dispatch, Level, debug, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

fn main() {
    if let Err(error) = run() {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, chain = ?error.chain(), "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::ERROR)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, chain = ?error.chain(), "application error");
    });
}

fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli().map_err(InfraError::from)?;

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Render(config::ContentArgs::default()));

    let app = build_application_context(&settings);
    if let Some(seed) = settings.content.seed_file.as_deref() {
        archive::import_archive(seed, &app.authors, &app.blog)?;
    }

    match command {
        config::Command::Render(_) => print_component(&app.posts),
        config::Command::Authors(_) => print_component(&app.author_list),
        config::Command::Show(args) => {
            println!("{}", app.posts.render_post(args.id)?);
            Ok(())
        }
        config::Command::Export(args) => run_export(&app, &args.file),
    }
}

struct ApplicationContext {
    blog: Arc<BlogService>,
    authors: Arc<AuthorService>,
    posts: PostComponent,
    author_list: AuthorComponent,
}

/// Wire the object graph by hand: one repository and one service instance
/// each, shared by every consumer.
fn build_application_context(settings: &config::Settings) -> ApplicationContext {
    let events = Arc::new(EventBus::<PostEvent>::new());
    events.subscribe(|event: &PostEvent| {
        debug!(post_id = event.post_id(), event = ?event, "Post event observed");
    });

    let blog = Arc::new(BlogService::new(
        Arc::new(MemoryRepository::<PostRecord>::new()),
        events,
    ));
    let authors = Arc::new(AuthorService::new(Arc::new(
        MemoryRepository::<AuthorRecord>::new(),
    )));

    let empty_state = settings.content.empty_state.clone();
    ApplicationContext {
        posts: PostComponent::new(blog.clone(), authors.clone(), empty_state),
        author_list: AuthorComponent::new(authors.clone()),
        blog,
        authors,
    }
}

fn print_component(component: &dyn Component) -> Result<(), AppError> {
    let rendered = component.refresh()?;
    debug!(component = component.name(), "Component refreshed");
    println!("{rendered}");
    Ok(())
}

fn run_export(app: &ApplicationContext, path: &Path) -> Result<(), AppError> {
    info!(target = "folio::export", path = %path.display(), "Starting export");
    archive::export_archive(path, &app.authors, &app.blog)?;
    info!(target = "folio::export", "Export completed");
    Ok(())
}

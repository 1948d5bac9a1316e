use super::render::{print_messages, render_full_note, render_note_list, AnsiSink};
use super::setup::{Cli, Commands};
use super::styles;
use clap::Parser;
use directories::ProjectDirs;
use notemark::api::NotesApi;
use notemark::config::NotemarkConfig;
use notemark::error::{NotemarkError, Result};
use notemark::markup::{AnnotationStore, RecordingSink};
use notemark::model::UserId;
use notemark::store::{DocumentStore, FileDocumentStore};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: NotesApi<FileDocumentStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = init_context()?;

    match cli.command {
        Some(Commands::Render { file, json }) => handle_render(&ctx, file, json),
        Some(Commands::Spans { file }) => handle_spans(&ctx, file),
        Some(Commands::Rules) => handle_rules(&ctx),
        Some(Commands::New { title, text }) => handle_new(&ctx, title, text),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Search { query }) => handle_search(&ctx, query),
        Some(Commands::Show { id }) => handle_show(&ctx, id),
        Some(Commands::Edit { id, text }) => handle_edit(&ctx, id, text),
        Some(Commands::Title { id, title }) => handle_title(&ctx, id, title),
        Some(Commands::Pin { ids }) => handle_pin(&ctx, ids),
        Some(Commands::Unpin { ids }) => handle_unpin(&ctx, ids),
        Some(Commands::Delete { ids }) => handle_delete(&ctx, ids),
        Some(Commands::Prune) => handle_prune(&ctx),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("NOTEMARK_HOME") {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "notemark", "notemark")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| NotemarkError::Api("Could not determine data directory".into()))
}

fn init_context() -> Result<AppContext> {
    let dir = data_dir()?;
    let config = NotemarkConfig::load(&dir)?;
    tracing::debug!(dir = %dir.display(), owner = %config.owner, "notemark context");

    let store = FileDocumentStore::at(&dir);
    let api = NotesApi::new(store, UserId::new(config.owner.clone()), &config);
    Ok(AppContext { api })
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn annotate(ctx: &AppContext, text: &str) -> AnnotationStore {
    let mut annotations = AnnotationStore::new();
    annotations.rebuild_with(&ctx.api.scanner(), text, ctx.api.rules());
    annotations
}

fn styled(ctx: &AppContext, text: &str) -> String {
    let mut sink = AnsiSink::new(text, console::colors_enabled());
    annotate(ctx, text).apply_to(&mut sink);
    sink.finish()
}

fn handle_render(ctx: &AppContext, file: Option<PathBuf>, json: bool) -> Result<()> {
    let text = read_input(file.as_deref())?;
    if json {
        let mut sink = RecordingSink::default();
        annotate(ctx, &text).apply_to(&mut sink);
        println!("{}", serde_json::to_string_pretty(&sink)?);
    } else {
        print!("{}", styled(ctx, &text));
        if !text.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}

fn handle_spans(ctx: &AppContext, file: Option<PathBuf>) -> Result<()> {
    let text = read_input(file.as_deref())?;
    let spans = ctx.api.scanner().scan(&text, ctx.api.rules());
    println!("{}", serde_json::to_string_pretty(&spans)?);
    Ok(())
}

fn handle_rules(ctx: &AppContext) -> Result<()> {
    for rule in ctx.api.rules().iter() {
        let status = match rule.regex() {
            Ok(_) => String::new(),
            Err(_) => format!(" {}", styles::ERROR.apply_to("(invalid pattern)")),
        };
        println!(
            "{:<12} {:<14} {}{}",
            styles::RULE_NAME.apply_to(rule.name()),
            rule.style().to_string(),
            rule.pattern(),
            status
        );
    }
    Ok(())
}

fn handle_new(ctx: &AppContext, title: Option<String>, text: Option<String>) -> Result<()> {
    let result = ctx
        .api
        .create_note(title.as_deref(), text.as_deref().unwrap_or_default())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_notes()?;
    print!("{}", render_note_list(&result.listed_notes));
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, query: String) -> Result<()> {
    let result = ctx.api.search_notes(&query)?;
    print!("{}", render_note_list(&result.listed_notes));
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: String) -> Result<()> {
    let session = ctx.api.open_note(&id)?;
    let mut sink = AnsiSink::new(session.text(), console::colors_enabled());
    session.annotations().apply_to(&mut sink);

    let note = ctx.api.store().get(&session.id())?;
    print!("{}", render_full_note(&note, &sink.finish()));
    session.close();
    Ok(())
}

fn handle_edit(ctx: &AppContext, id: String, text: String) -> Result<()> {
    let mut session = ctx.api.open_note(&id)?;
    session.replace_text(text);
    let failed = session.close();
    if failed > 0 {
        return Err(NotemarkError::Store(format!(
            "{} update(s) could not be saved",
            failed
        )));
    }
    println!("{}", styles::SUCCESS.apply_to("Note updated"));
    Ok(())
}

fn handle_title(ctx: &AppContext, id: String, title: String) -> Result<()> {
    let result = ctx.api.update_title(&id, &title)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_pin(ctx: &AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.pin_notes(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_unpin(ctx: &AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.unpin_notes(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_notes(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_prune(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.prune_empty()?;
    if result.affected_notes.is_empty() {
        println!("{}", styles::INFO.apply_to("No empty notes."));
    }
    print_messages(&result.messages);
    if result.has_errors() {
        return Err(NotemarkError::Store("some notes could not be removed".into()));
    }
    Ok(())
}

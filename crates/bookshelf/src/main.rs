//! bookshelf - personal book tracker
//!
//! Wires together:
//! - Configuration loading
//! - The JSON library file store
//! - The library itself
//! - A terminal front-end (one-shot subcommands or the interactive menu)

mod interactive;
mod render;

use anyhow::{Context, Result};
use bookshelf_api::{Command, LibraryEvent, NewBook, Response, SearchField};
use bookshelf_config::{Settings, load_config_or_default};
use bookshelf_core::Library;
use bookshelf_store::JsonFileStore;
use bookshelf_util::{BookId, default_config_path};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::interactive::Shell;

/// bookshelf - keep track of the books you own and have read
#[derive(Parser, Debug)]
#[command(name = "bookshelf", version)]
#[command(about = "Keep track of the books you own and have read", long_about = None)]
struct Args {
    /// Configuration file path (default: ~/.config/bookshelf/config.toml)
    #[arg(short, long, default_value_os_t = default_config_path())]
    config: PathBuf,

    /// Data directory override (or set BOOKSHELF_DATA_DIR env var)
    #[arg(short, long, env = "BOOKSHELF_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Show every book with its position
    List,

    /// Add a book
    Add {
        title: String,
        author: String,

        /// Publication year
        #[arg(short, long)]
        year: i32,

        /// Genre (see `bookshelf genres`)
        #[arg(short, long, default_value = "Fiction")]
        genre: String,

        /// Mark the book as read
        #[arg(short, long)]
        read: bool,
    },

    /// Remove a book by position or id
    Remove {
        /// Position as shown by `list`
        #[arg(required_unless_present = "id", conflicts_with = "id")]
        index: Option<usize>,

        /// Stable book id
        #[arg(long)]
        id: Option<BookId>,
    },

    /// Search by title, author or genre (case-insensitive substring)
    Search {
        term: String,

        #[arg(short, long, default_value_t = SearchField::Title)]
        by: SearchField,
    },

    /// Show statistics
    Stats,

    /// List the configured genres
    Genres,

    /// Interactive menu (the default)
    Shell,
}

impl Action {
    /// The library command behind a one-shot action, if any
    fn into_command(self) -> Option<Command> {
        match self {
            Self::List => Some(Command::List),
            Self::Add {
                title,
                author,
                year,
                genre,
                read,
            } => Some(Command::Add(NewBook::new(title, author, year, genre, read))),
            Self::Remove { id: Some(id), .. } => Some(Command::RemoveById { id }),
            Self::Remove { index, .. } => index.map(|index| Command::Remove { index }),
            Self::Search { term, by } => Some(Command::Search { term, field: by }),
            Self::Stats => Some(Command::Stats),
            Self::Genres | Self::Shell => None,
        }
    }
}

fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = load_config_or_default(&args.config)
        .with_context(|| format!("Failed to load config from {:?}", args.config))?;

    if let Some(data_dir) = &args.data_dir {
        settings.library.data_dir = data_dir.clone();
    }

    Ok(settings)
}

fn open_library(settings: &Settings) -> Library {
    let path = settings.library.library_path();
    let store = Arc::new(JsonFileStore::new(&path));
    let mut library = Library::new(store, settings.catalog.clone());

    // A missing file is an empty library; a broken one is reported and the
    // session continues with an empty list
    if let Err(e) = library.load() {
        warn!(path = %path.display(), error = %e, "Starting with an empty library");
        eprint!("{}", render::warning(&e.to_string()));
    }

    library
}

/// Why a one-shot action is refused before the library is opened
fn refusal(action: &Action) -> Option<&'static str> {
    match action {
        Action::Search { term, .. } if term.trim().is_empty() => {
            Some("Enter a search term to search.")
        }
        _ => None,
    }
}

/// Whether a response means the command did what was asked
fn succeeded(response: &Response) -> bool {
    !matches!(response, Response::Error(_) | Response::NotRemoved)
}

fn run_once(
    library: &mut Library,
    command: Command,
    top_authors: usize,
    out: &mut impl Write,
) -> io::Result<bool> {
    let response = library.execute(command);
    out.write_all(render::response(&response, top_authors).as_bytes())?;
    out.flush()?;
    Ok(succeeded(&response))
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        mock_time = bookshelf_util::is_mock_time_active(),
        "bookshelf starting"
    );

    let settings = load_settings(&args)?;
    info!(
        library = %settings.library.library_path().display(),
        genres = settings.catalog.genres().len(),
        "Configuration loaded"
    );

    let action = args.action.unwrap_or(Action::Shell);
    if matches!(action, Action::Genres) {
        print!("{}", render::genres(settings.catalog.genres()));
        return Ok(ExitCode::SUCCESS);
    }
    if let Some(message) = refusal(&action) {
        eprintln!("{message}");
        return Ok(ExitCode::FAILURE);
    }

    let mut library = open_library(&settings);

    if matches!(action, Action::Shell) {
        let stdin = io::stdin();
        let stdout = io::stdout();
        Shell::new(&mut library, stdin.lock(), stdout.lock(), settings.top_authors)
            .run()
            .context("Terminal I/O failed")?;
        return Ok(ExitCode::SUCCESS);
    }

    // clap requires either a position or an id for `remove`
    let command = action
        .into_command()
        .context("Nothing to do for this subcommand")?;

    library.subscribe(|event: &LibraryEvent| print!("{}", render::event_notice(event)));
    let ok = run_once(&mut library, command, settings.top_authors, &mut io::stdout().lock())
        .context("Failed to write output")?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

//! Command-line driver for the YouNote store.
//!
//! # Responsibility
//! - Exercise every store operation against a database file without the
//!   mobile UI.
//! - Keep output deterministic for quick local sanity checks.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use younote_core::{default_log_level, init_logging, Note, NoteId, NoteStore, StoreOptions};

#[derive(Parser)]
#[command(name = "younote")]
#[command(version, about = "Manage YouNote notes from the command line", long_about = None)]
struct Cli {
    /// Notes database file.
    #[arg(long, env = "YOUNOTE_DB_PATH", default_value_os_t = default_db_path())]
    db: PathBuf,
    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, env = "YOUNOTE_LOG_DIR")]
    log_dir: Option<String>,
    /// Log level (trace|debug|info|warn|error).
    #[arg(long, default_value_t = default_log_level().to_string())]
    log_level: String,
    /// Reject blank note names.
    #[arg(long)]
    strict_names: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a note with an empty body
    Add {
        /// Display name
        name: String,
    },
    /// List notes in creation order, or search by name
    List {
        /// Case- and accent-insensitive name substring
        #[arg(long, short)]
        search: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print one note with its body
    Show {
        id: NoteId,
    },
    /// Replace a note's body
    Edit {
        id: NoteId,
        body: String,
    },
    /// Replace a note's name
    Rename {
        id: NoteId,
        name: String,
    },
    /// Delete a note (no-op when the id is unknown)
    Delete {
        id: NoteId,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        init_logging(&cli.log_level, log_dir)
            .map_err(anyhow::Error::msg)
            .context("failed to initialize logging")?;
    }

    let options = StoreOptions {
        reject_empty_names: cli.strict_names,
    };
    let store = NoteStore::open(&cli.db, options)
        .with_context(|| format!("failed to open notes database `{}`", cli.db.display()))?;

    run(&store, cli.command)?;
    store.close()?;
    Ok(())
}

fn run(store: &NoteStore, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Add { name } => {
            let note = store.create(name)?;
            println!("{}", note.id);
        }
        Commands::List { search, json } => {
            let notes = store.list(search.as_deref(), None)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&notes)?);
            } else if notes.is_empty() {
                println!("No notes.");
            } else {
                for note in &notes {
                    println!("{}", summary_line(note));
                }
            }
        }
        Commands::Show { id } => {
            let Some(note) = store.get(id)? else {
                bail!("note not found: {id}");
            };
            println!("{}", note.name);
            if note.has_body() {
                println!();
                println!("{}", note.body);
            }
        }
        Commands::Edit { id, body } => {
            store.update(id, body)?;
            println!("saved {id}");
        }
        Commands::Rename { id, name } => {
            store.rename(id, name)?;
            println!("renamed {id}");
        }
        Commands::Delete { id } => {
            if store.delete(id)? {
                println!("deleted {id}");
            } else {
                println!("no note {id}");
            }
        }
    }
    Ok(())
}

fn summary_line(note: &Note) -> String {
    let marker = if note.has_body() { "*" } else { " " };
    format!("{} {} {}", note.id, marker, note.name)
}

fn default_db_path() -> PathBuf {
    std::env::temp_dir().join("younote.sqlite3")
}

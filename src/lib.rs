// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{Context, Result};
use application::{NoteCreator, NoteDeleter, NoteLister, NoteRepository};
use cli::args::{Args, Command};
use domain::NoteDraft;
use infrastructure::{Config, NoteHubRepository};
use ports::TextPresenter;
use tracing::{debug, info};

pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notehub with arguments");

    // Initialize infrastructure
    let config = Config::resolve(args.config.as_deref())?.with_process_env();
    debug!(base_url = %config.api.base_url, timeout = ?config.timeout(), "Resolved configuration");
    let repository = NoteHubRepository::from_config(&config)?;

    let output = execute(args.command, repository).await?;
    print!("{}", output);
    Ok(())
}

/// Run one command against a repository and return what should be printed.
pub async fn execute<R: NoteRepository>(command: Command, repository: R) -> Result<String> {
    let presenter = TextPresenter::new();

    match command {
        Command::List { search, page, json } => {
            info!(search = %search, page = page.get(), "Listing notes");
            let lister = NoteLister::new(repository);
            let result = lister
                .list_notes(&search, page)
                .await
                .context("Could not list notes")?;

            if json {
                Ok(serde_json::to_string_pretty(&result)? + "\n")
            } else {
                Ok(presenter.render_page(&result, page))
            }
        }
        Command::Create {
            title,
            content,
            tag,
            json,
        } => {
            info!(%tag, "Creating note");
            let creator = NoteCreator::new(repository);
            let note = creator
                .create_note(&NoteDraft::new(title, content, tag))
                .await
                .context("Could not create note")?;

            if json {
                Ok(serde_json::to_string_pretty(&note)? + "\n")
            } else {
                Ok(format!("Created note {}\n", note.id))
            }
        }
        Command::Delete { note_id, json } => {
            info!(note_id, "Deleting note");
            let deleter = NoteDeleter::new(repository);
            let note = deleter
                .delete_note(note_id)
                .await
                .with_context(|| format!("Could not delete note {}", note_id))?;

            if json {
                Ok(serde_json::to_string_pretty(&note)? + "\n")
            } else {
                Ok(format!("Deleted note:\n{}", presenter.render_note(&note)))
            }
        }
    }
}

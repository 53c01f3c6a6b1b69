// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::num::NonZeroU32;
use std::path::PathBuf;

use crate::domain::NoteTag;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (list, create, or delete)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List notes, optionally filtered by a search term
    List {
        /// Search term matched by the server against title and content
        #[arg(value_name = "SEARCH", default_value = "")]
        search: String,

        /// Page number, starting at 1
        #[arg(short, long, default_value = "1")]
        page: NonZeroU32,

        /// Output the page as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a note
    Create {
        #[arg(short, long)]
        title: String,

        #[arg(long)]
        content: String,

        /// One of Todo, Work, Personal, Meeting, Shopping
        #[arg(long, value_parser = parse_tag)]
        tag: NoteTag,

        /// Output the created note as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note by id
    Delete {
        /// Note ID to delete
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        /// Output the deleted note as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_tag(s: &str) -> Result<NoteTag, String> {
    s.parse::<NoteTag>().map_err(|e| e.to_string())
}

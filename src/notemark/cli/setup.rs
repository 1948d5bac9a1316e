use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notemark")]
#[command(about = "Notes with inline markup styling", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print markup with its styles applied
    Render {
        /// File to read (stdin if omitted)
        file: Option<PathBuf>,

        /// Print the render sink calls as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the raw matches of every rule as JSON
    Spans {
        /// File to read (stdin if omitted)
        file: Option<PathBuf>,
    },

    /// List the active markup rules
    Rules,

    /// Create a new note
    #[command(alias = "n")]
    New {
        /// Title of the note (configured default if omitted)
        title: Option<String>,

        /// Initial text
        #[arg(short, long)]
        text: Option<String>,
    },

    /// List notes, pinned first
    #[command(alias = "ls")]
    List,

    /// Search note text
    Search { query: String },

    /// Show a note with its markup styled
    #[command(alias = "v")]
    Show { id: String },

    /// Replace the text of a note
    #[command(alias = "e")]
    Edit { id: String, text: String },

    /// Rename a note
    Title { id: String, title: String },

    /// Pin one or more notes
    #[command(alias = "p")]
    Pin {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Unpin one or more notes
    #[command(alias = "u")]
    Unpin {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Delete one or more notes
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Remove notes that have no text
    Prune,
}

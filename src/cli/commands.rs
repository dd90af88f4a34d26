//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "aroma")]
#[command(about = "Scent and mood journal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Record a scent
    Add {
        /// What you smelled (e.g., lemon, coffee, rain)
        scent: String,

        /// Where it came from (perfume, food, environment, other)
        #[arg(short, long)]
        source: Option<String>,

        /// Intensity 0–5
        #[arg(short, long, allow_hyphen_values = true)]
        intensity: Option<String>,

        /// Pleasantness -3–3
        #[arg(short, long, allow_hyphen_values = true)]
        valence: Option<String>,

        /// Arousal 1–5
        #[arg(short, long, allow_hyphen_values = true)]
        arousal: Option<String>,

        /// Mood tag (repeatable, e.g., --mood focus --mood calm)
        #[arg(short, long = "mood")]
        mood: Vec<String>,

        /// Where you were
        #[arg(short, long)]
        place: Option<String>,

        /// Free-form notes
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Show recorded entries, newest first
    List {
        /// Maximum number of entries to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Export all entries as CSV
    Export {
        /// Directory to write aroma_journal_<date>.csv into
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Print the CSV instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Show the suggested mood tags and source categories
    Tags,

    /// Delete every entry in the journal
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

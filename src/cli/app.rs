use crate::config::LogLevel;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Bookcase: a personal library catalog
#[derive(Parser)]
#[command(name = "bookcase")]
#[command(version = "0.1.0")]
#[command(about = "Personal library catalog kept in a local JSON file")]
#[command(
    long_about = "Bookcase keeps a list of your books in a JSON file. Run without a subcommand for the interactive menu."
)]
pub struct Cli {
    /// Catalog store file (defaults to library.json in the current directory)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Settings file (defaults to config.yaml in the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level, written to stderr
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive menu (default)
    Menu,

    /// Add a book
    Add {
        /// Book title
        #[arg(short, long)]
        title: String,

        /// Book author
        #[arg(short, long)]
        author: String,

        /// Publication year
        #[arg(short, long, allow_negative_numbers = true)]
        year: i32,
    },

    /// Delete a book by ID
    Delete {
        /// Book ID
        id: u64,
    },

    /// Find books whose field equals a value, ignoring case
    Search {
        /// Field to search: id, title, author, year or status
        field: String,

        /// Value to match exactly
        value: String,

        /// Additional field=value criteria, all of which must match
        #[arg(long = "where", value_parser = parse_criterion)]
        criteria: Vec<(String, String)>,

        /// Output format (text, json)
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List all books
    List {
        /// Output format (text, json)
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Change the status of a book
    Status {
        /// Book ID
        id: u64,

        /// New status: Available or CheckedOut
        status: String,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Menu => "menu",
            Commands::Add { .. } => "add",
            Commands::Delete { .. } => "delete",
            Commands::Search { .. } => "search",
            Commands::List { .. } => "list",
            Commands::Status { .. } => "status",
        }
    }

    /// Check if this command can write to the store
    pub fn modifies_store(&self) -> bool {
        matches!(
            self,
            Commands::Menu | Commands::Add { .. } | Commands::Delete { .. } | Commands::Status { .. }
        )
    }
}

/// Parse a `field=value` pair
fn parse_criterion(s: &str) -> Result<(String, String), String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected field=value, got '{}'", s))?;
    if field.trim().is_empty() {
        return Err(format!("missing field name in '{}'", s));
    }
    Ok((field.trim().to_string(), value.to_string()))
}

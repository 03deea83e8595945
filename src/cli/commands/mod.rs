pub mod add;
pub mod delete;
pub mod list;
pub mod menu;
pub mod search;
pub mod status;

use crate::catalog::Catalog;
use crate::cli::app::Commands;
use crate::Result;
use std::io::Write;

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command against `catalog`, writing listings to `out`
    fn execute(&self, catalog: &mut Catalog, out: &mut dyn Write) -> Result<CommandResult>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Command execution result
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// Success with optional message
    Success(Option<String>),
    /// Error with message
    Error(String),
    /// Warning with message
    Warning(String),
}

impl CommandResult {
    /// Convert to exit code
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandResult::Success(_) => 0,
            CommandResult::Error(_) => 1,
            CommandResult::Warning(_) => 0,
        }
    }

    /// Get message if any
    pub fn message(&self) -> Option<&str> {
        match self {
            CommandResult::Success(msg) => msg.as_deref(),
            CommandResult::Error(msg) => Some(msg),
            CommandResult::Warning(msg) => Some(msg),
        }
    }
}

/// Build the handler for a parsed subcommand
pub fn handler_for(command: Commands) -> Box<dyn CommandHandler> {
    match command {
        Commands::Menu => Box::new(menu::MenuCommand),
        Commands::Add {
            title,
            author,
            year,
        } => Box::new(add::AddCommand::new(title, author, year)),
        Commands::Delete { id } => Box::new(delete::DeleteCommand::new(id)),
        Commands::Search {
            field,
            value,
            criteria,
            format,
        } => Box::new(search::SearchCommand::new(field, value, criteria, format)),
        Commands::List { format } => Box::new(list::ListCommand::new(format)),
        Commands::Status { id, status } => Box::new(status::StatusCommand::new(id, status)),
    }
}

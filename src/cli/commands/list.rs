use super::{CommandHandler, CommandResult};
use crate::catalog::Catalog;
use crate::cli::app::OutputFormat;
use crate::cli::render;
use crate::Result;
use std::io::Write;

/// Handler for the `list` command
pub struct ListCommand {
    pub format: OutputFormat,
}

impl CommandHandler for ListCommand {
    fn execute(&self, catalog: &mut Catalog, out: &mut dyn Write) -> Result<CommandResult> {
        let books: Vec<_> = catalog.list().iter().collect();
        render::write_books(out, &books, self.format, render::EMPTY_LIBRARY)?;
        Ok(CommandResult::Success(None))
    }

    fn name(&self) -> &'static str {
        "list"
    }
}

impl ListCommand {
    /// Create new list command
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

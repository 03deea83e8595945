use super::{CommandHandler, CommandResult};
use crate::catalog::Catalog;
use crate::cli::render;
use crate::Result;
use std::io::Write;

/// Handler for the `add` command
pub struct AddCommand {
    pub title: String,
    pub author: String,
    pub year: i32,
}

impl CommandHandler for AddCommand {
    fn execute(&self, catalog: &mut Catalog, _out: &mut dyn Write) -> Result<CommandResult> {
        if self.title.trim().is_empty() {
            return Ok(CommandResult::Error("Title cannot be empty.".to_string()));
        }
        if self.author.trim().is_empty() {
            return Ok(CommandResult::Error("Author cannot be empty.".to_string()));
        }

        let book = catalog.add(self.title.trim(), self.author.trim(), self.year)?;
        Ok(CommandResult::Success(Some(render::added(&book))))
    }

    fn name(&self) -> &'static str {
        "add"
    }
}

impl AddCommand {
    /// Create new add command
    pub fn new(title: String, author: String, year: i32) -> Self {
        Self {
            title,
            author,
            year,
        }
    }
}

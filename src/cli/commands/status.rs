use super::{CommandHandler, CommandResult};
use crate::catalog::Catalog;
use crate::cli::render;
use crate::Result;
use std::io::Write;

/// Handler for the `status` command
pub struct StatusCommand {
    pub id: u64,
    pub status: String,
}

impl CommandHandler for StatusCommand {
    fn execute(&self, catalog: &mut Catalog, _out: &mut dyn Write) -> Result<CommandResult> {
        match catalog.update_status(self.id, &self.status) {
            Ok(book) => Ok(CommandResult::Success(Some(render::status_updated(&book)))),
            Err(e) if e.is_user_error() => Ok(CommandResult::Error(format!("{}.", e))),
            Err(e) => Err(e),
        }
    }

    fn name(&self) -> &'static str {
        "status"
    }
}

impl StatusCommand {
    /// Create new status command
    pub fn new(id: u64, status: String) -> Self {
        Self { id, status }
    }
}

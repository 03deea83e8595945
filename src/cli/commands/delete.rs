use super::{CommandHandler, CommandResult};
use crate::catalog::Catalog;
use crate::cli::render;
use crate::Result;
use std::io::Write;

/// Handler for the `delete` command
pub struct DeleteCommand {
    pub id: u64,
}

impl CommandHandler for DeleteCommand {
    fn execute(&self, catalog: &mut Catalog, _out: &mut dyn Write) -> Result<CommandResult> {
        if catalog.delete(self.id)? {
            Ok(CommandResult::Success(Some(render::deleted(self.id))))
        } else {
            Ok(CommandResult::Error(render::not_found(self.id)))
        }
    }

    fn name(&self) -> &'static str {
        "delete"
    }
}

impl DeleteCommand {
    /// Create new delete command
    pub fn new(id: u64) -> Self {
        Self { id }
    }
}

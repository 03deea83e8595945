use super::{CommandHandler, CommandResult};
use crate::catalog::{BookQuery, Catalog, SearchField};
use crate::cli::app::OutputFormat;
use crate::cli::render;
use crate::Result;
use std::io::Write;

/// Handler for the `search` command
pub struct SearchCommand {
    pub field: String,
    pub value: String,
    pub criteria: Vec<(String, String)>,
    pub format: OutputFormat,
}

impl CommandHandler for SearchCommand {
    fn execute(&self, catalog: &mut Catalog, out: &mut dyn Write) -> Result<CommandResult> {
        let books = if self.criteria.is_empty() {
            catalog.search(&self.field, &self.value)
        } else {
            catalog.query(&self.query())
        };
        render::write_books(out, &books, self.format, render::NO_RESULTS)?;

        let unknown: Vec<&str> = std::iter::once(&self.field)
            .chain(self.criteria.iter().map(|(field, _)| field))
            .filter(|field| field.parse::<SearchField>().is_err())
            .map(String::as_str)
            .collect();

        if unknown.is_empty() {
            return Ok(CommandResult::Success(None));
        }

        let known: Vec<&str> = SearchField::ALL.iter().map(|field| field.name()).collect();
        Ok(CommandResult::Warning(format!(
            "Unknown search field: {}. Searchable fields: {}",
            unknown.join(", "),
            known.join(", ")
        )))
    }

    fn name(&self) -> &'static str {
        "search"
    }
}

impl SearchCommand {
    /// Create new search command
    pub fn new(
        field: String,
        value: String,
        criteria: Vec<(String, String)>,
        format: OutputFormat,
    ) -> Self {
        Self {
            field,
            value,
            criteria,
            format,
        }
    }

    fn query(&self) -> BookQuery {
        self.criteria.iter().fold(
            BookQuery::new().with(&self.field, &self.value),
            |query, (field, value)| query.with(field, value),
        )
    }
}

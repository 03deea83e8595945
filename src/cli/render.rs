//! Text shown to the user for catalog results

use crate::catalog::Book;
use crate::cli::app::OutputFormat;
use crate::Result;
use std::io::Write;

pub const EMPTY_LIBRARY: &str = "The library is empty.";
pub const NO_RESULTS: &str = "No books matched your search.";

/// Write `books` one per line, or `empty_notice` when there are none.
/// JSON output is always an array, possibly empty.
pub fn write_books<W: Write + ?Sized>(
    out: &mut W,
    books: &[&Book],
    format: OutputFormat,
    empty_notice: &str,
) -> Result<()> {
    match format {
        OutputFormat::Text if books.is_empty() => writeln!(out, "{}", empty_notice)?,
        OutputFormat::Text => {
            for book in books {
                writeln!(out, "{}", book)?;
            }
        }
        OutputFormat::Json => {
            let entries: Vec<_> = books.iter().map(|book| book.encode()).collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
        }
    }
    Ok(())
}

pub fn added(book: &Book) -> String {
    format!("Book with ID {} added.", book.id)
}

pub fn deleted(id: u64) -> String {
    format!("Book with ID {} deleted.", id)
}

pub fn not_found(id: u64) -> String {
    format!("Book with ID {} not found.", id)
}

pub fn status_updated(book: &Book) -> String {
    format!("Status of book with ID {} updated to {}.", book.id, book.status)
}

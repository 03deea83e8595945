use crate::catalog::query::{BookQuery, SearchField};
use crate::catalog::types::{Book, Status};
use crate::{CatalogError, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Book catalog backed by a single JSON file.
///
/// Every mutation rewrites the whole file before returning. A failed write
/// leaves the in-memory books as they were before the call.
pub struct Catalog {
    /// Store location
    path: PathBuf,
    /// Books in insertion order
    books: Vec<Book>,
}

impl Catalog {
    /// Open the catalog stored at `path`.
    ///
    /// A missing or unreadable store yields an empty catalog.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut catalog = Self {
            path: path.into(),
            books: Vec::new(),
        };
        catalog.load();
        catalog
    }

    /// Replace the in-memory books with the store contents
    fn load(&mut self) {
        self.books = match Self::read_store(&self.path) {
            Ok(books) => books,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Catalog store could not be loaded, starting empty"
                );
                Vec::new()
            }
        };
        debug!(path = %self.path.display(), count = self.books.len(), "Catalog loaded");
    }

    /// Whole-file decode: any bad entry or repeated id fails the lot
    fn read_store(path: &Path) -> Result<Vec<Book>> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let entries: Vec<serde_json::Value> = serde_json::from_str(&content)
            .map_err(|e| CatalogError::Decode(format!("store is not a JSON list: {}", e)))?;

        let books = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| match entry {
                serde_json::Value::Object(map) => Book::decode(map),
                _ => Err(CatalogError::Decode(format!(
                    "entry {} is not an object",
                    index
                ))),
            })
            .collect::<Result<Vec<Book>>>()?;

        let mut seen = HashSet::with_capacity(books.len());
        if let Some(book) = books.iter().find(|book| !seen.insert(book.id)) {
            return Err(CatalogError::Decode(format!(
                "book id {} appears more than once",
                book.id
            )));
        }

        Ok(books)
    }

    /// Write every book to the store, replacing its previous content.
    ///
    /// The new content goes to a temporary file in the same directory which is
    /// then renamed over the store, so a crash never leaves a partial file.
    pub fn save(&self) -> Result<()> {
        let store_error = |source| CatalogError::StoreWrite {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(store_error)?;
        }

        let entries: Vec<_> = self.books.iter().map(Book::encode).collect();
        let mut content = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut content, formatter);
        entries.serialize(&mut serializer)?;

        let mut temp = NamedTempFile::new_in(dir).map_err(store_error)?;
        temp.write_all(&content).map_err(store_error)?;
        temp.as_file().sync_all().map_err(store_error)?;
        temp.persist(&self.path).map_err(|e| store_error(e.error))?;
        debug!(path = %self.path.display(), count = self.books.len(), "Catalog saved");
        Ok(())
    }

    /// Add a book with the next free id and persist
    pub fn add(&mut self, title: &str, author: &str, year: i32) -> Result<Book> {
        let id = self.next_id().ok_or(CatalogError::IdsExhausted)?;
        let book = Book::new(id, title, author, year);
        self.books.push(book.clone());
        if let Err(e) = self.save() {
            self.books.pop();
            return Err(e);
        }
        debug!(id, title, "Book added");
        Ok(book)
    }

    /// Remove the book with `id`. Returns false, without touching the store,
    /// when no such book exists.
    pub fn delete(&mut self, id: u64) -> Result<bool> {
        let Some(index) = self.books.iter().position(|book| book.id == id) else {
            return Ok(false);
        };

        let removed = self.books.remove(index);
        if let Err(e) = self.save() {
            self.books.insert(index, removed);
            return Err(e);
        }
        debug!(id, "Book deleted");
        Ok(true)
    }

    /// Books whose `field` equals `value`, ignoring case. Unknown fields match nothing.
    pub fn search(&self, field: &str, value: &str) -> Vec<&Book> {
        let Ok(field) = field.parse::<SearchField>() else {
            debug!(field, "Search on unknown field");
            return Vec::new();
        };

        self.books
            .iter()
            .filter(|book| field.matches(book, value))
            .collect()
    }

    /// Books matching every criterion of `query`
    pub fn query(&self, query: &BookQuery) -> Vec<&Book> {
        self.books.iter().filter(|book| query.matches(book)).collect()
    }

    /// All books in catalog order
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, id: u64) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Set the status of book `id` and persist
    pub fn update_status(&mut self, id: u64, new_status: &str) -> Result<Book> {
        let status: Status = new_status.parse()?;

        let index = self
            .books
            .iter()
            .position(|book| book.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        let previous = std::mem::replace(&mut self.books[index].status, status);

        if let Err(e) = self.save() {
            self.books[index].status = previous;
            return Err(e);
        }
        debug!(id, status = %status, "Book status updated");
        Ok(self.books[index].clone())
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Store location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Highest id plus one, or 1 for an empty catalog. `None` once `u64::MAX` is taken.
    fn next_id(&self) -> Option<u64> {
        self.books
            .iter()
            .map(|book| book.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
    }
}

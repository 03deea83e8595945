use crate::catalog::types::{Book, Status};
use std::fmt;
use std::str::FromStr;

/// Book fields that can be searched on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Id,
    Title,
    Author,
    Year,
    Status,
}

impl SearchField {
    pub const ALL: [SearchField; 5] = [
        SearchField::Id,
        SearchField::Title,
        SearchField::Author,
        SearchField::Year,
        SearchField::Status,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SearchField::Id => "id",
            SearchField::Title => "title",
            SearchField::Author => "author",
            SearchField::Year => "year",
            SearchField::Status => "status",
        }
    }

    /// Textual form of this field on the given book
    pub fn value_of(&self, book: &Book) -> String {
        match self {
            SearchField::Id => book.id.to_string(),
            SearchField::Title => book.title.clone(),
            SearchField::Author => book.author.clone(),
            SearchField::Year => book.year.to_string(),
            SearchField::Status => book.status.to_string(),
        }
    }

    /// Case-insensitive exact comparison of textual forms. Status values are
    /// compared by meaning, so any label accepted for a status finds it.
    pub fn matches(&self, book: &Book, value: &str) -> bool {
        if let SearchField::Status = self {
            if let Ok(status) = value.parse::<Status>() {
                return book.status == status;
            }
        }
        self.value_of(book).to_lowercase() == value.to_lowercase()
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        SearchField::ALL
            .into_iter()
            .find(|field| field.name() == wanted)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Field name outside [`SearchField::ALL`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown search field '{}'", self.0)
    }
}

impl std::error::Error for UnknownField {}

/// Conjunction of `field = value` criteria
#[derive(Debug, Clone, Default)]
pub struct BookQuery {
    criteria: Vec<(String, String)>,
}

impl BookQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a criterion. Unknown field names are kept and make the query match nothing.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.criteria.push((field.into(), value.into()));
        self
    }

    /// True when every criterion matches the book
    pub fn matches(&self, book: &Book) -> bool {
        self.criteria.iter().all(|(field, value)| {
            field
                .parse::<SearchField>()
                .map(|field| field.matches(book, value))
                .unwrap_or(false)
        })
    }
}

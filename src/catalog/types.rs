use crate::{CatalogError, Result};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Availability of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Available,
    CheckedOut,
}

impl Status {
    /// Canonical label, as written to the store
    pub fn label(&self) -> &'static str {
        match self {
            Status::Available => "Available",
            Status::CheckedOut => "CheckedOut",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = CatalogError;

    /// Case-insensitive. Also accepts the labels used by stores written before
    /// the canonical English ones.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "available" | "в наличии" => Ok(Status::Available),
            "checkedout" | "checked_out" | "checked-out" | "checked out" | "выдана" => {
                Ok(Status::CheckedOut)
            }
            _ => Err(CatalogError::InvalidStatus(s.to_string())),
        }
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(de::Error::custom)
    }
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique within a catalog, never reassigned while the book exists
    #[serde(deserialize_with = "integer")]
    pub id: u64,
    pub title: String,
    pub author: String,
    /// Publication year
    #[serde(deserialize_with = "integer")]
    pub year: i32,
    pub status: Status,
}

impl Book {
    /// Create a new book, available for lending
    pub fn new(id: u64, title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year,
            status: Status::Available,
        }
    }

    /// Key/value form with keys `id`, `title`, `author`, `year`, `status`
    pub fn encode(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut map = serde_json::Map::new();
        map.insert("id".to_string(), self.id.into());
        map.insert("title".to_string(), self.title.clone().into());
        map.insert("author".to_string(), self.author.clone().into());
        map.insert("year".to_string(), self.year.into());
        map.insert("status".to_string(), self.status.label().into());
        map
    }

    /// Inverse of [`Book::encode`]. Fails on a missing key or a value of the wrong shape.
    pub fn decode(map: &serde_json::Map<String, serde_json::Value>) -> Result<Self> {
        let book: Book = serde_json::from_value(serde_json::Value::Object(map.clone()))
            .map_err(|e| CatalogError::Decode(e.to_string()))?;

        if book.id == 0 {
            return Err(CatalogError::Decode("book id must be positive".to_string()));
        }

        Ok(book)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Author: {}, Year: {}, Status: {}",
            self.id, self.title, self.author, self.year, self.status
        )
    }
}

/// Accepts a JSON integer or a string holding one
fn integer<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64> + TryFrom<i64> + FromStr,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        UInt(u64),
        Int(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::UInt(n) => {
            T::try_from(n).map_err(|_| de::Error::custom(format!("integer {} out of range", n)))
        }
        Raw::Int(n) => {
            T::try_from(n).map_err(|_| de::Error::custom(format!("integer {} out of range", n)))
        }
        Raw::Text(s) => s
            .trim()
            .parse::<T>()
            .map_err(|_| de::Error::custom(format!("expected an integer, got {:?}", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn as_map(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_new_book_is_available() {
        let book = Book::new(1, "War and Peace", "Tolstoy", 1869);
        assert_eq!(book.status, Status::Available);
    }

    #[test]
    fn test_encode_keys() {
        let book = Book::new(7, "Dead Souls", "Gogol", 1842);
        let map = book.encode();

        assert_eq!(
            serde_json::Value::Object(map),
            json!({
                "id": 7,
                "title": "Dead Souls",
                "author": "Gogol",
                "year": 1842,
                "status": "Available"
            })
        );
    }

    #[test]
    fn test_decode_encoded_book() {
        let mut book = Book::new(3, "Oblomov", "Goncharov", 1859);
        book.status = Status::CheckedOut;

        let decoded = Book::decode(&book.encode()).unwrap();
        assert_eq!(decoded, book);
    }

    #[test]
    fn test_decode_accepts_integer_strings() {
        let map = as_map(json!({
            "id": "12",
            "title": "Fathers and Sons",
            "author": "Turgenev",
            "year": " 1862 ",
            "status": "available"
        }));

        let book = Book::decode(&map).unwrap();
        assert_eq!(book.id, 12);
        assert_eq!(book.year, 1862);
    }

    #[test]
    fn test_decode_ids_above_i64_range() {
        let map = as_map(json!({
            "id": u64::MAX,
            "title": "Last",
            "author": "Anon",
            "year": -44,
            "status": "Available"
        }));

        let book = Book::decode(&map).unwrap();
        assert_eq!(book.id, u64::MAX);
        assert_eq!(book.year, -44);
        assert_eq!(Book::decode(&book.encode()).unwrap(), book);

        let huge_year = as_map(json!({
            "id": 1, "title": "T", "author": "A", "year": u64::MAX, "status": "Available"
        }));
        assert!(Book::decode(&huge_year).is_err());
    }

    #[test]
    fn test_decode_missing_key() {
        let map = as_map(json!({
            "id": 1,
            "title": "Untitled",
            "year": 2000,
            "status": "Available"
        }));

        let err = Book::decode(&map).unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
        assert!(err.to_string().contains("author"));
    }

    #[test]
    fn test_decode_rejects_bad_shapes() {
        let bad_year = as_map(json!({
            "id": 1, "title": "T", "author": "A", "year": "nineteen", "status": "Available"
        }));
        assert!(Book::decode(&bad_year).is_err());

        let float_id = as_map(json!({
            "id": 1.5, "title": "T", "author": "A", "year": 1900, "status": "Available"
        }));
        assert!(Book::decode(&float_id).is_err());

        let zero_id = as_map(json!({
            "id": 0, "title": "T", "author": "A", "year": 1900, "status": "Available"
        }));
        assert!(Book::decode(&zero_id).is_err());

        let bad_status = as_map(json!({
            "id": 1, "title": "T", "author": "A", "year": 1900, "status": "lost"
        }));
        assert!(Book::decode(&bad_status).is_err());
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("CheckedOut".parse::<Status>().unwrap(), Status::CheckedOut);
        assert_eq!("checked out".parse::<Status>().unwrap(), Status::CheckedOut);
        assert_eq!(" AVAILABLE ".parse::<Status>().unwrap(), Status::Available);
        assert_eq!("в наличии".parse::<Status>().unwrap(), Status::Available);
        assert_eq!("Выдана".parse::<Status>().unwrap(), Status::CheckedOut);

        let err = "on loan".parse::<Status>().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidStatus(ref s) if s == "on loan"));
    }

    #[test]
    fn test_display() {
        let book = Book::new(1, "War and Peace", "Tolstoy", 1869);
        assert_eq!(
            book.to_string(),
            "ID: 1, Title: War and Peace, Author: Tolstoy, Year: 1869, Status: Available"
        );
    }
}

pub mod manager;
pub mod query;
pub mod types;

pub use manager::Catalog;
pub use query::{BookQuery, SearchField};
pub use types::{Book, Status};

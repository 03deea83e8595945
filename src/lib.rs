pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;

pub use catalog::{Book, BookQuery, Catalog, SearchField, Status};
pub use error::{CatalogError, Result};

pub mod settings;

pub use settings::{LogLevel, Settings};

//! Configuration loading and types

mod loader;
mod types;

pub use loader::{ConfigError, default_path, load};
pub use types::{Config, GeminiConfig, LookupConfig};

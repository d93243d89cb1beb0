//! Configuration management for the user API

pub mod loader;
mod schema;

pub use loader::{load_config, load_config_from_path, resolve_config};
pub use schema::*;

//! User API - in-memory user registration, login and lookup
//!
//! This is the library interface for the service, allowing the stores,
//! services and router to be driven programmatically.

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod users;

pub use config::Config;
pub use error::Error;
pub use users::{User, UserView};

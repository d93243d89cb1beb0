//! Error types for the user API

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Username already exists")]
    UsernameTaken,

    #[error("Email already registered")]
    EmailTaken,

    /// Returned for both an unknown username and a wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Carries the id as requested, which may not be a valid user id at all
    #[error("User not found")]
    UserNotFound(String),

    #[error("Not authenticated")]
    Unauthorized,

    #[error("{0}")]
    Validation(String),

    #[error("Config file not found. Run 'user-api init' first.")]
    ConfigNotFound,

    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

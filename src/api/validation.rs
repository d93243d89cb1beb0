//! Request models and boundary validation

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::users::NewUser;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s.]+$")
        .expect("Invalid regex pattern - this is a bug in the codebase")
});

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl CreateUserRequest {
    /// Validate the request and turn it into a registration command
    pub fn into_new_user(self) -> Result<NewUser> {
        if self.username.is_empty() {
            return Err(Error::Validation("Username cannot be empty".to_string()));
        }
        let email = normalize_email(validate_email(&self.email)?);
        if self.password.is_empty() {
            return Err(Error::Validation("Password cannot be empty".to_string()));
        }

        Ok(NewUser {
            username: self.username,
            email,
            password: self.password,
        })
    }
}

pub fn validate_email(email: &str) -> Result<&str> {
    if !EMAIL_RE.is_match(email) {
        return Err(Error::Validation(format!(
            "Invalid email address: {}",
            email
        )));
    }
    Ok(email)
}

/// Lowercase the domain part; the local part is kept as given
pub fn normalize_email(email: &str) -> String {
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}

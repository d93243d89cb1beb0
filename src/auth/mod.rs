//! Authentication and session management

pub mod middleware;
pub mod models;
pub mod password;
pub mod service;
pub mod session;
pub mod token;

pub use middleware::{extract_bearer_token, require_session};
pub use models::{LoginRequest, LoginResponse};
pub use password::{hash_password, verify_password};
pub use service::AuthService;
pub use session::{Session, SessionStore};
pub use token::issue_token;

//! User records, storage and service

pub mod models;
pub mod service;
pub mod store;

pub use models::{NewUser, User, UserView};
pub use service::UserService;
pub use store::{UserStore, UserTable};

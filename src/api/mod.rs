//! HTTP API server

pub mod error;
pub mod extract;
pub mod routes;
pub mod server;
pub mod validation;

pub use server::*;

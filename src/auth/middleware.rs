//! Authentication middleware and extractors

use crate::auth::AuthService;
use crate::error::Error;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

/// Pull the bearer token out of the Authorization header
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Middleware for requiring a live session.
///
/// The resolved user is stored in the request extensions.
pub async fn require_session(
    State(auth): State<AuthService>,
    mut req: Request,
    next: Next,
) -> std::result::Result<Response, Error> {
    let token = extract_bearer_token(req.headers()).ok_or(Error::Unauthorized)?;
    let user = auth.current_user(token).await.ok_or(Error::Unauthorized)?;

    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

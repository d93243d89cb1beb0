//! Request extractors whose rejections render as `{"detail": ...}`

use axum::{
    extract::{FromRequest, FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::{Error, Result};

/// JSON body extractor; malformed or mismatched bodies become 422
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct JsonBody<T>(pub T);

/// `{id}` path segment naming a user.
///
/// Any integer is accepted. Integers no user can have, such as negative
/// ids, are reported as not found rather than as a malformed URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub u64);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| Error::Validation(e.body_text()))?;
        parse_user_id(&raw).map(UserId)
    }
}

/// Parse a path id; well-formed integers outside the id range are not found
pub fn parse_user_id(raw: &str) -> Result<u64> {
    if let Ok(id) = raw.parse::<u64>() {
        return Ok(id);
    }

    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::UserNotFound(raw.to_string()));
    }

    Err(Error::Validation(format!("Invalid user id: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_ids() {
        assert_eq!(parse_user_id("0").unwrap(), 0);
        assert_eq!(parse_user_id("42").unwrap(), 42);
    }

    #[test]
    fn test_out_of_range_ids_are_not_found() {
        assert!(matches!(parse_user_id("-1"), Err(Error::UserNotFound(ref id)) if id == "-1"));
        assert!(matches!(
            parse_user_id("99999999999999999999999"),
            Err(Error::UserNotFound(_))
        ));
    }

    #[test]
    fn test_non_integer_ids_are_invalid() {
        assert!(matches!(parse_user_id("abc"), Err(Error::Validation(_))));
        assert!(matches!(parse_user_id("-"), Err(Error::Validation(_))));
        assert!(matches!(parse_user_id("1.5"), Err(Error::Validation(_))));
    }
}

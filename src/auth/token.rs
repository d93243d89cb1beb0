//! Session token generation

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// Random bytes per token
const TOKEN_BYTES: usize = 32;

/// Generate a URL-safe random session token (43 characters)
pub fn issue_token() -> String {
    let bytes: [u8; TOKEN_BYTES] = rand::random();
    URL_SAFE_NO_PAD.encode(bytes)
}

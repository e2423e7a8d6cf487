//! Token payload decoding.
//!
//! Tokens are `header.payload.signature` strings. Only the payload segment is
//! read here; header and signature are never inspected and nothing is
//! verified. Payloads may use either the standard or URL-safe base64 alphabet,
//! with or without padding.
//!
//! ERROR HANDLING
//! ==============
//! `decode_username` reports every malformed shape as a `TokenError`.
//! `identity_from_token` is the recovering wrapper used by the UI: any failure
//! is logged and becomes the empty identity.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::Deserialize;
use serde_json::{Map, Value};

const PAYLOAD_SEGMENT: usize = 1;

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);
const LENIENT_URL_SAFE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

/// Reasons a token payload could not produce a username.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token has no payload segment")]
    MissingPayload,

    #[error("token payload is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("token payload is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("token payload has no username")]
    MissingUsername,
}

/// Claims read from the payload segment. Unknown fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub username: Option<String>,
}

/// Return the raw payload segment of `token`, if it has one.
pub fn payload_segment(token: &str) -> Option<&str> {
    token.split('.').nth(PAYLOAD_SEGMENT)
}

/// Decode a base64url or base64 segment into bytes. A segment must use one
/// alphabet throughout.
pub fn decode_segment(segment: &str) -> Result<Vec<u8>, TokenError> {
    LENIENT_URL_SAFE
        .decode(segment)
        .or_else(|_| LENIENT_STANDARD.decode(segment))
        .map_err(TokenError::from)
}

/// Decode and parse the payload claims of `token`.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let segment = payload_segment(token).ok_or(TokenError::MissingPayload)?;
    let bytes = decode_segment(segment)?;
    // Only objects carry claims; arrays and scalars are rejected here.
    let object: Map<String, Value> = serde_json::from_slice(&bytes)?;
    Ok(TokenClaims::deserialize(Value::Object(object))?)
}

/// Extract the `username` claim from `token`.
///
/// The empty token is handled by the caller; here it has no payload and is
/// reported as `MissingPayload`.
pub fn decode_username(token: &str) -> Result<String, TokenError> {
    decode_claims(token)?.username.ok_or(TokenError::MissingUsername)
}

/// Display identity for `token`: the username, or `""` when the token is
/// empty or cannot be decoded.
pub fn identity_from_token(token: &str) -> String {
    if token.is_empty() {
        return String::new();
    }
    match decode_username(token) {
        Ok(username) => username,
        Err(e) => {
            log::warn!("ignoring unreadable token: {e}");
            String::new()
        }
    }
}

//! Session token decoding
//!
//! Session tokens are JWT-shaped: `header.payload.signature`. Only the payload
//! is read. The signature is never verified client side; the backend does that
//! on every authenticated request.

use base64::{Engine as _, engine::general_purpose};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Why a token could not be turned into [`Claims`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("token must have 3 dot-separated segments, found {0}")]
    Structure(usize),

    #[error("token payload is not valid base64url: {0}")]
    Base64(String),

    #[error("token payload is not valid claims JSON: {0}")]
    Json(String),

    #[error("token expiry {0} is out of range")]
    Expiry(String),
}

/// Decoded payload fields of a session token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject, the user's email
    pub sub: String,
    /// Role strings exactly as issued
    pub roles: Vec<String>,
    /// Expiry instant
    pub expires_at: DateTime<Utc>,
}

impl Claims {
    /// True once `now` has reached the expiry instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// True if the token is already expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

#[derive(Deserialize)]
struct RawClaims {
    sub: String,
    roles: Vec<String>,
    exp: f64,
}

/// Decode base64url, tolerating trailing padding
fn base64_decode_url(input: &str) -> Result<Vec<u8>, DecodeError> {
    general_purpose::URL_SAFE_NO_PAD
        .decode(input.trim_end_matches('='))
        .map_err(|e| DecodeError::Base64(e.to_string()))
}

/// Decode the claims carried by a session token.
///
/// Pure and total: every input yields either claims or a [`DecodeError`],
/// never a panic. Expiry is reported, not judged; see [`Claims::is_expired`].
pub fn decode_claims(token: &str) -> Result<Claims, DecodeError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(DecodeError::Structure(parts.len()));
    }

    let payload_bytes = base64_decode_url(parts[1])?;
    let raw: RawClaims =
        serde_json::from_slice(&payload_bytes).map_err(|e| DecodeError::Json(e.to_string()))?;

    if !raw.exp.is_finite() {
        return Err(DecodeError::Expiry(raw.exp.to_string()));
    }
    let expires_at = DateTime::from_timestamp(raw.exp.trunc() as i64, 0)
        .ok_or_else(|| DecodeError::Expiry(raw.exp.to_string()))?;

    Ok(Claims {
        sub: raw.sub,
        roles: raw.roles,
        expires_at,
    })
}

/// Short, stable identifier for a token that is safe to log
pub fn fingerprint(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    format!("{:x}", digest).chars().take(12).collect()
}

/// Build an unsigned token carrying the given claims
#[cfg(test)]
pub fn encode_test_token(sub: &str, roles: &[&str], exp: i64) -> String {
    let header = general_purpose::URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = serde_json::json!({ "sub": sub, "roles": roles, "exp": exp });
    let payload = general_purpose::URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{}.{}.signature", header, payload)
}

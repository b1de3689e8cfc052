//! Decoding of opaque bearer tokens into claims.
//!
//! The client holds no verification key: the token is parsed, never
//! verified. The server remains the authority on signature validity and
//! answers 401 when it disagrees with the client's view.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;

use feedesk_core::error::AppError;

use super::claims::Claims;

/// Stateless decoder for compact JWT bearer tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenCodec;

impl TokenCodec {
    /// Creates a codec.
    pub fn new() -> Self {
        Self
    }

    /// Decodes the claim set of `token`.
    ///
    /// Fails with a [`MalformedToken`](feedesk_core::ErrorKind::MalformedToken)
    /// error unless the token is a three-segment JWT whose header is a
    /// base64url JSON object and whose payload is base64url JSON carrying
    /// at least `exp`. The header's algorithm is never inspected.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let mut segments = token.split('.');
        let (Some(header), Some(payload), Some(_), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(AppError::malformed_token("Invalid token format"));
        };

        let header = decode_segment(header, "header")?;
        if !serde_json::from_slice::<serde_json::Value>(&header).is_ok_and(|v| v.is_object()) {
            return Err(AppError::malformed_token("Invalid token header"));
        }

        let payload = decode_segment(payload, "payload")?;
        serde_json::from_slice::<Claims>(&payload)
            .map_err(|e| AppError::malformed_token(format!("Invalid token claims: {e}")))
    }

    /// Whether `token` is expired right now. Undecodable tokens count as expired.
    pub fn is_expired(&self, token: &str) -> bool {
        self.is_expired_at(token, Utc::now().timestamp())
    }

    /// Whether `token` is expired at `now` (epoch seconds).
    pub fn is_expired_at(&self, token: &str, now: i64) -> bool {
        match self.decode(token) {
            Ok(claims) => claims.is_expired_at(now),
            Err(_) => true,
        }
    }
}

fn decode_segment(segment: &str, part: &str) -> Result<Vec<u8>, AppError> {
    URL_SAFE_NO_PAD
        .decode(segment.trim_end_matches('='))
        .map_err(|e| AppError::malformed_token(format!("Invalid token {part} encoding: {e}")))
}

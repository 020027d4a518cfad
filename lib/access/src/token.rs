//! Bearer-token inspection.
//!
//! Tokens are JWTs: `base64url(header).base64url(claims).signature`. Only the
//! `exp` claim of the middle segment is read. The signature is never checked;
//! the backend owns verification. Anything that cannot be read is treated as
//! expired.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::TokenError;

/// Extracts the expiry instant from a token's `exp` claim.
///
/// # Errors
///
/// Returns a [`TokenError`] describing the first malformation found.
pub fn inspect(token: &str) -> Result<DateTime<Utc>, TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(TokenError::Malformed {
            segments: segments.len(),
        });
    }

    let claims = decode_segment(segments[1])?;
    let payload: Value =
        serde_json::from_slice(&claims).map_err(|e| TokenError::InvalidPayload {
            reason: e.to_string(),
        })?;

    let Value::Object(claims) = payload else {
        return Err(TokenError::InvalidPayload {
            reason: "claims segment is not an object".to_string(),
        });
    };

    let exp = claims.get("exp").ok_or(TokenError::MissingExpiry)?;
    let seconds = exp.as_f64().ok_or_else(|| TokenError::InvalidExpiry {
        value: exp.to_string(),
    })?;

    // Millisecond precision, so fractional `exp` values compare exactly.
    let millis = (seconds * 1000.0).floor();
    if !millis.is_finite() || millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return Err(TokenError::ExpiryOutOfRange);
    }
    DateTime::<Utc>::from_timestamp_millis(millis as i64).ok_or(TokenError::ExpiryOutOfRange)
}

/// Returns true if the token is expired at `now`, or cannot be read.
#[must_use]
pub fn is_expired_at(token: &str, now: DateTime<Utc>) -> bool {
    match inspect(token) {
        Ok(expires_at) => now >= expires_at,
        Err(reason) => {
            tracing::debug!(%reason, "treating unreadable token as expired");
            true
        }
    }
}

/// Returns true if the token is expired now, or cannot be read.
#[must_use]
pub fn is_expired(token: &str) -> bool {
    is_expired_at(token, Utc::now())
}

/// Decodes a claims segment, accepting the URL-safe and standard alphabets
/// with or without padding.
fn decode_segment(segment: &str) -> Result<Vec<u8>, TokenError> {
    let unpadded = segment.trim_end_matches('=');
    URL_SAFE_NO_PAD
        .decode(unpadded)
        .or_else(|url_safe_err| {
            STANDARD_NO_PAD
                .decode(unpadded)
                .map_err(|_| url_safe_err)
        })
        .map_err(|e| TokenError::InvalidEncoding {
            reason: e.to_string(),
        })
}

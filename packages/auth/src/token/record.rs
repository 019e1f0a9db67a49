// ABOUTME: Token record as stored in a user-supplied token file
// ABOUTME: Parses the JSON record and derives remaining lifetime and expiry time

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::{AuthError, AuthResult};

/// Token record read from a token file.
///
/// Every field is optional; absent strings display as empty and an absent
/// `created_at` or `expires_in` makes the token read as expired. Unknown
/// fields such as `scope` are ignored, and a field holding a value of the
/// wrong kind reads as absent.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub token_type: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub access_token: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub refresh_token: Option<String>,
    /// Issuance time in epoch milliseconds.
    #[serde(deserialize_with = "lenient_number")]
    pub created_at: Option<f64>,
    /// Lifetime in seconds, counted from `created_at`.
    #[serde(deserialize_with = "lenient_number")]
    pub expires_in: Option<f64>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_f64())
}

impl TokenRecord {
    /// Parse file contents as a token record.
    ///
    /// Only text that is not well-formed JSON, or a bare `null`, is rejected.
    /// Other non-object documents load with every field absent.
    pub fn parse(contents: &str) -> AuthResult<Self> {
        let value: Value = serde_json::from_str(contents).map_err(AuthError::TokenFile)?;
        match value {
            Value::Object(_) => serde_json::from_value(value).map_err(AuthError::TokenFile),
            Value::Null => Err(AuthError::TokenFile(de::Error::custom(
                "token file holds null instead of a token record",
            ))),
            _ => Ok(Self::default()),
        }
    }

    pub fn token_type(&self) -> &str {
        self.token_type.as_deref().unwrap_or_default()
    }

    pub fn access_token(&self) -> &str {
        self.access_token.as_deref().unwrap_or_default()
    }

    pub fn refresh_token(&self) -> &str {
        self.refresh_token.as_deref().unwrap_or_default()
    }

    pub fn has_access_token(&self) -> bool {
        !self.access_token().is_empty()
    }

    pub fn has_refresh_token(&self) -> bool {
        !self.refresh_token().is_empty()
    }

    /// Expiry instant in epoch milliseconds, if it is a finite number.
    fn expires_at_millis(&self) -> Option<f64> {
        let expires_at = self.created_at? + self.expires_in? * 1000.0;
        expires_at.is_finite().then_some(expires_at)
    }

    /// Expiry time, if both `created_at` and `expires_in` are present and in range.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.expires_at_millis()?.floor() as i64)
    }

    /// Whole seconds left before expiry at `now`, floored and clamped at zero.
    pub fn remaining_seconds_at(&self, now: DateTime<Utc>) -> u64 {
        let Some(expires_at) = self.expires_at_millis() else {
            return 0;
        };

        let remaining = ((expires_at - now.timestamp_millis() as f64) / 1000.0).floor();
        if remaining > 0.0 {
            // Float to int casts saturate
            remaining as u64
        } else {
            0
        }
    }
}

/// Redacts token values so records can be logged safely.
impl fmt::Debug for TokenRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRecord")
            .field("token_type", &self.token_type)
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "[REDACTED]"))
            .field("created_at", &self.created_at)
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

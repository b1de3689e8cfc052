//! JWT claims carried by the back-office bearer token.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Claims payload decoded from a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject, the username.
    #[serde(default)]
    pub sub: Option<String>,
    /// Space-separated role names.
    #[serde(default, deserialize_with = "role_list")]
    pub roles: Option<String>,
    /// Issued-at timestamp (seconds since epoch).
    #[serde(default, deserialize_with = "epoch_seconds")]
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    #[serde(deserialize_with = "epoch_seconds")]
    pub exp: i64,
    /// Token issuer.
    #[serde(default)]
    pub iss: String,
}

impl Claims {
    /// Returns the username from the subject claim, if the token has one.
    pub fn username(&self) -> Option<&str> {
        self.sub.as_deref()
    }

    /// Returns the roles claim split on whitespace.
    pub fn role_set(&self) -> BTreeSet<String> {
        self.roles
            .as_deref()
            .map(|roles| roles.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Checks whether this token has expired at `now` (epoch seconds).
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp())
    }

    /// Returns the remaining TTL in seconds (0 if expired).
    pub fn remaining_ttl_seconds(&self) -> u64 {
        let remaining = self.exp - Utc::now().timestamp();
        if remaining > 0 { remaining as u64 } else { 0 }
    }
}

/// Token issuers are not consistent about integer timestamps.
fn epoch_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Epoch {
        Int(i64),
        Float(f64),
    }

    match Epoch::deserialize(deserializer)? {
        Epoch::Int(seconds) => Ok(seconds),
        Epoch::Float(seconds) if seconds.is_finite() => Ok(seconds.floor() as i64),
        Epoch::Float(_) => Err(serde::de::Error::custom("non-finite timestamp")),
    }
}

/// Roles normally arrive as one space-separated string. A JSON array of
/// names is joined; any other shape reads as "no roles".
fn role_list<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let roles = match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(roles) => Some(roles),
        serde_json::Value::Array(items) => Some(
            items
                .iter()
                .filter_map(serde_json::Value::as_str)
                .collect::<Vec<_>>()
                .join(" "),
        ),
        _ => None,
    };
    Ok(roles)
}

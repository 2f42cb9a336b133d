//! # Session: the bearer token and what it says about the user
//!
//! [`Session`] wraps a [`TokenStore`] and a storage key. It is the only place
//! that reads or writes the token; screens receive a `Session` through context
//! instead of touching storage themselves.
//!
//! The token is a JWT issued by the backend. The client does not verify its
//! signature (that is the backend's job); it only decodes the payload to show
//! the user's name and initials and to decide where to send them after login.
//!
//! ## Role routing
//!
//! | Role claim | [`Destination`] |
//! |------------|-----------------|
//! | `ADMIN` / `ROLE_ADMIN` | [`Destination::Admin`] |
//! | `AGENT` / `ROLE_AGENT` | [`Destination::Agent`] |
//! | `CUSTOMER`, `USER` (and `ROLE_` forms) | [`Destination::Customer`] |
//! | anything else, no token, expired token | [`Destination::Login`] |

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use store::TokenStore;

use crate::error::ApiError;

/// Claims the client cares about. Unknown claims are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<Value>,
    #[serde(default)]
    pub roles: Option<Value>,
    #[serde(default)]
    pub authorities: Option<Value>,
    /// Expiry, seconds since the epoch.
    #[serde(default)]
    pub exp: Option<i64>,
}

impl Claims {
    /// Best display name: `name`, then `username`, then `sub`.
    pub fn display_name(&self) -> Option<&str> {
        [&self.name, &self.username, &self.sub]
            .into_iter()
            .filter_map(|c| c.as_deref())
            .find(|s| !s.trim().is_empty())
    }

    /// The first role found in `role`, `roles` or `authorities`.
    pub fn role(&self) -> Option<Role> {
        [&self.role, &self.roles, &self.authorities]
            .into_iter()
            .flatten()
            .find_map(first_role_name)
            .map(|name| Role::parse(&name))
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.exp.is_some_and(|exp| exp <= now.timestamp())
    }
}

/// A role claim may be a string, a list of strings, or a list of
/// `{"authority": "..."}` objects.
fn first_role_name(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(first_role_name),
        Value::Object(map) => map.get("authority").and_then(first_role_name),
        _ => None,
    }
}

/// The user's role as far as routing is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Admin,
    Agent,
    Customer,
    Other(String),
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        let upper = raw.trim().to_uppercase();
        let name = upper.strip_prefix("ROLE_").unwrap_or(upper.as_str());
        match name {
            "ADMIN" => Role::Admin,
            "AGENT" => Role::Agent,
            "CUSTOMER" | "USER" => Role::Customer,
            _ => Role::Other(raw.to_string()),
        }
    }

    pub fn destination(&self) -> Destination {
        match self {
            Role::Admin => Destination::Admin,
            Role::Agent => Destination::Agent,
            Role::Customer => Destination::Customer,
            Role::Other(_) => Destination::Login,
        }
    }
}

/// Where a user lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Admin,
    Agent,
    Customer,
    Login,
}

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Destination::Admin => "/admin",
            Destination::Agent => "/agent",
            Destination::Customer => "/customer",
            Destination::Login => "/login",
        }
    }
}

/// Decode the payload segment of a JWT without verifying it.
pub fn decode_claims(token: &str) -> Result<Claims, ApiError> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| ApiError::InvalidToken("missing payload segment".to_string()))?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| ApiError::InvalidToken(e.to_string()))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Up to two upper-cased initials from a display name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Access to the persisted bearer token.
#[derive(Debug, Clone)]
pub struct Session<S> {
    store: S,
    key: String,
}

impl<S: TokenStore> Session<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// The stored token, if any.
    pub fn token(&self) -> Option<String> {
        self.store
            .get(&self.key)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }

    /// Persist a token returned by a login endpoint.
    pub fn store_token(&self, token: &str) {
        self.store.set(&self.key, token.trim());
    }

    /// Forget the token (logout, or before a new login attempt).
    pub fn clear(&self) {
        self.store.remove(&self.key);
    }

    pub fn claims(&self) -> Option<Claims> {
        let token = self.token()?;
        match decode_claims(&token) {
            Ok(claims) => Some(claims),
            Err(e) => {
                tracing::debug!("Stored token is not a readable JWT: {}", e);
                None
            }
        }
    }

    pub fn user_name(&self) -> Option<String> {
        self.claims()
            .and_then(|c| c.display_name().map(str::to_string))
    }

    pub fn initials(&self) -> Option<String> {
        self.user_name().map(|name| initials(&name))
    }

    pub fn role(&self) -> Option<Role> {
        self.claims().and_then(|c| c.role())
    }

    /// Where the current token holder should land.
    pub fn destination(&self, now: DateTime<Utc>) -> Destination {
        match self.claims() {
            Some(claims) if !claims.is_expired(now) => claims
                .role()
                .map(|role| role.destination())
                .unwrap_or(Destination::Login),
            _ => Destination::Login,
        }
    }
}

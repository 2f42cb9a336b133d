//! # Client configuration: `insureportal.toml`
//!
//! Defines the TOML configuration for the InsurePortal client (filename:
//! [`ClientConfig::filename`] = `"insureportal.toml"`). It says where the
//! backend lives, which paths the service facade calls, which storage key
//! holds the session token, and how long transient UI actions wait.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8763"
//!
//! [api.endpoints]
//! agents = "/admin/agents"
//! policy_catalog = "/admin/policylist"
//!
//! [session]
//! token_key = "jwt"
//!
//! [ui]
//! banner_secs = 3
//! redirect_millis = 1000
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config with builder helpers and TOML (de)serialisation. |
//! | [`ApiConfig`] | Backend base URL plus the [`EndpointsConfig`] path table. |
//! | [`SessionConfig`] | Storage key of the bearer token. |
//! | [`UiConfig`] | Banner lifetime and post-login redirect delay. |
//!
//! Every section is `#[serde(default)]`, so a missing or partial file is
//! equivalent to the default configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `insureportal.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Backend location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub endpoints: EndpointsConfig,
}

fn default_base_url() -> String {
    "http://localhost:8763".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            endpoints: EndpointsConfig::default(),
        }
    }
}

/// Paths of the backend REST contract, relative to [`ApiConfig::base_url`].
///
/// `agents` and `policy_catalog` are collection paths: create posts to them,
/// update/delete append `/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointsConfig {
    pub customer_login: String,
    pub agent_login: String,
    pub agents: String,
    pub claims: String,
    pub customers: String,
    pub policy_catalog: String,
    pub policy_logs: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            customer_login: "/auth/login".to_string(),
            agent_login: "/auth/agentlogin".to_string(),
            agents: "/admin/agents".to_string(),
            claims: "/admin/claims".to_string(),
            customers: "/admin/customers".to_string(),
            policy_catalog: "/admin/policylist".to_string(),
            policy_logs: "/admin/policies".to_string(),
        }
    }
}

/// Session persistence settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Storage key holding the bearer token.
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

fn default_token_key() -> String {
    "jwt".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
        }
    }
}

/// Timing of transient UI actions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long a notification banner stays visible.
    #[serde(default = "default_banner_secs")]
    pub banner_secs: u64,
    /// Delay between a successful login and the redirect.
    #[serde(default = "default_redirect_millis")]
    pub redirect_millis: u64,
}

fn default_banner_secs() -> u64 {
    3
}

fn default_redirect_millis() -> u64 {
    1000
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            banner_secs: default_banner_secs(),
            redirect_millis: default_redirect_millis(),
        }
    }
}

impl UiConfig {
    pub fn banner_duration(&self) -> Duration {
        Duration::from_secs(self.banner_secs)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_millis)
    }
}

impl ClientConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
                endpoints: EndpointsConfig::default(),
            },
            ..Self::default()
        }
    }

    /// Builder method to change the token storage key.
    pub fn with_token_key(mut self, key: impl Into<String>) -> Self {
        self.session.token_key = key.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "insureportal.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

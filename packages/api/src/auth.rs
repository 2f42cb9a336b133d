//! Login request types.

use std::fmt;

use serde::Serialize;

/// Which login endpoint a credential pair is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoginKind {
    #[default]
    Customer,
    Agent,
}

impl LoginKind {
    pub fn label(self) -> &'static str {
        match self {
            LoginKind::Customer => "Customer",
            LoginKind::Agent => "Agent",
        }
    }
}

/// Email/password pair posted to a login endpoint.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Build credentials, trimming surrounding whitespace from both fields.
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            password: password.trim().to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

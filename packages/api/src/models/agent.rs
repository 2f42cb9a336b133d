//! # Agent records
//!
//! [`Agent`] is the normalized view of an agent row returned by the backend.
//! It is built from raw JSON (`#[serde(from = "Value")]`) so that the two id
//! spellings (`agentId`, `id`) and numeric ids collapse into one
//! [`AgentId`] before any view code sees them.
//!
//! [`NewAgent`] and [`AgentUpdate`] are the write payloads, serialized with
//! the backend's own field names (`contactInfo`, `aadharnumber`, `orgEmail`).

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::fields::text_field;

/// Role assigned to every agent created from the admin dashboard.
pub const AGENT_ROLE: &str = "AGENT";

/// Backend identifier of an agent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(pub String);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An agent as loaded from the backend.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct Agent {
    pub id: Option<AgentId>,
    pub name: Option<String>,
    pub contact_info: Option<String>,
    /// Some rows carry the contact address as `email` instead of `contactInfo`.
    pub email: Option<String>,
    pub gender: Option<String>,
    pub aadhar_number: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub org_email: Option<String>,
    pub role: Option<String>,
    pub date: Option<String>,
}

impl From<Value> for Agent {
    fn from(raw: Value) -> Self {
        Self {
            id: text_field(&raw, &["agentId", "id"]).map(AgentId),
            name: text_field(&raw, &["name"]),
            contact_info: text_field(&raw, &["contactInfo"]),
            email: text_field(&raw, &["email"]),
            gender: text_field(&raw, &["gender"]),
            aadhar_number: text_field(&raw, &["aadharnumber", "aadharNumber"]),
            phone: text_field(&raw, &["phone"]),
            address: text_field(&raw, &["address"]),
            org_email: text_field(&raw, &["orgEmail"]),
            role: text_field(&raw, &["role"]),
            date: text_field(&raw, &["date"]),
        }
    }
}

impl Agent {
    /// Contact address, preferring `contactInfo` over `email`.
    pub fn contact(&self) -> Option<&str> {
        self.contact_info.as_deref().or(self.email.as_deref())
    }

    /// Whether `value` equals this agent's `contactInfo` or `email`.
    pub fn has_contact(&self, value: &str) -> bool {
        self.contact_info.as_deref() == Some(value) || self.email.as_deref() == Some(value)
    }

    /// Whether `value` equals this agent's organizational email.
    pub fn has_org_email(&self, value: &str) -> bool {
        self.org_email.as_deref() == Some(value)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed agent")
    }
}

/// Payload for creating an agent.
#[derive(Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAgent {
    pub name: String,
    pub contact_info: String,
    pub password: String,
    pub gender: String,
    #[serde(rename = "aadharnumber")]
    pub aadhar_number: String,
    pub phone: String,
    pub address: String,
    pub org_email: String,
    pub role: String,
    /// ISO-8601 creation timestamp.
    pub date: String,
}

impl fmt::Debug for NewAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewAgent")
            .field("name", &self.name)
            .field("contact_info", &self.contact_info)
            .field("password", &"***")
            .field("org_email", &self.org_email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// Full replacement of an agent's editable fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentUpdate {
    pub name: String,
    pub contact_info: String,
    pub gender: String,
    pub date: String,
    #[serde(rename = "aadharnumber")]
    pub aadhar_number: String,
    pub phone: String,
    pub address: String,
    pub org_email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_agent_id_spellings() {
        let a: Agent = serde_json::from_value(json!({ "agentId": 7, "name": "Asha" })).unwrap();
        assert_eq!(a.id, Some(AgentId("7".to_string())));

        let b: Agent = serde_json::from_value(json!({ "id": "ag-2" })).unwrap();
        assert_eq!(b.id, Some(AgentId("ag-2".to_string())));

        // agentId wins when both are present
        let c: Agent = serde_json::from_value(json!({ "agentId": "x", "id": "y" })).unwrap();
        assert_eq!(c.id.unwrap().0, "x");

        let d: Agent = serde_json::from_value(json!({ "name": "No id" })).unwrap();
        assert!(d.id.is_none());
    }

    #[test]
    fn test_contact_falls_back_to_email() {
        let a: Agent = serde_json::from_value(json!({ "email": "a@x.com" })).unwrap();
        assert_eq!(a.contact(), Some("a@x.com"));
        assert!(a.has_contact("a@x.com"));

        let b: Agent =
            serde_json::from_value(json!({ "contactInfo": "", "email": "b@x.com" })).unwrap();
        assert_eq!(b.contact(), Some("b@x.com"));
    }

    #[test]
    fn test_new_agent_uses_backend_field_names() {
        let agent = NewAgent {
            name: "Ravi".to_string(),
            contact_info: "ravi@mail.com".to_string(),
            password: "secret1".to_string(),
            gender: "male".to_string(),
            aadhar_number: "123412341234".to_string(),
            phone: "9876543210".to_string(),
            address: "Pune".to_string(),
            org_email: "ravi@insure.com".to_string(),
            role: AGENT_ROLE.to_string(),
            date: "2024-05-01T10:00:00.000Z".to_string(),
        };
        let value = serde_json::to_value(&agent).unwrap();
        assert_eq!(value["contactInfo"], "ravi@mail.com");
        assert_eq!(value["aadharnumber"], "123412341234");
        assert_eq!(value["orgEmail"], "ravi@insure.com");
        assert_eq!(value["role"], "AGENT");

        // Debug output never shows the password
        assert!(!format!("{agent:?}").contains("secret1"));
    }
}

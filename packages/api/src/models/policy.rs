//! # Policy catalog entries
//!
//! The catalog endpoint has returned policies in several shapes over time:
//! camelCase objects, snake_case objects, objects with a bare `type`, and
//! positional rows where the type sits in slot `5`. [`Policy`] accepts all of
//! them and exposes one stable shape.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::fields::{number_field, text_field};

/// Candidate keys for the policy type, in lookup order.
pub const POLICY_TYPE_KEYS: [&str; 4] = ["policyType", "5", "policy_type", "type"];

/// Backend identifier of a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyId(pub String);

impl fmt::Display for PolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A policy catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct Policy {
    pub id: Option<PolicyId>,
    pub name: Option<String>,
    pub policy_type: Option<String>,
    pub premium_amount: Option<f64>,
    pub coverage_amount: Option<f64>,
    pub coverage_details: Option<String>,
}

impl From<Value> for Policy {
    fn from(raw: Value) -> Self {
        Self {
            id: text_field(&raw, &["policyId", "id", "policyListId"]).map(PolicyId),
            name: text_field(&raw, &["name", "policyName"]),
            policy_type: text_field(&raw, &POLICY_TYPE_KEYS),
            premium_amount: number_field(&raw, &["premiumAmount", "premium_amount"]),
            coverage_amount: number_field(
                &raw,
                &["coverageamount", "coverageAmount", "coverage_amount"],
            ),
            coverage_details: text_field(&raw, &["coverageDetails", "coverage_details"]),
        }
    }
}

impl Policy {
    pub fn is_type(&self, policy_type: &str) -> bool {
        self.policy_type.as_deref() == Some(policy_type)
    }
}

/// Payload for creating a catalog entry. Amounts are already numeric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPolicy {
    pub name: String,
    #[serde(rename = "policyType")]
    pub policy_type: String,
    #[serde(rename = "premiumAmount")]
    pub premium_amount: f64,
    #[serde(rename = "coverageamount")]
    pub coverage_amount: f64,
    #[serde(rename = "coverageDetails")]
    pub coverage_details: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_type_spelling_normalizes() {
        let rows = [
            json!({ "policyType": "Health" }),
            json!({ "policy_type": "Health" }),
            json!({ "type": "Health" }),
            json!({ "5": "Health" }),
            json!([1, "Care Plus", 100, 1000, "details", "Health"]),
        ];
        for row in rows {
            let policy = Policy::from(row.clone());
            assert_eq!(policy.policy_type.as_deref(), Some("Health"), "row {row}");
        }
    }

    #[test]
    fn test_amounts_and_id() {
        let policy = Policy::from(json!({
            "policyId": 12,
            "name": "Life Secure",
            "premiumAmount": 1200,
            "coverageamount": "500000",
            "coverageDetails": "Term life"
        }));
        assert_eq!(policy.id, Some(PolicyId("12".to_string())));
        assert_eq!(policy.premium_amount, Some(1200.0));
        assert_eq!(policy.coverage_amount, Some(500000.0));
        assert!(!policy.is_type("Life"));
    }

    #[test]
    fn test_new_policy_wire_names() {
        let policy = NewPolicy {
            name: "Motor Basic".to_string(),
            policy_type: "Motor".to_string(),
            premium_amount: 800.0,
            coverage_amount: 100000.0,
            coverage_details: "Third party".to_string(),
        };
        let value = serde_json::to_value(&policy).unwrap();
        assert_eq!(value["policyType"], "Motor");
        assert_eq!(value["premiumAmount"], 800.0);
        assert_eq!(value["coverageamount"], 100000.0);
        assert!(value.get("coverage_amount").is_none());
    }
}

//! In-memory backend for the view-state tests.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use api::{
    AdminService, Agent, AgentId, AgentUpdate, ApiError, AuthService, Credentials, LoginKind,
    NewAgent, NewPolicy, Policy, PolicyId, PolicyLog, Record,
};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::{json, Value};

/// Backend operations a test can make fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    ListAgents,
    CreateAgent,
    UpdateAgent,
    ListClaims,
    ListCustomers,
    ListPolicies,
    CreatePolicy,
    DeletePolicy,
    ListPolicyLogs,
}

#[derive(Default)]
struct Inner {
    agents: Vec<Value>,
    policies: Vec<Value>,
    claims: Vec<Value>,
    customers: Vec<Value>,
    logs: Vec<Value>,
    failing: HashSet<Op>,
    login: Option<Result<String, (u16, String)>>,
    calls: Vec<String>,
    next_id: u64,
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    inner: Arc<Mutex<Inner>>,
}

pub fn agent(raw: Value) -> Agent {
    Agent::from(raw)
}

pub fn policy(raw: Value) -> Policy {
    Policy::from(raw)
}

/// Unsigned test token with the given payload.
pub fn token_with(payload: Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

impl FakeBackend {
    /// A backend with a couple of rows in every collection.
    pub fn seeded() -> Self {
        let backend = Self::default();
        {
            let mut inner = backend.inner.lock().unwrap();
            inner.agents = vec![
                json!({ "agentId": 1, "name": "Asha Kulkarni", "contactInfo": "asha@mail.com", "orgEmail": "asha@insure.com" }),
                json!({ "agentId": 2, "name": "Bilal Khan", "email": "bilal@mail.com", "orgEmail": "bilal@insure.com" }),
            ];
            inner.policies = vec![
                json!({ "policyId": "p1", "name": "Term Life", "policyType": "Life", "premiumAmount": 900, "coverageamount": 1000000 }),
                json!({ "policyId": "p2", "name": "Car Shield", "type": "Motor", "premiumAmount": 450, "coverageAmount": 300000 }),
            ];
            inner.claims = vec![json!({ "claimId": 11, "status": "PENDING" })];
            inner.customers = vec![json!({ "customerId": 21, "name": "Meera" })];
            inner.logs = vec![json!({ "policyLogId": 31, "createdAt": "2024-03-05T10:15:00Z" })];
        }
        backend
    }

    pub fn fail(&self, op: Op) {
        self.inner.lock().unwrap().failing.insert(op);
    }

    pub fn set_login_token(&self, token: &str) {
        self.inner.lock().unwrap().login = Some(Ok(token.to_string()));
    }

    pub fn fail_login(&self, status: u16, body: &str) {
        self.inner.lock().unwrap().login = Some(Err((status, body.to_string())));
    }

    pub fn calls(&self) -> Vec<String> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.inner.lock().unwrap().calls.clear();
    }

    /// Record the call and check whether `op` is set to fail.
    fn enter(&self, op: Op, call: String) -> Result<std::sync::MutexGuard<'_, Inner>, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(call);
        if inner.failing.contains(&op) {
            return Err(ApiError::Status {
                status: 500,
                body: "Internal Server Error".to_string(),
            });
        }
        Ok(inner)
    }

    fn decode<T: From<Value>>(rows: &[Value]) -> Vec<T> {
        rows.iter().cloned().map(T::from).collect()
    }
}

impl AuthService for FakeBackend {
    async fn login(&self, kind: LoginKind, credentials: &Credentials) -> Result<String, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(format!(
            "login:{} {}",
            kind.label().to_lowercase(),
            credentials.email
        ));
        match inner.login.clone() {
            Some(Ok(token)) => Ok(token.trim().to_string()),
            Some(Err((status, body))) => Err(ApiError::Status { status, body }),
            None => Ok(token_with(json!({ "sub": credentials.email, "role": "CUSTOMER" }))),
        }
    }
}

impl AdminService for FakeBackend {
    async fn list_agents(&self) -> Result<Vec<Agent>, ApiError> {
        let inner = self.enter(Op::ListAgents, "list_agents".to_string())?;
        Ok(Self::decode(&inner.agents))
    }

    async fn create_agent(&self, agent: &NewAgent) -> Result<(), ApiError> {
        let mut inner = self.enter(Op::CreateAgent, "create_agent".to_string())?;
        inner.next_id += 1;
        let mut row = serde_json::to_value(agent)?;
        row["agentId"] = json!(100 + inner.next_id);
        inner.agents.push(row);
        Ok(())
    }

    async fn update_agent(&self, id: &AgentId, update: &AgentUpdate) -> Result<(), ApiError> {
        let mut inner = self.enter(Op::UpdateAgent, format!("update_agent {id}"))?;
        let patch = serde_json::to_value(update)?;
        for row in inner.agents.iter_mut() {
            if Agent::from(row.clone()).id.as_ref() == Some(id) {
                *row = patch.clone();
                row["agentId"] = json!(id.0);
            }
        }
        Ok(())
    }

    async fn list_claims(&self) -> Result<Vec<Record>, ApiError> {
        let inner = self.enter(Op::ListClaims, "list_claims".to_string())?;
        Ok(inner.claims.iter().cloned().map(Record).collect())
    }

    async fn list_customers(&self) -> Result<Vec<Record>, ApiError> {
        let inner = self.enter(Op::ListCustomers, "list_customers".to_string())?;
        Ok(inner.customers.iter().cloned().map(Record).collect())
    }

    async fn list_policies(&self) -> Result<Vec<Policy>, ApiError> {
        let inner = self.enter(Op::ListPolicies, "list_policies".to_string())?;
        Ok(Self::decode(&inner.policies))
    }

    async fn create_policy(&self, policy: &NewPolicy) -> Result<(), ApiError> {
        let mut inner = self.enter(Op::CreatePolicy, "create_policy".to_string())?;
        inner.next_id += 1;
        let mut row = serde_json::to_value(policy)?;
        row["policyId"] = json!(format!("p{}", 100 + inner.next_id));
        inner.policies.push(row);
        Ok(())
    }

    async fn delete_policy(&self, id: &PolicyId) -> Result<(), ApiError> {
        let mut inner = self.enter(Op::DeletePolicy, format!("delete_policy {id}"))?;
        inner
            .policies
            .retain(|row| Policy::from(row.clone()).id.as_ref() != Some(id));
        Ok(())
    }

    async fn list_policy_logs(&self) -> Result<Vec<PolicyLog>, ApiError> {
        let inner = self.enter(Op::ListPolicyLogs, "list_policy_logs".to_string())?;
        Ok(Self::decode(&inner.logs))
    }
}

//! # Service facade
//!
//! The screens never build requests themselves. They call one of two traits:
//!
//! | Trait | Used by | Operations |
//! |-------|---------|------------|
//! | [`AuthService`] | login screen | `login` against the customer or agent endpoint |
//! | [`AdminService`] | admin dashboard | list the five collections; create/update agents; create/delete catalog entries |
//!
//! [`crate::HttpBackend`] implements both over reqwest. Tests substitute
//! in-memory fakes.

use std::future::Future;

use crate::auth::{Credentials, LoginKind};
use crate::error::ApiError;
use crate::models::{Agent, AgentId, AgentUpdate, NewAgent, NewPolicy, Policy, PolicyId, PolicyLog, Record};

/// Authentication endpoints.
pub trait AuthService {
    /// Post credentials to the endpoint for `kind`; returns the raw bearer token.
    fn login(
        &self,
        kind: LoginKind,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<String, ApiError>>;
}

/// Admin-side collection and mutation endpoints.
pub trait AdminService {
    fn list_agents(&self) -> impl Future<Output = Result<Vec<Agent>, ApiError>>;

    fn create_agent(&self, agent: &NewAgent) -> impl Future<Output = Result<(), ApiError>>;

    fn update_agent(
        &self,
        id: &AgentId,
        agent: &AgentUpdate,
    ) -> impl Future<Output = Result<(), ApiError>>;

    fn list_claims(&self) -> impl Future<Output = Result<Vec<Record>, ApiError>>;

    fn list_customers(&self) -> impl Future<Output = Result<Vec<Record>, ApiError>>;

    /// The policy catalog (products that can be sold).
    fn list_policies(&self) -> impl Future<Output = Result<Vec<Policy>, ApiError>>;

    fn create_policy(&self, policy: &NewPolicy) -> impl Future<Output = Result<(), ApiError>>;

    fn delete_policy(&self, id: &PolicyId) -> impl Future<Output = Result<(), ApiError>>;

    /// Issued-policy history.
    fn list_policy_logs(&self) -> impl Future<Output = Result<Vec<PolicyLog>, ApiError>>;
}

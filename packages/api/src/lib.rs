//! # API crate: the backend facade of the InsurePortal client
//!
//! Everything the screens know about the insurance backend goes through this
//! crate: the record types, the service traits, the reqwest implementation,
//! and the session token.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | [`Credentials`] and [`LoginKind`] (customer vs agent endpoint) |
//! | [`error`] | [`ApiError`]: transport, status (with body), decode, invalid token |
//! | [`http`] | [`HttpBackend`], the reqwest implementation of both service traits |
//! | [`models`] | [`Agent`], [`Policy`], [`PolicyLog`], [`Record`] and the write payloads |
//! | [`service`] | [`AuthService`] and [`AdminService`] traits |
//! | [`session`] | [`Session`] over a [`store::TokenStore`], JWT claims, role routing |
//!
//! ## Shape normalization
//!
//! The backend is loose about field names. Records are normalized while they
//! are decoded (`#[serde(from = "Value")]`), so callers only ever see one
//! spelling per field: `Agent::id` covers `agentId`/`id`, `Policy::policy_type`
//! covers `policyType`/slot `5`/`policy_type`/`type`, and
//! `PolicyLog::timestamp` covers nine date keys.

pub mod auth;
pub mod error;
pub mod http;
pub mod models;
pub mod service;
pub mod session;

pub use auth::{Credentials, LoginKind};
pub use error::ApiError;
pub use http::HttpBackend;
pub use models::{
    Agent, AgentId, AgentUpdate, LogTimestamp, NewAgent, NewPolicy, Policy, PolicyId, PolicyLog,
    Record, AGENT_ROLE,
};
pub use service::{AdminService, AuthService};
pub use session::{decode_claims, initials, Claims, Destination, Role, Session};

//! Backend records, normalized at the service boundary.

mod fields;

pub mod agent;
pub mod policy;
pub mod record;

pub use agent::{Agent, AgentId, AgentUpdate, NewAgent, AGENT_ROLE};
pub use policy::{NewPolicy, Policy, PolicyId, POLICY_TYPE_KEYS};
pub use record::{parse_timestamp, LogTimestamp, PolicyLog, Record, LOG_DATE_KEYS};

//! # Admin dashboard state
//!
//! [`AdminState`] is everything the dashboard shows: the five loaded
//! collections, which tab and forms are open, the search/filter inputs, and
//! the pending delete confirmation. The view keeps it in a signal.
//!
//! Every mutation is split into three steps so no signal borrow is held across
//! an await:
//!
//! 1. `prepare_*` validates locally and returns the payload, or the banner to
//!    show instead (nothing is sent).
//! 2. `submit_*` is async: it calls the backend once and, on success,
//!    refetches the affected collection in full.
//! 3. `finish_*` applies the result (new list, closed form) and returns the
//!    banner to show.
//!
//! Loads never fail as a whole: a collection whose request fails is replaced
//! by an empty list and the others are unaffected.

use api::{
    AdminService, Agent, AgentId, AgentUpdate, ApiError, NewAgent, NewPolicy, Policy, PolicyId,
    PolicyLog, Record, AGENT_ROLE,
};
use chrono::{DateTime, SecondsFormat, Utc};

use crate::forms::{FieldError, Form, Rule};
use crate::notification::Banner;

pub const INVALID_FORM: &str = "Please fill all required fields correctly";
pub const DUPLICATE_CONTACT: &str = "Contact info already exists";
pub const DUPLICATE_ORG_EMAIL: &str = "Organisational Email already exists";

/// Dashboard sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Dashboard,
    Agents,
    Policies,
    Customers,
    Claims,
    PolicyLogs,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Dashboard,
        Tab::Agents,
        Tab::Policies,
        Tab::Customers,
        Tab::Claims,
        Tab::PolicyLogs,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Agents => "Agents",
            Tab::Policies => "Policies",
            Tab::Customers => "Customers",
            Tab::Claims => "Claims",
            Tab::PolicyLogs => "Policy Logs",
        }
    }
}

/// The five collections shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collections {
    pub agents: Vec<Agent>,
    pub claims: Vec<Record>,
    pub customers: Vec<Record>,
    pub policies: Vec<Policy>,
    pub policy_logs: Vec<PolicyLog>,
}

/// Summary counts for the dashboard tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub agents: usize,
    pub claims: usize,
    pub customers: usize,
    pub policies: usize,
    pub policy_logs: usize,
}

fn or_empty<T>(collection: &str, result: Result<Vec<T>, ApiError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::warn!("Failed to load {}: {}", collection, e);
        Vec::new()
    })
}

/// Fetch all five collections concurrently.
pub async fn load_collections<S: AdminService>(service: &S) -> Collections {
    let (agents, claims, customers, policies, policy_logs) = futures::join!(
        service.list_agents(),
        service.list_claims(),
        service.list_customers(),
        service.list_policies(),
        service.list_policy_logs(),
    );
    Collections {
        agents: or_empty("agents", agents),
        claims: or_empty("claims", claims),
        customers: or_empty("customers", customers),
        policies: or_empty("policy catalog", policies),
        policy_logs: or_empty("policy logs", policy_logs),
    }
}

pub async fn reload_agents<S: AdminService>(service: &S) -> Vec<Agent> {
    or_empty("agents", service.list_agents().await)
}

pub async fn reload_policies<S: AdminService>(service: &S) -> Vec<Policy> {
    or_empty("policy catalog", service.list_policies().await)
}

/// Create an agent, then refetch the agent list.
pub async fn submit_new_agent<S: AdminService>(
    service: &S,
    agent: &NewAgent,
) -> Result<Vec<Agent>, ApiError> {
    service.create_agent(agent).await?;
    Ok(reload_agents(service).await)
}

/// Replace an agent's editable fields, then refetch the agent list.
pub async fn submit_agent_update<S: AdminService>(
    service: &S,
    id: &AgentId,
    update: &AgentUpdate,
) -> Result<Vec<Agent>, ApiError> {
    service.update_agent(id, update).await?;
    Ok(reload_agents(service).await)
}

/// Create a catalog entry, then refetch the catalog.
pub async fn submit_new_policy<S: AdminService>(
    service: &S,
    policy: &NewPolicy,
) -> Result<Vec<Policy>, ApiError> {
    service.create_policy(policy).await?;
    Ok(reload_policies(service).await)
}

/// Delete a catalog entry, then refetch only the catalog.
pub async fn submit_policy_delete<S: AdminService>(
    service: &S,
    id: &PolicyId,
) -> Result<Vec<Policy>, ApiError> {
    service.delete_policy(id).await?;
    Ok(reload_policies(service).await)
}

/// A delete waiting for the user's confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDelete {
    pub id: Option<PolicyId>,
}

impl PendingDelete {
    pub fn prompt(&self) -> String {
        match &self.id {
            Some(id) => format!("Delete policy {id}?"),
            None => "Delete policy unknown?".to_string(),
        }
    }
}

fn agent_form() -> Form {
    Form::new()
        .field("name", "", vec![Rule::Required])
        .field("contactInfo", "", vec![Rule::Required, Rule::Email])
        .field("password", "", vec![Rule::Required, Rule::MinLength(6)])
        .field("gender", "male", vec![Rule::Required])
        .field("aadharnumber", "", vec![Rule::Required, Rule::Digits(12)])
        .field("phone", "", vec![Rule::Required, Rule::Digits(10)])
        .field("address", "", vec![Rule::Required])
        .field("orgEmail", "", vec![Rule::Required, Rule::Email])
}

fn update_form() -> Form {
    Form::new()
        .field("name", "", vec![Rule::Required])
        .field("contactInfo", "", vec![Rule::Required, Rule::Email])
        .field("gender", "male", vec![Rule::Required])
        .field("date", "", vec![Rule::Required])
        .field("aadharnumber", "", vec![Rule::Required, Rule::Digits(12)])
        .field("phone", "", vec![Rule::Required, Rule::Digits(10)])
        .field("address", "", vec![Rule::Required])
        .field("orgEmail", "", vec![Rule::Required, Rule::Email])
}

fn policy_form() -> Form {
    Form::new()
        .field("name", "", vec![Rule::Required])
        .field("policyType", "", vec![Rule::Required])
        .field("premiumAmount", "", vec![Rule::Required, Rule::Min(1.0)])
        .field("coverageamount", "", vec![Rule::Required, Rule::Min(1.0)])
        .field("coverageDetails", "", vec![Rule::Required])
}

/// Text shown under an admin form field.
pub fn field_message(name: &str, error: &FieldError) -> String {
    match error {
        FieldError::Required => format!("{name} is required"),
        FieldError::Email => "Please enter a valid email".to_string(),
        FieldError::MinLength { required } => format!("Minimum {required} characters required"),
        FieldError::Pattern => match name {
            "phone" => "Enter valid 10-digit phone number".to_string(),
            "aadharnumber" => "Enter valid 12-digit Aadhaar number".to_string(),
            _ => String::new(),
        },
        FieldError::Min { .. } => "Value must be greater than 0".to_string(),
    }
}

/// Everything the admin dashboard displays.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminState {
    pub tab: Tab,
    pub data: Collections,
    pub admin_name: String,
    pub admin_initials: String,
    pub search: String,
    /// Selected policy type; empty means no filter.
    pub policy_type_filter: String,
    pub show_agent_form: bool,
    pub show_policy_form: bool,
    pub show_update_form: bool,
    pub selected_agent: Option<Agent>,
    pub agent_form: Form,
    pub update_form: Form,
    pub policy_form: Form,
    pub creating_agent: bool,
    pub creating_policy: bool,
    pub pending_delete: Option<PendingDelete>,
}

impl Default for AdminState {
    fn default() -> Self {
        Self {
            tab: Tab::default(),
            data: Collections::default(),
            admin_name: String::new(),
            admin_initials: String::new(),
            search: String::new(),
            policy_type_filter: String::new(),
            show_agent_form: false,
            show_policy_form: false,
            show_update_form: false,
            selected_agent: None,
            agent_form: agent_form(),
            update_form: update_form(),
            policy_form: policy_form(),
            creating_agent: false,
            creating_policy: false,
            pending_delete: None,
        }
    }
}

impl AdminState {
    pub fn set_user(&mut self, name: Option<String>) {
        if let Some(name) = name {
            self.admin_initials = api::initials(&name);
            self.admin_name = name;
        }
    }

    pub fn toggle_agent_form(&mut self) {
        self.show_agent_form = !self.show_agent_form;
    }

    pub fn toggle_policy_form(&mut self) {
        self.show_policy_form = !self.show_policy_form;
    }

    pub fn stats(&self) -> Stats {
        Stats {
            agents: self.data.agents.len(),
            claims: self.data.claims.len(),
            customers: self.data.customers.len(),
            policies: self.data.policies.len(),
            policy_logs: self.data.policy_logs.len(),
        }
    }

    /// The catalog, narrowed to the selected policy type if one is set.
    pub fn filtered_policies(&self) -> Vec<&Policy> {
        if self.policy_type_filter.is_empty() {
            return self.data.policies.iter().collect();
        }
        self.data
            .policies
            .iter()
            .filter(|p| p.is_type(&self.policy_type_filter))
            .collect()
    }

    /// Distinct policy types in catalog order, for the filter dropdown.
    pub fn policy_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = Vec::new();
        for policy_type in self.data.policies.iter().filter_map(|p| p.policy_type.as_deref()) {
            if !types.contains(&policy_type) {
                types.push(policy_type);
            }
        }
        types
    }

    /// Agents whose name contains the search text, ignoring case.
    pub fn filtered_agents(&self) -> Vec<&Agent> {
        if self.search.is_empty() {
            return self.data.agents.iter().collect();
        }
        let needle = self.search.to_lowercase();
        self.data
            .agents
            .iter()
            .filter(|a| {
                a.name
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Validate the create-agent form and check for duplicates among the
    /// agents currently loaded.
    pub fn prepare_new_agent(&mut self, now: DateTime<Utc>) -> Result<NewAgent, Banner> {
        if !self.agent_form.is_valid() {
            self.agent_form.mark_all_touched();
            return Err(Banner::error(INVALID_FORM));
        }

        let form = &self.agent_form;
        let contact = form.value("contactInfo");
        if self.data.agents.iter().any(|a| a.has_contact(contact)) {
            return Err(Banner::error(DUPLICATE_CONTACT));
        }
        let org_email = form.value("orgEmail");
        if self.data.agents.iter().any(|a| a.has_org_email(org_email)) {
            return Err(Banner::error(DUPLICATE_ORG_EMAIL));
        }

        let agent = NewAgent {
            name: form.value("name").to_string(),
            contact_info: contact.to_string(),
            password: form.value("password").to_string(),
            gender: form.value("gender").to_string(),
            aadhar_number: form.value("aadharnumber").to_string(),
            phone: form.value("phone").to_string(),
            address: form.value("address").to_string(),
            org_email: org_email.to_string(),
            role: AGENT_ROLE.to_string(),
            date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        self.creating_agent = true;
        Ok(agent)
    }

    pub fn finish_create_agent(&mut self, result: Result<Vec<Agent>, ApiError>) -> Banner {
        self.creating_agent = false;
        match result {
            Ok(agents) => {
                tracing::info!("Agent created; {} agents loaded", agents.len());
                self.data.agents = agents;
                self.show_agent_form = false;
                self.agent_form.reset();
                Banner::success("Agent created successfully!")
            }
            Err(e) => {
                tracing::error!("Create agent error: {}", e);
                Banner::error("Failed to create agent")
            }
        }
    }

    /// Open the edit form pre-filled from `agent`.
    pub fn open_update_form(&mut self, agent: &Agent) {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        self.update_form.reset();
        self.update_form.patch(&[
            ("name", text(&agent.name)),
            ("contactInfo", agent.contact().unwrap_or_default().to_string()),
            ("gender", agent.gender.clone().unwrap_or_else(|| "male".to_string())),
            ("date", text(&agent.date)),
            ("aadharnumber", text(&agent.aadhar_number)),
            ("phone", text(&agent.phone)),
            ("address", text(&agent.address)),
            ("orgEmail", text(&agent.org_email)),
        ]);
        self.selected_agent = Some(agent.clone());
        self.show_update_form = true;
    }

    pub fn close_update_form(&mut self) {
        self.show_update_form = false;
        self.selected_agent = None;
    }

    pub fn prepare_update(&mut self) -> Result<(AgentId, AgentUpdate), Banner> {
        if !self.update_form.is_valid() {
            self.update_form.mark_all_touched();
            return Err(Banner::error(INVALID_FORM));
        }
        let Some(id) = self.selected_agent.as_ref().and_then(|a| a.id.clone()) else {
            return Err(Banner::error("Agent ID not found"));
        };
        let form = &self.update_form;
        let update = AgentUpdate {
            name: form.value("name").to_string(),
            contact_info: form.value("contactInfo").to_string(),
            gender: form.value("gender").to_string(),
            date: form.value("date").to_string(),
            aadhar_number: form.value("aadharnumber").to_string(),
            phone: form.value("phone").to_string(),
            address: form.value("address").to_string(),
            org_email: form.value("orgEmail").to_string(),
        };
        Ok((id, update))
    }

    pub fn finish_update(&mut self, result: Result<Vec<Agent>, ApiError>) -> Banner {
        match result {
            Ok(agents) => {
                self.data.agents = agents;
                self.close_update_form();
                Banner::success("Agent updated successfully!")
            }
            Err(e) => {
                tracing::error!("Update error: {}", e);
                Banner::error("Failed to update agent")
            }
        }
    }

    pub fn prepare_new_policy(&mut self) -> Result<NewPolicy, Banner> {
        if !self.policy_form.is_valid() {
            self.policy_form.mark_all_touched();
            return Err(Banner::error(INVALID_FORM));
        }
        let form = &self.policy_form;
        // Both amounts passed Rule::Min, so they parse.
        let amount = |name: &str| form.value(name).trim().parse::<f64>().unwrap_or_default();
        let policy = NewPolicy {
            name: form.value("name").to_string(),
            policy_type: form.value("policyType").to_string(),
            premium_amount: amount("premiumAmount"),
            coverage_amount: amount("coverageamount"),
            coverage_details: form.value("coverageDetails").to_string(),
        };
        self.creating_policy = true;
        Ok(policy)
    }

    pub fn finish_create_policy(&mut self, result: Result<Vec<Policy>, ApiError>) -> Banner {
        self.creating_policy = false;
        match result {
            Ok(policies) => {
                self.data.policies = policies;
                self.show_policy_form = false;
                self.policy_form.reset();
                Banner::success("Policy created successfully!")
            }
            Err(e) => {
                tracing::error!("Create policy error: {}", e);
                Banner::error("Failed to create policy")
            }
        }
    }

    /// Ask for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: Option<PolicyId>) {
        self.pending_delete = Some(PendingDelete { id });
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// The user confirmed; hand back the id to delete.
    pub fn confirm_delete(&mut self) -> Result<PolicyId, Banner> {
        self.pending_delete
            .take()
            .and_then(|pending| pending.id)
            .ok_or_else(|| Banner::error("Policy ID is missing"))
    }

    /// Apply a delete result; only failures produce a banner.
    pub fn finish_delete(&mut self, result: Result<Vec<Policy>, ApiError>) -> Option<Banner> {
        match result {
            Ok(policies) => {
                self.data.policies = policies;
                None
            }
            Err(e) => {
                tracing::error!("Delete policy error: {}", e);
                Some(Banner::error("Failed to delete policy"))
            }
        }
    }

    pub fn agent_error(&self, name: &str) -> Option<String> {
        self.agent_form.error(name).map(|e| field_message(name, &e))
    }

    pub fn update_error(&self, name: &str) -> Option<String> {
        self.update_form.error(name).map(|e| field_message(name, &e))
    }

    pub fn policy_error(&self, name: &str) -> Option<String> {
        self.policy_form.error(name).map(|e| field_message(name, &e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{agent, policy, FakeBackend, Op};
    use serde_json::json;

    fn fill_agent_form(state: &mut AdminState, contact: &str, org_email: &str) {
        let form = &mut state.agent_form;
        form.set("name", "Neha Joshi");
        form.set("contactInfo", contact);
        form.set("password", "secret1");
        form.set("aadharnumber", "123456789012");
        form.set("phone", "9876543210");
        form.set("address", "12 MG Road, Pune");
        form.set("orgEmail", org_email);
    }

    fn fill_policy_form(state: &mut AdminState) {
        let form = &mut state.policy_form;
        form.set("name", "Family Health");
        form.set("policyType", "Health");
        form.set("premiumAmount", "1200");
        form.set("coverageamount", "500000.50");
        form.set("coverageDetails", "Hospitalisation");
    }

    #[tokio::test]
    async fn test_each_failed_collection_degrades_alone() {
        let all = [
            Op::ListAgents,
            Op::ListClaims,
            Op::ListCustomers,
            Op::ListPolicies,
            Op::ListPolicyLogs,
        ];
        for failing in all {
            let backend = FakeBackend::seeded();
            backend.fail(failing);

            let data = load_collections(&backend).await;
            let lens = [
                (Op::ListAgents, data.agents.len()),
                (Op::ListClaims, data.claims.len()),
                (Op::ListCustomers, data.customers.len()),
                (Op::ListPolicies, data.policies.len()),
                (Op::ListPolicyLogs, data.policy_logs.len()),
            ];
            for (op, len) in lens {
                if op == failing {
                    assert_eq!(len, 0, "{op:?} should be empty");
                } else {
                    assert!(len > 0, "{op:?} should be loaded when {failing:?} fails");
                }
            }
        }
    }

    #[tokio::test]
    async fn test_duplicate_contact_rejected_before_network() {
        let backend = FakeBackend::default();
        let mut state = AdminState::default();
        state.data.agents = vec![agent(json!({ "contactInfo": "x@y.com", "orgEmail": "o@y.com" }))];

        fill_agent_form(&mut state, "x@y.com", "new@y.com");
        let banner = state.prepare_new_agent(Utc::now()).unwrap_err();
        assert_eq!(banner.message, "Contact info already exists");
        assert!(banner.is_error());
        assert!(!state.creating_agent);
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_contact_matching_existing_email_field_is_duplicate() {
        let mut state = AdminState::default();
        state.data.agents = vec![agent(json!({ "email": "legacy@y.com", "orgEmail": "o@y.com" }))];

        fill_agent_form(&mut state, "legacy@y.com", "other@y.com");
        assert_eq!(
            state.prepare_new_agent(Utc::now()).unwrap_err().message,
            DUPLICATE_CONTACT
        );

        // Case-sensitive: a different case is not a duplicate
        fill_agent_form(&mut state, "Legacy@y.com", "other@y.com");
        assert!(state.prepare_new_agent(Utc::now()).is_ok());
    }

    #[test]
    fn test_duplicate_org_email_has_its_own_message() {
        let mut state = AdminState::default();
        state.data.agents = vec![agent(json!({ "contactInfo": "x@y.com", "orgEmail": "o@y.com" }))];

        fill_agent_form(&mut state, "fresh@y.com", "o@y.com");
        let banner = state.prepare_new_agent(Utc::now()).unwrap_err();
        assert_eq!(banner.message, DUPLICATE_ORG_EMAIL);
        assert_ne!(banner.message, DUPLICATE_CONTACT);
    }

    #[test]
    fn test_invalid_agent_form_marks_touched() {
        let mut state = AdminState::default();
        state.agent_form.set("phone", "12345");
        let banner = state.prepare_new_agent(Utc::now()).unwrap_err();
        assert_eq!(banner.message, INVALID_FORM);
        assert_eq!(state.agent_error("name").as_deref(), Some("name is required"));
        assert_eq!(
            state.agent_error("phone").as_deref(),
            Some("Enter valid 10-digit phone number")
        );
        assert_eq!(state.agent_error("gender"), None);

        state.agent_form.set("aadharnumber", "12");
        assert_eq!(
            state.agent_error("aadharnumber").as_deref(),
            Some("Enter valid 12-digit Aadhaar number")
        );
        state.agent_form.set("password", "abc");
        assert_eq!(
            state.agent_error("password").as_deref(),
            Some("Minimum 6 characters required")
        );
    }

    #[tokio::test]
    async fn test_create_agent_refetches_and_resets() {
        let backend = FakeBackend::seeded();
        let mut state = AdminState::default();
        state.data = load_collections(&backend).await;
        let before = state.data.agents.len();
        state.show_agent_form = true;

        fill_agent_form(&mut state, "neha@mail.com", "neha@insure.com");
        let now = Utc::now();
        let new_agent = state.prepare_new_agent(now).unwrap();
        assert!(state.creating_agent);
        assert_eq!(new_agent.role, "AGENT");
        assert_eq!(new_agent.date, now.to_rfc3339_opts(SecondsFormat::Millis, true));

        let result = submit_new_agent(&backend, &new_agent).await;
        let banner = state.finish_create_agent(result);

        assert_eq!(banner, Banner::success("Agent created successfully!"));
        assert_eq!(state.data.agents.len(), before + 1);
        assert!(!state.show_agent_form);
        assert!(!state.creating_agent);
        assert_eq!(state.agent_form.value("name"), "");
        assert_eq!(state.agent_form.value("gender"), "male");

        let calls = backend.calls();
        assert_eq!(&calls[calls.len() - 2..], ["create_agent", "list_agents"]);
    }

    #[tokio::test]
    async fn test_create_agent_failure_keeps_form_open() {
        let backend = FakeBackend::seeded();
        backend.fail(Op::CreateAgent);
        let mut state = AdminState::default();
        state.show_agent_form = true;

        fill_agent_form(&mut state, "neha@mail.com", "neha@insure.com");
        let new_agent = state.prepare_new_agent(Utc::now()).unwrap();
        let banner = state.finish_create_agent(submit_new_agent(&backend, &new_agent).await);

        assert_eq!(banner, Banner::error("Failed to create agent"));
        assert!(state.show_agent_form);
        assert_eq!(state.agent_form.value("name"), "Neha Joshi");
        // No refetch after a failed mutation
        assert_eq!(backend.calls(), vec!["create_agent".to_string()]);
    }

    #[tokio::test]
    async fn test_update_prefills_and_refetches() {
        let backend = FakeBackend::seeded();
        let mut state = AdminState::default();
        state.data.agents = reload_agents(&backend).await;

        let target = agent(json!({
            "agentId": 2,
            "name": "Bilal",
            "email": "bilal@mail.com",
            "aadharnumber": "999988887777",
            "phone": "9123456780",
            "address": "Hyderabad",
            "orgEmail": "bilal@insure.com",
            "date": "2024-01-10"
        }));
        state.open_update_form(&target);
        assert!(state.show_update_form);
        assert_eq!(state.update_form.value("contactInfo"), "bilal@mail.com");
        assert_eq!(state.update_form.value("gender"), "male");

        state.update_form.set("address", "Secunderabad");
        let (id, update) = state.prepare_update().unwrap();
        assert_eq!(id, AgentId("2".to_string()));
        assert_eq!(update.address, "Secunderabad");

        let banner = state.finish_update(submit_agent_update(&backend, &id, &update).await);
        assert_eq!(banner.message, "Agent updated successfully!");
        assert!(!state.show_update_form);
        assert!(state.selected_agent.is_none());
        assert!(backend.calls().ends_with(&["update_agent 2".to_string(), "list_agents".to_string()]));
    }

    #[test]
    fn test_update_without_id_is_rejected() {
        let mut state = AdminState::default();
        state.open_update_form(&agent(json!({
            "name": "No Id",
            "contactInfo": "noid@mail.com",
            "aadharnumber": "111122223333",
            "phone": "9000000000",
            "address": "Goa",
            "orgEmail": "noid@insure.com",
            "date": "2024-01-10"
        })));
        assert_eq!(state.prepare_update().unwrap_err().message, "Agent ID not found");
        assert!(state.show_update_form);
    }

    #[tokio::test]
    async fn test_create_policy_coerces_amounts() {
        let backend = FakeBackend::seeded();
        let mut state = AdminState::default();
        state.show_policy_form = true;
        fill_policy_form(&mut state);

        let new_policy = state.prepare_new_policy().unwrap();
        assert_eq!(new_policy.premium_amount, 1200.0);
        assert_eq!(new_policy.coverage_amount, 500000.5);

        let banner = state.finish_create_policy(submit_new_policy(&backend, &new_policy).await);
        assert_eq!(banner.message, "Policy created successfully!");
        assert!(state.data.policies.iter().any(|p| p.name.as_deref() == Some("Family Health")));
        assert!(!state.show_policy_form);
        assert_eq!(state.policy_form.value("premiumAmount"), "");
    }

    #[test]
    fn test_policy_amount_below_one_is_rejected() {
        let mut state = AdminState::default();
        fill_policy_form(&mut state);
        state.policy_form.set("premiumAmount", "0");

        assert_eq!(state.prepare_new_policy().unwrap_err().message, INVALID_FORM);
        assert_eq!(
            state.policy_error("premiumAmount").as_deref(),
            Some("Value must be greater than 0")
        );
        assert!(!state.creating_policy);
    }

    #[tokio::test]
    async fn test_delete_policy_reloads_only_catalog() {
        let backend = FakeBackend::seeded();
        let mut state = AdminState::default();
        state.data = load_collections(&backend).await;
        let before = state.data.policies.len();
        backend.clear_calls();

        state.request_delete(Some(PolicyId("p1".to_string())));
        assert_eq!(state.pending_delete.as_ref().unwrap().prompt(), "Delete policy p1?");

        let id = state.confirm_delete().unwrap();
        assert!(state.pending_delete.is_none());
        let banner = state.finish_delete(submit_policy_delete(&backend, &id).await);

        assert!(banner.is_none());
        assert_eq!(state.data.policies.len(), before - 1);
        assert_eq!(backend.calls(), vec!["delete_policy p1", "list_policies"]);
    }

    #[test]
    fn test_delete_without_id_aborts() {
        let mut state = AdminState::default();
        state.request_delete(None);
        assert_eq!(state.pending_delete.as_ref().unwrap().prompt(), "Delete policy unknown?");
        assert_eq!(state.confirm_delete().unwrap_err().message, "Policy ID is missing");

        state.request_delete(Some(PolicyId("9".to_string())));
        state.cancel_delete();
        assert!(state.pending_delete.is_none());
    }

    #[test]
    fn test_policy_filter_every_type_spelling() {
        let mut state = AdminState::default();
        state.data.policies = vec![
            policy(json!({ "name": "A", "policyType": "Health" })),
            policy(json!({ "name": "B", "policy_type": "Health" })),
            policy(json!({ "name": "C", "type": "Health" })),
            policy(json!({ "name": "D", "5": "Health" })),
            policy(json!({ "name": "E", "policyType": "Motor" })),
            policy(json!({ "name": "F" })),
        ];

        // No filter: the whole catalog
        assert_eq!(state.filtered_policies().len(), 6);

        state.policy_type_filter = "Health".to_string();
        let names: Vec<_> = state
            .filtered_policies()
            .iter()
            .filter_map(|p| p.name.as_deref())
            .collect();
        assert_eq!(names, ["A", "B", "C", "D"]);

        state.policy_type_filter = "Life".to_string();
        assert!(state.filtered_policies().is_empty());

        assert_eq!(state.policy_types(), ["Health", "Motor"]);
    }

    #[test]
    fn test_agent_search_is_case_insensitive() {
        let mut state = AdminState::default();
        state.data.agents = vec![
            agent(json!({ "name": "Priya Nair" })),
            agent(json!({ "name": "Arjun Rao" })),
            agent(json!({ "contactInfo": "nameless@mail.com" })),
        ];

        assert_eq!(state.filtered_agents().len(), 3);

        state.search = "PRI".to_string();
        let found = state.filtered_agents();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].display_name(), "Priya Nair");

        state.search = "r".to_string();
        assert_eq!(state.filtered_agents().len(), 2);
    }

    #[test]
    fn test_user_name_and_stats() {
        let mut state = AdminState::default();
        state.set_user(Some("Sunita Verma".to_string()));
        assert_eq!(state.admin_initials, "SV");

        state.set_user(None);
        assert_eq!(state.admin_name, "Sunita Verma");

        state.data.agents = vec![agent(json!({ "name": "x" }))];
        assert_eq!(state.stats().agents, 1);
        assert_eq!(state.stats().claims, 0);
    }
}

//! # HTTP backend: reqwest implementation of the service facade
//!
//! [`HttpBackend`] implements [`AuthService`] and [`AdminService`] against the
//! REST contract described by [`store::EndpointsConfig`]. It is cheap to clone
//! (the reqwest client is reference counted), so components clone it into
//! their async handlers freely.
//!
//! ## Conventions
//!
//! - List endpoints answer with a JSON array; an empty body or `null` is an
//!   empty list.
//! - Mutations ignore the response body; only the status matters.
//! - Login answers with a plain-text token, trimmed before it is returned.
//! - Any non-2xx status becomes [`ApiError::Status`] carrying the body text so
//!   the login screen can look for `"Invalid"` in it.
//! - When a bearer token is attached (see [`HttpBackend::with_token`]) every
//!   admin request sends `Authorization: Bearer <token>`.

use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use store::{ApiConfig, EndpointsConfig};

use crate::auth::{Credentials, LoginKind};
use crate::error::ApiError;
use crate::models::{Agent, AgentId, AgentUpdate, NewAgent, NewPolicy, Policy, PolicyId, PolicyLog, Record};
use crate::service::{AdminService, AuthService};

/// REST client for the insurance backend.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
    endpoints: EndpointsConfig,
    token: Option<String>,
}

impl HttpBackend {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            endpoints: config.endpoints.clone(),
            token: None,
        }
    }

    /// Attach (or drop) the bearer token sent with admin requests.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Collection URL with `id` appended as one percent-encoded segment.
    fn item_url(&self, path: &str, id: &str) -> String {
        let collection = self.url(path);
        let Ok(mut url) = Url::parse(&collection) else {
            return format!("{}/{}", collection.trim_end_matches('/'), id);
        };
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id);
        }
        url.to_string()
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);
        let response = self.authorize(self.client.get(&url)).send().await?;
        let body = ensure_success(response).await?.text().await?;
        decode_list(&body)
    }

    async fn send(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = self.authorize(request).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}

/// Turn a non-success response into [`ApiError::Status`].
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

/// Decode a list body; blank and `null` bodies are empty lists.
pub(crate) fn decode_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ApiError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let items: Option<Vec<T>> = serde_json::from_str(body)?;
    Ok(items.unwrap_or_default())
}

impl AuthService for HttpBackend {
    async fn login(&self, kind: LoginKind, credentials: &Credentials) -> Result<String, ApiError> {
        let path = match kind {
            LoginKind::Agent => &self.endpoints.agent_login,
            LoginKind::Customer => &self.endpoints.customer_login,
        };
        let url = self.url(path);
        tracing::debug!(email = %credentials.email, "POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(credentials)
            .send()
            .await?;
        let token = ensure_success(response).await?.text().await?;
        Ok(token.trim().to_string())
    }
}

impl AdminService for HttpBackend {
    async fn list_agents(&self) -> Result<Vec<Agent>, ApiError> {
        self.get_list(&self.endpoints.agents).await
    }

    async fn create_agent(&self, agent: &NewAgent) -> Result<(), ApiError> {
        let url = self.url(&self.endpoints.agents);
        tracing::debug!("POST {}", url);
        self.send(self.client.post(url).json(agent)).await
    }

    async fn update_agent(&self, id: &AgentId, agent: &AgentUpdate) -> Result<(), ApiError> {
        let url = self.item_url(&self.endpoints.agents, &id.0);
        tracing::debug!("PUT {}", url);
        self.send(self.client.put(url).json(agent)).await
    }

    async fn list_claims(&self) -> Result<Vec<Record>, ApiError> {
        self.get_list(&self.endpoints.claims).await
    }

    async fn list_customers(&self) -> Result<Vec<Record>, ApiError> {
        self.get_list(&self.endpoints.customers).await
    }

    async fn list_policies(&self) -> Result<Vec<Policy>, ApiError> {
        self.get_list(&self.endpoints.policy_catalog).await
    }

    async fn create_policy(&self, policy: &NewPolicy) -> Result<(), ApiError> {
        let url = self.url(&self.endpoints.policy_catalog);
        tracing::debug!("POST {}", url);
        self.send(self.client.post(url).json(policy)).await
    }

    async fn delete_policy(&self, id: &PolicyId) -> Result<(), ApiError> {
        let url = self.item_url(&self.endpoints.policy_catalog, &id.0);
        tracing::debug!("DELETE {}", url);
        self.send(self.client.delete(url)).await
    }

    async fn list_policy_logs(&self) -> Result<Vec<PolicyLog>, ApiError> {
        self.get_list(&self.endpoints.policy_logs).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_join_cleanly() {
        let backend = HttpBackend::new(&ApiConfig {
            base_url: "http://localhost:8763/".to_string(),
            endpoints: EndpointsConfig::default(),
        });
        assert_eq!(backend.base_url(), "http://localhost:8763");
        assert_eq!(backend.url("/admin/agents"), "http://localhost:8763/admin/agents");
        assert_eq!(
            backend.item_url("/admin/policylist/", "17"),
            "http://localhost:8763/admin/policylist/17"
        );
    }

    #[test]
    fn test_item_url_encodes_id() {
        let backend = HttpBackend::new(&ApiConfig {
            base_url: "http://localhost:8763".to_string(),
            endpoints: EndpointsConfig::default(),
        });
        assert_eq!(
            backend.item_url("/admin/agents", "a/b c?x"),
            "http://localhost:8763/admin/agents/a%2Fb%20c%3Fx"
        );
    }

    #[test]
    fn test_decode_list_tolerates_null_and_blank() {
        let empty: Vec<Record> = decode_list("").unwrap();
        assert!(empty.is_empty());

        let null: Vec<Record> = decode_list("null").unwrap();
        assert!(null.is_empty());

        let agents: Vec<Agent> = decode_list(r#"[{"id": 1, "name": "A"}, {"agentId": "b"}]"#).unwrap();
        assert_eq!(agents.len(), 2);
        assert_eq!(agents[1].id.as_ref().map(|id| id.0.as_str()), Some("b"));
    }

    #[test]
    fn test_decode_list_rejects_non_list() {
        let result: Result<Vec<Record>, ApiError> = decode_list(r#"{"error": "nope"}"#);
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}

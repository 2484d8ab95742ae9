//! HTTP planner backend client
//!
//! Implements the PlannerApi trait over the backend's JSON endpoints.
//! Calls are single-attempt with no timeout of their own: a failure
//! surfaces once and the session substitutes local fallbacks instead of
//! retrying.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use tripcatalog::Catalog;

use super::{ApiError, ChatReply, ChatRequest, PlanPayload, PlannerApi, Preferences};
use crate::config::ApiConfig;

/// HTTP client for the planner backend
pub struct HttpPlannerApi {
    base_url: String,
    http: Client,
}

impl HttpPlannerApi {
    /// Create a new client from configuration
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        debug!(base_url = %config.base_url, "from_config: called");
        let http = Client::builder().build().map_err(ApiError::Network)?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a path and return the raw body text
    async fn get_text(&self, path: &str) -> Result<String, ApiError> {
        debug!(%path, "get_text: called");
        let response = self.http.get(self.url(path)).send().await?;
        let response = check_status(response).await?;
        Ok(response.text().await?)
    }

    /// POST a JSON body and parse the JSON response
    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, ApiError> {
        debug!(%path, "post_json: called");
        let response = self
            .http
            .post(self.url(path))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

/// Convert non-2xx responses into status errors per the wire convention
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    debug!(status = status.as_u16(), "check_status: API error");
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(status.as_u16(), body))
}

#[async_trait]
impl PlannerApi for HttpPlannerApi {
    async fn health(&self) -> Result<(), ApiError> {
        debug!("health: called");
        self.get_text("/health").await.map(|_| ())
    }

    async fn fetch_catalog(&self) -> Result<Catalog, ApiError> {
        debug!("fetch_catalog: called");
        let feelings = self.get_text("/api/feeling-options").await?;
        let questions = self.get_text("/api/question-bank").await?;
        let blueprints = self.get_text("/api/destination-blueprints").await?;
        let activities = self.get_text("/api/core-activities").await?;
        let catalog = Catalog::from_json(&feelings, &questions, &blueprints, &activities)?;
        // Remote tables pass the same cross-reference checks as embedded ones
        catalog.validate()?;
        Ok(catalog)
    }

    async fn generate_itinerary(&self, preferences: &Preferences) -> Result<PlanPayload, ApiError> {
        debug!(destination = %preferences.destination, "generate_itinerary: called");
        let body = serde_json::json!({ "preferences": preferences });
        self.post_json("/api/itinerary", &body).await
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatReply, ApiError> {
        debug!(question_len = request.question.len(), "chat: called");
        let body = serde_json::to_value(&request)?;
        self.post_json("/api/chat", &body).await
    }
}

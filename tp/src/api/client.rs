//! PlannerApi trait definition

use async_trait::async_trait;
#[allow(unused_imports)]
use tracing::debug;

use tripcatalog::Catalog;

use super::{ApiError, ChatReply, ChatRequest, PlanPayload, Preferences};

/// Stateless planner backend client - each call is independent
///
/// This is the seam between the session engine and the backend. The
/// session never retries and never keeps a request in flight across
/// handler calls; a failed call surfaces once and local fallbacks take
/// over.
#[async_trait]
pub trait PlannerApi: Send + Sync {
    /// Probe the backend liveness endpoint
    async fn health(&self) -> Result<(), ApiError>;

    /// Fetch the four configuration tables and assemble a catalog
    ///
    /// The remote tables share their shape with the embedded ones, so
    /// either source produces the same `Catalog`.
    async fn fetch_catalog(&self) -> Result<Catalog, ApiError>;

    /// Request the enriched backend itinerary for the given preferences
    async fn generate_itinerary(&self, preferences: &Preferences) -> Result<PlanPayload, ApiError>;

    /// Relay one chat question along with its conversational context
    async fn chat(&self, request: ChatRequest) -> Result<ChatReply, ApiError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::debug;

    /// Mock planner backend for unit tests
    ///
    /// Queued outcomes are consumed in order per endpoint; an exhausted
    /// queue fails the call.
    pub struct MockPlannerApi {
        plans: Vec<Result<PlanPayload, (u16, String)>>,
        chats: Vec<Result<ChatReply, (u16, String)>>,
        plan_calls: AtomicUsize,
        chat_calls: AtomicUsize,
        healthy: bool,
    }

    impl MockPlannerApi {
        pub fn new() -> Self {
            debug!("MockPlannerApi::new: called");
            Self {
                plans: Vec::new(),
                chats: Vec::new(),
                plan_calls: AtomicUsize::new(0),
                chat_calls: AtomicUsize::new(0),
                healthy: true,
            }
        }

        pub fn with_plan(mut self, payload: PlanPayload) -> Self {
            self.plans.push(Ok(payload));
            self
        }

        pub fn with_plan_failure(mut self, status: u16, message: &str) -> Self {
            self.plans.push(Err((status, message.to_string())));
            self
        }

        pub fn with_chat(mut self, reply: ChatReply) -> Self {
            self.chats.push(Ok(reply));
            self
        }

        pub fn with_chat_failure(mut self, status: u16, message: &str) -> Self {
            self.chats.push(Err((status, message.to_string())));
            self
        }

        pub fn unhealthy(mut self) -> Self {
            self.healthy = false;
            self
        }

        pub fn plan_calls(&self) -> usize {
            self.plan_calls.load(Ordering::SeqCst)
        }

        pub fn chat_calls(&self) -> usize {
            self.chat_calls.load(Ordering::SeqCst)
        }
    }

    impl Default for MockPlannerApi {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl PlannerApi for MockPlannerApi {
        async fn health(&self) -> Result<(), ApiError> {
            debug!(healthy = self.healthy, "MockPlannerApi::health: called");
            if self.healthy {
                Ok(())
            } else {
                Err(ApiError::from_status(503, String::new()))
            }
        }

        async fn fetch_catalog(&self) -> Result<Catalog, ApiError> {
            debug!("MockPlannerApi::fetch_catalog: called");
            Ok(Catalog::embedded()?)
        }

        async fn generate_itinerary(
            &self,
            _preferences: &Preferences,
        ) -> Result<PlanPayload, ApiError> {
            debug!("MockPlannerApi::generate_itinerary: called");
            let idx = self.plan_calls.fetch_add(1, Ordering::SeqCst);
            match self.plans.get(idx).cloned() {
                Some(Ok(payload)) => Ok(payload),
                Some(Err((status, message))) => Err(ApiError::from_status(status, message)),
                None => {
                    debug!("MockPlannerApi::generate_itinerary: no more mock responses");
                    Err(ApiError::from_status(500, "No more mock responses".to_string()))
                }
            }
        }

        async fn chat(&self, _request: ChatRequest) -> Result<ChatReply, ApiError> {
            debug!("MockPlannerApi::chat: called");
            let idx = self.chat_calls.fetch_add(1, Ordering::SeqCst);
            match self.chats.get(idx).cloned() {
                Some(Ok(reply)) => Ok(reply),
                Some(Err((status, message))) => Err(ApiError::from_status(status, message)),
                None => {
                    debug!("MockPlannerApi::chat: no more mock responses");
                    Err(ApiError::from_status(500, "No more mock responses".to_string()))
                }
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_returns_queued_outcomes_in_order() {
            let client = MockPlannerApi::new()
                .with_chat(ChatReply {
                    chat_response: "First".to_string(),
                    chat_history: vec![],
                })
                .with_chat_failure(500, "backend down");

            let request = ChatRequest {
                preferences: Preferences::default(),
                itinerary: String::new(),
                chat_history: vec![],
                question: "hi".to_string(),
            };

            let reply = client.chat(request.clone()).await.unwrap();
            assert_eq!(reply.chat_response, "First");

            let err = client.chat(request).await.unwrap_err();
            assert_eq!(err.to_string(), "backend down");
            assert_eq!(client.chat_calls(), 2);
        }

        #[tokio::test]
        async fn test_mock_errors_when_exhausted() {
            let client = MockPlannerApi::new();
            let result = client.generate_itinerary(&Preferences::default()).await;
            assert!(result.is_err());
        }

        #[tokio::test]
        async fn test_mock_serves_embedded_catalog() {
            let client = MockPlannerApi::new();
            let catalog = client.fetch_catalog().await.unwrap();
            assert_eq!(catalog.feelings.len(), 6);
        }

        #[tokio::test]
        async fn test_mock_health_toggle() {
            assert!(MockPlannerApi::new().health().await.is_ok());
            let err = MockPlannerApi::new().unhealthy().health().await.unwrap_err();
            assert_eq!(err.status(), Some(503));
        }
    }
}

//! Planner backend client module
//!
//! Provides the backend API trait, its HTTP implementation, and the wire
//! types shared between them.

use std::sync::Arc;

use tracing::debug;

pub mod client;
mod error;
mod http;
mod types;

pub use client::PlannerApi;
pub use error::ApiError;
pub use http::HttpPlannerApi;
pub use types::{
    ChatReply, ChatRequest, ChatTurn, PlanPayload, Preferences, RemoteDay, RemoteItinerary,
    UsefulLink,
};

use crate::config::ApiConfig;

/// Create a planner backend client for the configured base URL
pub fn create_client(config: &ApiConfig) -> Result<Arc<dyn PlannerApi>, ApiError> {
    debug!(base_url = %config.base_url, "create_client: called");
    Ok(Arc::new(HttpPlannerApi::from_config(config)?))
}

//! Chat relay
//!
//! Forwards user text to the backend collaborator and guarantees exactly
//! one assistant reply per message: the backend's text when it answers,
//! a keyword-matched canned reply when it does not.

use tracing::debug;

use crate::api::ChatRequest;
use crate::replies::{ReplyContext, fallback_template};

use super::PlanSession;

/// Shown when a chat failure carries no message of its own
const CHAT_ERROR_FALLBACK: &str = "Unable to get a response right now.";

impl PlanSession {
    /// Relay one user message through the chat endpoint
    ///
    /// Blank input is ignored. Otherwise the user message lands in the
    /// log immediately, and exactly one assistant reply follows: the
    /// backend's on success, a canned fallback on failure or when the
    /// backend answers with empty text. Failures also surface through
    /// `last_error`.
    pub async fn send_chat(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        debug!(len = trimmed.len(), "PlanSession::send_chat: called");
        if trimmed.is_empty() {
            return false;
        }

        self.push_user(trimmed.to_string());
        self.error = None;

        let destination = self
            .itinerary
            .as_ref()
            .map(|plan| plan.destination.clone());
        let request = ChatRequest {
            preferences: self.preferences_payload(destination.as_deref()),
            itinerary: self.itinerary_summary(),
            chat_history: self.enrichment.chat_history.clone(),
            question: trimmed.to_string(),
        };

        match self.client.chat(request).await {
            Ok(reply) => {
                debug!(
                    reply_len = reply.chat_response.len(),
                    history = reply.chat_history.len(),
                    "PlanSession::send_chat: backend replied"
                );
                let text = if reply.chat_response.trim().is_empty() {
                    self.local_reply(trimmed)
                } else {
                    reply.chat_response
                };
                self.enrichment.apply_chat_history(reply.chat_history);
                self.push_assistant(text);
            }
            Err(err) => {
                debug!("PlanSession::send_chat: backend failed: {err}");
                let message = err.to_string();
                self.error = Some(if message.is_empty() {
                    CHAT_ERROR_FALLBACK.to_string()
                } else {
                    message
                });
                let fallback = self.local_reply(trimmed);
                self.push_assistant(fallback);
            }
        }
        true
    }

    /// Canned reply chosen by keyword matching over the user's text
    fn local_reply(&self, text: &str) -> String {
        let template = fallback_template(text, &self.feelings);
        debug!(%template, "PlanSession::local_reply: chose template");
        self.canned(template, &ReplyContext::empty())
    }

    /// Textual itinerary context for the backend: the enriched summary
    /// when present, else the local overview, else empty
    pub(super) fn itinerary_summary(&self) -> String {
        if !self.enrichment.itinerary_text.is_empty() {
            return self.enrichment.itinerary_text.clone();
        }
        self.itinerary
            .as_ref()
            .map(|plan| plan.overview.clone())
            .unwrap_or_default()
    }
}

//! Embedded reply templates
//!
//! Compiled into the binary from .pmt files at build time.

use tracing::debug;

/// Greeting shown when a session starts or resets
pub const WELCOME: &str = include_str!("../../replies/welcome.pmt");

/// Acknowledgment after a feeling is added
pub const FEELING_ADDED: &str = include_str!("../../replies/feeling-added.pmt");

/// Acknowledgment after a question is answered
pub const ANSWER_LOGGED: &str = include_str!("../../replies/answer-logged.pmt");

/// Announcement once the local plan is built
pub const PLAN_READY: &str = include_str!("../../replies/plan-ready.pmt");

/// Keyword fallbacks used when the chat service is unavailable
pub const FALLBACK_BEACH: &str = include_str!("../../replies/fallback-beach.pmt");
pub const FALLBACK_BUDGET: &str = include_str!("../../replies/fallback-budget.pmt");
pub const FALLBACK_FAMILY: &str = include_str!("../../replies/fallback-family.pmt");
pub const FALLBACK_ADVENTURE: &str = include_str!("../../replies/fallback-adventure.pmt");
pub const FALLBACK_GENERIC: &str = include_str!("../../replies/fallback-generic.pmt");

/// Get the embedded reply template by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    debug!(%name, "get_embedded: called");
    match name {
        "welcome" => Some(WELCOME),
        "feeling-added" => Some(FEELING_ADDED),
        "answer-logged" => Some(ANSWER_LOGGED),
        "plan-ready" => Some(PLAN_READY),
        "fallback-beach" => Some(FALLBACK_BEACH),
        "fallback-budget" => Some(FALLBACK_BUDGET),
        "fallback-family" => Some(FALLBACK_FAMILY),
        "fallback-adventure" => Some(FALLBACK_ADVENTURE),
        "fallback-generic" => Some(FALLBACK_GENERIC),
        _ => {
            debug!("get_embedded: no match found");
            None
        }
    }
}

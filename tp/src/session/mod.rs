//! Planning session engine
//!
//! One `PlanSession` per conversation. `core` owns the state machine
//! (feelings, answers, the question cursor, chat log), `chat` relays
//! messages to the backend with local fallbacks, and `generate` builds
//! the local plan and merges backend enrichment.

mod chat;
mod core;
mod generate;

pub use self::core::{PlanSession, Step};

//! Domain types for TripPlanner
//!
//! Core display-state types: chat messages, the day-by-day plan, and the
//! itinerary aggregate with its enrichment state.

mod itinerary;
mod message;
mod plan;

pub use itinerary::{Enrichment, Itinerary, PlanStage};
pub use message::{ChatMessage, Sender};
pub use plan::{Day, ScheduledActivity, TimeBlock};

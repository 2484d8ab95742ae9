//! Trip Planner - Feelings-First Itinerary Builder
//!
//! Trip Planner co-creates a three-day travel itinerary from how the
//! traveler wants the trip to feel. Feelings come before logistics: the
//! session starts with feeling tags, adapts its question bank to them,
//! and only then scores destination blueprints and schedules days.
//!
//! # Core Concepts
//!
//! - **Feelings First**: Tags drive question visibility, destination
//!   scoring, and the activity rotation
//! - **Draft Then Enrich**: The plan is built locally and shown at once;
//!   backend content only ever adds to it
//! - **Exactly One Reply**: Every chat turn gets one assistant message,
//!   canned fallbacks included
//! - **Flat Export**: The schedule flattens to day-major spreadsheet rows
//!
//! # Modules
//!
//! - [`session`] - Planning session state machine
//! - [`planner`] - Deterministic blueprint scoring and day scheduling
//! - [`replies`] - Canned reply templates with override chain
//! - [`api`] - Backend client for enrichment and chat relay
//! - [`export`] - Spreadsheet row flattening and CSV rendering
//! - [`repl`] - Interactive readline session
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod export;
pub mod planner;
pub mod repl;
pub mod replies;
pub mod session;

// Re-export commonly used types
pub use api::{
    ApiError, ChatReply, ChatRequest, ChatTurn, HttpPlannerApi, PlanPayload, PlannerApi,
    Preferences, create_client,
};
pub use cli::{Cli, Command, OutputFormat};
pub use config::{ApiConfig, CatalogConfig, CatalogSource, Config};
pub use domain::{ChatMessage, Day, Enrichment, Itinerary, PlanStage, ScheduledActivity, Sender, TimeBlock};
pub use export::{ExportRow, SpreadsheetExport, flatten, to_csv};
pub use planner::{build_daily_plan, map_search_link, move_activity, select_blueprint};
pub use repl::ReplSession;
pub use replies::{ReplyContext, ReplyLoader, fallback_template};
pub use session::{PlanSession, Step};

//! Interactive REPL for the trip planner
//!
//! Wraps a planning session in a readline loop with slash commands for
//! the structured steps and free-text relay to the concierge chat.

mod session;

pub use session::ReplSession;

use std::sync::Arc;

use eyre::Result;

use tripcatalog::Catalog;

use crate::api::PlannerApi;
use crate::replies::ReplyLoader;

/// Run the interactive REPL
///
/// This is the main entry point for bare `tp`.
pub async fn run_interactive(catalog: Catalog, client: Arc<dyn PlannerApi>) -> Result<()> {
    // Reply templates may be overridden from the working directory
    let replies = match std::env::current_dir() {
        Ok(dir) => ReplyLoader::new(dir),
        Err(_) => ReplyLoader::embedded_only(),
    };

    let mut session = ReplSession::new(catalog, client, replies);
    session.run().await
}

//! TripCatalog - static travel planning tables
//!
//! Holds the four configuration tables the planner works from: feeling
//! options, the adaptive question bank, destination blueprints, and
//! activity pools keyed by feeling. The tables ship embedded in the
//! binary; the same types deserialize the remote configuration endpoints,
//! which serve identical shapes.
//!
//! # Tables
//!
//! ```text
//! data/
//! ├── feelings.json      # id, label, description, color, gif, moodImages
//! ├── questions.json     # id, icon, question, kind, options, dependsOn
//! ├── blueprints.json    # id, destination, feelings, climate, budget, ...
//! └── activities.json    # feeling id -> [{title, detail, mapQuery}]
//! ```
//!
//! # Example
//!
//! ```ignore
//! use tripcatalog::Catalog;
//!
//! let catalog = Catalog::embedded()?;
//! catalog.validate()?;
//! let pool = catalog.activities_for("adventure");
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod embedded;
mod types;

pub use catalog::{Catalog, CatalogError};
pub use types::{
    Activity, DependsOn, DestinationBlueprint, FeelingOption, Question, QuestionKind,
};

//! Reply Template System
//!
//! Loads and renders `.pmt` (reply template) files for the assistant's
//! canned messages: the greeting, tagging and answer acknowledgments,
//! the plan announcement, and the offline chat fallbacks.
//!
//! Template loading chain:
//! 1. `.tripplanner/replies/{name}.pmt` (user override)
//! 2. `replies/{name}.pmt` (repo default)
//! 3. Embedded fallback in code
//!
//! Templates use Handlebars syntax for variable substitution.

pub mod embedded;
mod loader;

pub use loader::{ReplyContext, ReplyLoader, fallback_template};

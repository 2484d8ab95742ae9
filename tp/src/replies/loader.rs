//! Reply loader
//!
//! Loads assistant reply templates from files or falls back to embedded
//! defaults.

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use super::embedded;

/// Pick the fallback template for a user message
///
/// Keyword checks run in order against the lowercased text; the adventure
/// reply fires only when the "adventure" feeling is selected.
pub fn fallback_template(text: &str, feelings: &[String]) -> &'static str {
    debug!(text_len = text.len(), "fallback_template: called");
    let lower = text.to_lowercase();
    if lower.contains("beach") {
        return "fallback-beach";
    }
    if lower.contains("budget") {
        return "fallback-budget";
    }
    if lower.contains("family") || lower.contains("kids") {
        return "fallback-family";
    }
    if feelings.iter().any(|feeling| feeling == "adventure") {
        return "fallback-adventure";
    }
    "fallback-generic"
}

/// Context for rendering reply templates
///
/// One struct covers every template; unused fields stay empty.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReplyContext {
    /// Feeling label, lowercased
    pub label: String,
    /// Feeling description, lowercased
    pub description: String,
    /// Question text with its question mark stripped, lowercased
    pub question: String,
    /// The recorded answer, verbatim
    pub value: String,
    /// Destination for the plan announcement
    pub destination: String,
}

impl ReplyContext {
    /// Empty context for templates without placeholders
    pub fn empty() -> Self {
        Self::default()
    }

    /// Context for the feeling-added acknowledgment
    pub fn feeling_added(label: &str, description: &str) -> Self {
        debug!(%label, "ReplyContext::feeling_added: called");
        Self {
            label: label.to_lowercase(),
            description: description.to_lowercase(),
            ..Self::default()
        }
    }

    /// Context for the answer-logged acknowledgment
    pub fn answer_logged(question: &str, value: &str) -> Self {
        debug!(%question, "ReplyContext::answer_logged: called");
        Self {
            question: question.replacen('?', "", 1).to_lowercase(),
            value: value.to_string(),
            ..Self::default()
        }
    }

    /// Context for the plan announcement
    pub fn plan_ready(destination: &str) -> Self {
        debug!(%destination, "ReplyContext::plan_ready: called");
        Self {
            destination: destination.to_string(),
            ..Self::default()
        }
    }
}

/// Loads and renders reply templates
pub struct ReplyLoader {
    /// Handlebars template engine
    hbs: Handlebars<'static>,
    /// User override directory (`.tripplanner/replies/`)
    user_dir: Option<PathBuf>,
    /// Repo default directory (`replies/`)
    repo_dir: Option<PathBuf>,
}

impl ReplyLoader {
    /// Create a new reply loader rooted at the given directory
    pub fn new(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        debug!(?base, "ReplyLoader::new: called");
        let user_dir = base.join(".tripplanner/replies");
        let repo_dir = base.join("replies");

        let mut hbs = Handlebars::new();
        // Replies render to the terminal, not HTML
        hbs.register_escape_fn(handlebars::no_escape);

        Self {
            user_dir: user_dir.exists().then_some(user_dir),
            repo_dir: repo_dir.exists().then_some(repo_dir),
            hbs,
        }
    }

    /// Create a loader that only uses embedded replies
    pub fn embedded_only() -> Self {
        debug!("ReplyLoader::embedded_only: called");
        let mut hbs = Handlebars::new();
        hbs.register_escape_fn(handlebars::no_escape);
        Self {
            hbs,
            user_dir: None,
            repo_dir: None,
        }
    }

    /// Load a template by name
    ///
    /// Checks in order:
    /// 1. User override: `.tripplanner/replies/{name}.pmt`
    /// 2. Repo default: `replies/{name}.pmt`
    /// 3. Embedded fallback
    fn load_template(&self, name: &str) -> Result<String> {
        debug!(%name, "ReplyLoader::load_template: called");
        if let Some(ref user_dir) = self.user_dir {
            let path = user_dir.join(format!("{}.pmt", name));
            if path.exists() {
                debug!(?path, "ReplyLoader::load_template: found in user override");
                return std::fs::read_to_string(&path)
                    .map_err(|e| eyre!("Failed to read user reply {}: {}", path.display(), e));
            }
        }

        if let Some(ref repo_dir) = self.repo_dir {
            let path = repo_dir.join(format!("{}.pmt", name));
            if path.exists() {
                debug!(?path, "ReplyLoader::load_template: found in repo");
                return std::fs::read_to_string(&path)
                    .map_err(|e| eyre!("Failed to read repo reply {}: {}", path.display(), e));
            }
        }

        if let Some(content) = embedded::get_embedded(name) {
            debug!(%name, "ReplyLoader::load_template: found in embedded");
            return Ok(content.to_string());
        }

        debug!(%name, "ReplyLoader::load_template: not found anywhere");
        Err(eyre!("Reply template not found: {}", name))
    }

    /// Render a template with the given context
    pub fn render(&self, template_name: &str, context: &ReplyContext) -> Result<String> {
        debug!(%template_name, "ReplyLoader::render: called");
        let template = self.load_template(template_name)?;
        let rendered = self
            .hbs
            .render_template(&template, context)
            .map_err(|e| eyre!("Failed to render reply {}: {}", template_name, e))?;
        // Template files end with a newline
        Ok(rendered.trim_end().to_string())
    }
}

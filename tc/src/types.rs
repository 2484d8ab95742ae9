//! Catalog row types - the four static tables on their wire format
//!
//! Field names are camelCase on the wire (the configuration endpoints and
//! the embedded JSON share one shape); serde renames bridge to snake_case.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A mood tag the user can select to steer the plan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeelingOption {
    pub id: String,
    pub label: String,
    pub description: String,
    pub color: String,
    pub gif: String,
    #[serde(default)]
    pub mood_images: Vec<String>,
}

/// How a question collects its answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Choice,
    Text,
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionKind::Choice => write!(f, "choice"),
            QuestionKind::Text => write!(f, "text"),
        }
    }
}

/// Declarative visibility rule for a question
///
/// `field == "feelings"` gates on the selected feeling set; any other
/// field gates on a case-insensitive match against that recorded answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependsOn {
    pub field: String,
    pub value: String,
}

impl DependsOn {
    pub fn matches(&self, feelings: &[String], answers: &HashMap<String, String>) -> bool {
        if self.field == "feelings" {
            return feelings.iter().any(|id| id == &self.value);
        }
        answers
            .get(&self.field)
            .is_some_and(|answer| answer.eq_ignore_ascii_case(&self.value))
    }
}

/// One entry of the adaptive question bank
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub icon: String,
    pub question: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helper: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<DependsOn>,
}

impl Question {
    /// Active iff the visibility rule passes (questions without a rule
    /// are always active)
    pub fn is_active(&self, feelings: &[String], answers: &HashMap<String, String>) -> bool {
        match &self.depends_on {
            Some(rule) => rule.matches(feelings, answers),
            None => true,
        }
    }
}

/// A candidate destination profile scored against the session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationBlueprint {
    pub id: String,
    pub destination: String,
    pub feelings: Vec<String>,
    pub climate: String,
    pub budget: String,
    pub description: String,
    pub map_anchor: String,
    pub highlight: String,
}

/// One candidate activity inside a feeling's pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub title: String,
    pub detail: String,
    pub map_query: String,
}

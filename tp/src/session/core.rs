//! Session state
//!
//! `PlanSession` owns everything a planning conversation accumulates:
//! tagged feelings, recorded answers, the question cursor, the chat log,
//! and the generated itinerary with its backend enrichment. All mutation
//! goes through `&mut self`, so a session never races itself.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use tripcatalog::{Catalog, Question};

use crate::api::{PlannerApi, Preferences};
use crate::domain::{ChatMessage, Enrichment, Itinerary};
use crate::planner;
use crate::replies::{ReplyContext, ReplyLoader, embedded};

/// One entry of the guided progress rail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Stable step id
    pub id: &'static str,
    /// Display label
    pub label: &'static str,
    /// Whether the step's goal is met
    pub complete: bool,
}

/// A single planning conversation
pub struct PlanSession {
    /// Static planning data
    pub(super) catalog: Catalog,
    /// Backend client
    pub(super) client: Arc<dyn PlannerApi>,
    /// Canned reply templates
    pub(super) replies: ReplyLoader,

    /// Feeling ids in selection order
    pub(super) feelings: Vec<String>,
    /// Recorded answers keyed by question id
    pub(super) answers: HashMap<String, String>,
    /// Cursor into the active question list
    pub(super) question_index: usize,
    /// Append-only chat log
    pub(super) messages: Vec<ChatMessage>,
    /// Local plan, present after generation
    pub(super) itinerary: Option<Itinerary>,
    /// Supplementary backend data
    pub(super) enrichment: Enrichment,
    /// Last surfaced error, cleared on the next attempt
    pub(super) error: Option<String>,
}

impl PlanSession {
    /// Create a session seeded with the assistant greeting
    pub fn new(catalog: Catalog, client: Arc<dyn PlannerApi>, replies: ReplyLoader) -> Self {
        debug!(
            feelings = catalog.feelings.len(),
            questions = catalog.questions.len(),
            "PlanSession::new: called"
        );
        let mut session = Self {
            catalog,
            client,
            replies,
            feelings: Vec::new(),
            answers: HashMap::new(),
            question_index: 0,
            messages: Vec::new(),
            itinerary: None,
            enrichment: Enrichment::default(),
            error: None,
        };
        let welcome = session.canned("welcome", &ReplyContext::empty());
        session.push_assistant(welcome);
        session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn feelings(&self) -> &[String] {
        &self.feelings
    }

    pub fn answers(&self) -> &HashMap<String, String> {
        &self.answers
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn itinerary(&self) -> Option<&Itinerary> {
        self.itinerary.as_ref()
    }

    pub fn enrichment(&self) -> &Enrichment {
        &self.enrichment
    }

    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Toggle a feeling tag
    ///
    /// Returns `Some(true)` when added, `Some(false)` when removed, and
    /// `None` for an id the catalog does not know. Adding appends an
    /// acknowledgment message; removing is silent. Either way the question
    /// cursor is re-clamped because dependent questions may have appeared
    /// or vanished.
    pub fn toggle_feeling(&mut self, feeling_id: &str) -> Option<bool> {
        debug!(%feeling_id, "PlanSession::toggle_feeling: called");
        let option = self.catalog.feeling(feeling_id)?;
        let label = option.label.clone();
        let description = option.description.clone();

        if let Some(position) = self.feelings.iter().position(|id| id == feeling_id) {
            debug!(%feeling_id, "PlanSession::toggle_feeling: removing");
            self.feelings.remove(position);
            self.clamp_cursor();
            return Some(false);
        }

        debug!(%feeling_id, "PlanSession::toggle_feeling: adding");
        self.feelings.push(feeling_id.to_string());
        let reply = self.canned(
            "feeling-added",
            &ReplyContext::feeling_added(&label, &description),
        );
        self.push_assistant(reply);
        self.clamp_cursor();
        Some(true)
    }

    /// Questions whose dependencies hold against the current selection,
    /// in bank order
    pub fn active_questions(&self) -> Vec<&Question> {
        self.catalog
            .questions
            .iter()
            .filter(|question| question.is_active(&self.feelings, &self.answers))
            .collect()
    }

    /// The question under the cursor, if any remain
    pub fn current_question(&self) -> Option<&Question> {
        self.active_questions().get(self.question_index).copied()
    }

    /// Record an answer for the current question and advance the cursor
    ///
    /// Empty input and a missing current question are both no-ops.
    pub fn answer_current_question(&mut self, value: &str) -> bool {
        let trimmed = value.trim();
        debug!(len = trimmed.len(), "PlanSession::answer_current_question: called");
        if trimmed.is_empty() {
            return false;
        }
        let Some(question) = self.current_question() else {
            debug!("PlanSession::answer_current_question: no question pending");
            return false;
        };
        let id = question.id.clone();
        let prompt = question.question.clone();

        self.answers.insert(id, trimmed.to_string());
        self.question_index += 1;
        let reply = self.canned(
            "answer-logged",
            &ReplyContext::answer_logged(&prompt, trimmed),
        );
        self.push_assistant(reply);
        true
    }

    /// Record an answer directly by question id, without moving the cursor
    ///
    /// Batch entry point; the interactive flow goes through
    /// `answer_current_question`. Unknown question ids are rejected.
    pub fn record_answer(&mut self, question_id: &str, value: &str) -> bool {
        debug!(%question_id, "PlanSession::record_answer: called");
        let trimmed = value.trim();
        if trimmed.is_empty() || self.catalog.question(question_id).is_none() {
            return false;
        }
        self.answers
            .insert(question_id.to_string(), trimmed.to_string());
        true
    }

    /// Advance past the current question without recording an answer
    pub fn skip_current_question(&mut self) -> bool {
        debug!(index = self.question_index, "PlanSession::skip_current_question: called");
        if self.current_question().is_none() {
            return false;
        }
        self.question_index += 1;
        true
    }

    /// Ready once at least one feeling is tagged and no active question
    /// remains under the cursor
    pub fn is_ready(&self) -> bool {
        !self.feelings.is_empty() && self.current_question().is_none()
    }

    /// Preference summary chips, in display order
    pub fn chips(&self) -> Vec<String> {
        let mut chips = Vec::new();
        if !self.feelings.is_empty() {
            chips.push(format!("{} vibe tags selected", self.feelings.len()));
        }
        if let Some(climate) = self.answers.get("climate") {
            chips.push(format!("{climate} weather"));
        }
        if let Some(budget) = self.answers.get("budget") {
            chips.push(format!("{budget} budget"));
        }
        if let Some(destination) = self.answers.get("destination") {
            chips.push(format!("Near {destination}"));
        }
        chips
    }

    /// Progress rail: feelings tagged, context gathered, plan generated
    pub fn steps(&self) -> Vec<Step> {
        let active = self.active_questions().len();
        vec![
            Step {
                id: "feel",
                label: "Feelings",
                complete: !self.feelings.is_empty(),
            },
            Step {
                id: "context",
                label: "Context",
                complete: active > 0 && self.question_index >= active,
            },
            Step {
                id: "plan",
                label: "Itinerary",
                complete: self.itinerary.is_some(),
            },
        ]
    }

    /// Move an activity within one day of the generated plan
    ///
    /// Returns false when no plan exists or the move falls out of bounds.
    pub fn move_activity(
        &mut self,
        day_index: usize,
        activity_index: usize,
        direction: i32,
    ) -> bool {
        debug!(
            day_index,
            activity_index, direction, "PlanSession::move_activity: called"
        );
        let Some(itinerary) = self.itinerary.as_mut() else {
            debug!("PlanSession::move_activity: no plan yet");
            return false;
        };
        match planner::move_activity(&itinerary.days, day_index, activity_index, direction) {
            Some(days) => {
                itinerary.days = days;
                true
            }
            None => false,
        }
    }

    /// Restore the session to its initial state, keeping catalog and client
    pub fn reset(&mut self) {
        debug!("PlanSession::reset: called");
        self.feelings.clear();
        self.answers.clear();
        self.question_index = 0;
        self.itinerary = None;
        self.enrichment = Enrichment::default();
        self.error = None;
        self.messages.clear();
        let welcome = self.canned("welcome", &ReplyContext::empty());
        self.push_assistant(welcome);
    }

    /// Clamp the cursor when the active list shrinks under it
    pub(super) fn clamp_cursor(&mut self) {
        let active = self.active_questions().len();
        if self.question_index > active {
            debug!(
                from = self.question_index,
                to = active,
                "PlanSession::clamp_cursor: clamping"
            );
            self.question_index = active;
        }
    }

    /// Render a canned reply, falling back to the generic acknowledgment
    /// if a user-supplied template fails to render
    pub(super) fn canned(&self, template: &str, context: &ReplyContext) -> String {
        match self.replies.render(template, context) {
            Ok(text) => text,
            Err(err) => {
                warn!(%template, "Canned reply failed to render: {err}");
                embedded::FALLBACK_GENERIC.trim_end().to_string()
            }
        }
    }

    pub(super) fn push_assistant(&mut self, text: String) {
        self.messages.push(ChatMessage::assistant(text));
    }

    pub(super) fn push_user(&mut self, text: String) {
        self.messages.push(ChatMessage::user(text));
    }

    /// Preference payload sent to the backend
    ///
    /// Unanswered fields serialize as empty strings; the raw answers ride
    /// along untouched.
    pub(super) fn preferences_payload(&self, destination_override: Option<&str>) -> Preferences {
        let answer = |key: &str| self.answers.get(key).cloned().unwrap_or_default();
        let destination = destination_override
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| answer("destination"));
        Preferences {
            destination,
            travel_dates: answer("travelDates"),
            climate: answer("climate"),
            pace: answer("pace"),
            kid_friendly: answer("kidFriendly"),
            mobility: answer("mobility"),
            budget_type: answer("budget"),
            goal: answer("goal"),
            feelings: self.feelings.clone(),
            raw_answers: self.answers.clone(),
        }
    }
}

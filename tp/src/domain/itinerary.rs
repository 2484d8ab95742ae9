//! Itinerary aggregate and its enrichment state

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::{ChatTurn, PlanPayload, UsefulLink};
use crate::domain::plan::Day;

/// Lifecycle stage of a generated itinerary
///
/// A plan is shown immediately from local data (`Draft`) and upgraded in
/// place once the backend's supplementary content arrives (`Enriched`).
/// The day-by-day plan itself never changes between the two stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlanStage {
    #[default]
    Draft,
    Enriched,
}

impl std::fmt::Display for PlanStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanStage::Draft => write!(f, "draft"),
            PlanStage::Enriched => write!(f, "enriched"),
        }
    }
}

/// A generated itinerary as shown to the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    /// Final destination name
    pub destination: String,

    /// One-line plan summary
    pub overview: String,

    /// Blueprint description
    pub description: String,

    /// Header gif url
    pub gif: String,

    /// Map anchor for the destination
    pub map_anchor: String,

    /// Blueprint highlight text
    pub highlight: String,

    /// Mood image urls
    pub mood_images: Vec<String>,

    /// Preference summary chips at generation time
    pub chips: Vec<String>,

    /// The day-by-day plan
    pub days: Vec<Day>,

    /// Draft until backend enrichment lands
    pub stage: PlanStage,
}

impl Itinerary {
    /// Mark the itinerary enriched once supplementary content arrived
    pub fn set_enriched(&mut self) {
        debug!("Itinerary::set_enriched: called");
        self.stage = PlanStage::Enriched;
    }

    pub fn is_enriched(&self) -> bool {
        self.stage == PlanStage::Enriched
    }
}

/// Supplementary backend content displayed alongside the local plan
///
/// Kept separate from [`Itinerary`] because chat history accumulates
/// before any itinerary exists. The merge rule is one-directional:
/// backend payloads overwrite these fields and never the day plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Enrichment {
    /// Backend's textual itinerary
    pub itinerary_text: String,

    /// Free-form activity suggestions
    pub activity_suggestions: String,

    /// Suggested links
    pub useful_links: Vec<UsefulLink>,

    /// Weather forecast text
    pub weather_forecast: String,

    /// Packing list text
    pub packing_list: String,

    /// Food and culture notes
    pub food_culture_info: String,

    /// Conversation history as the backend tracks it
    pub chat_history: Vec<ChatTurn>,

    /// Backend warning, e.g. degraded generation
    pub warning: Option<String>,
}

impl Enrichment {
    /// Overwrite the supplementary fields from a plan payload
    pub fn apply_plan(&mut self, payload: &PlanPayload) {
        debug!(
            links = payload.useful_links.len(),
            history = payload.chat_history.len(),
            "Enrichment::apply_plan: called"
        );
        self.itinerary_text = payload.itinerary.text.clone();
        self.activity_suggestions = payload.activity_suggestions.clone();
        self.useful_links = payload.useful_links.clone();
        self.weather_forecast = payload.weather_forecast.clone();
        self.packing_list = payload.packing_list.clone();
        self.food_culture_info = payload.food_culture_info.clone();
        self.chat_history = payload.chat_history.clone();
        self.warning = payload.warning.clone();
    }

    /// Replace the stored chat history, keeping the old one when the
    /// backend returned nothing
    pub fn apply_chat_history(&mut self, history: Vec<ChatTurn>) {
        debug!(turns = history.len(), "Enrichment::apply_chat_history: called");
        if !history.is_empty() {
            self.chat_history = history;
        }
    }
}

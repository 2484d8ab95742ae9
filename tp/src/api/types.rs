//! Backend request/response types
//!
//! These model the planner backend's JSON wire format. Response fields are
//! all optional on the wire, so every payload derives `Default` and parses
//! with missing members.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Accumulated user preferences sent to the backend
///
/// Key casing is part of the wire contract and intentionally mixed:
/// `travelDates`/`kidFriendly` are camelCase while `budget_type` and
/// `raw_answers` are snake_case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub destination: String,
    #[serde(rename = "travelDates")]
    pub travel_dates: String,
    pub climate: String,
    pub pace: String,
    #[serde(rename = "kidFriendly")]
    pub kid_friendly: String,
    pub mobility: String,
    pub budget_type: String,
    pub goal: String,
    pub feelings: Vec<String>,
    pub raw_answers: HashMap<String, String>,
}

/// One prior conversation turn as the backend stores it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

impl ChatTurn {
    /// Create a user turn
    pub fn user(content: impl Into<String>) -> Self {
        debug!("ChatTurn::user: called");
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create an assistant turn
    pub fn assistant(content: impl Into<String>) -> Self {
        debug!("ChatTurn::assistant: called");
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for the chat endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub preferences: Preferences,
    pub itinerary: String,
    pub chat_history: Vec<ChatTurn>,
    pub question: String,
}

/// Response of the chat endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatReply {
    pub chat_response: String,
    pub chat_history: Vec<ChatTurn>,
}

/// A day entry inside the backend's textual itinerary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteDay {
    pub title: String,
    pub activities: Vec<String>,
}

/// The backend's textual itinerary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteItinerary {
    pub text: String,
    pub days: Vec<RemoteDay>,
}

/// A link suggestion from the backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UsefulLink {
    pub title: String,
    pub url: String,
}

/// Response of the itinerary endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanPayload {
    pub preferences_text: String,
    pub preferences: Preferences,
    pub itinerary: RemoteItinerary,
    pub activity_suggestions: String,
    pub useful_links: Vec<UsefulLink>,
    pub weather_forecast: String,
    pub packing_list: String,
    pub food_culture_info: String,
    pub chat_history: Vec<ChatTurn>,
    pub warning: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_wire_keys() {
        let preferences = Preferences {
            destination: "Ponta Delgada, Portugal".to_string(),
            travel_dates: "early June".to_string(),
            kid_friendly: "Yes, little ones along".to_string(),
            budget_type: "Budget-friendly".to_string(),
            feelings: vec!["adventure".to_string()],
            ..Default::default()
        };

        let wire = serde_json::to_value(&preferences).unwrap();
        assert_eq!(wire["travelDates"], "early June");
        assert_eq!(wire["kidFriendly"], "Yes, little ones along");
        assert_eq!(wire["budget_type"], "Budget-friendly");
        assert!(wire.get("travel_dates").is_none());
    }

    #[test]
    fn test_plan_payload_parses_with_missing_fields() {
        let payload: PlanPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.weather_forecast.is_empty());
        assert!(payload.itinerary.days.is_empty());
        assert!(payload.warning.is_none());
    }

    #[test]
    fn test_plan_payload_parses_partial_response() {
        let payload: PlanPayload = serde_json::from_value(serde_json::json!({
            "itinerary": {"text": "Day 1: arrive", "days": [{"title": "Day 1", "activities": ["Arrive", "Dinner"]}]},
            "weather_forecast": "Mild, chance of rain",
            "warning": "LLM unavailable, using canned plan"
        }))
        .unwrap();
        assert_eq!(payload.itinerary.days.len(), 1);
        assert_eq!(payload.itinerary.days[0].activities.len(), 2);
        assert_eq!(payload.warning.as_deref(), Some("LLM unavailable, using canned plan"));
        assert!(payload.packing_list.is_empty());
    }

    #[test]
    fn test_chat_turn_constructors() {
        let turn = ChatTurn::user("Is the water warm?");
        assert_eq!(turn.role, "user");
        let turn = ChatTurn::assistant("In June, just barely.");
        assert_eq!(turn.role, "assistant");
    }

    #[test]
    fn test_chat_request_history_stays_snake_case() {
        let request = ChatRequest {
            preferences: Preferences::default(),
            itinerary: "A 3-day plan".to_string(),
            chat_history: vec![ChatTurn::user("hi")],
            question: "What about dinner?".to_string(),
        };
        let wire = serde_json::to_value(&request).unwrap();
        assert!(wire.get("chat_history").is_some());
        assert_eq!(wire["question"], "What about dinner?");
    }
}

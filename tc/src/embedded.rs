//! Embedded catalog tables
//!
//! These are compiled into the binary from data/ JSON files at build time.

/// Feeling options table
pub const FEELINGS: &str = include_str!("../data/feelings.json");

/// Adaptive question bank
pub const QUESTIONS: &str = include_str!("../data/questions.json");

/// Destination blueprints
pub const BLUEPRINTS: &str = include_str!("../data/blueprints.json");

/// Activity pools keyed by feeling
pub const ACTIVITIES: &str = include_str!("../data/activities.json");

/// Get an embedded table by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    match name {
        "feelings" => Some(FEELINGS),
        "questions" => Some(QUESTIONS),
        "blueprints" => Some(BLUEPRINTS),
        "activities" => Some(ACTIVITIES),
        _ => None,
    }
}

//! Blueprint selection
//!
//! Scores each destination blueprint against the selected feelings and
//! recorded answers. Deterministic: with no feelings the first blueprint
//! is the default, and score ties resolve to the earliest-listed entry.

use std::collections::HashMap;

use tracing::debug;

use tripcatalog::DestinationBlueprint;

/// Points per associated feeling present in the selection
const FEELING_WEIGHT: usize = 2;

/// Pick the best-matching blueprint
///
/// Score = 2 x feeling overlap, +1 for a case-insensitive climate match,
/// +1 for a case-insensitive budget match. Strict greater-than tracking
/// keeps the earliest blueprint on ties.
pub fn select_blueprint<'a>(
    blueprints: &'a [DestinationBlueprint],
    feelings: &[String],
    answers: &HashMap<String, String>,
) -> Option<&'a DestinationBlueprint> {
    let first = blueprints.first()?;
    if feelings.is_empty() {
        debug!(blueprint = %first.id, "select_blueprint: no feelings selected, using default");
        return Some(first);
    }

    let climate = answers.get("climate");
    let budget = answers.get("budget");

    let mut best = first;
    let mut best_score = score(first, feelings, climate, budget);
    for blueprint in &blueprints[1..] {
        let candidate = score(blueprint, feelings, climate, budget);
        debug!(blueprint = %blueprint.id, score = candidate, "select_blueprint: scored");
        if candidate > best_score {
            best = blueprint;
            best_score = candidate;
        }
    }
    debug!(blueprint = %best.id, score = best_score, "select_blueprint: best match");
    Some(best)
}

fn score(
    blueprint: &DestinationBlueprint,
    feelings: &[String],
    climate: Option<&String>,
    budget: Option<&String>,
) -> usize {
    let overlap = blueprint
        .feelings
        .iter()
        .filter(|feeling| feelings.contains(feeling))
        .count();
    let mut score = overlap * FEELING_WEIGHT;
    if climate.is_some_and(|answer| answer.eq_ignore_ascii_case(&blueprint.climate)) {
        score += 1;
    }
    if budget.is_some_and(|answer| answer.eq_ignore_ascii_case(&blueprint.budget)) {
        score += 1;
    }
    score
}

//! Itinerary generation
//!
//! Generation is local-first: the blueprint selector and schedule builder
//! produce a draft plan synchronously, then one backend call fills in the
//! supplementary material. A backend failure leaves the draft standing.

use tracing::debug;

use crate::domain::{Itinerary, PlanStage};
use crate::planner;
use crate::replies::ReplyContext;

use super::PlanSession;

/// Shown when an enrichment failure carries no message of its own
const PLAN_ERROR_FALLBACK: &str = "Unable to reach the itinerary service.";

/// Header gif when the first feeling has none
const FALLBACK_GIF: &str = "https://media.giphy.com/media/l41lISBV5k3u1Q4Fa/giphy.gif";

/// Destination placeholder sent to the backend before one is known
const API_DESTINATION_PLACEHOLDER: &str = "your destination";

impl PlanSession {
    /// Build the local plan and request backend enrichment
    ///
    /// Returns false when the session is not ready. Otherwise a draft
    /// itinerary replaces any previous one immediately, a plan
    /// announcement joins the chat log, and the backend result either
    /// upgrades the plan to enriched or surfaces through `last_error`.
    pub async fn generate(&mut self) -> bool {
        debug!(ready = self.is_ready(), "PlanSession::generate: called");
        if !self.generate_draft() {
            return false;
        }
        self.enrich().await;
        true
    }

    /// Build the draft itinerary from local data only
    ///
    /// The offline half of [`generate`](Self::generate): blueprint
    /// selection, day scheduling, and the plan announcement, with no
    /// backend call. The plan stays at the draft stage.
    pub fn generate_draft(&mut self) -> bool {
        debug!(ready = self.is_ready(), "PlanSession::generate_draft: called");
        if !self.is_ready() {
            return false;
        }
        self.error = None;

        let Some(blueprint) =
            planner::select_blueprint(&self.catalog.blueprints, &self.feelings, &self.answers)
        else {
            self.error = Some("No destination blueprints available.".to_string());
            return false;
        };
        let blueprint = blueprint.clone();
        let days = planner::build_daily_plan(&self.catalog, &self.feelings, &self.answers);

        let destination = self
            .answers
            .get("destination")
            .cloned()
            .unwrap_or_else(|| blueprint.destination.clone());
        let vibe = if self.feelings.is_empty() {
            "balanced".to_string()
        } else {
            self.feelings.join(", ")
        };
        let overview = format!(
            "A {}-day plan in {} emphasizing {} energy.",
            days.len(),
            destination,
            vibe
        );

        let first_feeling = self
            .feelings
            .first()
            .and_then(|id| self.catalog.feeling(id));
        let gif = first_feeling
            .map(|feeling| feeling.gif.clone())
            .unwrap_or_else(|| FALLBACK_GIF.to_string());
        let mood_images = first_feeling
            .map(|feeling| feeling.mood_images.clone())
            .unwrap_or_else(|| {
                self.catalog
                    .feelings
                    .iter()
                    .flat_map(|feeling| feeling.mood_images.iter().cloned())
                    .take(2)
                    .collect()
            });

        debug!(
            blueprint = %blueprint.id,
            %destination,
            days = days.len(),
            "PlanSession::generate_draft: plan built"
        );
        self.itinerary = Some(Itinerary {
            destination: destination.clone(),
            overview,
            description: blueprint.description.clone(),
            gif,
            map_anchor: blueprint.map_anchor.clone(),
            highlight: blueprint.highlight.clone(),
            mood_images,
            chips: self.chips(),
            days,
            stage: PlanStage::Draft,
        });
        let announcement = self.canned("plan-ready", &ReplyContext::plan_ready(&destination));
        self.push_assistant(announcement);
        true
    }

    /// One backend call for the supplementary material
    async fn enrich(&mut self) {
        let api_destination = self
            .answers
            .get("destination")
            .cloned()
            .unwrap_or_else(|| API_DESTINATION_PLACEHOLDER.to_string());
        let preferences = self.preferences_payload(Some(&api_destination));
        match self.client.generate_itinerary(&preferences).await {
            Ok(payload) => {
                debug!("PlanSession::enrich: enrichment landed");
                self.enrichment.apply_plan(&payload);
                if let Some(plan) = self.itinerary.as_mut() {
                    plan.set_enriched();
                }
            }
            Err(err) => {
                debug!("PlanSession::enrich: enrichment failed: {err}");
                let message = err.to_string();
                self.error = Some(if message.is_empty() {
                    PLAN_ERROR_FALLBACK.to_string()
                } else {
                    message
                });
            }
        }
    }
}

//! Catalog aggregate - parse, validate, and query the static tables

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::embedded;
use crate::types::{Activity, DestinationBlueprint, FeelingOption, Question};

/// Climate vocabulary blueprints may use
pub const CLIMATES: [&str; 2] = ["cooler", "warmer"];

/// Budget tier vocabulary blueprints may use
pub const BUDGET_TIERS: [&str; 3] = ["budget-friendly", "balanced", "luxury"];

/// Errors raised while loading or validating catalog tables
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error in {table} table: {source}")]
    Parse {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{table} table is empty")]
    EmptyTable { table: &'static str },

    #[error("duplicate id '{id}' in {table} table")]
    DuplicateId { table: &'static str, id: String },

    #[error("unknown feeling id '{feeling}' referenced by {referrer}")]
    UnknownFeeling { referrer: String, feeling: String },

    #[error("blueprint '{blueprint}' has unknown {field} '{value}'")]
    UnknownVocabulary {
        blueprint: String,
        field: &'static str,
        value: String,
    },
}

/// The four static tables as one validated unit
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Feeling options in display order
    pub feelings: Vec<FeelingOption>,
    /// Question bank in ask order
    pub questions: Vec<Question>,
    /// Destination blueprints in scoring order (first is the default)
    pub blueprints: Vec<DestinationBlueprint>,
    /// Activity pools keyed by feeling id
    pub activities: HashMap<String, Vec<Activity>>,
}

impl Catalog {
    /// Build the catalog from the tables compiled into the binary
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(
            embedded::FEELINGS,
            embedded::QUESTIONS,
            embedded::BLUEPRINTS,
            embedded::ACTIVITIES,
        )
    }

    /// Build the catalog from a directory of the four table files
    pub fn from_dir(dir: &Path) -> Result<Self, CatalogError> {
        let read = |name: &str| -> Result<String, CatalogError> {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|source| CatalogError::Io { path, source })
        };
        Self::from_json(
            &read("feelings.json")?,
            &read("questions.json")?,
            &read("blueprints.json")?,
            &read("activities.json")?,
        )
    }

    /// Build the catalog from caller-supplied JSON documents
    ///
    /// The remote configuration endpoints serve the same shapes, so this
    /// is also the entry point for a remotely sourced catalog.
    pub fn from_json(
        feelings: &str,
        questions: &str,
        blueprints: &str,
        activities: &str,
    ) -> Result<Self, CatalogError> {
        let feelings: Vec<FeelingOption> =
            serde_json::from_str(feelings).map_err(|source| CatalogError::Parse {
                table: "feelings",
                source,
            })?;
        let questions: Vec<Question> =
            serde_json::from_str(questions).map_err(|source| CatalogError::Parse {
                table: "questions",
                source,
            })?;
        let blueprints: Vec<DestinationBlueprint> =
            serde_json::from_str(blueprints).map_err(|source| CatalogError::Parse {
                table: "blueprints",
                source,
            })?;
        let activities: HashMap<String, Vec<Activity>> =
            serde_json::from_str(activities).map_err(|source| CatalogError::Parse {
                table: "activities",
                source,
            })?;
        debug!(
            feelings = feelings.len(),
            questions = questions.len(),
            blueprints = blueprints.len(),
            pools = activities.len(),
            "Parsed catalog tables"
        );
        Ok(Self {
            feelings,
            questions,
            blueprints,
            activities,
        })
    }

    /// Check cross-references and vocabularies across all four tables
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.feelings.is_empty() {
            return Err(CatalogError::EmptyTable { table: "feelings" });
        }
        if self.blueprints.is_empty() {
            return Err(CatalogError::EmptyTable { table: "blueprints" });
        }

        check_unique("feelings", self.feelings.iter().map(|f| f.id.as_str()))?;
        check_unique("questions", self.questions.iter().map(|q| q.id.as_str()))?;
        check_unique("blueprints", self.blueprints.iter().map(|b| b.id.as_str()))?;

        for question in &self.questions {
            let Some(rule) = &question.depends_on else {
                continue;
            };
            if rule.field == "feelings" && self.feeling(&rule.value).is_none() {
                return Err(CatalogError::UnknownFeeling {
                    referrer: format!("question '{}'", question.id),
                    feeling: rule.value.clone(),
                });
            }
        }

        for blueprint in &self.blueprints {
            for feeling in &blueprint.feelings {
                if self.feeling(feeling).is_none() {
                    return Err(CatalogError::UnknownFeeling {
                        referrer: format!("blueprint '{}'", blueprint.id),
                        feeling: feeling.clone(),
                    });
                }
            }
            if !CLIMATES.contains(&blueprint.climate.as_str()) {
                return Err(CatalogError::UnknownVocabulary {
                    blueprint: blueprint.id.clone(),
                    field: "climate",
                    value: blueprint.climate.clone(),
                });
            }
            if !BUDGET_TIERS.contains(&blueprint.budget.as_str()) {
                return Err(CatalogError::UnknownVocabulary {
                    blueprint: blueprint.id.clone(),
                    field: "budget",
                    value: blueprint.budget.clone(),
                });
            }
        }

        for feeling in self.activities.keys() {
            if self.feeling(feeling).is_none() {
                return Err(CatalogError::UnknownFeeling {
                    referrer: "activities table".to_string(),
                    feeling: feeling.clone(),
                });
            }
        }

        debug!("Catalog validation passed");
        Ok(())
    }

    pub fn feeling(&self, id: &str) -> Option<&FeelingOption> {
        self.feelings.iter().find(|f| f.id == id)
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn blueprint(&self, id: &str) -> Option<&DestinationBlueprint> {
        self.blueprints.iter().find(|b| b.id == id)
    }

    /// Activity pool for a feeling; unknown feelings get an empty pool
    pub fn activities_for(&self, feeling_id: &str) -> &[Activity] {
        self.activities
            .get(feeling_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn check_unique<'a>(
    table: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                table,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_parses_and_validates() {
        let catalog = Catalog::embedded().unwrap();
        catalog.validate().unwrap();
        assert_eq!(catalog.feelings.len(), 6);
        assert_eq!(catalog.questions.len(), 8);
        assert_eq!(catalog.blueprints.len(), 5);
        assert_eq!(catalog.activities.len(), 6);
    }

    #[test]
    fn test_every_feeling_has_a_pool() {
        let catalog = Catalog::embedded().unwrap();
        for feeling in &catalog.feelings {
            assert!(
                !catalog.activities_for(&feeling.id).is_empty(),
                "feeling '{}' has no activities",
                feeling.id
            );
        }
    }

    #[test]
    fn test_activities_for_unknown_feeling_is_empty() {
        let catalog = Catalog::embedded().unwrap();
        assert!(catalog.activities_for("nonexistent").is_empty());
    }

    #[test]
    fn test_lookups_by_id() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.feeling("adventure").unwrap().label, "Adventure");
        assert_eq!(catalog.question("kidFriendly").unwrap().id, "kidFriendly");
        assert!(catalog.blueprint("azores").is_some());
        assert!(catalog.feeling("unknown").is_none());
    }

    #[test]
    fn test_first_blueprint_is_the_default() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.blueprints[0].id, "lisbon");
    }

    #[test]
    fn test_kid_friendly_depends_on_reconnect() {
        let catalog = Catalog::embedded().unwrap();
        let rule = catalog
            .question("kidFriendly")
            .unwrap()
            .depends_on
            .as_ref()
            .unwrap();
        assert_eq!(rule.field, "feelings");
        assert_eq!(rule.value, "reconnect");
    }

    #[test]
    fn test_validate_rejects_unknown_feeling_reference() {
        let catalog = Catalog::from_json(
            r##"[{"id": "relax", "label": "Relax", "description": "d", "color": "#fff", "gif": "g", "moodImages": []}]"##,
            r#"[]"#,
            r#"[{"id": "x", "destination": "X, Y", "feelings": ["ghost"], "climate": "cooler", "budget": "balanced", "description": "d", "mapAnchor": "m", "highlight": "h"}]"#,
            r#"{}"#,
        )
        .unwrap();
        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, CatalogError::UnknownFeeling { .. }));
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let catalog = Catalog::from_json(
            r##"[
                {"id": "relax", "label": "A", "description": "d", "color": "#fff", "gif": "g", "moodImages": []},
                {"id": "relax", "label": "B", "description": "d", "color": "#fff", "gif": "g", "moodImages": []}
            ]"##,
            r#"[]"#,
            r#"[{"id": "x", "destination": "X, Y", "feelings": [], "climate": "cooler", "budget": "balanced", "description": "d", "mapAnchor": "m", "highlight": "h"}]"#,
            r#"{}"#,
        )
        .unwrap();
        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { .. }));
    }

    #[test]
    fn test_validate_rejects_bad_climate() {
        let catalog = Catalog::from_json(
            r##"[{"id": "relax", "label": "A", "description": "d", "color": "#fff", "gif": "g", "moodImages": []}]"##,
            r#"[]"#,
            r#"[{"id": "x", "destination": "X, Y", "feelings": ["relax"], "climate": "tropical", "budget": "balanced", "description": "d", "mapAnchor": "m", "highlight": "h"}]"#,
            r#"{}"#,
        )
        .unwrap();
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("tropical"));
    }

    #[test]
    fn test_parse_error_names_the_table() {
        let err = Catalog::from_json("not json", "[]", "[]", "{}").unwrap_err();
        assert!(err.to_string().contains("feelings"));
    }

    #[test]
    fn test_from_dir_reads_override_tables() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        for (name, content) in [
            ("feelings.json", embedded::FEELINGS),
            ("questions.json", embedded::QUESTIONS),
            ("blueprints.json", embedded::BLUEPRINTS),
            ("activities.json", embedded::ACTIVITIES),
        ] {
            std::fs::write(dir.path().join(name), content).expect("write table");
        }
        let catalog = Catalog::from_dir(dir.path()).expect("load from dir");
        catalog.validate().expect("validate");
        assert_eq!(catalog.feelings.len(), 6);
    }

    #[test]
    fn test_from_dir_missing_file_reports_path() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let err = Catalog::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("feelings.json"));
    }
}

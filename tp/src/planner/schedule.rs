//! Day-by-day schedule builder
//!
//! Fills three days of Morning/Afternoon/Evening blocks by rotating
//! through the prioritized feelings and each feeling's activity pool.
//! Modulo indexing repeats activities once a pool is exhausted, which
//! keeps short pools usable instead of erroring.

use std::collections::HashMap;

use tracing::debug;

use tripcatalog::Catalog;

use crate::domain::{Day, ScheduledActivity, TimeBlock};

/// Number of days in every generated plan
pub const PLAN_DAYS: usize = 3;

/// Rotation order used when no feelings are selected
pub const DEFAULT_FEELINGS: [&str; 3] = ["relax", "adventure", "food"];

/// Mobility answer that keeps activities near home base
pub const STAY_CLOSE_CHOICE: &str = "Stay close to home base";

/// Focus text per day, indexed by day number - 1
const DAY_FOCUS: [&str; PLAN_DAYS] = ["Arrival + senses", "Deep dive", "Wrap-up + wander"];

const STAY_CLOSE_NOTES: &str =
    "Keep it mellow: everything stays within a short stroll of home base.";
const ROAMING_NOTES: &str = "Roaming mode: this one is worth the transit time.";

const MAP_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Build the three-day plan
///
/// Day `d` at block position `i` takes feeling `(d + i - 1) mod len` and
/// activity `(d + i) mod pool.len()`. Blocks whose feeling has no activity
/// pool are skipped silently.
pub fn build_daily_plan(
    catalog: &Catalog,
    feelings: &[String],
    answers: &HashMap<String, String>,
) -> Vec<Day> {
    let prioritized: Vec<&str> = if feelings.is_empty() {
        DEFAULT_FEELINGS.to_vec()
    } else {
        feelings.iter().map(String::as_str).collect()
    };
    debug!(feelings = ?prioritized, "build_daily_plan: called");

    let stay_close = answers
        .get("mobility")
        .is_some_and(|answer| answer == STAY_CLOSE_CHOICE);
    let notes = if stay_close {
        STAY_CLOSE_NOTES
    } else {
        ROAMING_NOTES
    };

    let mut days = Vec::with_capacity(PLAN_DAYS);
    for day_number in 1..=PLAN_DAYS {
        let mut activities = Vec::with_capacity(TimeBlock::ALL.len());
        for (position, block) in TimeBlock::ALL.iter().enumerate() {
            let feeling = prioritized[(day_number + position - 1) % prioritized.len()];
            let pool = catalog.activities_for(feeling);
            if pool.is_empty() {
                debug!(feeling, "build_daily_plan: empty activity pool, skipping block");
                continue;
            }
            let activity = &pool[(day_number + position) % pool.len()];
            activities.push(ScheduledActivity {
                time_block: *block,
                title: activity.title.clone(),
                detail: activity.detail.clone(),
                notes: notes.to_string(),
                map_link: map_search_link(&activity.map_query),
            });
        }
        days.push(Day {
            label: format!("Day {day_number}"),
            focus: DAY_FOCUS[day_number - 1].to_string(),
            activities,
        });
    }
    days
}

/// Map search URL for an activity query
pub fn map_search_link(query: &str) -> String {
    format!("{MAP_SEARCH_URL}{}", urlencoding::encode(query))
}

/// Move one activity up or down within its day
///
/// Returns the updated plan, or `None` when the move falls outside the
/// day's list. Other days are cloned untouched.
pub fn move_activity(
    days: &[Day],
    day_index: usize,
    activity_index: usize,
    direction: i32,
) -> Option<Vec<Day>> {
    let day = days.get(day_index)?;
    let len = day.activities.len();
    let target = activity_index.checked_add_signed(direction as isize)?;
    if activity_index >= len || target >= len || target == activity_index {
        debug!(
            day_index,
            activity_index, direction, "move_activity: target out of range, ignoring"
        );
        return None;
    }

    let mut next = days.to_vec();
    let moved = next[day_index].activities.remove(activity_index);
    next[day_index].activities.insert(target, moved);
    debug!(day_index, activity_index, target, "move_activity: moved");
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn answers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn feelings(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_plan_fills_three_days_of_three_blocks() {
        let catalog = Catalog::embedded().unwrap();
        let days = build_daily_plan(
            &catalog,
            &feelings(&["relax", "adventure", "food"]),
            &HashMap::new(),
        );

        assert_eq!(days.len(), 3);
        for (index, day) in days.iter().enumerate() {
            assert_eq!(day.label, format!("Day {}", index + 1));
            assert_eq!(day.activities.len(), 3);
            let blocks: Vec<TimeBlock> = day.activities.iter().map(|a| a.time_block).collect();
            assert_eq!(blocks, TimeBlock::ALL.to_vec());
        }
        assert_eq!(days[0].focus, "Arrival + senses");
        assert_eq!(days[2].focus, "Wrap-up + wander");
    }

    #[test]
    fn test_rotation_offsets_by_day_and_block() {
        let catalog = Catalog::embedded().unwrap();
        let selected = feelings(&["relax", "adventure", "food"]);
        let days = build_daily_plan(&catalog, &selected, &HashMap::new());

        // Day 1 walks the selection in order; day 2 starts one step later
        let expected = [
            ["relax", "adventure", "food"],
            ["adventure", "food", "relax"],
            ["food", "relax", "adventure"],
        ];
        for (day_index, day) in days.iter().enumerate() {
            let day_number = day_index + 1;
            for (position, activity) in day.activities.iter().enumerate() {
                let feeling = expected[day_index][position];
                let pool = catalog.activities_for(feeling);
                let wanted = &pool[(day_number + position) % pool.len()];
                assert_eq!(activity.title, wanted.title);
                assert_eq!(activity.detail, wanted.detail);
            }
        }
    }

    #[test]
    fn test_default_rotation_when_no_feelings_selected() {
        let catalog = Catalog::embedded().unwrap();
        let days = build_daily_plan(&catalog, &[], &HashMap::new());

        assert_eq!(days.len(), 3);
        let pool = catalog.activities_for(DEFAULT_FEELINGS[0]);
        assert_eq!(days[0].activities[0].title, pool[1 % pool.len()].title);
    }

    #[test]
    fn test_empty_pool_skips_block_silently() {
        let feelings_json = r##"[{
            "id": "quiet",
            "label": "Quiet",
            "description": "Slow days",
            "color": "#aabbcc",
            "gif": "https://example.com/quiet.gif"
        }]"##;
        let blueprints_json = r#"[{
            "id": "somewhere",
            "destination": "Somewhere, Someland",
            "feelings": ["quiet"],
            "climate": "cooler",
            "budget": "balanced",
            "description": "A quiet place",
            "mapAnchor": "Somewhere",
            "highlight": "Silence"
        }]"#;
        let catalog =
            Catalog::from_json(feelings_json, "[]", blueprints_json, "{}").unwrap();

        let days = build_daily_plan(&catalog, &feelings(&["quiet"]), &HashMap::new());
        assert_eq!(days.len(), 3);
        for day in &days {
            assert!(day.activities.is_empty());
        }
    }

    #[test]
    fn test_notes_follow_mobility_answer() {
        let catalog = Catalog::embedded().unwrap();
        let selected = feelings(&["relax"]);

        let close = build_daily_plan(
            &catalog,
            &selected,
            &answers(&[("mobility", STAY_CLOSE_CHOICE)]),
        );
        for activity in close.iter().flat_map(|day| &day.activities) {
            assert_eq!(activity.notes, STAY_CLOSE_NOTES);
        }

        let roaming = build_daily_plan(
            &catalog,
            &selected,
            &answers(&[("mobility", "Happy to roam far")]),
        );
        for activity in roaming.iter().flat_map(|day| &day.activities) {
            assert_eq!(activity.notes, ROAMING_NOTES);
        }
    }

    #[test]
    fn test_map_links_url_encode_queries() {
        let link = map_search_link("old town lisbon");
        assert_eq!(
            link,
            "https://www.google.com/maps/search/?api=1&query=old%20town%20lisbon"
        );
    }

    #[test]
    fn test_move_swaps_adjacent_activities() {
        let catalog = Catalog::embedded().unwrap();
        let days = build_daily_plan(&catalog, &feelings(&["relax", "food"]), &HashMap::new());
        let before_first = days[1].activities[0].title.clone();
        let before_second = days[1].activities[1].title.clone();

        let moved = move_activity(&days, 1, 0, 1).unwrap();
        assert_eq!(moved[1].activities[0].title, before_second);
        assert_eq!(moved[1].activities[1].title, before_first);

        // Untouched days come through unchanged
        assert_eq!(moved[0], days[0]);
        assert_eq!(moved[2], days[2]);
    }

    #[test]
    fn test_move_out_of_bounds_is_a_no_op() {
        let catalog = Catalog::embedded().unwrap();
        let days = build_daily_plan(&catalog, &feelings(&["relax"]), &HashMap::new());

        assert!(move_activity(&days, 0, 0, -1).is_none());
        let last = days[0].activities.len() - 1;
        assert!(move_activity(&days, 0, last, 1).is_none());
        assert!(move_activity(&days, 9, 0, 1).is_none());
        assert!(move_activity(&days, 0, 99, 1).is_none());
    }

    proptest! {
        #[test]
        fn prop_move_preserves_activities_within_day(
            day_index in 0usize..3,
            activity_index in 0usize..3,
            direction in prop_oneof![Just(-1i32), Just(1i32)],
        ) {
            let catalog = Catalog::embedded().unwrap();
            let days = build_daily_plan(
                &catalog,
                &feelings(&["relax", "adventure", "food"]),
                &HashMap::new(),
            );

            if let Some(moved) = move_activity(&days, day_index, activity_index, direction) {
                // Same titles, possibly reordered, within the touched day
                let mut before: Vec<&str> = days[day_index]
                    .activities
                    .iter()
                    .map(|a| a.title.as_str())
                    .collect();
                let mut after: Vec<&str> = moved[day_index]
                    .activities
                    .iter()
                    .map(|a| a.title.as_str())
                    .collect();
                before.sort_unstable();
                after.sort_unstable();
                prop_assert_eq!(before, after);

                for (index, day) in days.iter().enumerate() {
                    if index != day_index {
                        prop_assert_eq!(day, &moved[index]);
                    }
                }
            }
        }
    }
}

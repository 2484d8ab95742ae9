//! Deterministic planning
//!
//! Pure functions over the catalog: blueprint scoring, the three-day
//! schedule rotation, and in-plan activity moves. No I/O here; the
//! session layer owns state and the API layer owns the network.

mod blueprint;
mod schedule;

pub use blueprint::select_blueprint;
pub use schedule::{
    build_daily_plan, map_search_link, move_activity, DEFAULT_FEELINGS, PLAN_DAYS,
    STAY_CLOSE_CHOICE,
};

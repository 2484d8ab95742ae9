//! Day-by-day plan types

use serde::{Deserialize, Serialize};

/// Fixed time blocks of a planned day, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeBlock {
    Morning,
    Afternoon,
    Evening,
}

impl TimeBlock {
    /// All blocks in display order
    pub const ALL: [TimeBlock; 3] = [TimeBlock::Morning, TimeBlock::Afternoon, TimeBlock::Evening];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            TimeBlock::Morning => "Morning",
            TimeBlock::Afternoon => "Afternoon",
            TimeBlock::Evening => "Evening",
        }
    }
}

impl std::fmt::Display for TimeBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One scheduled activity inside a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledActivity {
    /// Block this activity fills
    pub time_block: TimeBlock,

    /// Activity title from the feeling's pool
    pub title: String,

    /// Activity description
    pub detail: String,

    /// Mobility-dependent note
    pub notes: String,

    /// Map search link for the activity
    pub map_link: String,
}

/// One planned day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    /// Display label ("Day 1")
    pub label: String,

    /// Focus text for the day
    pub focus: String,

    /// Scheduled activities in block order
    pub activities: Vec<ScheduledActivity>,
}

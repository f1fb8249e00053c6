//! Activity selection.
//!
//! Sort by finish time, then accept each activity whose start is not before the
//! finish of the last accepted one. This maximizes the *number* of
//! non-overlapping activities; it says nothing about value-weighted selection.

use serde::{Deserialize, Serialize};

use supplynet_core::{AlgoError, AlgoResult};

/// Half-open time slot `[start, finish)` on the shared resource.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Activity {
    pub start: i64,
    pub finish: i64,
}

impl Activity {
    /// Validated constructor: `start <= finish`.
    pub fn new(start: i64, finish: i64) -> AlgoResult<Self> {
        let activity = Self { start, finish };
        activity.validate()?;
        Ok(activity)
    }

    pub fn duration(&self) -> i64 {
        self.finish - self.start
    }

    /// Two activities conflict if their slots share any time.
    pub fn overlaps(&self, other: &Activity) -> bool {
        self.start < other.finish && other.start < self.finish
    }

    fn validate(&self) -> AlgoResult<()> {
        if self.start > self.finish {
            return Err(AlgoError::invalid_input(format!(
                "activity starts at {} after it finishes at {}",
                self.start, self.finish
            )));
        }
        Ok(())
    }
}

/// Maximum-size set of mutually compatible activities, in finish order.
///
/// The caller's slice is left untouched; a sorted copy is used.
pub fn select_activities(activities: &[Activity]) -> AlgoResult<Vec<Activity>> {
    for activity in activities {
        activity.validate()?;
    }

    let mut sorted = activities.to_vec();
    sorted.sort_by_key(|a| (a.finish, a.start));

    let mut selected: Vec<Activity> = Vec::new();
    for activity in sorted {
        match selected.last() {
            Some(last) if activity.start < last.finish => {}
            _ => selected.push(activity),
        }
    }

    tracing::debug!(
        candidates = activities.len(),
        selected = selected.len(),
        "activities selected"
    );
    Ok(selected)
}

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::action::RotationAction;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub action: RotationAction,
    /// Absolute simulation-clock seconds.
    pub start_time: f64,
    pub end_time: f64,
    /// Cooldown-expiry clock value in effect for this skill when the entry
    /// was considered; 0 if the skill had never been used.
    pub cooldown_ready: f64,
    /// True iff the action could start the moment the scan reached it.
    pub is_available: bool,
}

/// Forced idle wait inserted because a skill's cooldown had not expired.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DowntimeWindow {
    pub start: f64,
    pub end: f64,
    pub duration: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TimelineSummary {
    pub entries: Vec<TimelineEntry>,
    /// End time of the last entry, 0 for an empty rotation.
    pub total_duration: f64,
    /// Sum of cast times; wait time is not included.
    pub total_cast_time: f64,
    pub total_downtime: f64,
    pub downtime_windows: Vec<DowntimeWindow>,
    pub skill_usage_counts: BTreeMap<String, usize>,
    /// One message per forced wait, in the same order as `downtime_windows`.
    pub warnings: Vec<String>,
}

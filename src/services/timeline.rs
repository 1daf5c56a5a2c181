use std::collections::{BTreeMap, HashMap};

use crate::domain::action::RotationAction;
use crate::services::timeline_types::{DowntimeWindow, TimelineEntry, TimelineSummary};

/// Compute a timeline from a sequence of rotation actions.
///
/// Actions execute in input order; each starts no earlier than the previous
/// ends. Cooldowns are tracked per skill name, local to this call. When a
/// skill is still on cooldown the start is shifted forward and the wait is
/// recorded as a downtime window plus a warning. Total for any well-formed
/// input: there is no error outcome.
pub fn compute_timeline(actions: &[RotationAction]) -> TimelineSummary {
    let mut entries: Vec<TimelineEntry> = Vec::with_capacity(actions.len());
    let mut cooldowns: HashMap<String, f64> = HashMap::new();
    let mut usage_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut warnings: Vec<String> = Vec::new();
    let mut downtime_windows: Vec<DowntimeWindow> = Vec::new();

    let mut current_time = 0.0_f64;

    for action in actions {
        let cooldown_ready = cooldowns.get(&action.skill_name).copied().unwrap_or(0.0);
        let is_available = current_time >= cooldown_ready;

        let start_time = if is_available {
            current_time
        } else {
            let wait_time = cooldown_ready - current_time;
            downtime_windows.push(DowntimeWindow {
                start: current_time,
                end: cooldown_ready,
                duration: wait_time,
            });
            warnings.push(format!(
                "\"{}\" on cooldown at {current_time:.1}s, waiting {wait_time:.1}s",
                action.skill_name
            ));
            cooldown_ready
        };

        let end_time = start_time + action.cast_time;

        entries.push(TimelineEntry {
            action: action.clone(),
            start_time,
            end_time,
            cooldown_ready,
            is_available,
        });

        // Cooldown counts from when the skill started, not when it finished.
        if action.cooldown > 0.0 {
            cooldowns.insert(action.skill_name.clone(), start_time + action.cooldown);
        }
        *usage_counts.entry(action.skill_name.clone()).or_insert(0) += 1;

        current_time = end_time;
    }

    let total_duration = entries.last().map(|entry| entry.end_time).unwrap_or(0.0);
    let total_cast_time = entries.iter().map(|entry| entry.action.cast_time).sum();
    let total_downtime = downtime_windows.iter().map(|window| window.duration).sum();

    TimelineSummary {
        entries,
        total_duration,
        total_cast_time,
        total_downtime,
        downtime_windows,
        skill_usage_counts: usage_counts,
        warnings,
    }
}

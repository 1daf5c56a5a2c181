use crate::services::duration_format::format_duration;
use crate::services::timeline_types::TimelineSummary;

pub fn format_timeline_report(rotation_name: &str, summary: &TimelineSummary) -> String {
    let mut lines = Vec::new();
    lines.push("Timeline Report".to_string());
    lines.push(format!("Rotation: {rotation_name}"));
    lines.push(format!("Actions: {}", summary.entries.len()));
    lines.push(format!(
        "Total duration: {}",
        format_duration(summary.total_duration)
    ));
    lines.push(format!(
        "Cast time: {}",
        format_duration(summary.total_cast_time)
    ));
    lines.push(format!(
        "Downtime: {}",
        format_duration(summary.total_downtime)
    ));
    lines.push(String::new());
    lines.push("Skill usage:".to_string());
    lines.push("Skill | Uses".to_string());
    lines.push("------|-----".to_string());
    for (skill, count) in &summary.skill_usage_counts {
        lines.push(format!("{skill} | {count}"));
    }

    if summary.warnings.is_empty() {
        lines.push(String::new());
        lines.push("No cooldown conflicts.".to_string());
    } else {
        lines.push(String::new());
        lines.push("Warnings:".to_string());
        for warning in &summary.warnings {
            lines.push(format!("- {warning}"));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::timeline::compute_timeline;
    use crate::test_support::{make_action, make_action_with_id};

    #[test]
    fn format_timeline_report_includes_totals_and_usage_table() {
        let actions = vec![
            make_action_with_id("s1", "Slash", 1.0, 5.0),
            make_action("Stab", 0.5, 0.0),
            make_action_with_id("s2", "Slash", 1.0, 5.0),
        ];
        let summary = compute_timeline(&actions);

        let output = format_timeline_report("Opener", &summary);

        assert!(output.contains("Timeline Report"));
        assert!(output.contains("Rotation: Opener"));
        assert!(output.contains("Actions: 3"));
        assert!(output.contains("Total duration: 6.0s"));
        assert!(output.contains("Cast time: 2.5s"));
        assert!(output.contains("Downtime: 3.5s"));
        assert!(output.contains("Skill | Uses"));
        assert!(output.contains("Slash | 2"));
        assert!(output.contains("Stab | 1"));
        assert!(output.contains("Warnings:"));
        assert!(output.contains("- \"Slash\" on cooldown at 1.5s, waiting 3.5s"));
    }

    #[test]
    fn format_timeline_report_notes_when_there_are_no_conflicts() {
        let actions = vec![make_action("Slash", 1.0, 0.0)];
        let summary = compute_timeline(&actions);

        let output = format_timeline_report("Clean", &summary);
        assert!(output.contains("No cooldown conflicts."));
        assert!(!output.contains("Warnings:"));
    }

    #[test]
    fn format_timeline_report_switches_to_minutes_for_long_rotations() {
        let actions = vec![make_action("Channel", 90.5, 0.0)];
        let summary = compute_timeline(&actions);

        let output = format_timeline_report("Long", &summary);
        assert!(output.contains("Total duration: 1m 30.5s"));
    }
}

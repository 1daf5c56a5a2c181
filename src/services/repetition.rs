use crate::domain::action::RotationAction;
use crate::services::timeline::compute_timeline;
use crate::services::timeline_types::TimelineSummary;

/// Repetition counts outside this range are clamped, never rejected.
pub const MIN_REPETITIONS: usize = 1;
pub const MAX_REPETITIONS: usize = 10;

/// Simulate a rotation repeated back-to-back as one continuous timeline.
///
/// Copies keep their `skill_name`, so cooldown state carries across lap
/// boundaries: a slow-cooldown skill used late in one lap can still block
/// the start of the next. Ids get a `-rep{index}` suffix to stay unique.
pub fn compute_repeated_timeline(
    actions: &[RotationAction],
    repetitions: usize,
) -> TimelineSummary {
    let clamped = repetitions.clamp(MIN_REPETITIONS, MAX_REPETITIONS);

    let mut repeated = Vec::with_capacity(actions.len() * clamped);
    for rep in 0..clamped {
        for action in actions {
            let mut copy = action.clone();
            copy.id = format!("{}-rep{rep}", action.id);
            repeated.push(copy);
        }
    }

    compute_timeline(&repeated)
}

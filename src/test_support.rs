use crate::domain::action::RotationAction;

// Builders shared by the unit tests. The id defaults to the skill name,
// matching how hand-written rotations usually look.
pub fn make_action(skill_name: &str, cast_time: f64, cooldown: f64) -> RotationAction {
    RotationAction::new(skill_name, skill_name, cast_time, cooldown)
}

pub fn make_action_with_id(
    id: &str,
    skill_name: &str,
    cast_time: f64,
    cooldown: f64,
) -> RotationAction {
    RotationAction::new(id, skill_name, cast_time, cooldown)
}

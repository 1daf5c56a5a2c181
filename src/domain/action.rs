use serde::Serialize;

/// One scheduled use of a named skill. Cooldowns are tracked by
/// `skill_name`, not `id`: two actions with the same name share a cooldown
/// timer even when they are distinct rotation steps.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RotationAction {
    pub id: String,
    pub skill_name: String,
    /// Seconds the action occupies the timeline once started.
    pub cast_time: f64,
    /// Seconds after the action starts before the same skill may start
    /// again. Zero means no restriction.
    pub cooldown: f64,
    pub buff_duration: Option<f64>,
    pub notes: Option<String>,
    pub color: Option<String>,
}

impl RotationAction {
    pub fn new(id: &str, skill_name: &str, cast_time: f64, cooldown: f64) -> Self {
        Self {
            id: id.to_string(),
            skill_name: skill_name.to_string(),
            cast_time,
            cooldown,
            buff_duration: None,
            notes: None,
            color: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_action_has_no_display_metadata() {
        let action = RotationAction::new("f1", "Fireball", 2.5, 8.0);
        assert_eq!(action.id, "f1");
        assert_eq!(action.skill_name, "Fireball");
        assert_eq!(action.cast_time, 2.5);
        assert_eq!(action.cooldown, 8.0);
        assert_eq!(action.buff_duration, None);
        assert_eq!(action.notes, None);
        assert_eq!(action.color, None);
    }
}

use crate::domain::action::RotationAction;

#[derive(Debug, Clone, PartialEq)]
pub struct Rotation {
    pub name: String,
    pub actions: Vec<RotationAction>,
}

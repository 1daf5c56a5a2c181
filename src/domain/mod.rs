pub mod action;
pub mod rotation;

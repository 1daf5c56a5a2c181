pub mod commands;
pub mod domain;
pub mod services;
pub mod test_support;

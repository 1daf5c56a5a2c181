pub mod base_commands;
pub mod init_cmd;
pub mod plot_cmd;
pub mod report_format;
pub mod simulate_cmd;

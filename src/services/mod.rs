pub mod duration_format;
pub mod repetition;
pub mod rotation_file;
pub mod timeline;
pub mod timeline_plot;
pub mod timeline_types;

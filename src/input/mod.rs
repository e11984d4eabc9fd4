pub mod browse_mode;
pub mod command_mode;
pub mod form_mode;

mod board_panel;
mod dialogs;
mod form_panel;
mod presentation;
mod session;

pub use session::run_tui;

pub mod activity;
pub mod api;
pub mod app;
pub mod input;
pub mod storage;
pub mod ui;

pub use activity::{Activity, ActivityBoard};
pub use app::{Action, AppState, ListStatus, Mode};

pub use input::{browse_mode, command_mode, form_mode};

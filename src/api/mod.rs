pub mod board_sync;
pub mod client;

pub use board_sync::{BoardEvent, BoardSync};
pub use client::{ActivityApi, ApiError, HttpActivityClient, SignupReceipt, SignupRequest};

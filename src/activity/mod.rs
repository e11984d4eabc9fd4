pub mod board;
pub mod details;

pub use board::ActivityBoard;
pub use details::Activity;

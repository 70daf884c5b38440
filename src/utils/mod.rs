/// Module containing environment variable helpers
pub mod config;
/// Module containing duration string parsing
pub mod duration;
/// Module containing logging utilities
pub mod logger;

pub use duration::*;
pub use logger::*;

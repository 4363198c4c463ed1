// Utility functions

pub mod browser;
pub mod projection;
pub mod time;

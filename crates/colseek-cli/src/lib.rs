//! CLI library components for colseek.

pub mod logging;
pub mod render;

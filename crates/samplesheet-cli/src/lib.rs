//! CLI library components for the sample sheet validator.

pub mod commands;
pub mod logging;
pub mod render;

//! CLI library components for the lost-and-found registry tools.

pub mod logging;
pub mod pipeline;

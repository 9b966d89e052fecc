//! CLI library components for GreetFlow.

pub mod commands;
pub mod logging;

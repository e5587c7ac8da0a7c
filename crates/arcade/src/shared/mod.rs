//! Pieces shared by the CLI and TUI front ends.

pub mod config;
pub mod launch;
pub mod logging;

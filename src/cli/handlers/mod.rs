// src/cli/handlers/mod.rs

// One module per action reachable from the flag registry.

pub mod create;
pub mod help;
pub mod set_default;
pub mod show_default;

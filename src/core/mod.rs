// src/core/mod.rs

pub mod config_store;
pub mod language;
pub mod paths;
pub mod report;
pub mod script_writer;

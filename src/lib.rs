//! nsid: scaffold new scripts with an interpreter directive and owner-only
//! permissions, remembering a default scripting language between runs.

include!(concat!(env!("OUT_DIR"), "/translations.rs"));

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;

// src/cli/handlers/show_default.rs

use crate::core::config_store::ConfigStore;
use anyhow::Result;

/// Prints the stored default language name, creating the store if needed.
pub fn handle(store: &dyn ConfigStore) -> Result<()> {
    println!("{}", store.get_default()?);
    Ok(())
}

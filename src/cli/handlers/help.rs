// src/cli/handlers/help.rs

use crate::cli::render_help;
use crate::core::config_store::ConfigStore;
use anyhow::Result;

/// Prints the banner with the current default, followed by the option table.
pub fn handle(store: &dyn ConfigStore) -> Result<()> {
    let default = store.get_default()?;
    println!("\n{}", render_help(&default));
    Ok(())
}

// src/cli/handlers/set_default.rs

use crate::core::{config_store::ConfigStore, language, report};
use anyhow::Result;

/// Validates `name` and persists it as the new default.
pub fn handle(name: &str, store: &dyn ConfigStore) -> Result<()> {
    // Resolve first so a typo never creates or rewrites the config file.
    let language = language::resolve_language(name)?;
    store.set_default(language)?;
    report::success(format!(t!("config.success.default_set"), lang = language.name()));
    Ok(())
}

// src/cli/handlers/create.rs

use crate::core::{
    config_store::ConfigStore,
    language,
    report,
    script_writer::{self, PermissionOutcome},
};
use crate::models::Language;
use anyhow::Result;
use std::path::Path;

/// Creates a script for an explicitly chosen language.
pub fn handle(path: &Path, language: Language) -> Result<()> {
    match script_writer::create_script(path, language)? {
        PermissionOutcome::Restricted => {}
        PermissionOutcome::Unchanged(e) => report::warning(format!(
            t!("script.warning.permissions"),
            path = path.display(),
            error = e
        )),
    }
    report::success(t!("script.success.created"));
    Ok(())
}

/// Creates a script using the stored default language.
pub fn handle_with_default(path: &Path, store: &dyn ConfigStore) -> Result<()> {
    let stored = store.get_default()?;
    let language = language::resolve_language(&stored)?;
    log::debug!("No language flag given, using stored default '{}'", language);
    handle(path, language)
}

// src/core/script_writer.rs

use crate::{
    constants::{SCRIPT_MODE, SHEBANG_PREFIX},
    models::Language,
};
use log::{debug, warn};
use std::{
    fs::File,
    io::{self, Write},
    path::Path,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Could not create file for script '{path}': {source}")]
    Create {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Could not write the shebang to '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// What happened to the permission bits after the content was written.
#[derive(Debug)]
pub enum PermissionOutcome {
    /// The file is now owner read/write/execute only.
    Restricted,
    /// The content is on disk but the mode could not be changed.
    Unchanged(io::Error),
}

/// Builds the interpreter directive line for `language`, without a newline.
pub fn shebang_for(language: Language) -> String {
    format!("{}{}", SHEBANG_PREFIX, language.interpreter())
}

/// Creates (or truncates) `path` with a single shebang line for `language`,
/// then narrows its permissions to the owner.
///
/// Failing to narrow the permissions does not fail the call: the script has
/// already been written by then, so it is reported through the outcome.
pub fn create_script(path: &Path, language: Language) -> Result<PermissionOutcome, ScriptError> {
    let display = path.display().to_string();
    let shebang = shebang_for(language);

    let mut file = File::create(path).map_err(|source| ScriptError::Create {
        path: display.clone(),
        source,
    })?;
    writeln!(file, "{}", shebang)
        .and_then(|()| file.flush())
        .map_err(|source| ScriptError::Write {
            path: display.clone(),
            source,
        })?;
    debug!("Wrote '{}' to '{}'", shebang, display);

    let outcome = match restrict_permissions(path) {
        Ok(()) => PermissionOutcome::Restricted,
        Err(e) => {
            warn!("Could not set mode {:o} on '{}': {}", SCRIPT_MODE, display, e);
            PermissionOutcome::Unchanged(e)
        }
    };
    Ok(outcome)
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(SCRIPT_MODE))
}

#[cfg(not(unix))]
fn restrict_permissions(path: &Path) -> io::Result<()> {
    debug!(
        "Mode bits are not supported on this platform; leaving '{}' as is",
        path.display()
    );
    Ok(())
}

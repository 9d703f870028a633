// src/core/paths.rs

use crate::constants::{CONFIG_FILENAME, CONFIG_PATH_ENV};
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathError {
    #[error("Could not find the home directory. Is $HOME set?")]
    HomeNotFound,
    #[error("Failed to expand config path '{template}': {message}")]
    Expansion { template: String, message: String },
}

/// Returns the path of the preference file.
///
/// `NSID_CONFIG` wins when set (with `~` and `$VAR` expanded); otherwise the
/// file lives directly in the user's home directory.
pub fn get_config_path() -> Result<PathBuf, PathError> {
    config_path_from(env::var_os(CONFIG_PATH_ENV))
}

/// Resolves the preference file path from the raw value of `NSID_CONFIG`.
///
/// A missing or blank value falls back to the home directory. A value that is
/// not valid UTF-8 is taken literally, without expansion.
pub fn config_path_from(override_value: Option<OsString>) -> Result<PathBuf, PathError> {
    let Some(raw) = override_value else {
        return default_config_path();
    };
    match raw.to_str() {
        Some(template) if template.trim().is_empty() => default_config_path(),
        Some(template) => expand_path_template(template),
        None => Ok(PathBuf::from(raw)),
    }
}

/// `<home>/.nsid`
pub fn default_config_path() -> Result<PathBuf, PathError> {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_FILENAME))
        .ok_or(PathError::HomeNotFound)
}

/// Expands the home directory and environment variables in a path template.
pub fn expand_path_template(template: &str) -> Result<PathBuf, PathError> {
    let expanded = shellexpand::full(template).map_err(|e| PathError::Expansion {
        template: template.to_string(),
        message: e.to_string(),
    })?;
    Ok(PathBuf::from(expanded.into_owned()))
}

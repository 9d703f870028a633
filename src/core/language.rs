// src/core/language.rs

use crate::models::Language;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LanguageError {
    #[error("Unknown language argument '{name}' (expected one of: python2, python3, ruby, bash, perl)")]
    Unknown { name: String },
}

/// Returns a lowercased copy of `input`. The input is left untouched.
pub fn to_lowercase(input: &str) -> String {
    input.chars().flat_map(char::to_lowercase).collect()
}

/// Resolves a user-supplied language name, ignoring case.
///
/// Anything outside the supported set is an error, never a silent default.
pub fn resolve_language(name: &str) -> Result<Language, LanguageError> {
    let normalized = to_lowercase(name);
    log::debug!("Resolving language '{}' as '{}'", name, normalized);
    Language::from_name(&normalized).ok_or_else(|| LanguageError::Unknown {
        name: name.to_string(),
    })
}

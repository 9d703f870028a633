// src/constants.rs

//! Fixed names and values shared across the crate.

use crate::models::Language;

/// The name of the preference file, placed directly under the home directory.
pub const CONFIG_FILENAME: &str = ".nsid";

/// Environment variable that, when set, replaces the full preference file path.
pub const CONFIG_PATH_ENV: &str = "NSID_CONFIG";

/// The language written to a freshly created preference file.
pub const FALLBACK_LANGUAGE: Language = Language::Bash;

/// Every generated script starts with this prefix followed by the interpreter.
pub const SHEBANG_PREFIX: &str = "#!/usr/bin/env ";

/// Owner read, write and execute. Nothing for group or other.
pub const SCRIPT_MODE: u32 = 0o700;

/// Tokens starting with this character are classified as flags.
pub const FLAG_MARKER: char = '-';

/// Prefix tag printed in front of every status line.
pub const TOOL_TAG: &str = "nsid";

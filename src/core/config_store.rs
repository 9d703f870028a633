// src/core/config_store.rs

//! The single-slot preference store holding the default language.
//!
//! The file holds exactly one line: the canonical name of the default
//! language. It is created lazily with the fallback language the first time
//! any operation needs it, and overwritten wholesale on every update.
//!
//! There is no locking. Concurrent invocations race and the last writer wins.

use crate::{
    constants::FALLBACK_LANGUAGE,
    core::{
        paths::{self, PathError},
        report,
    },
    models::Language,
};
use log::debug;
use std::{
    fs::{self, File},
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("Could not create a configuration file at '{path}': {source}")]
    Create {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not open nsid configuration file '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not read nsid configuration file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("There was an error setting the default language in '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("The configuration file '{path}' is malformed: {reason}")]
    Malformed { path: String, reason: &'static str },
}

/// Storage for the persisted default language.
///
/// The command handlers only talk to this trait so that tests can point them
/// at a throwaway location instead of the real home directory.
pub trait ConfigStore {
    /// Creates the store with the fallback language if it does not exist yet.
    /// Returns `true` when it had to be created.
    fn ensure_exists(&self) -> Result<bool, ConfigError>;

    /// Returns the stored default language name, exactly as persisted.
    fn get_default(&self) -> Result<String, ConfigError>;

    /// Replaces the stored default with `language`.
    fn set_default(&self, language: Language) -> Result<(), ConfigError>;
}

#[derive(Debug, Clone)]
enum Location {
    /// Resolved from `NSID_CONFIG` or the home directory on first use.
    Discovered,
    Fixed(PathBuf),
}

/// A [`ConfigStore`] backed by a one-line text file.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    location: Location,
}

impl FileConfigStore {
    /// A store whose path is discovered from the environment when first needed.
    pub fn from_env() -> Self {
        Self {
            location: Location::Discovered,
        }
    }

    /// A store over an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            location: Location::Fixed(path.into()),
        }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> Result<PathBuf, ConfigError> {
        let path = match &self.location {
            Location::Fixed(path) => path.clone(),
            Location::Discovered => paths::get_config_path()?,
        };
        debug!("Using configuration file '{}'", path.display());
        Ok(path)
    }

    fn ensure_at(path: &Path) -> Result<bool, ConfigError> {
        if path.exists() {
            return Ok(false);
        }
        Self::create_at(path)?;
        Ok(true)
    }

    fn create_at(path: &Path) -> Result<(), ConfigError> {
        write_line(path, FALLBACK_LANGUAGE.name()).map_err(|source| ConfigError::Create {
            path: path.display().to_string(),
            source,
        })?;
        debug!(
            "Created configuration file '{}' with default '{}'",
            path.display(),
            FALLBACK_LANGUAGE
        );
        report::success(format!(
            t!("config.success.created"),
            lang = FALLBACK_LANGUAGE.name()
        ));
        Ok(())
    }
}

impl ConfigStore for FileConfigStore {
    fn ensure_exists(&self) -> Result<bool, ConfigError> {
        Self::ensure_at(&self.path()?)
    }

    fn get_default(&self) -> Result<String, ConfigError> {
        let path = self.path()?;
        Self::ensure_at(&path)?;
        let file = File::open(&path).map_err(|source| ConfigError::Open {
            path: path.display().to_string(),
            source,
        })?;
        let mut first_line = Vec::new();
        BufReader::new(file)
            .read_until(b'\n', &mut first_line)
            .map_err(|source| ConfigError::Read {
                path: path.display().to_string(),
                source,
            })?;

        let malformed = |reason: &'static str| ConfigError::Malformed {
            path: path.display().to_string(),
            reason,
        };
        let line = std::str::from_utf8(&first_line)
            .map_err(|_| malformed("its first line is not valid UTF-8"))?;
        let name = strip_line_terminator(line);
        if name.is_empty() {
            return Err(malformed("its first line is empty"));
        }
        debug!("Read default language '{}'", name);
        Ok(name.to_string())
    }

    fn set_default(&self, language: Language) -> Result<(), ConfigError> {
        let path = self.path()?;
        Self::ensure_at(&path)?;
        write_line(&path, language.name()).map_err(|source| ConfigError::Write {
            path: path.display().to_string(),
            source,
        })?;
        debug!("Stored default language '{}'", language);
        Ok(())
    }
}

/// Truncates `path` and writes `value` followed by a newline.
fn write_line(path: &Path, value: &str) -> std::io::Result<()> {
    fs::write(path, format!("{}\n", value))
}

fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, FileConfigStore) {
        let dir = TempDir::new().unwrap();
        let store = FileConfigStore::at(dir.path().join(".nsid"));
        (dir, store)
    }

    #[test]
    fn test_ensure_exists_creates_fallback_once() {
        let (dir, store) = temp_store();
        let path = dir.path().join(".nsid");

        assert!(store.ensure_exists().unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "bash\n");

        // Second call leaves the file alone.
        fs::write(&path, "ruby\n").unwrap();
        assert!(!store.ensure_exists().unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "ruby\n");
    }

    #[test]
    fn test_get_default_creates_missing_file() {
        let (dir, store) = temp_store();
        assert_eq!(store.get_default().unwrap(), "bash");
        assert!(dir.path().join(".nsid").exists());
    }

    #[test]
    fn test_set_then_get_round_trips_every_language() {
        let (_dir, store) = temp_store();
        for lang in Language::ALL {
            store.set_default(lang).unwrap();
            assert_eq!(store.get_default().unwrap(), lang.name());
        }
    }

    #[test]
    fn test_set_default_overwrites_longer_value() {
        let (dir, store) = temp_store();
        let path = dir.path().join(".nsid");
        store.set_default(Language::Python3).unwrap();
        store.set_default(Language::Ruby).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "ruby\n");
    }

    #[test]
    fn test_get_default_reads_only_first_line() {
        let (dir, store) = temp_store();
        fs::write(dir.path().join(".nsid"), "perl\nruby\n").unwrap();
        assert_eq!(store.get_default().unwrap(), "perl");
    }

    #[test]
    fn test_get_default_handles_crlf_and_missing_newline() {
        let (dir, store) = temp_store();
        let path = dir.path().join(".nsid");

        fs::write(&path, "python2\r\n").unwrap();
        assert_eq!(store.get_default().unwrap(), "python2");

        fs::write(&path, "python3").unwrap();
        assert_eq!(store.get_default().unwrap(), "python3");
    }

    #[test]
    fn test_get_default_rejects_empty_first_line() {
        let (dir, store) = temp_store();
        let path = dir.path().join(".nsid");

        fs::write(&path, "\nbash\n").unwrap();
        assert!(matches!(
            store.get_default(),
            Err(ConfigError::Malformed { .. })
        ));

        fs::write(&path, "").unwrap();
        assert!(matches!(
            store.get_default(),
            Err(ConfigError::Malformed { .. })
        ));
    }

    #[test]
    fn test_get_default_rejects_invalid_utf8() {
        let (dir, store) = temp_store();
        fs::write(dir.path().join(".nsid"), b"ba\xffsh\n").unwrap();

        let err = store.get_default().unwrap_err();

        assert!(matches!(err, ConfigError::Malformed { .. }));
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[cfg(unix)]
    #[test]
    fn test_get_default_directory_is_read_error() {
        let dir = TempDir::new().unwrap();
        let store = FileConfigStore::at(dir.path());
        assert!(matches!(store.get_default(), Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_create_fails_when_parent_is_missing() {
        let dir = TempDir::new().unwrap();
        let store = FileConfigStore::at(dir.path().join("missing").join(".nsid"));
        assert!(matches!(
            store.ensure_exists(),
            Err(ConfigError::Create { .. })
        ));
        assert!(matches!(store.get_default(), Err(ConfigError::Create { .. })));
    }
}

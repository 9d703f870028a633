// src/models.rs

use std::fmt;

/// A scripting language nsid knows how to scaffold.
///
/// The set is closed: every variant has a canonical lowercase name (used in the
/// preference file and for matching user input) and an interpreter token
/// written after the shebang prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python2,
    Python3,
    Ruby,
    Bash,
    Perl,
}

impl Language {
    /// All supported languages, in table order.
    pub const ALL: [Self; 5] = [
        Self::Python2,
        Self::Python3,
        Self::Ruby,
        Self::Bash,
        Self::Perl,
    ];

    /// The canonical lowercase name, as persisted in the preference file.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Python2 => "python2",
            Self::Python3 => "python3",
            Self::Ruby => "ruby",
            Self::Bash => "bash",
            Self::Perl => "perl",
        }
    }

    /// The command handed to `/usr/bin/env`.
    pub const fn interpreter(self) -> &'static str {
        // Identical to the canonical name for every language supported today.
        self.name()
    }

    /// Exact (already lowercased) name lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.name() == name)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// src/core/report.rs

//! Bracketed `[nsid]` status lines shared by every part of the tool.

use crate::constants::TOOL_TAG;
use colored::*;
use std::fmt::Display;

fn tagged(tag: ColoredString, msg: impl Display) -> String {
    format!("{}{}{} {}", "[".white(), tag, "]".white(), msg)
}

/// Prints a success line on stdout.
pub fn success(msg: impl Display) {
    println!("{}", tagged(TOOL_TAG.green(), msg));
}

/// Prints a non-fatal warning on stderr.
pub fn warning(msg: impl Display) {
    eprintln!("{}", tagged(TOOL_TAG.yellow(), msg));
}

/// Prints an error line on stderr. Terminating is left to the caller.
pub fn error(msg: impl Display) {
    eprintln!("{}", tagged(TOOL_TAG.red(), msg));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_plain_layout() {
        colored::control::set_override(false);
        assert_eq!(tagged(TOOL_TAG.red(), "boom"), "[nsid] boom");
        colored::control::unset_override();
    }
}

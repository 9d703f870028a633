// src/cli/args.rs

use crate::constants::FLAG_MARKER;
use std::ffi::{OsStr, OsString};
use thiserror::Error;

/// The raw tokens of one invocation, split into at most one flag and at most
/// one free argument. Tokens are kept as typed, so file names need not be UTF-8.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedInvocation {
    pub flag: Option<OsString>,
    pub argument: Option<OsString>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgsError {
    #[error("Must supply at least an option and/or file name")]
    NoArguments,
    #[error("Too many arguments, expected 1 or 2, got {count}")]
    TooMany { count: usize },
}

/// A token is a flag when it starts with the flag marker.
pub fn is_flag(token: &OsStr) -> bool {
    let mut marker = [0u8; 4];
    token
        .as_encoded_bytes()
        .starts_with(FLAG_MARKER.encode_utf8(&mut marker).as_bytes())
}

/// Classifies the tokens by count.
///
/// With two tokens the first one is always taken as the flag and the second
/// as its argument, whatever they look like. `nsid -r -b` therefore asks for
/// a Ruby script named `-b`, and `nsid -- x` names the flag `--`.
pub fn parse_invocation(tokens: &[OsString]) -> Result<ParsedInvocation, ArgsError> {
    let parsed = match tokens {
        [] => return Err(ArgsError::NoArguments),
        [only] if is_flag(only) => ParsedInvocation {
            flag: Some(only.clone()),
            argument: None,
        },
        [only] => ParsedInvocation {
            flag: None,
            argument: Some(only.clone()),
        },
        [flag, argument] => ParsedInvocation {
            flag: Some(flag.clone()),
            argument: Some(argument.clone()),
        },
        _ => return Err(ArgsError::TooMany { count: tokens.len() }),
    };
    log::debug!("Parsed invocation: {:?}", parsed);
    Ok(parsed)
}

// src/cli/dispatcher.rs

use anyhow::Result;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use thiserror::Error;

use crate::{
    cli::{
        args::{self, ParsedInvocation},
        handlers,
    },
    core::config_store::ConfigStore,
    models::Language,
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouterError {
    #[error("{flag} is not a valid flag")]
    InvalidFlag { flag: String },
    #[error("Missing file name argument for {flag}")]
    MissingFileName { flag: String },
    #[error("Missing default language argument for {flag}")]
    MissingLanguage { flag: String },
    #[error("{flag} takes no parameters")]
    UnexpectedArgument { flag: String },
}

/// What a flag does once its argument has been validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlagAction {
    Help,
    Create(Language),
    ShowDefault,
    SetDefault,
}

/// Defines a flag, its spellings, and the action it triggers.
struct FlagDefinition {
    short: Option<&'static str>,
    long: &'static str,
    action: FlagAction,
}

/// The single source of truth for all flags.
static FLAG_REGISTRY: &[FlagDefinition] = &[
    FlagDefinition {
        short: None,
        long: "--help",
        action: FlagAction::Help,
    },
    FlagDefinition {
        short: Some("-r"),
        long: "--ruby",
        action: FlagAction::Create(Language::Ruby),
    },
    FlagDefinition {
        short: Some("-p2"),
        long: "--python2",
        action: FlagAction::Create(Language::Python2),
    },
    FlagDefinition {
        short: Some("-p3"),
        long: "--python3",
        action: FlagAction::Create(Language::Python3),
    },
    FlagDefinition {
        short: Some("-b"),
        long: "--bash",
        action: FlagAction::Create(Language::Bash),
    },
    FlagDefinition {
        short: Some("-p"),
        long: "--perl",
        action: FlagAction::Create(Language::Perl),
    },
    FlagDefinition {
        short: Some("-sd"),
        long: "--show-default",
        action: FlagAction::ShowDefault,
    },
    FlagDefinition {
        short: Some("-d"),
        long: "--default",
        action: FlagAction::SetDefault,
    },
];

/// Finds a flag definition by either of its spellings. Matching is exact,
/// so a token that is not valid UTF-8 never matches.
fn find_flag(token: &OsStr) -> Option<&'static FlagDefinition> {
    let token = token.to_str()?;
    FLAG_REGISTRY
        .iter()
        .find(|def| def.long == token || def.short == Some(token))
}

/// Which language a new script should use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageChoice {
    Explicit(Language),
    /// Whatever the preference file currently holds.
    Stored,
}

/// A fully validated request, ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Help,
    CreateScript {
        path: PathBuf,
        language: LanguageChoice,
    },
    ShowDefault,
    SetDefault {
        name: String,
    },
}

/// Validates the flag/argument combination without touching the filesystem.
pub fn route(invocation: ParsedInvocation) -> Result<Route, RouterError> {
    let ParsedInvocation { flag, argument } = invocation;

    let Some(flag) = flag else {
        // Parsing never yields neither a flag nor an argument.
        return match argument {
            Some(file_name) => Ok(Route::CreateScript {
                path: PathBuf::from(file_name),
                language: LanguageChoice::Stored,
            }),
            None => Err(RouterError::InvalidFlag {
                flag: String::new(),
            }),
        };
    };

    let definition = find_flag(&flag).ok_or_else(|| RouterError::InvalidFlag {
        flag: flag.to_string_lossy().into_owned(),
    })?;
    let flag = flag.to_string_lossy().into_owned();

    match (definition.action, argument) {
        // An argument after --help is accepted and ignored.
        (FlagAction::Help, _) => Ok(Route::Help),
        (FlagAction::Create(language), Some(file_name)) => Ok(Route::CreateScript {
            path: PathBuf::from(file_name),
            language: LanguageChoice::Explicit(language),
        }),
        (FlagAction::Create(_), None) => Err(RouterError::MissingFileName { flag }),
        (FlagAction::ShowDefault, None) => Ok(Route::ShowDefault),
        (FlagAction::ShowDefault, Some(_)) => Err(RouterError::UnexpectedArgument { flag }),
        (FlagAction::SetDefault, Some(name)) => Ok(Route::SetDefault {
            name: name.to_string_lossy().into_owned(),
        }),
        (FlagAction::SetDefault, None) => Err(RouterError::MissingLanguage { flag }),
    }
}

/// Runs a validated route against the given preference store.
pub fn execute(route: Route, store: &dyn ConfigStore) -> Result<()> {
    log::debug!("Executing route: {:?}", route);
    match route {
        Route::Help => handlers::help::handle(store),
        Route::CreateScript {
            path,
            language: LanguageChoice::Explicit(language),
        } => handlers::create::handle(&path, language),
        Route::CreateScript {
            path,
            language: LanguageChoice::Stored,
        } => handlers::create::handle_with_default(&path, store),
        Route::ShowDefault => handlers::show_default::handle(store),
        Route::SetDefault { name } => handlers::set_default::handle(&name, store),
    }
}

/// The main application dispatcher: raw tokens in, side effects out.
pub fn dispatch(tokens: &[OsString], store: &dyn ConfigStore) -> Result<()> {
    log::debug!("Dispatching args: {:?}", tokens);
    let invocation = args::parse_invocation(tokens)?;
    let route = route(invocation)?;
    execute(route, store)
}

use clap::{CommandFactory, Parser};
use std::env;
use std::ffi::OsString;

pub mod args;
pub mod dispatcher;
pub mod handlers;

/// Renders the help screen for the given default language.
///
/// The localized template carries semantic tags like `<cmd>` which are
/// swapped for ANSI styles here, or dropped when colors are disabled.
pub fn render_help(default_language: &str) -> String {
    let use_colors = colored::control::SHOULD_COLORIZE.should_colorize();

    let title = if use_colors { "\x1b[32m" } else { "" }; // Green
    let hl = if use_colors { "\x1b[1;36m" } else { "" }; // Bold Cyan
    let cmd = if use_colors { "\x1b[36m" } else { "" }; // Cyan
    let group = if use_colors { "\x1b[1;33m" } else { "" }; // Bold Yellow
    let dim = if use_colors { "\x1b[2m" } else { "" };
    let reset = if use_colors { "\x1b[0m" } else { "" };

    let command = Cli::command();
    let banner = format!(
        t!("help.banner"),
        version = command.get_version().unwrap_or(env!("CARGO_PKG_VERSION")),
        default = default_language
    );

    format!("{}\n{}", banner, t!("help.template"))
        .replace("<title>", title)
        .replace("</title>", reset)
        .replace("<hl>", hl)
        .replace("</hl>", reset)
        .replace("<cmd>", cmd)
        .replace("</cmd>", reset)
        .replace("<group>", group)
        .replace("</group>", reset)
        .replace("<dim>", dim)
        .replace("</dim>", reset)
}

/// nsid: create a new script with the right shebang, ready to run.
///
/// Clap only describes the program (name, version, about) here. The tokens
/// are never parsed by it: `--` and non UTF-8 file names must reach
/// [`dispatcher::dispatch`] untouched, see [`invocation_tokens`].
#[derive(Parser, Debug)]
#[command(
    name = "nsid",
    author,
    version,
    about,
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
pub struct Cli {}

/// The tokens after the program name, exactly as the OS passed them.
pub fn invocation_tokens() -> Vec<OsString> {
    tokens_from(env::args_os())
}

/// Drops the program name from a full argument vector.
pub fn tokens_from(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    args.into_iter().skip(1).collect()
}

// src/bin/nsid.rs

use nsid::{
    cli::{self, dispatcher},
    core::{config_store::FileConfigStore, report},
};

/// The main entry point of `nsid`.
/// It sets up logging, collects the raw tokens, dispatches them, and is the
/// only place that turns an error into a non-zero exit status.
fn main() {
    env_logger::init();

    let tokens = cli::invocation_tokens();
    let store = FileConfigStore::from_env();

    if let Err(e) = dispatcher::dispatch(&tokens, &store) {
        log::debug!("Invocation failed: {:?}", e);
        report::error(e);
        std::process::exit(1);
    }
}

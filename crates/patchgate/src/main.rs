//! Patchgate CLI - thin front-end over the patch decision engine.
//!
//! Reads two versions of a text artifact, asks the engine whether the
//! update ships as a patch or a full download, and prints the result as a
//! single JSON record on stdout. Size-based rejection is a normal outcome
//! and exits 0; only read/write failures exit non-zero.
//!
//! # Examples
//!
//! ```bash
//! # Decide, printing the result record
//! patchgate old-bundle.js new-bundle.js
//!
//! # Persist the accepted patch into ./patches and include it inline
//! patchgate old-bundle.js new-bundle.js -o patches --inline
//!
//! # Tighter gate for constrained clients
//! patchgate old.txt new.txt --threshold 0.6
//! ```

use std::path::Path;

use clap::Parser;

use patchgate_engine::{EngineError, PatchEngine};

mod args;
mod response;

use args::Args;
use response::PatchResponse;

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let (response, code) = match run(&args) {
        Ok(response) => (response, 0),
        Err(err) => (PatchResponse::from_error(format!("{:#}", err)), 1),
    };
    emit(&response, args.pretty);
    std::process::exit(code);
}

/// Read both inputs and run the engine once.
fn run(args: &Args) -> anyhow::Result<PatchResponse> {
    let old_text = read_input(&args.old)?;
    let new_text = read_input(&args.new)?;
    tracing::debug!(
        old = %args.old.display(),
        new = %args.new.display(),
        "inputs read"
    );

    let engine = PatchEngine::new(args.engine_config());
    let outcome = engine.evaluate(&old_text, &new_text, args.output.as_deref())?;
    Ok(PatchResponse::from(outcome))
}

fn read_input(path: &Path) -> Result<String, EngineError> {
    std::fs::read_to_string(path).map_err(|source| EngineError::InputUnreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Print the wire record on stdout; logs go to stderr.
fn emit(response: &PatchResponse, pretty: bool) {
    let rendered = if pretty {
        serde_json::to_string_pretty(response)
    } else {
        serde_json::to_string(response)
    };
    match rendered {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("Error: failed to serialize result: {}", err);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("patchgate={}", log_level).parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

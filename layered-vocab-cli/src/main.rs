//! Interactive vocabulary journal.
//!
//! Asks for a language and a journal entry, extracts the entry's distinct
//! normalized words and appends the unseen ones to the language's index.
//!
//! # Usage
//!
//! ```bash
//! # Prompt for everything
//! layered-vocab
//!
//! # Spanish entry, keep two names, list the words
//! layered-vocab --language 2 --except Ana García --full
//!
//! # Try an entry without touching the index
//! RUST_LOG=layered_vocab=debug layered-vocab --dry-run
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod args;
mod errors;
mod prompt;
mod session;

use args::Args;

fn main() -> ExitCode {
    // Prompts own stdout, logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "layered_vocab=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let stdin = io::stdin();
    let stdout = io::stdout();

    match session::run(&args, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(?err, "session failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

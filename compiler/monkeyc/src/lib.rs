//! Monkey command-line tools.
//!
//! Library half of the `monkey` binary: the interactive token REPL, the
//! `lex` command, and logging setup. Kept as a library so integration tests
//! can drive the same code the binary runs.

use std::sync::Once;

pub mod commands;
mod error;
pub mod repl;

pub use error::CliError;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=monkey_lexer=debug` or `RUST_LOG=trace`.
/// Output goes to stderr so it never mixes with token output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

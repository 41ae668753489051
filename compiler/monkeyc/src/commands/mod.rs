//! Command handlers for the Monkey CLI.
//!
//! Each submodule implements one CLI command. Shared utilities like
//! `read_file` and `write_token` live here in the module root.

use std::io::Write;
use std::path::Path;

use monkey_ir::Token;

use crate::CliError;

mod lex;

pub use lex::lex_file;

/// Read a source file as raw bytes.
///
/// Bytes, not `String`: non-ASCII content must reach the scanner so it can
/// report the offending byte and offset.
pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>, CliError> {
    std::fs::read(path).map_err(|source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Render one token as `{kind: NAME, literal: "text"}`.
pub fn render_token(token: &Token) -> String {
    format!("{{kind: {}, literal: {:?}}}", token.kind, token.literal)
}

/// Write one rendered token per line.
pub(crate) fn write_token(out: &mut impl Write, token: &Token) -> std::io::Result<()> {
    writeln!(out, "{}", render_token(token))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]

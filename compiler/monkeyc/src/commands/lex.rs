//! `lex` command: dump the token stream of a file.

use std::io::Write;
use std::path::Path;

use monkey_lexer::Scanner;
use tracing::debug;

use super::{read_file, write_token};
use crate::CliError;

/// Lex the file at `path` and write its token stream to `out`.
///
/// Nothing is written unless the whole file scans cleanly. Returns the
/// number of tokens, counting the final `EOF`.
pub fn lex_file(path: &Path, out: &mut impl Write) -> Result<usize, CliError> {
    let content = read_file(path)?;
    debug!(path = %path.display(), bytes = content.len(), "lexing file");

    let tokens = Scanner::new(&content)
        .tokens()
        .collect::<Result<Vec<_>, _>>()?;

    writeln!(out, "Tokens for '{}' ({} tokens):", path.display(), tokens.len())?;
    for token in &tokens {
        write!(out, "  ")?;
        write_token(out, token)?;
    }
    Ok(tokens.len())
}

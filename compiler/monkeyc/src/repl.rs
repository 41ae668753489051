//! Read-print loop over the token stream.
//!
//! Reads one line at a time, scans it with a fresh [`Scanner`], and prints
//! every token through `EOF`. An invalid-encoding error is printed in place
//! of the remaining tokens and the loop moves on to the next line.

use std::io::{BufRead, Write};

use monkey_lexer::Scanner;
use tracing::debug;

use crate::commands::write_token;
use crate::CliError;

/// REPL settings.
#[derive(Clone, Debug)]
pub struct ReplConfig {
    /// Written before each line is read.
    pub prompt: String,
    /// Written once at startup, if set.
    pub greeting: Option<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: ">> ".to_string(),
            greeting: None,
        }
    }
}

/// Startup banner, addressed to `user` when known.
pub fn greeting(user: Option<&str>) -> String {
    match user {
        Some(name) if !name.is_empty() => {
            format!("Hello {name}! This is the Monkey programming language!")
        }
        _ => "Hello! This is the Monkey programming language!".to_string(),
    }
}

/// Run the REPL until `input` is exhausted.
///
/// Lines are read as raw bytes so that non-ASCII input reaches the scanner
/// and is reported with its offset instead of failing the read.
pub fn start(
    mut input: impl BufRead,
    mut output: impl Write,
    config: &ReplConfig,
) -> Result<(), CliError> {
    if let Some(greeting) = &config.greeting {
        writeln!(output, "{greeting}")?;
    }

    let mut line = Vec::new();
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            debug!("input closed");
            return Ok(());
        }

        match print_tokens(strip_line_ending(&line), &mut output) {
            Ok(()) => {}
            Err(CliError::Lex(err)) => writeln!(output, "{err}")?,
            Err(err) => return Err(err),
        }
    }
}

/// Print each token of `src` until `EOF` or the first lex error.
fn print_tokens(src: &[u8], output: &mut impl Write) -> Result<(), CliError> {
    for token in Scanner::new(src).tokens() {
        write_token(output, &token?)?;
    }
    Ok(())
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests;

//! Errors surfaced by the command-line tools.

use std::io;
use std::path::PathBuf;

use monkey_lexer::LexError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// A source file could not be read.
    #[error("error reading '{}': {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Writing output or reading interactive input failed.
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Lex(#[from] LexError),
}

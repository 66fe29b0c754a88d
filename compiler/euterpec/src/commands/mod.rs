//! Command handlers for the Euterpe CLI.
//!
//! Each submodule implements one CLI command. Argument errors share the
//! [`UsageError`] type defined here.

mod lex;

pub use lex::{lex_notation, render_tokens, run_lex, LexArgs};

/// A command line the driver cannot act on.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("missing notation to tokenize")]
    MissingNotation,
    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

//! Tokenizer for Euterpean music notation.
//!
//! Every character of a notation string is one musical event:
//!
//! | Characters                          | Token kind          |
//! |-------------------------------------|---------------------|
//! | whitespace (fixed Unicode set)      | `DOUBLE_VOLUME`     |
//! | `A`-`G`                             | `NOTE`              |
//! | `a`-`g`                             | `NOTE` right after a note, else `REST` |
//! | `! i I o O u U ; 0-9` and newline   | `INSTRUMENT_CHANGE` |
//! | `? .`                               | `OCTAVE_CHANGE`     |
//! | other letters `h`-`z`, `H`-`Z`      | `REST`              |
//! | anything else                       | `INVALID`           |
//!
//! Newline is listed as an instrument change but whitespace takes
//! precedence, so it classifies as `DOUBLE_VOLUME`.
//!
//! # Architecture
//!
//! ```text
//! &str → Cursor → Scanner (Ruleset::kind_of, previous kind) → Token → TokenList
//! ```
//!
//! Scanning is a single forward pass. Unrecognized characters stay in the
//! stream as `INVALID` tokens unless [`LexOptions`] says otherwise.
//!
//! # Tracing
//!
//! `tokenize_with` opens a `debug` span per call and emits one `trace`
//! event per token. Enable with `RUST_LOG=euterpe_lexer=trace`.

mod char_set;
mod cursor;
mod lex_error;
mod options;
mod ruleset;
mod scanner;
mod tokenizer;

pub use char_set::{is_notation_whitespace, CharSet};
pub use cursor::Cursor;
pub use euterpe_ir::{Span, Token, TokenKind, TokenList};
pub use lex_error::LexError;
pub use options::{InvalidPolicy, LexOptions};
pub use ruleset::{CharClass, Rule, Ruleset, EUTERPEAN_RULES};
pub use scanner::{ScanState, Scanner};
pub use tokenizer::Tokenizer;

/// Tokenize `input` with the canonical ruleset. Never fails.
pub fn tokenize(input: &str) -> TokenList {
    Tokenizer::new().tokenize(input)
}

/// Tokenize `input` with the canonical ruleset under `options`.
pub fn tokenize_with(input: &str, options: &LexOptions) -> Result<TokenList, LexError> {
    Tokenizer::new().tokenize_with(input, options)
}

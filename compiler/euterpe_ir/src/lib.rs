//! Euterpe IR - token data model
//!
//! This crate contains the data structures shared by the Euterpe lexer and
//! whatever consumes its output:
//! - Spans for source locations
//! - `TokenKind`, the closed set of musical token kinds
//! - `Token` and `TokenList` for lexer output
//!
//! Every type is immutable once built and derives `Clone, Eq, Hash, Debug`,
//! so token streams can be compared, cached, and handed across threads.
//!
//! Enable the `serde` feature to serialize token streams for a downstream
//! score builder. The round-trip test for it lives in `euterpe_lexer`,
//! whose dev-dependencies turn the feature on, so a plain `cargo test`
//! covers it.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::Span;
pub use token::{Token, TokenKind, TokenList};

//! Euterpe command-line driver.
//!
//! The binary is a thin shell over `euterpe_lexer`: it turns arguments into
//! [`LexOptions`](euterpe_lexer::LexOptions), runs the tokenizer, and prints
//! the token stream.
//!
//! # Environment Variables
//!
//! - `RUST_LOG=euterpe_lexer=debug`: one event per tokenize call.
//! - `RUST_LOG=euterpe_lexer=trace`: one event per token (very verbose).

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

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

//! `euterpe lex`: tokenize notation given on the command line.

use std::fmt::Write as _;

use euterpe_lexer::{InvalidPolicy, LexError, LexOptions, TokenList, Tokenizer};

use super::UsageError;

/// Parsed arguments of the `lex` command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexArgs {
    pub options: LexOptions,
    /// Notation text; multiple words are joined with single spaces.
    pub notation: String,
}

impl LexArgs {
    /// Parse the arguments following `lex`.
    ///
    /// Policy flags may appear anywhere; the last one wins. Everything
    /// after `--` is notation, even if it starts with `-`.
    pub fn parse(args: &[String]) -> Result<Self, UsageError> {
        let mut options = LexOptions::default();
        let mut words: Vec<&str> = Vec::new();
        let mut flags_done = false;

        for arg in args {
            if flags_done || !arg.starts_with('-') || arg == "-" {
                words.push(arg);
                continue;
            }
            match arg.as_str() {
                "--" => flags_done = true,
                "--strict" => options.invalid = InvalidPolicy::Reject,
                "--skip-invalid" => options.invalid = InvalidPolicy::Skip,
                "--keep-invalid" => options.invalid = InvalidPolicy::Keep,
                other => return Err(UsageError::UnknownOption(other.to_string())),
            }
        }

        if words.is_empty() {
            return Err(UsageError::MissingNotation);
        }

        Ok(LexArgs {
            options,
            notation: words.join(" "),
        })
    }
}

/// Tokenize the notation and render it for display.
pub fn lex_notation(args: &LexArgs) -> Result<String, LexError> {
    let tokens = Tokenizer::new().tokenize_with(&args.notation, &args.options)?;
    Ok(render_tokens(&tokens))
}

/// Render a token list, one token per line with its span.
pub fn render_tokens(tokens: &TokenList) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Tokens ({}):", tokens.len());
    for token in tokens {
        let _ = writeln!(out, "  {token} @ {}", token.span);
    }
    let invalid = tokens.invalid().count();
    if invalid > 0 {
        let _ = writeln!(out, "{invalid} invalid character(s)");
    }
    out
}

/// Entry point for `euterpe lex <notation>...`.
pub fn run_lex(args: &[String]) {
    let parsed = match LexArgs::parse(args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Usage: euterpe lex [--strict | --skip-invalid] <notation>...");
            std::process::exit(1);
        }
    };
    tracing::debug!(policy = ?parsed.options.invalid, len = parsed.notation.len(), "lex command");

    match lex_notation(&parsed) {
        Ok(rendered) => print!("{rendered}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

//! Euterpe CLI
//!
//! Tokenizes Euterpean music notation.

use euterpec::commands::run_lex;
use euterpec::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: euterpe lex [--strict | --skip-invalid] <notation>...");
                std::process::exit(1);
            }
            run_lex(&args[2..]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Euterpe {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Euterpe notation tokenizer");
    println!();
    println!("Usage: euterpe <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <notation>...    Tokenize notation and display tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --strict            Fail on the first unrecognized character");
    println!("  --skip-invalid      Drop unrecognized characters");
    println!("  --keep-invalid      Keep them as INVALID tokens (default)");
    println!("  --                  Treat the remaining arguments as notation");
    println!();
    println!("Examples:");
    println!("  euterpe lex \"A Bb c!?.\"");
    println!("  euterpe lex --strict \"CDEFGab\"");
    println!("  RUST_LOG=euterpe_lexer=trace euterpe lex \"Aa\"");
}

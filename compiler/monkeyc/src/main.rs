//! Monkey CLI
//!
//! Interactive token REPL and token dump for Monkey source files.

use std::path::Path;

use monkeyc::commands::lex_file;
use monkeyc::repl::{self, ReplConfig};

fn main() {
    monkeyc::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let rest = args.get(2..).unwrap_or_default();

    // No command: drop straight into the REPL.
    let Some(command) = args.get(1) else {
        run_repl(&[]);
        return;
    };

    match command.as_str() {
        "repl" => run_repl(rest),
        "lex" => {
            let Some(path) = rest.first() else {
                eprintln!("Usage: monkey lex <file>");
                std::process::exit(1);
            };
            let stdout = std::io::stdout();
            if let Err(err) = lex_file(Path::new(path), &mut stdout.lock()) {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Monkey {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn run_repl(options: &[String]) {
    let mut config = ReplConfig::default();
    for arg in options {
        if let Some(prompt) = arg.strip_prefix("--prompt=") {
            config.prompt = prompt.to_string();
        } else {
            eprintln!("error: unknown repl option '{arg}'");
            eprintln!("Usage: monkey repl [--prompt=<text>]");
            std::process::exit(1);
        }
    }

    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .ok();
    config.greeting = Some(repl::greeting(user.as_deref()));

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(err) = repl::start(stdin.lock(), stdout.lock(), &config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Monkey language tools");
    println!();
    println!("Usage: monkey [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl                 Start the token REPL (default)");
    println!("  lex <file>           Tokenize a file and display tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("REPL options:");
    println!("  --prompt=<text>      Prompt shown before each line (default: \">> \")");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=monkey_lexer=trace monkey lex main.monkey");
}

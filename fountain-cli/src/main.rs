//! Command-line interface for the Fountain token pipeline
//! This binary runs the repair pipeline over a screenplay file and prints
//! the corrected token stream for inspection.
//!
//! Usage:
//!   fountain `<path>`                      - print tokens as JSON
//!   fountain `<path>` --format scopes      - print line/scope/text rows

use clap::{Arg, Command};

use fountain_parser::fountain::token::{LineRef, Token, EXTENSION_SCOPE};
use fountain_parser::fountain::transforms::standard::tokenize_document;

fn main() {
    let matches = Command::new("fountain")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect the corrected token stream of a Fountain screenplay")
        .arg(
            Arg::new("path")
                .help("Path to the screenplay file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: token-json or scopes")
                .default_value("token-json"),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").expect("path is required");
    let format = matches.get_one::<String>("format").expect("format has a default");

    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Cannot read {}: {}", path, e);
        std::process::exit(1);
    });

    let tokens = tokenize_document(&source).unwrap_or_else(|e| {
        eprintln!("Tokenization error: {}", e);
        std::process::exit(1);
    });

    match format.as_str() {
        "token-json" => {
            let json = serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| {
                eprintln!("Error formatting tokens: {}", e);
                std::process::exit(1);
            });
            println!("{}", json);
        }
        "scopes" => print_scopes(&tokens),
        other => {
            eprintln!("Format '{}' not supported", other);
            eprintln!("Available formats: token-json, scopes");
            std::process::exit(1);
        }
    }
}

/// One row per located token: line, scope identifier, display text. A cue
/// with an extension gets a second row for the annotation.
fn print_scopes(tokens: &[Token]) {
    for token in tokens {
        let line = match token.line {
            LineRef::Located(ix) => ix,
            LineRef::Unresolved => continue,
        };
        println!("{}\t{}\t{}", line, token.scope(), token.text);
        if let Some(extension) = &token.extension {
            println!("{}\t{}\t{}", line, EXTENSION_SCOPE, extension);
        }
    }
}

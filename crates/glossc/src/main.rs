//! Gloss CLI
//!
//! Pretty-prints a JSON document from a file or stdin.

use std::io::Read;

use gloss_fmt::{display_with_config, to_single_line, LayoutConfig, DEFAULT_MAX_WIDTH};
use glossc::{init_tracing, json};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let mut max_width = DEFAULT_MAX_WIDTH;
    let mut indent = 4usize;
    let mut single_line = false;
    let mut path: Option<String> = None;

    for arg in args.iter().skip(1) {
        if let Some(text) = arg.strip_prefix("--width=") {
            match text.parse() {
                Ok(n) => max_width = n,
                Err(_) => {
                    eprintln!("error: invalid width '{text}'");
                    std::process::exit(1);
                }
            }
        } else if let Some(text) = arg.strip_prefix("--indent=") {
            match text.parse() {
                Ok(n) => indent = n,
                Err(_) => {
                    eprintln!("error: invalid indent '{text}'");
                    std::process::exit(1);
                }
            }
        } else if arg == "--single-line" {
            single_line = true;
        } else if arg == "--help" || arg == "-h" {
            print_usage();
            return;
        } else if arg.starts_with('-') {
            eprintln!("error: unknown option '{arg}'");
            print_usage();
            std::process::exit(1);
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            eprintln!("error: more than one input file given");
            std::process::exit(1);
        }
    }

    let source = match &path {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                eprintln!("error: cannot read '{path}': {err}");
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(err) = std::io::stdin().read_to_string(&mut buffer) {
                eprintln!("error: cannot read stdin: {err}");
                std::process::exit(1);
            }
            buffer
        }
    };

    let parsed: serde_json::Value = match serde_json::from_str(&source) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: invalid JSON: {err}");
            std::process::exit(1);
        }
    };

    let value = json::to_value(&parsed);

    if single_line {
        println!("{}", to_single_line(&value));
    } else {
        let config = LayoutConfig {
            max_width,
            indent_unit: " ".repeat(indent),
        };
        display_with_config(&value, &config);
    }
}

fn print_usage() {
    eprintln!("Usage: gloss [OPTIONS] [FILE]");
    eprintln!();
    eprintln!("Pretty-print a JSON document from FILE, or stdin if no file is given.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --width=<n>     Maximum line width (default: 78)");
    eprintln!("  --indent=<n>    Spaces per indentation level (default: 4)");
    eprintln!("  --single-line   Render everything on one line");
    eprintln!("  -h, --help      Show this help");
}

// domtwist-generate: generate domain variations with the full engine roster.
//
// Reads domains from stdin (one per line) or from positional arguments and
// prints one candidate domain per line.
//
// Usage:
//   domtwist-generate [OPTIONS] [DOMAIN...]
//
// Options:
//   -e, --engines LIST     Comma-separated engine names (default: all)
//   -D, --dictionary FILE  JSON dictionary replacing the built-in one
//   -h, --help             Print help

use std::io::{self, Write};

use domtwist::{Dictionary, EngineSet, GenerateOptions};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if domtwist_cli::wants_help(&args) {
        println!("domtwist-generate: generate domain variations.");
        println!();
        println!("Usage: domtwist-generate [OPTIONS] [DOMAIN...]");
        println!();
        println!("If DOMAIN arguments are given, generates for each domain.");
        println!("Otherwise reads domains from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -e, --engines LIST     Comma-separated engine names (default: all)");
        println!("  -D, --dictionary FILE  JSON dictionary replacing the built-in one");
        println!("  -h, --help             Print this help");
        println!();
        println!("Engines: {}", domtwist_cli::engine_names().join(", "));
        return;
    }

    let mut engines = EngineSet::all();
    let mut dictionary_path: Option<String> = None;
    let mut domains: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "-e" | "--engines" => {
                let Some(value) = args.get(i + 1) else {
                    domtwist_cli::fatal("--engines requires a value");
                };
                engines = domtwist_cli::parse_engine_list(value);
                skip_next = true;
            }
            "-D" | "--dictionary" => {
                let Some(value) = args.get(i + 1) else {
                    domtwist_cli::fatal("--dictionary requires a value");
                };
                dictionary_path = Some(value.clone());
                skip_next = true;
            }
            _ if !arg.starts_with('-') => domains.push(arg.clone()),
            _ => domtwist_cli::fatal(&format!("unknown option {arg}")),
        }
    }

    let dictionary: Option<Dictionary> = dictionary_path.map(|path| {
        domtwist::load_from_file(&path).unwrap_or_else(|e| domtwist_cli::fatal(&e.to_string()))
    });
    let options = GenerateOptions {
        engines,
        dictionary: dictionary.as_ref(),
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    domtwist_cli::for_each_input(&domains, |domain| {
        for candidate in domtwist::generate_with(domain, &options) {
            let _ = writeln!(out, "{candidate}");
        }
    });
}

// domtwist-puny: punycode-encode or decode domain labels.
//
// Usage:
//   domtwist-puny [--decode] [LABEL...]

use std::io::{self, Write};

use domtwist_puny::{decode, to_ascii};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if domtwist_cli::wants_help(&args) {
        println!("domtwist-puny: punycode-encode or decode domain labels.");
        println!();
        println!("Usage: domtwist-puny [OPTIONS] [LABEL...]");
        println!();
        println!("If LABEL arguments are given, converts each label.");
        println!("Otherwise reads labels from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --decode  Decode punycode labels back to Unicode");
        println!("  -h, --help    Print this help");
        return;
    }

    let mut decoding = false;
    let mut labels: Vec<String> = Vec::new();

    for arg in &args {
        match arg.as_str() {
            "-d" | "--decode" => decoding = true,
            _ if !arg.starts_with('-') => labels.push(arg.clone()),
            _ => domtwist_cli::fatal(&format!("unknown option {arg}")),
        }
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    domtwist_cli::for_each_input(&labels, |label| {
        let result = if decoding { decode(label) } else { to_ascii(label) };
        match result {
            Ok(converted) => {
                let _ = writeln!(out, "{converted}");
            }
            Err(e) => eprintln!("error: {label}: {e}"),
        }
    });
}

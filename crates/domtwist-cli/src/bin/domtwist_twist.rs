// domtwist-twist: quick curated variation pass for a domain.
//
// Usage:
//   domtwist-twist [--no-tld-swap] [DOMAIN...]

use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if domtwist_cli::wants_help(&args) {
        println!("domtwist-twist: quick curated domain variation pass.");
        println!();
        println!("Usage: domtwist-twist [OPTIONS] [DOMAIN...]");
        println!();
        println!("If DOMAIN arguments are given, twists each domain.");
        println!("Otherwise reads domains from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -T, --no-tld-swap  Skip the popular-TLD swap stage");
        println!("  -h, --help         Print this help");
        return;
    }

    let mut include_tld_swap = true;
    let mut domains: Vec<String> = Vec::new();

    for arg in &args {
        match arg.as_str() {
            "-T" | "--no-tld-swap" => include_tld_swap = false,
            _ if !arg.starts_with('-') => domains.push(arg.clone()),
            _ => domtwist_cli::fatal(&format!("unknown option {arg}")),
        }
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    domtwist_cli::for_each_input(&domains, |domain| {
        for candidate in domtwist::twist(domain, include_tld_swap) {
            let _ = writeln!(out, "{candidate}");
        }
    });
}

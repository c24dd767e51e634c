// domtwist-cli: shared utilities for the command-line tools.

use std::io::BufRead;
use std::process;

use domtwist::{Engine, EngineSet};

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Parse a comma-separated engine list (`omission,glyph,tld-fusion`) into
/// an [`EngineSet`]. Unknown names are fatal; the selection flag, unlike a
/// library bitmask, is typed by a person.
pub fn parse_engine_list(list: &str) -> EngineSet {
    let mut set = EngineSet::empty();
    for name in list.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        match Engine::from_name(name) {
            Some(engine) => set = set.with(engine),
            None => fatal(&format!(
                "unknown engine {name:?} (known: {})",
                engine_names().join(", ")
            )),
        }
    }
    if set.is_empty() {
        fatal("engine list selects no engines");
    }
    set
}

/// Stable names of every engine, in orchestration order.
pub fn engine_names() -> Vec<&'static str> {
    Engine::ALL.iter().map(|e| e.name()).collect()
}

/// Run `f` for each positional argument, or for each non-empty stdin line
/// when no positional arguments were given.
pub fn for_each_input<F: FnMut(&str)>(words: &[String], mut f: F) {
    if words.is_empty() {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if !word.is_empty() {
                f(word);
            }
        }
    } else {
        for word in words {
            f(word);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_engine_lists() {
        let set = parse_engine_list("omission, glyph");
        assert!(set.contains(Engine::Omission));
        assert!(set.contains(Engine::Glyph));
        assert!(!set.contains(Engine::TldFusion));
    }

    #[test]
    fn engine_names_cover_the_roster() {
        assert_eq!(engine_names().len(), Engine::ALL.len());
    }
}

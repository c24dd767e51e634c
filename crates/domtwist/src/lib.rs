//! Lexical and visual domain name variations for typosquatting defense.
//!
//! Given a domain, this crate produces the look-alike and typo-adjacent
//! candidates an attacker might register: a fixed catalog of independent,
//! pure transformation engines composed by an orchestrator that splits the
//! registrable label from its public suffix, runs the enabled engines,
//! reattaches suffixes, and deduplicates. The whole pipeline is
//! synchronous, CPU-bound, and free of network I/O; concurrent calls share
//! only immutable tables.
//!
//! # Architecture
//!
//! - [`character`] -- code-point-safe splicing helpers
//! - [`tables`] -- static substitution tables
//! - [`engines`] -- the individual variation engines, each usable standalone
//! - [`dictionary`] -- categorized word lists for the combination engine
//! - [`sources`] -- dictionary loading from external JSON
//! - [`suffix`] -- the injected suffix-parsing capability
//! - [`orchestrator`] -- engine selection and the [`generate`]/[`twist`]
//!   entry points
//!
//! ```
//! let variations = domtwist::generate("paypal.com");
//! assert!(variations.contains(&"paypal.net".to_string()));
//! assert!(!variations.contains(&"paypal.com".to_string()));
//! ```

pub mod character;
pub mod dictionary;
pub mod engines;
pub mod orchestrator;
pub mod sources;
pub mod suffix;
pub mod tables;

pub use dictionary::{Dictionary, DictionaryError};
pub use orchestrator::{
    Engine, EngineSet, GenerateOptions, generate, generate_with, generate_with_parser, twist,
};
pub use sources::{SourceError, from_json_str, load_from_file};
pub use suffix::{DomainParts, NaiveSuffixParser, SuffixParser};

// Re-export the codec so callers can reach it without a second dependency.
pub use domtwist_puny::{PunyError, decode, encode, to_ascii};

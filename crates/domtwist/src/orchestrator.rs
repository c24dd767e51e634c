// Orchestration: split the input domain, run the enabled engines in a
// fixed declared order, reattach suffixes, and deduplicate.
//
// The result is a set materialized as a sequence: every element is unique
// by exact string equality, no case or encoding canonicalization is
// applied before deduplication, and the unmodified input domain is never
// part of the result. Output order is deterministic but not part of the
// contract.

use hashbrown::HashSet;

use crate::dictionary::Dictionary;
use crate::engines;
use crate::suffix::{DomainParts, NaiveSuffixParser, SuffixParser};
use crate::tables;

/// Suffix assumed when the parser cannot split the input.
const FALLBACK_SUFFIX: &str = "com";

/// Identifier for each variation engine.
///
/// The orchestrator iterates [`Engine::ALL`] in its declared order; adding
/// an engine means adding a variant here and an arm in the dispatch below,
/// so the roster cannot drift from the selection type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Engine {
    VowelSwap,
    Glyph,
    UnicodeHomoglyph,
    TargetedHomoglyph,
    Omission,
    Duplication,
    Addition,
    Replacement,
    Bitsquatting,
    Hyphenation,
    SubdomainSplit,
    PositionSwap,
    NumberToLetter,
    CommonMisspellings,
    KeyboardShift,
    LetterRepetition,
    LetterSwap,
    CommonTypo,
    Dictionary,
    TldFusion,
}

impl Engine {
    /// Every engine, in orchestration order.
    pub const ALL: [Engine; 20] = [
        Engine::VowelSwap,
        Engine::Glyph,
        Engine::UnicodeHomoglyph,
        Engine::TargetedHomoglyph,
        Engine::Omission,
        Engine::Duplication,
        Engine::Addition,
        Engine::Replacement,
        Engine::Bitsquatting,
        Engine::Hyphenation,
        Engine::SubdomainSplit,
        Engine::PositionSwap,
        Engine::NumberToLetter,
        Engine::CommonMisspellings,
        Engine::KeyboardShift,
        Engine::LetterRepetition,
        Engine::LetterSwap,
        Engine::CommonTypo,
        Engine::Dictionary,
        Engine::TldFusion,
    ];

    /// Stable lowercase identifier, used by CLI engine selection.
    pub fn name(self) -> &'static str {
        match self {
            Engine::VowelSwap => "vowel-swap",
            Engine::Glyph => "glyph",
            Engine::UnicodeHomoglyph => "unicode-homoglyph",
            Engine::TargetedHomoglyph => "targeted-homoglyph",
            Engine::Omission => "omission",
            Engine::Duplication => "duplication",
            Engine::Addition => "addition",
            Engine::Replacement => "replacement",
            Engine::Bitsquatting => "bitsquatting",
            Engine::Hyphenation => "hyphenation",
            Engine::SubdomainSplit => "subdomain-split",
            Engine::PositionSwap => "position-swap",
            Engine::NumberToLetter => "number-to-letter",
            Engine::CommonMisspellings => "common-misspellings",
            Engine::KeyboardShift => "keyboard-shift",
            Engine::LetterRepetition => "letter-repetition",
            Engine::LetterSwap => "letter-swap",
            Engine::CommonTypo => "common-typo",
            Engine::Dictionary => "dictionary",
            Engine::TldFusion => "tld-fusion",
        }
    }

    /// Look an engine up by its stable identifier.
    pub fn from_name(name: &str) -> Option<Engine> {
        Engine::ALL.into_iter().find(|e| e.name() == name)
    }

    const fn bit(self) -> u32 {
        1 << self as u32
    }
}

/// A set of engines to run.
///
/// Backed by a bitmask; bits beyond the known engines are ignored, so a
/// mask built against a newer roster stays forward compatible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSet(u32);

impl EngineSet {
    const KNOWN: u32 = (1 << Engine::ALL.len()) - 1;

    /// No engines.
    pub const fn empty() -> Self {
        EngineSet(0)
    }

    /// Every engine. This is the default selection.
    pub const fn all() -> Self {
        EngineSet(Self::KNOWN)
    }

    /// Build a set from a raw bitmask; unrecognized bits are dropped.
    pub const fn from_bits(bits: u32) -> Self {
        EngineSet(bits & Self::KNOWN)
    }

    #[must_use]
    pub const fn with(self, engine: Engine) -> Self {
        EngineSet(self.0 | engine.bit())
    }

    #[must_use]
    pub const fn without(self, engine: Engine) -> Self {
        EngineSet(self.0 & !engine.bit())
    }

    pub const fn contains(self, engine: Engine) -> bool {
        self.0 & engine.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl Default for EngineSet {
    fn default() -> Self {
        EngineSet::all()
    }
}

impl FromIterator<Engine> for EngineSet {
    fn from_iter<I: IntoIterator<Item = Engine>>(iter: I) -> Self {
        iter.into_iter()
            .fold(EngineSet::empty(), EngineSet::with)
    }
}

/// Options for [`generate_with`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions<'a> {
    /// Engines to run; defaults to all of them.
    pub engines: EngineSet,
    /// Dictionary for the dictionary engine. `None` selects the built-in
    /// default; a supplied dictionary fully replaces it, never merges.
    pub dictionary: Option<&'a Dictionary>,
}

/// Generate variations of `domain` with every engine enabled.
pub fn generate(domain: &str) -> Vec<String> {
    generate_with(domain, &GenerateOptions::default())
}

/// Generate variations of `domain` with explicit options.
pub fn generate_with(domain: &str, options: &GenerateOptions<'_>) -> Vec<String> {
    generate_with_parser(domain, options, &NaiveSuffixParser)
}

/// Generate variations of `domain` using a caller-supplied suffix parser.
pub fn generate_with_parser(
    domain: &str,
    options: &GenerateOptions<'_>,
    parser: &dyn SuffixParser,
) -> Vec<String> {
    let DomainParts { label, suffix } = split_or_fallback(domain, parser);
    let original = format!("{label}.{suffix}");

    let default_dictionary;
    let dictionary = match options.dictionary {
        Some(dictionary) => dictionary,
        None => {
            default_dictionary = Dictionary::default();
            &default_dictionary
        }
    };

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    let mut add = |candidate: String| {
        if candidate != original && candidate != domain && seen.insert(candidate.clone()) {
            out.push(candidate);
        }
    };

    for engine in Engine::ALL {
        if !options.engines.contains(engine) {
            continue;
        }
        match engine {
            // These two emit fully-qualified domains themselves.
            Engine::Dictionary => {
                for candidate in engines::dictionary(&label, &suffix, dictionary) {
                    add(candidate);
                }
            }
            Engine::TldFusion => {
                for candidate in engines::tld_fusion(&label, &suffix) {
                    add(candidate);
                }
            }
            _ => {
                for candidate in run_label_engine(engine, &label) {
                    add(format!("{candidate}.{suffix}"));
                }
            }
        }
    }
    out
}

/// Lightweight variation pass for low-latency callers: a fixed inline
/// subset of the engine roster run directly against label and suffix.
pub fn twist(domain: &str, include_tld_swap: bool) -> Vec<String> {
    let DomainParts { label, suffix } = split_or_fallback(domain, &NaiveSuffixParser);
    let original = format!("{label}.{suffix}");
    let chars: Vec<char> = label.chars().collect();

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    let mut add = |candidate: String| {
        if candidate != original && candidate != domain && seen.insert(candidate.clone()) {
            out.push(candidate);
        }
    };

    // Single-pass vowel swap.
    for (i, &c) in chars.iter().enumerate() {
        for &vowel in tables::vowel_alternatives(c.to_ascii_lowercase()) {
            add(format!(
                "{}.{suffix}",
                crate::character::splice(&chars, i, i + 1, vowel)
            ));
        }
    }

    // Leetspeak digit substitutions.
    for (i, &c) in chars.iter().enumerate() {
        for &digit in tables::leet_substitutions(c.to_ascii_lowercase()) {
            add(format!(
                "{}.{suffix}",
                crate::character::splice(&chars, i, i + 1, &digit.to_string())
            ));
        }
    }

    // Fixed subdomain prefixes.
    for prefix in tables::SUBDOMAIN_PREFIXES {
        add(format!("{prefix}.{label}.{suffix}"));
    }

    for candidate in engines::hyphenation(&label) {
        add(format!("{candidate}.{suffix}"));
    }
    for candidate in engines::omission(&label) {
        add(format!("{candidate}.{suffix}"));
    }
    for candidate in engines::duplication(&label) {
        add(format!("{candidate}.{suffix}"));
    }

    if include_tld_swap {
        for &tld in tables::TWIST_TLDS {
            if tld != suffix {
                add(format!("{label}.{tld}"));
            }
        }
    }

    out
}

fn split_or_fallback(domain: &str, parser: &dyn SuffixParser) -> DomainParts {
    parser.parse(domain).unwrap_or_else(|| DomainParts {
        label: domain.to_string(),
        suffix: FALLBACK_SUFFIX.to_string(),
    })
}

fn run_label_engine(engine: Engine, label: &str) -> Vec<String> {
    match engine {
        Engine::VowelSwap => engines::vowel_swap(label),
        Engine::Glyph => engines::glyph(label),
        Engine::UnicodeHomoglyph => engines::unicode_homoglyph(label),
        Engine::TargetedHomoglyph => engines::targeted_homoglyph(label),
        Engine::Omission => engines::omission(label),
        Engine::Duplication => engines::duplication(label),
        Engine::Addition => engines::addition(label),
        Engine::Replacement => engines::replacement(label),
        Engine::Bitsquatting => engines::bitsquatting(label),
        Engine::Hyphenation => engines::hyphenation(label),
        Engine::SubdomainSplit => engines::subdomain_split(label),
        Engine::PositionSwap => engines::position_swap(label),
        Engine::NumberToLetter => engines::number_to_letter(label),
        Engine::CommonMisspellings => engines::common_misspellings(label),
        Engine::KeyboardShift => engines::keyboard_shift(label),
        Engine::LetterRepetition => engines::letter_repetition(label),
        Engine::LetterSwap => engines::letter_swap(label),
        Engine::CommonTypo => engines::common_typo(label),
        Engine::Dictionary | Engine::TldFusion => unreachable!("handled by the caller"),
    }
}

// Variation engines: each applies one class of lexical or visual
// transformation to a registrable label, producing candidate labels an
// attacker might plausibly register.
//
// Engines are pure and total: they allocate fresh strings, never mutate
// their input, return an empty sequence for an empty label, and never
// panic on well-formed input. Candidates are unsuffixed labels except for
// [`dictionary`] and [`tld_fusion`], which emit fully-qualified domains.

use hashbrown::HashSet;

use crate::character::{ASCII_ALPHANUMERIC, is_ldh, splice};
use crate::dictionary::Dictionary;
use crate::tables;

/// Append `candidate` unless an equal string was already produced.
fn push_unique(out: &mut Vec<String>, seen: &mut HashSet<String>, candidate: String) {
    if seen.insert(candidate.clone()) {
        out.push(candidate);
    }
}

/// Shared driver for the table-driven substitution engines.
///
/// Pass 1 substitutes each mapped character once; pass 2 applies a second
/// substitution on top of every pass-1 candidate, skipping replacements
/// equal to the character they would replace. The combined output is
/// deduplicated in insertion order.
fn two_pass_substitution(
    label: &str,
    table: fn(char) -> &'static [&'static str],
) -> Vec<String> {
    let chars: Vec<char> = label.chars().collect();
    let mut first: Vec<String> = Vec::new();
    for (i, &c) in chars.iter().enumerate() {
        for &alt in table(c) {
            first.push(splice(&chars, i, i + 1, alt));
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for candidate in &first {
        push_unique(&mut out, &mut seen, candidate.clone());
    }
    for candidate in &first {
        let candidate_chars: Vec<char> = candidate.chars().collect();
        for (i, &c) in candidate_chars.iter().enumerate() {
            for &alt in table(c) {
                if alt.chars().eq(std::iter::once(c)) {
                    continue;
                }
                push_unique(&mut out, &mut seen, splice(&candidate_chars, i, i + 1, alt));
            }
        }
    }
    out
}

/// Run a candidate through the punycode encoder for transmission.
///
/// Encoder failures are non-fatal: the candidate passes through unencoded
/// with a logged diagnostic so one bad code point cannot sink the batch.
fn encode_or_pass(candidate: String) -> String {
    match domtwist_puny::to_ascii(&candidate) {
        Ok(encoded) => encoded,
        Err(e) => {
            log::warn!("punycode encoding failed for {candidate:?}: {e}");
            candidate
        }
    }
}

// ---------------------------------------------------------------------------
// Substitution engines
// ---------------------------------------------------------------------------

/// Substitute every vowel with each of the other vowels, in one and two
/// positions.
pub fn vowel_swap(label: &str) -> Vec<String> {
    two_pass_substitution(label, tables::vowel_alternatives)
}

/// Substitute visually similar ASCII characters and digraphs.
pub fn glyph(label: &str) -> Vec<String> {
    two_pass_substitution(label, tables::glyph_lookalikes)
}

/// Substitute Unicode look-alikes from the full-alphabet table, then encode
/// every candidate into its ASCII-compatible form.
pub fn unicode_homoglyph(label: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for candidate in two_pass_substitution(label, tables::unicode_lookalikes) {
        push_unique(&mut out, &mut seen, encode_or_pass(candidate));
    }
    out
}

/// Substitute homoglyphs from the curated table, single pass.
///
/// Matching is case-insensitive; the surrounding characters keep their
/// original casing. Candidates that fail to encode are skipped with a
/// logged diagnostic.
pub fn targeted_homoglyph(label: &str) -> Vec<String> {
    let chars: Vec<char> = label.chars().collect();
    let mut out = Vec::new();
    for (i, &c) in chars.iter().enumerate() {
        for &alt in tables::targeted_homoglyphs(c.to_ascii_lowercase()) {
            let candidate = splice(&chars, i, i + 1, alt);
            match domtwist_puny::to_ascii(&candidate) {
                Ok(encoded) => out.push(encoded),
                Err(e) => log::warn!("punycode encoding failed for {candidate:?}: {e}"),
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Structural engines
// ---------------------------------------------------------------------------

/// Delete each character position once.
pub fn omission(label: &str) -> Vec<String> {
    let chars: Vec<char> = label.chars().collect();
    (0..chars.len())
        .map(|i| splice(&chars, i, i + 1, ""))
        .collect()
}

/// Double each character in place, one position at a time.
pub fn duplication(label: &str) -> Vec<String> {
    let chars: Vec<char> = label.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| splice(&chars, i, i, &c.to_string()))
        .collect()
}

/// Insert each of the 36 alphanumerics at every position strictly after
/// index 0. Produces exactly `(len - 1) * 36` candidates.
pub fn addition(label: &str) -> Vec<String> {
    let chars: Vec<char> = label.chars().collect();
    let mut out = Vec::new();
    for i in 1..chars.len() {
        for &c in ASCII_ALPHANUMERIC {
            out.push(splice(&chars, i, i, &c.to_string()));
        }
    }
    out
}

/// Replace the character at every position, index 0 included, with each of
/// the 36 alphanumerics. Identity replacements are filtered so the engine
/// never reproduces its input.
pub fn replacement(label: &str) -> Vec<String> {
    let chars: Vec<char> = label.chars().collect();
    let mut out = Vec::new();
    for (i, &original) in chars.iter().enumerate() {
        for &c in ASCII_ALPHANUMERIC {
            if c == original {
                continue;
            }
            out.push(splice(&chars, i, i + 1, &c.to_string()));
        }
    }
    out
}

/// Simulate single-bit memory or transmission errors by shifting each
/// character's code point by ±1..=8, keeping only substitutions that stay
/// within the hostname alphabet `[a-z0-9-]`.
pub fn bitsquatting(label: &str) -> Vec<String> {
    let chars: Vec<char> = label.chars().collect();
    let mut out = Vec::new();
    for (i, &c) in chars.iter().enumerate() {
        let cp = c as u32;
        for magnitude in 1..=8u32 {
            for shifted in [cp.checked_add(magnitude), cp.checked_sub(magnitude)] {
                let Some(shifted_char) = shifted.and_then(char::from_u32) else {
                    continue;
                };
                if is_ldh(shifted_char) {
                    out.push(splice(&chars, i, i + 1, &shifted_char.to_string()));
                }
            }
        }
    }
    out
}

/// Insert a hyphen at each internal position. Produces `len - 1` candidates.
pub fn hyphenation(label: &str) -> Vec<String> {
    let chars: Vec<char> = label.chars().collect();
    (1..chars.len()).map(|i| splice(&chars, i, i, "-")).collect()
}

/// Insert a dot at each internal position, producing subdomain-shaped
/// candidates (`pay.pal`).
pub fn subdomain_split(label: &str) -> Vec<String> {
    let chars: Vec<char> = label.chars().collect();
    (1..chars.len()).map(|i| splice(&chars, i, i, ".")).collect()
}

/// Copy any character into any position, in two stages: stage 0 inserts
/// without consuming, stage 1 consumes the character at the splice point.
/// Covers classic adjacent and distant transposition typos. Candidates
/// equal to the input are filtered.
pub fn position_swap(label: &str) -> Vec<String> {
    let chars: Vec<char> = label.chars().collect();
    let mut out = Vec::new();
    for stage in 0..2usize {
        for a in 0..chars.len() {
            for b in 0..chars.len() {
                let candidate = splice(&chars, a, a + stage, &chars[b].to_string());
                if candidate != label {
                    out.push(candidate);
                }
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Typo-pattern engines
// ---------------------------------------------------------------------------

/// Substitute each digit with the letter it most plausibly stands for,
/// one substitution per candidate.
pub fn number_to_letter(label: &str) -> Vec<String> {
    let chars: Vec<char> = label.chars().collect();
    let mut out = Vec::new();
    for (i, &c) in chars.iter().enumerate() {
        if let Some(letter) = tables::digit_to_letter(c) {
            out.push(splice(&chars, i, i + 1, &letter.to_string()));
        }
    }
    out
}

/// Apply each common-misspelling pattern to its first occurrence.
pub fn common_misspellings(label: &str) -> Vec<String> {
    let mut out = Vec::new();
    for &(pattern, replacement) in tables::MISSPELLINGS {
        if label.contains(pattern) {
            out.push(label.replacen(pattern, replacement, 1));
        }
    }
    out
}

/// Replace each character with each of its QWERTY neighbors.
pub fn keyboard_shift(label: &str) -> Vec<String> {
    let chars: Vec<char> = label.chars().collect();
    let mut out = Vec::new();
    for (i, &c) in chars.iter().enumerate() {
        for &neighbor in tables::keyboard_neighbors(c.to_ascii_lowercase()) {
            out.push(splice(&chars, i, i + 1, &neighbor.to_string()));
        }
    }
    out
}

/// Duplicate commonly mistyped letters; `s` and `t` additionally get a
/// triple-repetition variant.
pub fn letter_repetition(label: &str) -> Vec<String> {
    let chars: Vec<char> = label.chars().collect();
    let mut out = Vec::new();
    for (i, &c) in chars.iter().enumerate() {
        let lower = c.to_ascii_lowercase();
        if !tables::REPEAT_PRONE.contains(&lower) {
            continue;
        }
        out.push(splice(&chars, i, i + 1, &format!("{lower}{lower}")));
        if tables::TRIPLE_PRONE.contains(&lower) {
            out.push(splice(&chars, i, i + 1, &format!("{lower}{lower}{lower}")));
        }
    }
    out
}

/// Transpose adjacent character pairs from the fixed confusable set.
pub fn letter_swap(label: &str) -> Vec<String> {
    let chars: Vec<char> = label.chars().collect();
    let mut out = Vec::new();
    for i in 0..chars.len().saturating_sub(1) {
        let pair: String = chars[i..i + 2]
            .iter()
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if tables::SWAP_PAIRS.contains(&pair.as_str()) {
            let swapped: String = pair.chars().rev().collect();
            out.push(splice(&chars, i, i + 2, &swapped));
        }
    }
    out
}

/// Apply the fixed digraph/trigraph typo rules, one candidate per rule
/// variant, lowercased and encoded.
pub fn common_typo(label: &str) -> Vec<String> {
    let lower = label.to_lowercase();
    let mut out = Vec::new();
    for &(pattern, replacements) in tables::TYPO_RULES {
        if !lower.contains(pattern) {
            continue;
        }
        for &replacement in replacements {
            let candidate = lower.replacen(pattern, replacement, 1);
            match domtwist_puny::to_ascii(&candidate) {
                Ok(encoded) => out.push(encoded),
                Err(e) => log::warn!("punycode encoding failed for {candidate:?}: {e}"),
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Fully-qualified engines
// ---------------------------------------------------------------------------

/// Combine the label with every word of every dictionary category in four
/// shapes: `word+label`, `label+word`, `word-label`, `label-word`, each
/// joined with the suffix.
pub fn dictionary(label: &str, suffix: &str, dict: &Dictionary) -> Vec<String> {
    if label.is_empty() {
        return Vec::new();
    }
    log::debug!("dictionary engine: label={label} suffix={suffix}");
    let mut out = Vec::new();
    for word in dict.words() {
        out.push(format!("{word}{label}.{suffix}"));
        out.push(format!("{label}{word}.{suffix}"));
        out.push(format!("{word}-{label}.{suffix}"));
        out.push(format!("{label}-{word}.{suffix}"));
    }
    out
}

/// Re-pair the label with every suffix in the curated TLD list, excluding
/// the original.
pub fn tld_fusion(label: &str, suffix: &str) -> Vec<String> {
    if label.is_empty() {
        return Vec::new();
    }
    tables::COMMON_TLDS
        .iter()
        .filter(|&&tld| tld != suffix)
        .map(|tld| format!("{label}.{tld}"))
        .collect()
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowel_swap_single_pass_excludes_input() {
        let candidates = vowel_swap("cat");
        assert!(!candidates.is_empty());
        // Single substitution can never reproduce the input: consonants are
        // unmapped and each vowel maps only to the other vowels.
        assert!(candidates.iter().take(4).all(|c| c != "cat"));
        assert!(candidates.contains(&"cet".to_string()));
        assert!(candidates.contains(&"cut".to_string()));
    }

    #[test]
    fn vowel_swap_two_vowel_label_covers_double_substitution() {
        let candidates = vowel_swap("ae");
        // Pass 1: 4 + 4 singles; pass 2 adds doubles such as "io".
        assert!(candidates.contains(&"ee".to_string()));
        assert!(candidates.contains(&"ai".to_string()));
        assert!(candidates.contains(&"io".to_string()));
        // Deduplicated.
        let unique: HashSet<_> = candidates.iter().collect();
        assert_eq!(unique.len(), candidates.len());
    }

    #[test]
    fn glyph_substitutes_lookalikes_and_digraphs() {
        let candidates = glyph("paypal");
        assert!(candidates.contains(&"paypa1".to_string()));
        assert!(candidates.contains(&"paypai".to_string()));
        // 'm' -> "rn" style digraphs grow the label by one.
        let modern = glyph("modern");
        assert!(modern.contains(&"rnodern".to_string()));
    }

    #[test]
    fn unicode_homoglyph_output_is_ascii() {
        for candidate in unicode_homoglyph("abc") {
            assert!(candidate.is_ascii(), "unencoded candidate {candidate:?}");
        }
    }

    #[test]
    fn targeted_homoglyph_encodes_and_preserves_context() {
        let candidates = targeted_homoglyph("paypal");
        assert!(!candidates.is_empty());
        for candidate in &candidates {
            assert!(candidate.is_ascii());
        }
        // Cyrillic small a at position 1 decodes back to the original shape.
        let expected = domtwist_puny::encode("p\u{0430}ypal").unwrap();
        assert!(candidates.contains(&expected));
    }

    #[test]
    fn targeted_homoglyph_matches_case_insensitively() {
        assert!(!targeted_homoglyph("PAYPAL").is_empty());
    }

    #[test]
    fn omission_deletes_each_position() {
        let candidates = omission("abc");
        assert_eq!(candidates, vec!["bc", "ac", "ab"]);
    }

    #[test]
    fn omission_handles_repeated_characters_by_position() {
        assert_eq!(omission("aba"), vec!["ba", "aa", "ab"]);
    }

    #[test]
    fn duplication_doubles_each_position() {
        assert_eq!(duplication("ab"), vec!["aab", "abb"]);
    }

    #[test]
    fn addition_cardinality() {
        let label = "test";
        let candidates = addition(label);
        assert_eq!(candidates.len(), (label.len() - 1) * 36);
        assert!(candidates.contains(&"t0est".to_string()));
        // Never inserts before index 0.
        assert!(candidates.iter().all(|c| c.starts_with('t')));
    }

    #[test]
    fn replacement_covers_index_zero_and_skips_identity() {
        let candidates = replacement("ab");
        assert!(candidates.contains(&"bb".to_string()));
        assert!(candidates.contains(&"aa".to_string()));
        assert!(!candidates.contains(&"ab".to_string()));
        assert_eq!(candidates.len(), 2 * 35);
    }

    #[test]
    fn bitsquatting_stays_in_hostname_alphabet() {
        for candidate in bitsquatting("paypal") {
            assert!(
                candidate.chars().all(is_ldh),
                "candidate {candidate:?} outside [a-z0-9-]"
            );
        }
        // 'a' + 1 = 'b'
        assert!(bitsquatting("a").contains(&"b".to_string()));
    }

    #[test]
    fn hyphenation_count_and_shape() {
        let label = "example";
        let candidates = hyphenation(label);
        assert_eq!(candidates.len(), label.len() - 1);
        for candidate in &candidates {
            assert_eq!(candidate.matches('-').count(), 1);
            assert_eq!(candidate.replace('-', ""), label);
        }
    }

    #[test]
    fn subdomain_split_inserts_internal_dots() {
        assert_eq!(subdomain_split("abc"), vec!["a.bc", "ab.c"]);
    }

    #[test]
    fn position_swap_excludes_input_and_finds_transpositions() {
        let candidates = position_swap("ab");
        assert!(!candidates.contains(&"ab".to_string()));
        // Stage 1 with a=0, b=1 gives the classic adjacent transposition start.
        assert!(candidates.contains(&"bb".to_string()));
        assert!(candidates.contains(&"bab".to_string()));
    }

    #[test]
    fn number_to_letter_substitutes_digits() {
        let candidates = number_to_letter("paypa1");
        assert_eq!(candidates, vec!["paypal"]);
        assert!(number_to_letter("letters").is_empty());
    }

    #[test]
    fn common_misspellings_first_occurrence_only() {
        let candidates = common_misspellings("lettter");
        // "th"/"nn" etc. absent; "tt" not in the table; only patterns present fire.
        assert!(candidates.is_empty());
        let candidates = common_misspellings("believe");
        assert!(candidates.contains(&"beleive".to_string()));
    }

    #[test]
    fn keyboard_shift_uses_adjacency() {
        let candidates = keyboard_shift("q");
        assert_eq!(candidates, vec!["w", "a", "s"]);
    }

    #[test]
    fn letter_repetition_doubles_and_triples() {
        let candidates = letter_repetition("test");
        assert!(candidates.contains(&"teest".to_string()));
        assert!(candidates.contains(&"ttest".to_string()));
        assert!(candidates.contains(&"tttest".to_string()));
    }

    #[test]
    fn letter_swap_transposes_confusable_pairs() {
        let candidates = letter_swap("their");
        assert!(candidates.contains(&"hteir".to_string()));
        assert!(candidates.contains(&"thier".to_string()));
    }

    #[test]
    fn common_typo_applies_rule_variants() {
        let candidates = common_typo("action");
        assert!(candidates.contains(&"acshun".to_string()));
        assert!(candidates.contains(&"acshion".to_string()));
    }

    #[test]
    fn dictionary_emits_four_shapes_per_word() {
        let dict = Dictionary::new(vec!["admin".to_string()], Vec::new()).unwrap();
        let candidates = dictionary("test", "com", &dict);
        assert_eq!(
            candidates,
            vec![
                "admintest.com",
                "testadmin.com",
                "admin-test.com",
                "test-admin.com",
            ]
        );
    }

    #[test]
    fn tld_fusion_excludes_original_suffix() {
        let candidates = tld_fusion("example", "com");
        assert!(candidates.contains(&"example.net".to_string()));
        assert!(!candidates.contains(&"example.com".to_string()));
        assert_eq!(candidates.len(), tables::COMMON_TLDS.len() - 1);
    }

    #[test]
    fn empty_label_is_safe_for_every_engine() {
        let dict = Dictionary::default();
        assert!(vowel_swap("").is_empty());
        assert!(glyph("").is_empty());
        assert!(unicode_homoglyph("").is_empty());
        assert!(targeted_homoglyph("").is_empty());
        assert!(omission("").is_empty());
        assert!(duplication("").is_empty());
        assert!(addition("").is_empty());
        assert!(replacement("").is_empty());
        assert!(bitsquatting("").is_empty());
        assert!(hyphenation("").is_empty());
        assert!(subdomain_split("").is_empty());
        assert!(position_swap("").is_empty());
        assert!(number_to_letter("").is_empty());
        assert!(common_misspellings("").is_empty());
        assert!(keyboard_shift("").is_empty());
        assert!(letter_repetition("").is_empty());
        assert!(letter_swap("").is_empty());
        assert!(common_typo("").is_empty());
        assert!(dictionary("", "com", &dict).is_empty());
        assert!(tld_fusion("", "com").is_empty());
    }
}

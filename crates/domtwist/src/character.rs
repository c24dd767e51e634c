// Character-level helpers shared by the variation engines.
//
// Engines index by code point, never by byte: the homoglyph tables mix
// Latin, Cyrillic and Greek scripts, and byte indexing would split
// multi-byte characters.

/// The 36 lowercase ASCII alphanumerics tried by the addition and
/// replacement engines.
pub const ASCII_ALPHANUMERIC: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Lowercase ASCII vowels.
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// True for characters permitted in a hostname label (letter-digit-hyphen,
/// lowercase only).
pub fn is_ldh(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Build a new string from `chars` with the range `start..end` replaced by
/// `insert`. Indices are code-point positions; out-of-range indices clamp
/// instead of panicking, so splicing at the end of a label needs no bounds
/// bookkeeping.
pub fn splice(chars: &[char], start: usize, end: usize, insert: &str) -> String {
    let start = start.min(chars.len());
    let end = end.clamp(start, chars.len());
    let mut out = String::with_capacity(chars.len() + insert.len());
    out.extend(&chars[..start]);
    out.push_str(insert);
    out.extend(&chars[end..]);
    out
}

//! Bootstring (RFC 3492) codec for internationalized domain labels.
//!
//! This crate implements the generalized variable-length integer delta
//! encoding used by punycode: all basic (ASCII) code points are copied to
//! the output verbatim, a delimiter is appended, and the remaining code
//! points are encoded as base-36 digit sequences with an adaptive bias.
//!
//! The functions here operate on a single label, not a whole domain, and do
//! not apply the IDNA `xn--` prefix; callers that need a transmissible
//! A-label prepend it themselves.
//!
//! - [`encode`] -- Unicode label to ASCII Bootstring form
//! - [`decode`] -- strict reverse; rejects malformed input
//! - [`to_ascii`] -- pass-through for all-ASCII labels, [`encode`] otherwise

// Bootstring parameters for punycode (RFC 3492 section 5).
const BASE: u32 = 36;
const TMIN: u32 = 1;
const TMAX: u32 = 26;
const SKEW: u32 = 38;
const DAMP: u32 = 700;
const INITIAL_BIAS: u32 = 72;
const INITIAL_N: u32 = 128;
const DELIMITER: char = '-';

/// Highest valid Unicode code point.
const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Error type for codec failures.
///
/// `encode` can only fail with [`PunyError::Overflow`]; all variants can
/// occur during `decode`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PunyError {
    /// A non-ASCII character appeared before the final delimiter.
    #[error("non-ASCII character {0:?} before the final delimiter")]
    NonBasic(char),

    /// A character in the encoded tail is not a base-36 digit.
    #[error("invalid base-36 digit {0:?}")]
    InvalidDigit(char),

    /// The input ended in the middle of a digit sequence.
    #[error("truncated digit sequence")]
    Truncated,

    /// Delta arithmetic exceeded the representable range.
    #[error("code point delta overflow")]
    Overflow,

    /// Decoding produced a value that is not a Unicode scalar.
    #[error("invalid code point U+{0:X}")]
    InvalidCodePoint(u32),
}

/// Bias adaptation function (RFC 3492 section 6.1).
fn adapt(delta: u32, num_points: u32, first_time: bool) -> u32 {
    let mut delta = if first_time { delta / DAMP } else { delta / 2 };
    delta += delta / num_points;
    let mut k = 0;
    while delta > ((BASE - TMIN) * TMAX) / 2 {
        delta /= BASE - TMIN;
        k += BASE;
    }
    k + (BASE - TMIN + 1) * delta / (delta + SKEW)
}

/// Map a digit value (0..36) to its basic code point: a-z then 0-9.
fn encode_digit(d: u32) -> char {
    debug_assert!(d < BASE);
    if d < 26 {
        char::from(b'a' + d as u8)
    } else {
        char::from(b'0' + (d - 26) as u8)
    }
}

/// Map a basic code point to its digit value, or `None` if it is not a digit.
fn decode_digit(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32 + 26),
        'A'..='Z' => Some(c as u32 - 'A' as u32),
        'a'..='z' => Some(c as u32 - 'a' as u32),
        _ => None,
    }
}

/// Encode a Unicode label into its ASCII Bootstring form.
///
/// Basic code points are copied verbatim; if any are present a delimiter is
/// appended before the encoded tail. An all-basic input therefore encodes to
/// itself plus a trailing delimiter, which keeps [`decode`] unambiguous.
///
/// Fails only with [`PunyError::Overflow`], which cannot happen for labels
/// of realistic length.
pub fn encode(input: &str) -> Result<String, PunyError> {
    let code_points: Vec<u32> = input.chars().map(|c| c as u32).collect();
    let total = code_points.len() as u32;

    let mut output: String = input.chars().filter(char::is_ascii).collect();
    let basic_count = output.chars().count() as u32;
    if basic_count > 0 {
        output.push(DELIMITER);
    }

    let mut n = INITIAL_N;
    let mut delta: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut handled = basic_count;

    while handled < total {
        // Smallest code point not yet handled.
        let m = code_points
            .iter()
            .copied()
            .filter(|&c| c >= n)
            .min()
            .ok_or(PunyError::Overflow)?;

        delta = (m - n)
            .checked_mul(handled + 1)
            .and_then(|d| delta.checked_add(d))
            .ok_or(PunyError::Overflow)?;
        n = m;

        for &c in &code_points {
            if c < n {
                delta = delta.checked_add(1).ok_or(PunyError::Overflow)?;
            } else if c == n {
                let mut q = delta;
                let mut k = BASE;
                loop {
                    let t = threshold(k, bias);
                    if q < t {
                        break;
                    }
                    output.push(encode_digit(t + (q - t) % (BASE - t)));
                    q = (q - t) / (BASE - t);
                    k += BASE;
                }
                output.push(encode_digit(q));
                bias = adapt(delta, handled + 1, handled == basic_count);
                delta = 0;
                handled += 1;
            }
        }
        delta = delta.checked_add(1).ok_or(PunyError::Overflow)?;
        n += 1;
    }

    Ok(output)
}

/// Decode an ASCII Bootstring label back into its Unicode form.
///
/// The portion before the last delimiter is copied verbatim and must be
/// pure ASCII; the rest is decoded as base-36 digit sequences with code
/// points spliced back into their original positions. Malformed input is
/// rejected rather than decoded into a corrupted string.
pub fn decode(input: &str) -> Result<String, PunyError> {
    let mut output: Vec<char> = Vec::new();

    // Split on the last delimiter. A delimiter at position 0 belongs to the
    // encoded tail (there is no basic portion to terminate).
    let tail = match input.rfind(DELIMITER) {
        Some(pos) if pos > 0 => {
            for c in input[..pos].chars() {
                if !c.is_ascii() {
                    return Err(PunyError::NonBasic(c));
                }
                output.push(c);
            }
            &input[pos + 1..]
        }
        _ => input,
    };

    let mut n = INITIAL_N;
    let mut i: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut chars = tail.chars();

    while !chars.as_str().is_empty() {
        let old_i = i;
        let mut w: u32 = 1;
        let mut k = BASE;
        loop {
            let c = chars.next().ok_or(PunyError::Truncated)?;
            let digit = decode_digit(c).ok_or(PunyError::InvalidDigit(c))?;
            i = digit
                .checked_mul(w)
                .and_then(|d| i.checked_add(d))
                .ok_or(PunyError::Overflow)?;
            let t = threshold(k, bias);
            if digit < t {
                break;
            }
            w = w.checked_mul(BASE - t).ok_or(PunyError::Overflow)?;
            k += BASE;
        }

        let out_len = output.len() as u32 + 1;
        bias = adapt(i - old_i, out_len, old_i == 0);
        n = n.checked_add(i / out_len).ok_or(PunyError::Overflow)?;
        if n > MAX_CODE_POINT {
            return Err(PunyError::Overflow);
        }
        i %= out_len;

        let decoded = char::from_u32(n).ok_or(PunyError::InvalidCodePoint(n))?;
        output.insert(i as usize, decoded);
        i += 1;
    }

    Ok(output.into_iter().collect())
}

/// Convert a label into a transmissible ASCII form.
///
/// All-ASCII labels pass through unchanged; labels containing non-ASCII
/// code points are [`encode`]d. This is the entry point variation engines
/// use, so plain ASCII candidates never grow a trailing delimiter.
pub fn to_ascii(label: &str) -> Result<String, PunyError> {
    if label.is_ascii() {
        Ok(label.to_string())
    } else {
        encode(label)
    }
}

/// Per-digit threshold (RFC 3492 section 6.2, step "let t = ...").
fn threshold(k: u32, bias: u32) -> u32 {
    if k <= bias {
        TMIN
    } else if k >= bias + TMAX {
        TMAX
    } else {
        k - bias
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_known_labels() {
        assert_eq!(encode("b\u{FC}cher").unwrap(), "bcher-kva");
        assert_eq!(encode("m\u{FC}nchen").unwrap(), "mnchen-3ya");
        // No basic code points: no delimiter in the output.
        assert_eq!(encode("\u{2603}").unwrap(), "n3h");
    }

    #[test]
    fn encode_all_ascii_appends_delimiter() {
        assert_eq!(encode("example").unwrap(), "example-");
        assert_eq!(encode("").unwrap(), "");
    }

    #[test]
    fn decode_known_labels() {
        assert_eq!(decode("bcher-kva").unwrap(), "b\u{FC}cher");
        assert_eq!(decode("mnchen-3ya").unwrap(), "m\u{FC}nchen");
        assert_eq!(decode("n3h").unwrap(), "\u{2603}");
        assert_eq!(decode("example-").unwrap(), "example");
    }

    #[test]
    fn round_trip() {
        let samples = [
            "example",
            "b\u{FC}cher",
            "\u{E4}a\u{E4}",        // interleaved basic / non-basic
            "a\u{E4}b\u{F6}c",
            "\u{2603}\u{2603}",
            "p\u{0430}yp\u{0430}l", // Cyrillic homoglyphs
            "-leading",
            "trailing-",
            "",
        ];
        for s in samples {
            let encoded = encode(s).unwrap();
            assert!(encoded.is_ascii(), "{encoded:?} is not ASCII");
            assert_eq!(decode(&encoded).unwrap(), s, "round trip failed for {s:?}");
        }
    }

    #[test]
    fn decode_rejects_non_basic_prefix() {
        assert_eq!(
            decode("b\u{FC}-kva"),
            Err(PunyError::NonBasic('\u{FC}'))
        );
    }

    #[test]
    fn decode_rejects_invalid_digit() {
        assert_eq!(decode("abc-!"), Err(PunyError::InvalidDigit('!')));
    }

    #[test]
    fn decode_rejects_truncated_sequence() {
        // 'k' maps to digit 10 >= t, so another digit is required.
        assert_eq!(decode("abc-k"), Err(PunyError::Truncated));
    }

    #[test]
    fn decode_rejects_overflow() {
        assert_eq!(decode("99999999999"), Err(PunyError::Overflow));
    }

    #[test]
    fn decode_rejects_surrogate_code_points() {
        // These deltas land exactly on U+D800, which is not a scalar value.
        assert_eq!(decode("ib9b"), Err(PunyError::InvalidCodePoint(0xD800)));
    }

    #[test]
    fn to_ascii_passes_plain_labels_through() {
        assert_eq!(to_ascii("paypal").unwrap(), "paypal");
        assert_eq!(to_ascii("p\u{0430}ypal").unwrap(), encode("p\u{0430}ypal").unwrap());
    }
}

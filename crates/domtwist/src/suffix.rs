// Suffix parsing seam.
//
// Splitting a domain into registrable label and public suffix is an
// injected capability: callers with a full public-suffix-list
// implementation plug it in through [`SuffixParser`], and the bundled
// [`NaiveSuffixParser`] covers the common cases without carrying the list.

/// A domain split into its registrable label and public suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainParts {
    /// Registrable label, never containing a dot.
    pub label: String,
    /// Public suffix, without the leading dot (e.g. `com`, `co.uk`).
    pub suffix: String,
}

/// Trait for domain suffix parsers.
///
/// `parse` returns `None` for input it cannot split; the orchestrator then
/// falls back to treating the whole input as the label with a `com` suffix.
pub trait SuffixParser {
    fn parse(&self, domain: &str) -> Option<DomainParts>;
}

/// Two-label public suffixes the naive parser recognizes. Anything not in
/// this list is treated as a single-label suffix.
const MULTI_LABEL_SUFFIXES: &[&str] = &[
    "co.uk", "org.uk", "ac.uk", "gov.uk", "me.uk",
    "com.au", "net.au", "org.au",
    "co.nz", "co.jp", "ne.jp", "or.jp",
    "com.br", "com.mx", "com.ar",
    "co.in", "co.za", "co.kr", "co.id",
    "com.cn", "com.tw", "com.hk", "com.sg", "com.my", "com.tr", "com.vn",
];

/// Suffix parser without a public suffix list: recognizes a fixed set of
/// two-label suffixes and otherwise splits at the last dot. Subdomains are
/// stripped; only the right-most label before the suffix is registrable.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveSuffixParser;

impl SuffixParser for NaiveSuffixParser {
    fn parse(&self, domain: &str) -> Option<DomainParts> {
        let domain = domain.trim().trim_end_matches('.');
        if domain.is_empty() {
            return None;
        }

        for &candidate in MULTI_LABEL_SUFFIXES {
            if let Some(head) = domain
                .strip_suffix(candidate)
                .and_then(|head| head.strip_suffix('.'))
            {
                return split_label(head, candidate);
            }
        }

        let (head, suffix) = domain.rsplit_once('.')?;
        if suffix.is_empty() {
            return None;
        }
        split_label(head, suffix)
    }
}

/// Take the right-most label of `head` as the registrable label.
fn split_label(head: &str, suffix: &str) -> Option<DomainParts> {
    let label = head.rsplit('.').next().unwrap_or(head);
    if label.is_empty() {
        return None;
    }
    Some(DomainParts {
        label: label.to_string(),
        suffix: suffix.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(domain: &str) -> Option<DomainParts> {
        NaiveSuffixParser.parse(domain)
    }

    #[test]
    fn splits_simple_domain() {
        let parts = parse("example.com").unwrap();
        assert_eq!(parts.label, "example");
        assert_eq!(parts.suffix, "com");
    }

    #[test]
    fn strips_subdomains() {
        let parts = parse("www.shop.example.com").unwrap();
        assert_eq!(parts.label, "example");
        assert_eq!(parts.suffix, "com");
    }

    #[test]
    fn recognizes_multi_label_suffixes() {
        let parts = parse("example.co.uk").unwrap();
        assert_eq!(parts.label, "example");
        assert_eq!(parts.suffix, "co.uk");

        let parts = parse("mail.example.com.au").unwrap();
        assert_eq!(parts.label, "example");
        assert_eq!(parts.suffix, "com.au");
    }

    #[test]
    fn does_not_misread_embedded_suffix_text() {
        // "myco.uk" ends in "co.uk" textually but the preceding character
        // is not a dot, so the suffix is just "uk".
        let parts = parse("myco.uk").unwrap();
        assert_eq!(parts.label, "myco");
        assert_eq!(parts.suffix, "uk");
    }

    #[test]
    fn rejects_degenerate_input() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("localhost"), None);
        assert_eq!(parse(".com"), None);
        assert_eq!(parse("com."), None);
    }

    #[test]
    fn ignores_trailing_dot() {
        let parts = parse("example.com.").unwrap();
        assert_eq!(parts.label, "example");
    }
}

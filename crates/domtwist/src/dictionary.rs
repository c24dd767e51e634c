// Word dictionary for the combination engine.
//
// A dictionary is a reserved general word list plus an ordered mapping of
// category name to word list. The structure is validated at construction;
// after that it is immutable, so a single dictionary can back concurrent
// orchestrator calls without synchronization.

/// Reserved name of the general word bucket in the external JSON format.
pub const GENERAL_BUCKET: &str = "words";

/// Words from general phishing campaigns: prefixes and suffixes commonly
/// bolted onto a brand label.
const DEFAULT_WORDS: &[&str] = &[
    "access", "account", "admin", "alert", "app", "auth", "billing", "center", "check",
    "cloud", "confirm", "help", "id", "info", "login", "mail", "my", "online", "pay",
    "portal", "secure", "security", "service", "signin", "support", "team", "update",
    "verify", "web",
];

const DEFAULT_CATEGORIES: &[(&str, &[&str])] = &[
    ("finance", &["bank", "card", "credit", "invoice", "payment", "wallet"]),
    ("retail", &["deals", "discount", "offer", "order", "sale", "store"]),
    ("technology", &["api", "data", "dev", "net", "tech"]),
];

/// Error type for dictionary construction failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DictionaryError {
    /// A category was given an empty name.
    #[error("empty category name")]
    EmptyCategoryName,

    /// Two categories share a name.
    #[error("duplicate category {0:?}")]
    DuplicateCategory(String),

    /// A category used the name reserved for the general word list.
    #[error("category name {0:?} is reserved for the general word list")]
    ReservedCategory(String),
}

/// A categorized word list.
///
/// Holds the general word bucket plus named categories in a fixed order.
/// The default dictionary ships with the crate; a caller-supplied
/// dictionary fully replaces it for a given invocation, it is never merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    general: Vec<String>,
    categories: Vec<(String, Vec<String>)>,
}

impl Dictionary {
    /// Build a dictionary from a general word list and ordered categories.
    ///
    /// Pure constructor, no I/O. Rejects empty and duplicate category
    /// names, and a category named after the reserved general bucket.
    pub fn new(
        general: Vec<String>,
        categories: Vec<(String, Vec<String>)>,
    ) -> Result<Self, DictionaryError> {
        let mut seen: Vec<&str> = Vec::with_capacity(categories.len());
        for (name, _) in &categories {
            if name.is_empty() {
                return Err(DictionaryError::EmptyCategoryName);
            }
            if name == GENERAL_BUCKET {
                return Err(DictionaryError::ReservedCategory(name.clone()));
            }
            if seen.contains(&name.as_str()) {
                return Err(DictionaryError::DuplicateCategory(name.clone()));
            }
            seen.push(name);
        }
        Ok(Self { general, categories })
    }

    /// Convenience constructor for a dictionary with only general words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            general: words.into_iter().map(Into::into).collect(),
            categories: Vec::new(),
        }
    }

    /// The general word bucket.
    pub fn general(&self) -> &[String] {
        &self.general
    }

    /// The named categories, in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(name, words)| (name.as_str(), words.as_slice()))
    }

    /// Every word, general bucket first, then each category in order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.general
            .iter()
            .map(String::as_str)
            .chain(
                self.categories
                    .iter()
                    .flat_map(|(_, words)| words.iter().map(String::as_str)),
            )
    }

    /// Total number of words across all buckets.
    pub fn len(&self) -> usize {
        self.general.len() + self.categories.iter().map(|(_, w)| w.len()).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Dictionary {
    /// The built-in English dictionary.
    fn default() -> Self {
        Self {
            general: DEFAULT_WORDS.iter().map(|&w| w.to_string()).collect(),
            categories: DEFAULT_CATEGORIES
                .iter()
                .map(|&(name, words)| {
                    (
                        name.to_string(),
                        words.iter().map(|&w| w.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_ordered_categories() {
        let dict = Dictionary::new(
            vec!["admin".into()],
            vec![
                ("finance".into(), vec!["bank".into()]),
                ("retail".into(), vec!["store".into()]),
            ],
        )
        .unwrap();
        assert_eq!(dict.len(), 3);
        let words: Vec<&str> = dict.words().collect();
        assert_eq!(words, vec!["admin", "bank", "store"]);
    }

    #[test]
    fn new_rejects_duplicate_category() {
        let err = Dictionary::new(
            Vec::new(),
            vec![
                ("finance".into(), Vec::new()),
                ("finance".into(), Vec::new()),
            ],
        )
        .unwrap_err();
        assert_eq!(err, DictionaryError::DuplicateCategory("finance".into()));
    }

    #[test]
    fn new_rejects_reserved_category() {
        let err = Dictionary::new(Vec::new(), vec![("words".into(), Vec::new())]).unwrap_err();
        assert_eq!(err, DictionaryError::ReservedCategory("words".into()));
    }

    #[test]
    fn new_rejects_empty_category_name() {
        let err = Dictionary::new(Vec::new(), vec![(String::new(), Vec::new())]).unwrap_err();
        assert_eq!(err, DictionaryError::EmptyCategoryName);
    }

    #[test]
    fn default_dictionary_is_populated() {
        let dict = Dictionary::default();
        assert!(!dict.is_empty());
        assert!(dict.general().iter().any(|w| w == "secure"));
        assert!(dict.categories().any(|(name, _)| name == "finance"));
    }
}

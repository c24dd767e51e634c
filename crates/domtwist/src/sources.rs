// External dictionary sources.
//
// The on-disk format is a single JSON object mapping bucket names to word
// lists; the reserved "words" key holds the general bucket and every other
// key becomes a category:
//
//     { "words": ["admin", "login"], "finance": ["bank"] }
//
// Loading is the only I/O in the crate and happens before any engine runs;
// a failed load surfaces to the caller instead of generating against a
// half-loaded dictionary. Categories are ordered by name so a reloaded
// dictionary always iterates the same way. Callers fetching dictionaries
// over the network apply [`from_json_str`] to the response body.

use std::collections::BTreeMap;
use std::path::Path;

use crate::dictionary::{Dictionary, DictionaryError, GENERAL_BUCKET};

/// Error type for dictionary loading failures.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The dictionary file could not be read.
    #[error("failed to read dictionary from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The payload is not valid dictionary JSON.
    #[error("failed to parse dictionary JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The payload parsed but violates the dictionary structure rules.
    #[error(transparent)]
    Invalid(#[from] DictionaryError),
}

/// Raw wire shape of a dictionary: bucket name to word list.
#[derive(Debug, serde::Deserialize)]
#[serde(transparent)]
struct RawDictionary {
    buckets: BTreeMap<String, Vec<String>>,
}

/// Parse a dictionary from its JSON representation.
pub fn from_json_str(json: &str) -> Result<Dictionary, SourceError> {
    let mut raw: RawDictionary = serde_json::from_str(json)?;
    let general = raw.buckets.remove(GENERAL_BUCKET).unwrap_or_default();
    let categories: Vec<(String, Vec<String>)> = raw.buckets.into_iter().collect();
    Ok(Dictionary::new(general, categories)?)
}

/// Load a dictionary from a JSON file on disk.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Dictionary, SourceError> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.display().to_string(),
        source,
    })?;
    from_json_str(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_general_and_categories() {
        let dict = from_json_str(r#"{"words": ["admin"], "finance": ["bank", "card"]}"#).unwrap();
        assert_eq!(dict.general(), ["admin".to_string()]);
        let categories: Vec<_> = dict.categories().collect();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].0, "finance");
        assert_eq!(categories[0].1.len(), 2);
    }

    #[test]
    fn general_bucket_is_optional() {
        let dict = from_json_str(r#"{"finance": ["bank"]}"#).unwrap();
        assert!(dict.general().is_empty());
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn categories_are_ordered_by_name() {
        let dict = from_json_str(r#"{"zeta": ["z"], "alpha": ["a"]}"#).unwrap();
        let names: Vec<&str> = dict.categories().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            from_json_str("not json"),
            Err(SourceError::Parse(_))
        ));
        assert!(matches!(
            from_json_str(r#"{"words": "not a list"}"#),
            Err(SourceError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_from_file("/nonexistent/dictionary.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/dictionary.json"));
    }
}

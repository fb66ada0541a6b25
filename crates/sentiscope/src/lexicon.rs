//! Positive and negative term lists used to score review text.
//!
//! A [`Lexicon`] is plain immutable data. It is built once (either the
//! built-in Italian hospitality lists or a JSON file) and then passed by
//! reference into every scoring call.
//!
//! Matching is substring-based on lowercased text: the term `"poco"` matches
//! `"Personale poco cortese."` but also any longer word containing it. This is
//! intentional and must not be tightened to whole-word matching.
//!
//! # Example
//!
//! ```
//! use sentiscope::Lexicon;
//!
//! let lexicon = Lexicon::new(["great"], ["noisy"]);
//! let hits = lexicon.matches("GREAT room, a bit noisy");
//! assert_eq!(hits.positive, vec!["great"]);
//! assert_eq!(hits.negative, vec!["noisy"]);
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SentiscopeError};

const POSITIVE_TERMS: &[&str] = &[
    "eccellente",
    "ottima",
    "fantastici",
    "comodi",
    "gentile",
    "freschissimo",
    "moderne",
    "spettacolare",
    "pulita",
    "accogliente",
    "onesti",
    "tornerò",
    "consiglio",
];

const NEGATIVE_TERMS: &[&str] = &[
    "rumoroso", "deluso", "chiusa", "lento", "caro", "piccole", "datate", "poco", "troppo",
];

static DEFAULT_LEXICON: Lazy<Lexicon> = Lazy::new(Lexicon::italian_hospitality);

/// The built-in lexicon, shared for the lifetime of the process.
pub fn default_lexicon() -> &'static Lexicon {
    &DEFAULT_LEXICON
}

/// Two sets of lowercase terms with opposite sign.
///
/// The sets are not required to be disjoint; a term present in both simply
/// cancels itself out when it matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawLexicon")]
pub struct Lexicon {
    positive: BTreeSet<String>,
    negative: BTreeSet<String>,
}

/// On-disk shape, normalized through [`Lexicon::new`] on load.
#[derive(Deserialize)]
struct RawLexicon {
    #[serde(default)]
    positive: Vec<String>,
    #[serde(default)]
    negative: Vec<String>,
}

impl From<RawLexicon> for Lexicon {
    fn from(raw: RawLexicon) -> Self {
        Lexicon::new(raw.positive, raw.negative)
    }
}

/// Terms of a lexicon found in one piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermMatches {
    /// Positive terms present in the text, in sorted order.
    pub positive: Vec<String>,
    /// Negative terms present in the text, in sorted order.
    pub negative: Vec<String>,
}

impl TermMatches {
    /// Positive hits minus negative hits.
    pub fn balance(&self) -> i32 {
        self.positive.len() as i32 - self.negative.len() as i32
    }
}

impl Lexicon {
    /// Build a lexicon from arbitrary term lists.
    ///
    /// Terms are trimmed and lowercased. Empty terms are dropped since they
    /// would match every text.
    pub fn new<P, N>(positive: P, negative: N) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        Self {
            positive: normalize(positive),
            negative: normalize(negative),
        }
    }

    /// The Italian hotel/restaurant term lists bundled with the tool.
    pub fn italian_hospitality() -> Self {
        Self::new(POSITIVE_TERMS, NEGATIVE_TERMS)
    }

    /// Load a lexicon from a JSON file of the form
    /// `{"positive": [...], "negative": [...]}`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| SentiscopeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let lexicon: Lexicon = serde_json::from_str(&contents)?;

        tracing::info!(
            path = %path.display(),
            positive = lexicon.positive.len(),
            negative = lexicon.negative.len(),
            "loaded lexicon"
        );
        Ok(lexicon)
    }

    /// Positive terms in sorted order.
    pub fn positive_terms(&self) -> impl Iterator<Item = &str> {
        self.positive.iter().map(String::as_str)
    }

    /// Negative terms in sorted order.
    pub fn negative_terms(&self) -> impl Iterator<Item = &str> {
        self.negative.iter().map(String::as_str)
    }

    /// Total number of terms across both sets.
    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    /// Find every term that occurs as a substring of the lowercased `text`.
    ///
    /// Each term is reported at most once regardless of how often it occurs.
    pub fn matches(&self, text: &str) -> TermMatches {
        let lowered = text.to_lowercase();
        TermMatches {
            positive: hits(&self.positive, &lowered),
            negative: hits(&self.negative, &lowered),
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        default_lexicon().clone()
    }
}

fn normalize<I>(terms: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    terms
        .into_iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

fn hits(terms: &BTreeSet<String>, lowered: &str) -> Vec<String> {
    terms
        .iter()
        .filter(|term| lowered.contains(term.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_lists() {
        let lexicon = Lexicon::italian_hospitality();
        assert_eq!(lexicon.positive_terms().count(), 13);
        assert_eq!(lexicon.negative_terms().count(), 9);
        assert_eq!(lexicon.len(), 22);
        assert!(lexicon.positive_terms().any(|t| t == "tornerò"));
    }

    #[test]
    fn test_terms_are_normalized() {
        let lexicon = Lexicon::new(["  Great ", "", "GREAT"], ["Noisy"]);
        assert_eq!(lexicon.positive_terms().collect::<Vec<_>>(), vec!["great"]);
        assert_eq!(lexicon.negative_terms().collect::<Vec<_>>(), vec!["noisy"]);
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let lexicon = Lexicon::italian_hospitality();
        let hits = lexicon.matches("SERVIZIO ECCELLENTE, TORNERÒ sicuramente!");
        assert_eq!(hits.positive, vec!["eccellente", "tornerò"]);
        assert!(hits.negative.is_empty());
        assert_eq!(hits.balance(), 2);
    }

    #[test]
    fn test_matches_uses_substrings() {
        // "caro" hides inside "carota"
        let lexicon = Lexicon::italian_hospitality();
        let hits = lexicon.matches("Zuppa di carota");
        assert_eq!(hits.negative, vec!["caro"]);
    }

    #[test]
    fn test_overlapping_sets_cancel() {
        let lexicon = Lexicon::new(["ok"], ["ok"]);
        let hits = lexicon.matches("ok");
        assert_eq!(hits.balance(), 0);
    }

    #[test]
    fn test_default_is_builtin() {
        assert_eq!(Lexicon::default(), Lexicon::italian_hospitality());
        assert!(std::ptr::eq(default_lexicon(), default_lexicon()));
    }

    #[test]
    fn test_load_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"positive": ["Clean", "quiet"], "negative": ["dirty"]}"#)
            .unwrap();

        let lexicon = Lexicon::load(file.path()).unwrap();
        assert_eq!(lexicon.positive_terms().collect::<Vec<_>>(), vec!["clean", "quiet"]);
        assert_eq!(lexicon.negative_terms().collect::<Vec<_>>(), vec!["dirty"]);
    }

    #[test]
    fn test_load_missing_side_defaults_empty() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"positive": ["clean"]}"#).unwrap();

        let lexicon = Lexicon::load(file.path()).unwrap();
        assert_eq!(lexicon.negative_terms().count(), 0);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Lexicon::load("/nonexistent/lexicon.json").unwrap_err();
        assert!(matches!(err, SentiscopeError::Io { .. }));
    }
}

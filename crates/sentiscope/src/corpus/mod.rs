//! Structure → reviews mapping consumed by the scorer.
//!
//! A [`ReviewCorpus`] is owned by the caller and only read by the scoring
//! code. Structure order is the insertion order, which is also the order used
//! when listing or ranking.

mod builtin;
mod loader;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{Result, SentiscopeError};

pub use loader::{CorpusFormat, CorpusLoader, LoaderConfig};

/// Ordered mapping from structure name to its non-empty list of reviews.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReviewCorpus {
    structures: IndexMap<String, Vec<String>>,
}

impl ReviewCorpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo corpus of two hotels and two restaurants.
    pub fn builtin() -> Self {
        builtin::demo_corpus()
    }

    /// Add a structure with its reviews.
    ///
    /// Rejects empty review lists and names already present.
    pub fn insert<I>(&mut self, name: impl Into<String>, reviews: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let name = name.into();
        if self.structures.contains_key(&name) {
            return Err(SentiscopeError::DuplicateStructure(name));
        }

        let reviews: Vec<String> = reviews.into_iter().map(Into::into).collect();
        if reviews.is_empty() {
            return Err(SentiscopeError::EmptyReviews);
        }

        self.structures.insert(name, reviews);
        Ok(())
    }

    /// Reviews for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.structures.get(name).map(Vec::as_slice)
    }

    /// Reviews for `name`, or [`SentiscopeError::UnknownStructure`].
    pub fn reviews(&self, name: &str) -> Result<&[String]> {
        self.get(name)
            .ok_or_else(|| SentiscopeError::UnknownStructure(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.structures.contains_key(name)
    }

    /// Structure names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.structures.keys().map(String::as_str)
    }

    /// `(name, reviews)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.structures
            .iter()
            .map(|(name, reviews)| (name.as_str(), reviews.as_slice()))
    }

    /// Number of structures.
    pub fn len(&self) -> usize {
        self.structures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }

    /// Total number of reviews across all structures.
    pub fn review_count(&self) -> usize {
        self.structures.values().map(Vec::len).sum()
    }
}

//! Loading a review corpus from JSON or delimited text files.
//!
//! Two layouts are accepted:
//!
//! - JSON: an object mapping structure name to an array of review strings.
//! - CSV/TSV: a header row with `structure` and `review` columns (names are
//!   configurable and matched case-insensitively), one review per row.
//!
//! ```no_run
//! use sentiscope::corpus::CorpusLoader;
//!
//! let corpus = CorpusLoader::new().load_file("reviews.tsv").unwrap();
//! println!("{} structures", corpus.len());
//! ```

use std::cmp::Reverse;
use std::fmt;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use super::ReviewCorpus;
use crate::error::{Result, SentiscopeError};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Input layout of a corpus file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusFormat {
    Json,
    Delimited,
}

impl CorpusFormat {
    /// Guess the format from the file extension; anything but `.json` is delimited.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => CorpusFormat::Json,
            _ => CorpusFormat::Delimited,
        }
    }
}

/// Loader configuration.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Force a format instead of guessing from the extension.
    pub format: Option<CorpusFormat>,
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Header naming the structure column.
    pub structure_column: String,
    /// Header naming the review text column.
    pub review_column: String,
    /// Quote character.
    pub quote: u8,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            format: None,
            delimiter: None,
            structure_column: "structure".to_string(),
            review_column: "review".to_string(),
            quote: b'"',
        }
    }
}

/// Reads corpus files into a [`ReviewCorpus`].
pub struct CorpusLoader {
    config: LoaderConfig,
}

impl CorpusLoader {
    /// Create a loader with default configuration.
    pub fn new() -> Self {
        Self {
            config: LoaderConfig::default(),
        }
    }

    /// Create a loader with custom configuration.
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Load a corpus file, choosing the format from config or extension.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<ReviewCorpus> {
        let path = path.as_ref();
        let contents = fs::read(path).map_err(|e| SentiscopeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let format = self
            .config
            .format
            .unwrap_or_else(|| CorpusFormat::from_path(path));

        let corpus = match format {
            CorpusFormat::Json => self.parse_json(&contents)?,
            CorpusFormat::Delimited => self.parse_delimited(&contents)?,
        };

        tracing::info!(
            path = %path.display(),
            ?format,
            structures = corpus.len(),
            reviews = corpus.review_count(),
            "loaded review corpus"
        );
        Ok(corpus)
    }

    /// Parse a JSON object of `name -> [review, ...]`.
    pub fn parse_json(&self, bytes: &[u8]) -> Result<ReviewCorpus> {
        let StructureEntries(entries) = serde_json::from_slice(bytes)?;
        build_corpus(entries)
    }

    /// Parse delimited text with a header row.
    pub fn parse_delimited(&self, bytes: &[u8]) -> Result<ReviewCorpus> {
        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(bytes, self.config.quote)?,
        };
        tracing::debug!(delimiter = %(delimiter as char).escape_default(), "parsing delimited corpus");

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let headers = reader.headers()?.clone();
        let structure_idx = column_index(&headers, &self.config.structure_column)?;
        let review_idx = column_index(&headers, &self.config.review_column)?;

        let mut grouped: IndexMap<String, Vec<String>> = IndexMap::new();
        for result in reader.records() {
            let record = result?;
            let structure = record.get(structure_idx).unwrap_or("").trim();
            let review = record.get(review_idx).unwrap_or("").trim();
            if structure.is_empty() || review.is_empty() {
                continue;
            }
            grouped
                .entry(structure.to_string())
                .or_default()
                .push(review.to_string());
        }

        build_corpus(grouped.into_iter().collect())
    }
}

impl Default for CorpusLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON object entries in document order, repeated keys included.
struct StructureEntries(Vec<(String, Vec<String>)>);

impl<'de> Deserialize<'de> for StructureEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = StructureEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping structure names to review lists")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Vec<String>>()? {
                    entries.push(entry);
                }
                Ok(StructureEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Insert entries in order; repeated names fail with `DuplicateStructure`.
fn build_corpus(entries: Vec<(String, Vec<String>)>) -> Result<ReviewCorpus> {
    if entries.is_empty() {
        return Err(SentiscopeError::EmptyCorpus("No reviews found".to_string()));
    }

    let mut corpus = ReviewCorpus::new();
    for (name, reviews) in entries {
        if reviews.is_empty() {
            return Err(SentiscopeError::EmptyCorpus(format!(
                "Structure '{}' has no reviews",
                name
            )));
        }
        corpus.insert(name, reviews)?;
    }
    Ok(corpus)
}

fn column_index(headers: &csv::StringRecord, wanted: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| SentiscopeError::MissingColumn(wanted.to_string()))
}

/// Pick the delimiter whose field count is stable across the first lines.
///
/// Candidates must appear at least once in the header. Ranking prefers a
/// count shared by every sampled line, then more fields, then tab, then the
/// order of [`DELIMITERS`]. Delimiters inside `quote` pairs are ignored.
fn detect_delimiter(bytes: &[u8], quote: u8) -> Result<u8> {
    let text = String::from_utf8_lossy(bytes);
    let lines: Vec<&str> = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(10)
        .collect();

    let Some(header) = lines.first() else {
        return Err(SentiscopeError::EmptyCorpus("No lines to analyze".to_string()));
    };

    let best = DELIMITERS
        .iter()
        .enumerate()
        .filter_map(|(position, &delim)| {
            let header_count = unquoted_count(header, delim, quote);
            if header_count == 0 {
                return None;
            }
            let stable = lines
                .iter()
                .all(|line| unquoted_count(line, delim, quote) == header_count);
            let key = (stable, header_count, delim == b'\t', Reverse(position));
            Some((key, delim))
        })
        .max_by_key(|(key, _)| *key)
        .map(|(_, delim)| delim);

    Ok(best.unwrap_or(b','))
}

/// Occurrences of `delimiter` in `line` outside `quote` pairs.
fn unquoted_count(line: &str, delimiter: u8, quote: u8) -> usize {
    line.bytes()
        .scan(false, |in_quotes, byte| {
            if byte == quote {
                *in_quotes = !*in_quotes;
            }
            Some(byte == delimiter && !*in_quotes)
        })
        .filter(|&hit| hit)
        .count()
}

//! Main Sentiscope struct and public API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::compare::{Comparison, Outcome};
use crate::corpus::ReviewCorpus;
use crate::error::{Result, SentiscopeError};
use crate::lexicon::{Lexicon, TermMatches};
use crate::scoring::{average_of, score_breakdown, AverageRating, Rating, ScoreBreakdown};

/// Configuration for Sentiscope scoring.
#[derive(Debug, Clone, Default)]
pub struct SentiscopeConfig {
    /// Term lists used to score reviews.
    pub lexicon: Lexicon,
}

/// One review with its rating and the terms behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewScore {
    pub text: String,
    pub rating: Rating,
    pub matches: TermMatches,
}

/// Scores for every review of one structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureReport {
    /// Structure name.
    pub name: String,
    /// Rounded mean of `reviews[..].rating`.
    pub average: AverageRating,
    /// Per-review detail, in corpus order.
    pub reviews: Vec<ReviewScore>,
}

/// Head-to-head result for two structures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub left: StructureReport,
    pub right: StructureReport,
    pub outcome: Outcome,
    /// Winning structure, absent on a tie.
    pub winner: Option<String>,
    pub generated_at: DateTime<Utc>,
}

/// Scores reviews from a corpus with a fixed lexicon.
#[derive(Debug)]
pub struct Sentiscope {
    config: SentiscopeConfig,
    corpus: ReviewCorpus,
}

impl Sentiscope {
    /// Built-in lexicon and demo corpus.
    pub fn new() -> Self {
        Self::with_config(SentiscopeConfig::default())
    }

    /// Custom configuration with the demo corpus.
    pub fn with_config(config: SentiscopeConfig) -> Self {
        Self {
            config,
            corpus: ReviewCorpus::builtin(),
        }
    }

    /// Replace the lexicon.
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.config.lexicon = lexicon;
        self
    }

    /// Replace the corpus.
    pub fn with_corpus(mut self, corpus: ReviewCorpus) -> Self {
        self.corpus = corpus;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.config.lexicon
    }

    pub fn corpus(&self) -> &ReviewCorpus {
        &self.corpus
    }

    /// Score free text that need not belong to the corpus.
    pub fn score(&self, text: &str) -> ScoreBreakdown {
        score_breakdown(text, &self.config.lexicon)
    }

    /// Score every review of `structure`.
    pub fn rate(&self, structure: &str) -> Result<StructureReport> {
        let reviews = self.corpus.reviews(structure)?;
        self.report(structure, reviews)
    }

    /// Compare two distinct structures.
    pub fn compare(&self, left: &str, right: &str) -> Result<ComparisonReport> {
        if left == right {
            return Err(SentiscopeError::SameStructure(left.to_string()));
        }

        let left = self.rate(left)?;
        let right = self.rate(right)?;
        let comparison = Comparison::new(&left.name, left.average, &right.name, right.average);
        let winner = comparison.winner().map(str::to_string);

        tracing::info!(
            left = %left.name,
            left_average = left.average.value(),
            right = %right.name,
            right_average = right.average.value(),
            outcome = ?comparison.outcome,
            "compared structures"
        );

        Ok(ComparisonReport {
            left,
            right,
            outcome: comparison.outcome,
            winner,
            generated_at: Utc::now(),
        })
    }

    /// Every structure, highest average first; equal averages keep corpus order.
    pub fn rank(&self) -> Result<Vec<StructureReport>> {
        let mut reports = self
            .corpus
            .iter()
            .map(|(name, reviews)| self.report(name, reviews))
            .collect::<Result<Vec<_>>>()?;

        reports.sort_by(|a, b| b.average.value().total_cmp(&a.average.value()));
        Ok(reports)
    }

    fn report(&self, name: &str, reviews: &[String]) -> Result<StructureReport> {
        let scored: Vec<ReviewScore> = reviews
            .iter()
            .map(|text| {
                let breakdown = self.score(text);
                tracing::debug!(structure = name, rating = breakdown.rating.value(), review = %text, "scored review");
                ReviewScore {
                    text: text.clone(),
                    rating: breakdown.rating,
                    matches: breakdown.matches,
                }
            })
            .collect();

        let ratings: Vec<Rating> = scored.iter().map(|r| r.rating).collect();
        let average = average_of(&ratings)?;

        Ok(StructureReport {
            name: name.to_string(),
            average,
            reviews: scored,
        })
    }
}

impl Default for Sentiscope {
    fn default() -> Self {
        Self::new()
    }
}

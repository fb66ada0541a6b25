//! Averaging ratings across a structure's reviews.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::scorer::{score, Rating};
use crate::error::{Result, SentiscopeError};
use crate::lexicon::Lexicon;

/// Mean rating of a non-empty review list, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AverageRating(f64);

impl AverageRating {
    /// Mean of `total / count` rounded half up to two decimal places.
    ///
    /// Rounding happens on integer cents so exact halves such as 41/40 = 1.025
    /// are not lost to binary floating point.
    fn from_total(total: u64, count: u64) -> Self {
        let cents = (total * 200 + count) / (2 * count);
        AverageRating(cents as f64 / 100.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for AverageRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Score every review and return the rounded mean.
///
/// Fails with [`SentiscopeError::EmptyReviews`] when `reviews` is empty.
pub fn average_rating<S: AsRef<str>>(reviews: &[S], lexicon: &Lexicon) -> Result<AverageRating> {
    let ratings: Vec<Rating> = reviews
        .iter()
        .map(|review| score(review.as_ref(), lexicon))
        .collect();
    average_of(&ratings)
}

/// Rounded mean of ratings that were already computed.
pub fn average_of(ratings: &[Rating]) -> Result<AverageRating> {
    if ratings.is_empty() {
        return Err(SentiscopeError::EmptyReviews);
    }

    let total: u64 = ratings.iter().map(|r| u64::from(r.value())).sum();
    let average = AverageRating::from_total(total, ratings.len() as u64);

    tracing::debug!(count = ratings.len(), total, average = average.value(), "averaged ratings");
    Ok(average)
}

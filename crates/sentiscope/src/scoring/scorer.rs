//! Single-review scoring.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lexicon::{Lexicon, TermMatches};

/// Rating assigned to a text with no lexicon hits.
const NEUTRAL: i32 = 3;

/// Integer rating in the closed range 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: Rating = Rating(1);
    pub const MAX: Rating = Rating(5);

    /// Checked constructor; `None` outside 1..=5.
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&value)
            .then_some(Rating(value))
    }

    /// Map a raw hit balance onto the rating scale, saturating at the bounds.
    pub fn from_balance(balance: i32) -> Self {
        let clamped = NEUTRAL
            .saturating_add(balance)
            .clamp(Self::MIN.0 as i32, Self::MAX.0 as i32);
        Rating(clamped as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value).ok_or_else(|| format!("rating must be between 1 and 5, got {}", value))
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rating together with the evidence that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Final clamped rating.
    pub rating: Rating,
    /// Positive hits minus negative hits, before clamping.
    pub balance: i32,
    /// Terms that matched.
    pub matches: TermMatches,
}

/// Score one review against `lexicon`.
///
/// Every positive term found as a substring of the lowercased text adds one,
/// every negative term subtracts one, and the sum is offset from a neutral 3
/// and clamped to 1..=5. Presence is counted once per term, so repeating a word
/// does not move the score. Never fails: empty text rates 3.
pub fn score(text: &str, lexicon: &Lexicon) -> Rating {
    score_breakdown(text, lexicon).rating
}

/// Like [`score`], but also returns the matched terms and raw balance.
pub fn score_breakdown(text: &str, lexicon: &Lexicon) -> ScoreBreakdown {
    let matches = lexicon.matches(text);
    let balance = matches.balance();
    ScoreBreakdown {
        rating: Rating::from_balance(balance),
        balance,
        matches,
    }
}

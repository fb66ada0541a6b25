//! Deciding which of two structures rates higher.

use serde::{Deserialize, Serialize};

use crate::scoring::AverageRating;

/// Result of comparing two averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    LeftWins,
    RightWins,
    Tie,
}

/// Three-way comparison: strictly greater wins, equal values tie.
pub fn compare(left: AverageRating, right: AverageRating) -> Outcome {
    if left.value() > right.value() {
        Outcome::LeftWins
    } else if right.value() > left.value() {
        Outcome::RightWins
    } else {
        Outcome::Tie
    }
}

/// A named pair of averages and the verdict between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub left: String,
    pub left_average: AverageRating,
    pub right: String,
    pub right_average: AverageRating,
    pub outcome: Outcome,
}

impl Comparison {
    pub fn new(
        left: impl Into<String>,
        left_average: AverageRating,
        right: impl Into<String>,
        right_average: AverageRating,
    ) -> Self {
        Self {
            left: left.into(),
            left_average,
            right: right.into(),
            right_average,
            outcome: compare(left_average, right_average),
        }
    }

    /// Name of the structure with the higher average, `None` on a tie.
    pub fn winner(&self) -> Option<&str> {
        match self.outcome {
            Outcome::LeftWins => Some(&self.left),
            Outcome::RightWins => Some(&self.right),
            Outcome::Tie => None,
        }
    }

    pub fn is_tie(&self) -> bool {
        self.outcome == Outcome::Tie
    }
}

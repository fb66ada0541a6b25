//! Review scoring and per-structure aggregation.

mod aggregate;
mod scorer;

pub use aggregate::{average_of, average_rating, AverageRating};
pub use scorer::{score, score_breakdown, Rating, ScoreBreakdown};

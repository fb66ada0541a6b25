//! Sentiscope: lexicon-based review scoring for comparing hotels and restaurants.
//!
//! Each review is rated 1–5 by counting which positive and negative lexicon
//! terms appear in it. A structure's rating is the mean over its reviews,
//! rounded to two decimals, and two structures are compared by that mean.
//!
//! # Core Principles
//!
//! - **Pure scoring**: no I/O, no shared mutable state, same input same output
//! - **Explicit data**: lexicon and corpus are passed in, never ambient
//! - **Substring matching**: terms match anywhere in the lowercased text
//!
//! # Example
//!
//! ```
//! use sentiscope::{average_rating, default_lexicon, score};
//!
//! let lexicon = default_lexicon();
//! assert_eq!(score("Personale gentile, camera pulita.", lexicon).value(), 5);
//!
//! let reviews = ["Servizio eccellente!", "Rumoroso di notte."];
//! assert_eq!(average_rating(&reviews, lexicon).unwrap().value(), 3.0);
//! ```

pub mod compare;
pub mod corpus;
pub mod error;
pub mod lexicon;
pub mod scoring;

mod sentiscope;

pub use crate::sentiscope::{
    ComparisonReport, ReviewScore, Sentiscope, SentiscopeConfig, StructureReport,
};
pub use compare::{compare, Comparison, Outcome};
pub use corpus::{CorpusLoader, ReviewCorpus};
pub use error::{Result, SentiscopeError};
pub use lexicon::{default_lexicon, Lexicon, TermMatches};
pub use scoring::{average_rating, score, score_breakdown, AverageRating, Rating, ScoreBreakdown};

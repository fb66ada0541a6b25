//! Property-based tests for the scorer and aggregator.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p sentiscope --test property_tests
//!
//! # More cases
//! PROPTEST_CASES=10000 cargo test -p sentiscope --test property_tests
//! ```

use proptest::prelude::*;

use sentiscope::{average_rating, default_lexicon, score, Lexicon};

// =============================================================================
// Test Strategies
// =============================================================================

/// Arbitrary ASCII text.
fn ascii_string() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_\\-\\.,!\\s]{0,120}"
}

/// Review-like text mixing lexicon terms with filler words.
fn review_like() -> impl Strategy<Value = String> {
    let words = prop_oneof![
        Just("gentile"),
        Just("PULITA"),
        Just("tornerò"),
        Just("eccellente"),
        Just("rumoroso"),
        Just("Troppo"),
        Just("poco"),
        Just("camera"),
        Just("colazione"),
        Just("servizio"),
        Just("e"),
        Just("ma"),
    ];
    prop::collection::vec(words, 0..12).prop_map(|w| w.join(" "))
}

/// Completely random UTF-8.
fn random_utf8() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<u8>(), 0..200)
        .prop_filter_map("valid UTF-8", |bytes| String::from_utf8(bytes).ok())
}

fn review_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(review_like(), 1..10)
}

/// Longer review lists, where exact half-cent means such as 41/40 occur.
fn long_review_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(review_like(), 1..120)
}

// =============================================================================
// Scorer Properties
// =============================================================================

mod scorer_tests {
    use super::*;

    proptest! {
        /// Ratings always land in 1..=5.
        #[test]
        fn rating_in_range(input in prop_oneof![ascii_string(), review_like(), random_utf8()]) {
            let rating = score(&input, default_lexicon()).value();
            prop_assert!((1..=5).contains(&rating), "rating {} out of range", rating);
        }

        /// Scoring is deterministic.
        #[test]
        fn scoring_is_deterministic(input in review_like()) {
            let lexicon = default_lexicon();
            prop_assert_eq!(score(&input, lexicon), score(&input, lexicon));
        }

        /// Repeating the whole text never changes the rating, since each term
        /// counts once however often it appears.
        #[test]
        fn repetition_does_not_change_rating(input in review_like()) {
            let lexicon = default_lexicon();
            let doubled = format!("{} {}", input, input);
            prop_assert_eq!(score(&input, lexicon), score(&doubled, lexicon));
        }

        /// Case never matters.
        #[test]
        fn case_insensitive(input in review_like()) {
            let lexicon = default_lexicon();
            prop_assert_eq!(
                score(&input.to_uppercase(), lexicon),
                score(&input.to_lowercase(), lexicon)
            );
        }

        /// Text with no lexicon terms at all is neutral.
        #[test]
        fn empty_lexicon_is_neutral(input in ascii_string()) {
            let lexicon = Lexicon::new(Vec::<String>::new(), Vec::<String>::new());
            prop_assert_eq!(score(&input, &lexicon).value(), 3);
        }
    }
}

// =============================================================================
// Aggregator Properties
// =============================================================================

mod aggregator_tests {
    use super::*;

    proptest! {
        /// The average equals the rounded mean of individual scores.
        #[test]
        fn average_is_rounded_mean(reviews in long_review_list()) {
            let lexicon = default_lexicon();
            let total: u64 = reviews.iter().map(|r| u64::from(score(r, lexicon).value())).sum();
            let count = reviews.len() as u64;

            // Exact half-up rounding via quotient and remainder in cents
            let (quotient, remainder) = (total * 100 / count, total * 100 % count);
            let cents = if 2 * remainder >= count { quotient + 1 } else { quotient };
            let expected = cents as f64 / 100.0;

            let average = average_rating(&reviews, lexicon).unwrap();
            prop_assert_eq!(average.value(), expected);
        }

        /// The average stays within the rating scale.
        #[test]
        fn average_in_range(reviews in review_list()) {
            let average = average_rating(&reviews, default_lexicon()).unwrap().value();
            prop_assert!((1.0..=5.0).contains(&average));
        }

        /// Review order does not affect the average.
        #[test]
        fn order_independent(reviews in review_list()) {
            let lexicon = default_lexicon();
            let mut reversed = reviews.clone();
            reversed.reverse();
            prop_assert_eq!(
                average_rating(&reviews, lexicon).unwrap(),
                average_rating(&reversed, lexicon).unwrap()
            );
        }
    }
}

//! Fuzz target for the review scorer.
//!
//! Checks that scoring never panics and always yields a rating in 1..=5,
//! for valid UTF-8 and for lossily decoded bytes.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sentiscope::{default_lexicon, score};

fuzz_target!(|data: &[u8]| {
    let lexicon = default_lexicon();

    if let Ok(input) = std::str::from_utf8(data) {
        let rating = score(input, lexicon).value();
        assert!((1..=5).contains(&rating));
    }

    let lossy = String::from_utf8_lossy(data);
    let rating = score(&lossy, lexicon).value();
    assert!((1..=5).contains(&rating));
});

//! Fuzz target for the corpus loader.
//!
//! Feeds arbitrary bytes to both the JSON and the delimited parser. Errors are
//! fine; panics are not. Any corpus that does parse must be rankable.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sentiscope::{CorpusLoader, Sentiscope};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let loader = CorpusLoader::new();
    for parsed in [loader.parse_json(data), loader.parse_delimited(data)] {
        if let Ok(corpus) = parsed {
            let ranking = Sentiscope::new().with_corpus(corpus).rank();
            assert!(ranking.is_ok());
        }
    }
});

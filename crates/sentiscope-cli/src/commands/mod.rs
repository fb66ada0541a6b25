//! CLI command implementations.

pub mod compare;
pub mod list;
pub mod rate;
pub mod score;

use std::path::Path;

use colored::Colorize;
use sentiscope::{AverageRating, CorpusLoader, Lexicon, Rating, Sentiscope};

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Width of a full-scale (5.0) bar.
const BAR_WIDTH: usize = 30;

/// Build the engine from optional corpus and lexicon overrides.
pub fn load_engine(
    corpus: Option<&Path>,
    lexicon: Option<&Path>,
) -> Result<Sentiscope, Box<dyn std::error::Error>> {
    let mut engine = Sentiscope::new();

    if let Some(path) = lexicon {
        if !path.exists() {
            return Err(format!("Lexicon file not found: {}", path.display()).into());
        }
        engine = engine.with_lexicon(Lexicon::load(path)?);
    }

    if let Some(path) = corpus {
        if !path.exists() {
            return Err(format!("Corpus file not found: {}", path.display()).into());
        }
        engine = engine.with_corpus(CorpusLoader::new().load_file(path)?);
    }

    Ok(engine)
}

/// Horizontal bar proportional to `average` on the 0–5 scale.
pub fn rating_bar(average: AverageRating) -> String {
    let filled = ((average.value() / 5.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    "█".repeat(filled) + &"░".repeat(BAR_WIDTH - filled)
}

/// Rating colored by how favorable it is.
pub fn colored_rating(rating: Rating) -> colored::ColoredString {
    let text = rating.to_string();
    match rating.value() {
        4..=5 => text.green(),
        3 => text.yellow(),
        _ => text.red(),
    }
}

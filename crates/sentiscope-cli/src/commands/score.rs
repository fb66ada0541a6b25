//! Score command - rate a single piece of text.

use colored::Colorize;
use sentiscope::Sentiscope;

use super::{colored_rating, CommandResult};

pub fn run(engine: &Sentiscope, text: &str, json_output: bool) -> CommandResult {
    let breakdown = engine.score(text);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(());
    }

    println!("Rating: {} / 5", colored_rating(breakdown.rating).bold());

    if !breakdown.matches.positive.is_empty() {
        println!("  {} {}", "+".green(), breakdown.matches.positive.join(", "));
    }
    if !breakdown.matches.negative.is_empty() {
        println!("  {} {}", "-".red(), breakdown.matches.negative.join(", "));
    }
    if breakdown.matches.positive.is_empty() && breakdown.matches.negative.is_empty() {
        println!("  {}", "No lexicon terms found.".dimmed());
    }

    Ok(())
}

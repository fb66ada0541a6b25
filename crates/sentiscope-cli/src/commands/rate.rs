//! Rate command - per-review ratings for one structure.

use colored::Colorize;
use sentiscope::{Sentiscope, StructureReport};

use super::{colored_rating, CommandResult};

pub fn run(engine: &Sentiscope, structure: &str, json_output: bool) -> CommandResult {
    let report = engine.rate(structure)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", render_report(&report));
    Ok(())
}

/// One structure's reviews as a rating table, each review followed by its matched terms.
pub fn render_report(report: &StructureReport) -> String {
    let mut out = format!(
        "{} (average {})\n",
        report.name.white().bold(),
        report.average.to_string().cyan().bold()
    );

    for review in &report.reviews {
        out.push_str(&format!("  [{}] {}\n", colored_rating(review.rating), review.text));
        let terms: Vec<String> = review
            .matches
            .positive
            .iter()
            .map(|t| format!("+{}", t))
            .chain(review.matches.negative.iter().map(|t| format!("-{}", t)))
            .collect();
        if !terms.is_empty() {
            out.push_str(&format!("      {}\n", terms.join(" ").dimmed()));
        }
    }
    out
}

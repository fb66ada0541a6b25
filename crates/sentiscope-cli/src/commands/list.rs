//! List command - show every structure with its average rating.

use colored::Colorize;
use sentiscope::Sentiscope;

use super::{rating_bar, CommandResult};

pub fn run(engine: &Sentiscope, json_output: bool) -> CommandResult {
    let ranking = engine.rank()?;

    if json_output {
        let rows: Vec<_> = ranking
            .iter()
            .map(|report| {
                serde_json::json!({
                    "name": report.name,
                    "reviews": report.reviews.len(),
                    "average": report.average,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{} {} structures",
        "Ranking".cyan().bold(),
        ranking.len().to_string().white().bold()
    );
    println!();

    let width = ranking.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
    for (position, report) in ranking.iter().enumerate() {
        println!(
            "{:>2}. {:width$}  {} {}  ({} reviews)",
            position + 1,
            report.name,
            rating_bar(report.average).cyan(),
            report.average.to_string().white().bold(),
            report.reviews.len(),
            width = width
        );
    }

    Ok(())
}

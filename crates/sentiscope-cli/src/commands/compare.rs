//! Compare command - pick the better of two structures.

use colored::Colorize;
use sentiscope::{ComparisonReport, Sentiscope};

use super::{rate::render_report, rating_bar, CommandResult};

pub fn run(
    engine: &Sentiscope,
    left: &str,
    right: &str,
    detail: bool,
    json_output: bool,
) -> CommandResult {
    let report = engine.compare(left, right)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {} vs {}",
        "Comparing".cyan().bold(),
        report.left.name.white(),
        report.right.name.white()
    );
    println!();
    print!("{}", render_chart(&report));
    println!();

    if detail {
        print!("{}", render_detail(&report));
    }

    println!("{}", verdict(&report));
    Ok(())
}

/// Average rating bars, names padded to a common width.
fn render_chart(report: &ComparisonReport) -> String {
    let width = report
        .left
        .name
        .chars()
        .count()
        .max(report.right.name.chars().count());

    [&report.left, &report.right]
        .iter()
        .map(|side| {
            format!(
                "  {:width$}  {} {}\n",
                side.name,
                rating_bar(side.average).cyan(),
                side.average.to_string().white().bold(),
                width = width
            )
        })
        .collect()
}

/// Per-review tables for both sides.
fn render_detail(report: &ComparisonReport) -> String {
    let mut out = format!("{}\n", "Reviews:".yellow().bold());
    for side in [&report.left, &report.right] {
        out.push_str(&render_report(side));
        out.push('\n');
    }
    out
}

fn verdict(report: &ComparisonReport) -> String {
    match &report.winner {
        Some(winner) => format!(
            "{} {} has the higher average rating.",
            "Winner:".green().bold(),
            winner.white().bold()
        ),
        None => "Tie: both structures have the same average rating."
            .yellow()
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_names_winner() {
        let report = Sentiscope::new().compare("Ristorante Mare", "Hotel Sole").unwrap();
        let out = verdict(&report);
        assert!(out.contains("Winner:"));
        assert!(out.contains("Hotel Sole"));
        assert!(out.contains("has the higher average rating."));
        assert!(!out.contains("Ristorante Mare"));
    }

    #[test]
    fn test_verdict_tie() {
        let report = Sentiscope::new()
            .compare("Hotel Luna", "Ristorante Mare")
            .unwrap();
        let out = verdict(&report);
        assert!(out.contains("Tie: both structures have the same average rating."));
        assert!(!out.contains("Winner:"));
    }

    #[test]
    fn test_chart_has_one_bar_per_side() {
        let report = Sentiscope::new().compare("Hotel Sole", "Hotel Luna").unwrap();
        let chart = render_chart(&report);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Hotel Sole") && lines[0].contains("3.75"));
        assert!(lines[1].contains("Hotel Luna") && lines[1].contains("3.00"));
    }

    #[test]
    fn test_detail_lists_both_structures_reviews() {
        let report = Sentiscope::new().compare("Hotel Sole", "Hotel Luna").unwrap();
        let out = render_detail(&report);
        assert!(out.contains("Reviews:"));
        assert!(out.contains("Servizio eccellente, tornerò sicuramente!"));
        assert!(out.contains("+gentile"));
        assert!(out.find("Hotel Sole") < out.find("Hotel Luna"));
    }
}

//! Example: compare two structures from the demo corpus.
//!
//! Usage:
//!   cargo run --example compare -- "Hotel Sole" "Hotel Luna"

use std::env;

use sentiscope::Sentiscope;

fn main() -> sentiscope::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: cargo run --example compare -- <structure A> <structure B>");
        eprintln!("\nAvailable structures:");
        for name in Sentiscope::new().corpus().names() {
            eprintln!("  {}", name);
        }
        std::process::exit(1);
    }

    let engine = Sentiscope::new();
    let report = engine.compare(&args[1], &args[2])?;

    let separator = "=".repeat(60);
    println!("{}", separator);
    println!("{} vs {}", report.left.name, report.right.name);
    println!("{}", separator);

    for structure in [&report.left, &report.right] {
        println!();
        println!("## {} (average {})", structure.name, structure.average);
        for review in &structure.reviews {
            println!("  [{}] {}", review.rating, review.text);
        }
    }

    println!();
    match &report.winner {
        Some(name) => println!("Winner: {}", name),
        None => println!("Tie"),
    }

    Ok(())
}

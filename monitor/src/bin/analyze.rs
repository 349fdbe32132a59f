use clap::Parser;
use detection::analyzer::ReviewAnalyzer;

/// Analyze a single review from the command line and print the verdict.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Review text to analyze
    #[arg(short, long)]
    text: String,

    /// Star rating given with the review (1-5)
    #[arg(short, long)]
    rating: i32,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let result = ReviewAnalyzer::default().analyze(&args.text, args.rating);
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

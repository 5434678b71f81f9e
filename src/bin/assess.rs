use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use dysrisk::{Config, RiskAssessor};

/// Estimate dysplasia risk from two model classifications and patient factors
#[derive(Parser)]
#[command(name = "assess", version)]
struct Cli {
    /// Classification from the stained tissue model (mild, moderate, severe)
    #[arg(short = 'a', long)]
    model_a: Option<String>,

    /// Classification from the confocal model (mild, moderate, severe)
    #[arg(short = 'b', long)]
    model_b: Option<String>,

    /// Patient age in years
    #[arg(long, allow_negative_numbers = true)]
    age: i64,

    #[arg(long)]
    smoker: bool,

    #[arg(long)]
    alcoholic: bool,

    /// Print the full assessment as JSON
    #[arg(long)]
    json: bool,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    dysrisk::logging::init(&config.logging);

    let assessment = RiskAssessor::with_rules(config.assessment).assess(
        cli.model_a.as_deref(),
        cli.model_b.as_deref(),
        cli.age,
        cli.smoker,
        cli.alcoholic,
    )?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        println!("Final Risk Level: {}", assessment.label);
        for note in &assessment.notes {
            println!("- {}", note);
        }
    }

    Ok(())
}

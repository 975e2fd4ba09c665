use std::path::PathBuf;

use ancestor_longevity::{
    AggregateStatsCalculator, DeathDetailExtractor, LongevityConfig, ReportAssembler,
    export_death_details, load_reference_index, read_individuals,
};
use anyhow::Context;
use clap::Parser;
use log::info;

/// Compare ancestors' ages at death with UK mortality statistics
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Male mortality statistics CSV
    #[arg(long, value_name = "FILE", default_value = "male_death_stats.csv")]
    male_death_stats: PathBuf,

    /// Female mortality statistics CSV
    #[arg(long, value_name = "FILE", default_value = "female_death_stats.csv")]
    female_death_stats: PathBuf,

    /// Ancestors CSV exported from a family tree
    #[arg(long, value_name = "FILE", default_value = "direct-ancestors.csv")]
    ancestors: PathBuf,

    /// Also write each compared ancestor to this CSV file
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Print the report as JSON instead of sentences
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = LongevityConfig::default();
    config.validate()?;

    let index = load_reference_index(&cli.male_death_stats, &cli.female_death_stats)
        .context("Failed to load mortality statistics")?;
    let ancestors = read_individuals(&cli.ancestors)
        .with_context(|| format!("Failed to read ancestors from {}", cli.ancestors.display()))?;

    let extraction = DeathDetailExtractor::new(&index, &config).extract_with_diagnostics(&ancestors);
    for (kind, count) in extraction.rejection_counts() {
        info!("Skipped {count} ancestors: {kind}");
    }

    if let Some(path) = &cli.csv {
        let written = export_death_details(path, &extraction.buckets)
            .context("Failed to export death details")?;
        info!("Death details written to {}", written.display());
    }

    let aggregates = AggregateStatsCalculator::new(&config).calculate_each(&extraction.buckets);
    let reports = ReportAssembler::assemble(&extraction.buckets, &aggregates);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in &reports {
        println!();
        for line in &report.lines {
            println!("{line}");
        }
    }
    Ok(())
}

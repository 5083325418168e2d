//! messier: query a Messier catalogue file
//!
//! Loads a catalogue (strictly by default, `--lenient` to skip bad lines) and runs one
//! query against it.

mod cli;
mod output;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use messier_catalog::{read_catalogue, Catalogue, IngestOptions, IngestPolicy};
use std::time::Instant;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let catalogue = load(&cli)?;
    let format = cli.format;
    let start = Instant::now();

    match &cli.command {
        Commands::List => {
            let mut sorted = catalogue.clone();
            sorted.sort();
            output::print_records(&sorted, format)?;
        }
        Commands::MeanMagnitude { category } => {
            let mean = catalogue
                .filter_by_category(category)
                .mean_magnitude()
                .with_context(|| format!("No objects in category '{category}'"))?;
            output::print_value(
                &format!("Mean magnitude of {category}"),
                "mean_magnitude",
                mean,
                format,
            )?;
        }
        Commands::MostDistant { category } => {
            let subset = catalogue.filter_by_category(category);
            let record = subset
                .most_distant()
                .with_context(|| format!("No objects in category '{category}'"))?;
            output::print_record(record, format)?;
        }
        Commands::LowestDec { region } => {
            let subset = catalogue.filter_by_region(region);
            let record = subset
                .lowest_declination()
                .with_context(|| format!("No objects in region '{region}'"))?;
            output::print_record(record, format)?;
        }
        Commands::Nearest { id } => {
            let reference = catalogue.get_by_id(id)?;
            match catalogue.nearest(reference) {
                Some(neighbour) => output::print_neighbour(reference, &neighbour, format)?,
                None => anyhow::bail!("No other object at a distinct position from {id}"),
            }
        }
        Commands::Show { id } => {
            output::print_record(catalogue.get_by_id(id)?, format)?;
        }
        Commands::Filter { category, region } => {
            let mut subset = catalogue;
            if let Some(category) = category {
                subset = subset.filter_by_category(category);
            }
            if let Some(region) = region {
                subset = subset.filter_by_region(region);
            }
            output::print_records(&subset, format)?;
        }
    }

    debug!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "query completed"
    );
    Ok(())
}

fn init_tracing(cli: &Cli) {
    let level = if cli.verbose {
        "debug"
    } else {
        cli.log_level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load(cli: &Cli) -> anyhow::Result<Catalogue> {
    let options = IngestOptions {
        policy: if cli.lenient {
            IngestPolicy::Lenient
        } else {
            IngestPolicy::Strict
        },
        comment_prefix: cli.comment_prefix.clone(),
    };

    info!(path = %cli.catalogue.display(), "loading catalogue");
    let report = read_catalogue(&cli.catalogue, &options)
        .with_context(|| format!("Failed to load catalogue {}", cli.catalogue.display()))?;

    for rejected in &report.rejected {
        warn!(line = rejected.line, error = %rejected.error, "skipped invalid line");
    }
    info!(
        records = report.catalogue.len(),
        rejected = report.rejected.len(),
        "catalogue loaded"
    );

    Ok(report.catalogue)
}

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use h2atlas::api::routes::OptimizeResponse;
use h2atlas::api::server;
use h2atlas::cli::cli::Args;
use h2atlas::config::preferences::SitingPreferences;
use h2atlas::core::optimizer::{self, OptimizationOutcome};
use h2atlas::data::dataset::{self, DatasetHandle, HydrogenDataset};
use h2atlas::data::sample;
use h2atlas::utils::csv_export::CsvExporter;
use h2atlas::utils::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging with timing and debug logging parameters
    logging::init_logging(args.enable_timing(), args.debug_logging());

    println!("Green Hydrogen Siting Service");
    println!(
        "Debug logging: {}, CSV export: {}, Timing: {}",
        if args.debug_logging() { "enabled" } else { "disabled" },
        if args.export_csv() { "enabled" } else { "disabled" },
        if args.enable_timing() { "enabled" } else { "disabled" }
    );

    let dataset = load_or_generate_dataset(&args);
    let handle = DatasetHandle::new(dataset);

    if args.serve() {
        server::serve(handle, args.port()).await?;
        return Ok(());
    }

    run_one_shot(&args, &handle)?;

    logging::print_timing_report();
    Ok(())
}

/// Load the dataset file, falling back to generated sample data when the
/// file is missing or unreadable. A seed makes the fallback deterministic.
fn load_or_generate_dataset(args: &Args) -> HydrogenDataset {
    match dataset::load_dataset(args.data()) {
        Ok(dataset) => {
            println!(
                "Loaded {} renewable sites and {} demand centers from {}",
                dataset.renewable_energy.len(),
                dataset.demand_centers.len(),
                args.data()
            );
            dataset
        }
        Err(e) => {
            eprintln!(
                "Failed to load dataset from {}: {}. Using generated sample data.",
                args.data(),
                e
            );
            let mut rng = match args.seed() {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            sample::generate_sample_dataset(&mut rng)
        }
    }
}

fn run_one_shot(args: &Args, handle: &DatasetHandle) -> Result<()> {
    let prefs = SitingPreferences {
        technology: args.technology().to_string(),
        min_capacity: args.min_capacity(),
        max_distance_to_renewable: args.max_distance(),
        min_demand_proximity: args.min_demand_proximity(),
        budget: args.budget(),
        region: args.region().to_string(),
    };

    let response = match prefs.validate() {
        Err(detail) => OptimizeResponse::Error {
            error: format!("Optimization failed: {}", detail),
        },
        Ok(()) => {
            let snapshot = handle.snapshot();
            let (outcome, report) = optimizer::optimize_site_with_report(&snapshot, &prefs);

            if args.export_csv() {
                let exporter = CsvExporter::new(args.output_dir())?;
                let path = exporter.export_run(&prefs, &outcome, &report)?;
                println!("Run summary exported to {}", path.display());
            }

            let message = outcome.message().to_string();
            match outcome {
                OptimizationOutcome::Optimal(rec) | OptimizationOutcome::Fallback(rec) => {
                    OptimizeResponse::Found {
                        optimal_location: rec,
                        message,
                    }
                }
                OptimizationOutcome::NoSuitableSources => {
                    OptimizeResponse::Error { error: message }
                }
            }
        }
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

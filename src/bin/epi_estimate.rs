//! Build the chart report for one county file.
//!
//! Usage:
//!     epi_estimate <county.json> [config.json]
//!
//! Outputs the report as JSON on stdout. Set `RUST_LOG=debug` for kernel and
//! series details on stderr.

use std::env;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use epi_data::CountyRecord;
use epi_estimators::{ChartReport, EstimatorConfig};
use tracing_subscriber::EnvFilter;

fn load_config(path: &Path) -> Result<EstimatorConfig, Box<dyn Error>> {
    let file = File::open(path).map_err(|e| format!("{}: {e}", path.display()))?;
    let config: EstimatorConfig = serde_json::from_reader(BufReader::new(file))?;
    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <county.json> [config.json]", args[0]);
        std::process::exit(1);
    }

    let config = match args.get(2) {
        Some(path) => load_config(Path::new(path))?,
        None => EstimatorConfig::default(),
    };

    let record = CountyRecord::from_path(Path::new(&args[1]))?;
    tracing::info!(entries = record.len(), path = %args[1], "loaded county record");

    let (cases, fatalities) = record.into_series::<f64>()?;
    let report = ChartReport::build(&cases, &fatalities, &config)?;

    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

//! Convert a county CSV export into the per-county JSON file tree.
//!
//! Usage:
//!     epi_convert <us-counties.csv> <out_dir>

use std::env;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use epi_data::{parse_counties, write_json_tree, DataError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <us-counties.csv> <out_dir>", args[0]);
        std::process::exit(1);
    }

    let csv_path = Path::new(&args[1]);
    let out_dir = Path::new(&args[2]);

    let file = File::open(csv_path).map_err(|e| DataError::io(csv_path, e))?;
    let tree = parse_counties(BufReader::new(file))?;

    let counties: usize = tree.values().map(|counties| counties.len()).sum();
    write_json_tree(&tree, out_dir)?;

    tracing::info!(
        states = tree.len(),
        counties,
        out_dir = %out_dir.display(),
        "wrote county tree"
    );
    Ok(())
}

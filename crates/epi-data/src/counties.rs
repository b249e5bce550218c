//! County-level CSV parsing and the JSON file tree.
//!
//! The tree on disk looks like:
//!
//! ```text
//! <base>/state_county.json          {"Washington": ["King", "Pierce"], ...}
//! <base>/Washington/King.json       {"2020-03-01": [14, 2], ...}
//! <base>/New_York/New_York_City.json
//! ```

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DataError, Result};

/// Name of the state index file at the root of a tree.
pub const STATE_INDEX_FILE: &str = "state_county.json";

/// `(cumulative cases, cumulative deaths)` keyed by `YYYY-MM-DD`.
pub type DateCounts = BTreeMap<String, (u64, u64)>;

/// `tree[state][county][date] = (cases, deaths)`.
pub type CountyTree = BTreeMap<String, BTreeMap<String, DateCounts>>;

#[derive(Debug, Deserialize)]
struct CountyRow {
    date: String,
    county: String,
    state: String,
    cases: u64,
    deaths: Option<u64>,
}

/// Replace spaces with underscores, the form used for file names.
#[must_use]
pub fn to_safe_name(name: &str) -> String {
    name.replace(' ', "_")
}

/// Inverse of [`to_safe_name`].
#[must_use]
pub fn from_safe_name(name: &str) -> String {
    name.replace('_', " ")
}

/// Path of the county file for `state` and `county` under `base_dir`.
#[must_use]
pub fn county_path(base_dir: &Path, state: &str, county: &str) -> PathBuf {
    base_dir
        .join(to_safe_name(state))
        .join(format!("{}.json", to_safe_name(county)))
}

/// Parse `date,county,state,fips,cases,deaths` rows into a [`CountyTree`].
///
/// The header row is required and columns are matched by name; `fips` is
/// ignored. A missing death count reads as zero. A repeated
/// `(state, county, date)` keeps the last row.
///
/// # Errors
///
/// Returns [`DataError::Csv`] for unreadable input or a row that does not fit
/// the columns above.
#[cfg_attr(feature = "tracing", tracing::instrument(name = "epi_data::parse_counties", skip_all))]
pub fn parse_counties<R: Read>(reader: R) -> Result<CountyTree> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut tree = CountyTree::new();
    for result in csv_reader.deserialize() {
        let row: CountyRow = result?;
        tree.entry(row.state)
            .or_default()
            .entry(row.county)
            .or_default()
            .insert(row.date, (row.cases, row.deaths.unwrap_or(0)));
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(states = tree.len(), "parsed county rows");

    Ok(tree)
}

/// Write `tree` as a JSON file tree under `base_dir`.
///
/// Creates directories as needed and overwrites existing files. Each county
/// gets `<base>/<Safe_State>/<Safe_County>.json`; the index at
/// [`STATE_INDEX_FILE`] maps every state to its sorted county names, unescaped.
///
/// # Errors
///
/// Returns [`DataError::Io`] if a directory or file cannot be created and
/// [`DataError::Json`] if serialization fails.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "epi_data::write_json_tree",
        skip_all,
        fields(base_dir = %base_dir.display()),
    )
)]
pub fn write_json_tree(tree: &CountyTree, base_dir: &Path) -> Result<()> {
    fs::create_dir_all(base_dir).map_err(|e| DataError::io(base_dir, e))?;

    let mut index: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (state, counties) in tree {
        let state_dir = base_dir.join(to_safe_name(state));
        fs::create_dir_all(&state_dir).map_err(|e| DataError::io(&state_dir, e))?;

        for (county, dates) in counties {
            let path = county_path(base_dir, state, county);
            write_json(&path, dates)?;
        }
        // BTreeMap keys are already sorted
        index.insert(state.as_str(), counties.keys().map(String::as_str).collect());

        #[cfg(feature = "tracing")]
        tracing::trace!(state = %state, counties = counties.len(), "wrote state");
    }

    write_json(&base_dir.join(STATE_INDEX_FILE), &index)
}

/// Read the state index written by [`write_json_tree`].
///
/// # Errors
///
/// Returns [`DataError::Io`] if the file cannot be opened and
/// [`DataError::Json`] if it is malformed.
pub fn read_state_index(base_dir: &Path) -> Result<BTreeMap<String, Vec<String>>> {
    let path = base_dir.join(STATE_INDEX_FILE);
    let file = File::open(&path).map_err(|e| DataError::io(&path, e))?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

fn write_json<S: serde::Serialize + ?Sized>(path: &Path, value: &S) -> Result<()> {
    let file = File::create(path).map_err(|e| DataError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, value)?;
    writer.flush().map_err(|e| DataError::io(path, e))
}

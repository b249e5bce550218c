//! # epi-data
//!
//! Ingestion of county-level cumulative counts.
//!
//! - [`parse_counties`] reads `us-counties.csv` rows into a [`CountyTree`]
//! - [`write_json_tree`] lays the tree out as one JSON file per county
//! - [`CountyRecord`] reads one of those files back as cumulative
//!   [`epi_core::TimeSeries`]
//!
//! ## Feature Flags
//!
//! - `tracing` - Emit `tracing` events while parsing and writing
//!
//! ## Example
//!
//! ```rust
//! use epi_data::{parse_counties, CountyRecord};
//!
//! let csv = "date,county,state,fips,cases,deaths\n\
//!            2020-03-01,King,Washington,53033,14,2\n\
//!            2020-03-02,King,Washington,53033,21,5\n";
//! let tree = parse_counties(csv.as_bytes()).unwrap();
//!
//! let record = CountyRecord::new(tree["Washington"]["King"].clone());
//! let (cases, fatalities) = record.into_series::<f64>().unwrap();
//! assert_eq!(cases.range(), &[14.0, 21.0]);
//! assert_eq!(fatalities.range(), &[2.0, 5.0]);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod counties;
pub mod error;
pub mod record;

pub use counties::{
    county_path, from_safe_name, parse_counties, read_state_index, to_safe_name, write_json_tree,
    CountyTree, DateCounts, STATE_INDEX_FILE,
};
pub use error::{DataError, Result};
pub use record::CountyRecord;

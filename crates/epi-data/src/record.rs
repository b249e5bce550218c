//! A single county file turned back into time series.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::NaiveDate;
use epi_core::dates::date_to_timestamp;
use epi_core::{SignalFloat, TimeSeries};
use serde::{Deserialize, Serialize};

use crate::counties::DateCounts;
use crate::error::{DataError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Cumulative `(cases, deaths)` for one county, keyed by date string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountyRecord {
    entries: DateCounts,
}

impl CountyRecord {
    /// Wrap already-parsed counts.
    #[must_use]
    pub fn new(entries: DateCounts) -> Self {
        Self { entries }
    }

    /// Parse `{"YYYY-MM-DD": [cases, deaths], ...}`.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Json`] if the input is not a date-keyed object of
    /// count pairs.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read a county file, as written by [`crate::write_json_tree`].
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Io`] if the file cannot be opened, or any error of
    /// [`CountyRecord::from_reader`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| DataError::io(path, e))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Number of dated entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the record has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw entries.
    #[must_use]
    pub fn entries(&self) -> &DateCounts {
        &self.entries
    }

    /// Split into cumulative `(cases, fatalities)` series over a shared domain.
    ///
    /// Each date is taken as UTC midnight. Entries are ordered by timestamp,
    /// not by key text.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::InvalidDate`] for a key that is not `YYYY-MM-DD`.
    pub fn into_series<T: SignalFloat>(self) -> Result<(TimeSeries<T>, TimeSeries<T>)> {
        let mut rows = self
            .entries
            .iter()
            .map(|(key, &(cases, deaths))| {
                let date = NaiveDate::parse_from_str(key, DATE_FORMAT).map_err(|source| {
                    DataError::InvalidDate {
                        value: key.clone(),
                        source,
                    }
                })?;
                Ok((date_to_timestamp(date), cases, deaths))
            })
            .collect::<Result<Vec<_>>>()?;
        rows.sort_unstable_by_key(|&(timestamp, _, _)| timestamp);

        let domain: Vec<i64> = rows.iter().map(|&(timestamp, _, _)| timestamp).collect();
        let cases = rows
            .iter()
            .map(|&(_, cases, _)| T::from_f64_lossy(cases as f64))
            .collect();
        let deaths = rows
            .iter()
            .map(|&(_, _, deaths)| T::from_f64_lossy(deaths as f64))
            .collect();

        Ok((
            TimeSeries::new(domain.clone(), cases)?,
            TimeSeries::new(domain, deaths)?,
        ))
    }
}

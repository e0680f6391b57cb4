// SPDX-License-Identifier: MPL-2.0

//! Timestamp-keyed store of readings and the per-query sample trees.
//!
//! The archive is the long-lived side of the system: readings parsed from
//! the station logs are de-duplicated by timestamp and kept sorted. Queries
//! never aggregate over the archive directly; each one builds a fresh
//! [`SearchTree`] of the matching samples, folds over it, and throws it
//! away.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::bst::SearchTree;
use crate::parse::parse_reading;
use crate::record::{Date, Reading, Time};
use crate::stats::Sample;

/// Errors from loading archive data from disk.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// The index file listing the log files could not be read.
    #[error("cannot read index {path}: {source}")]
    Index {
        /// Path of the index file.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
    /// A log file failed mid-read.
    #[error("cannot read log {path}: {source}")]
    Log {
        /// Path of the log file.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
}

/// Name of the file listing the log files to ingest, one name per line.
pub const INDEX_FILE: &str = "data_source.txt";

/// Which measurement of a [`Reading`] a query aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sensor {
    /// Wind speed.
    WindSpeed,
    /// Ambient air temperature.
    AirTemperature,
    /// Solar irradiance.
    SolarRadiation,
}

impl Sensor {
    /// Reads this sensor's measurement from a reading.
    pub fn measure(self, reading: &Reading) -> f64 {
        match self {
            Sensor::WindSpeed => reading.wind_speed,
            Sensor::AirTemperature => reading.air_temperature,
            Sensor::SolarRadiation => reading.solar_radiation,
        }
    }
}

/// Line counts from one ingested reader.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines that parsed and were stored.
    pub ingested: usize,
    /// Lines that did not parse (headers, blanks, malformed rows).
    pub skipped: usize,
}

/// Summary of a whole [`WeatherArchive::load`] run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Log files read to the end.
    pub files_read: usize,
    /// Listed log files that could not be opened and were passed over.
    pub files_failed: Vec<PathBuf>,
    /// Line counts accumulated across all files read.
    pub stats: LoadStats,
}

/// All readings, keyed and de-duplicated by timestamp.
#[derive(Debug, Default, Clone)]
pub struct WeatherArchive {
    readings: BTreeMap<(Date, Time), Reading>,
}

impl WeatherArchive {
    /// Creates an empty archive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored readings.
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Returns true if no readings are stored.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Stores a reading. A reading with the same timestamp replaces the
    /// previous one, which is returned.
    pub fn insert(&mut self, reading: Reading) -> Option<Reading> {
        self.readings.insert(reading.timestamp(), reading)
    }

    /// Iterates over the stored readings in timestamp order.
    pub fn readings(&self) -> impl Iterator<Item = &Reading> {
        self.readings.values()
    }

    /// Parses every line from the reader, storing the ones that parse and
    /// counting the ones that do not. Header rows and malformed lines are
    /// skipped rather than fatal; only the reader itself can fail.
    pub fn ingest<R: BufRead>(&mut self, reader: R) -> io::Result<LoadStats> {
        let mut stats = LoadStats::default();
        for line in reader.lines() {
            let line = line?;
            match parse_reading(&line) {
                Ok(reading) => {
                    self.insert(reading);
                    stats.ingested += 1;
                }
                Err(_) => stats.skipped += 1,
            }
        }
        Ok(stats)
    }

    /// Loads every log file listed in [`INDEX_FILE`] under `data_dir`.
    ///
    /// A listed file that cannot be opened is recorded in the report and
    /// passed over; a missing index is an error.
    pub fn load(data_dir: &Path) -> Result<(Self, LoadReport), ArchiveError> {
        let index_path = data_dir.join(INDEX_FILE);
        let index =
            std::fs::read_to_string(&index_path).map_err(|source| ArchiveError::Index {
                path: index_path.clone(),
                source,
            })?;

        let mut archive = Self::new();
        let mut report = LoadReport::default();
        for name in index.lines().map(str::trim) {
            if name.is_empty() {
                continue;
            }
            let path = data_dir.join(name);
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(_) => {
                    report.files_failed.push(path);
                    continue;
                }
            };
            let stats = archive
                .ingest(BufReader::new(file))
                .map_err(|source| ArchiveError::Log { path, source })?;
            report.files_read += 1;
            report.stats.ingested += stats.ingested;
            report.stats.skipped += stats.skipped;
        }

        Ok((archive, report))
    }

    /// Builds a fresh sample tree for one sensor over one month of one year.
    pub fn monthly_samples(&self, sensor: Sensor, month: u32, year: u32) -> SearchTree<Sample> {
        self.samples_where(sensor, |date| date.month() == month && date.year() == year)
    }

    /// Builds a fresh sample tree for one sensor over a month across all
    /// years of the archive.
    pub fn month_across_years(&self, sensor: Sensor, month: u32) -> SearchTree<Sample> {
        self.samples_where(sensor, |date| date.month() == month)
    }

    fn samples_where<F>(&self, sensor: Sensor, keep: F) -> SearchTree<Sample>
    where
        F: Fn(&Date) -> bool,
    {
        let mut samples = SearchTree::new();
        for reading in self.readings.values() {
            if keep(&reading.date) {
                samples.insert(Sample::new(sensor.measure(reading)));
            }
        }
        samples
    }
}

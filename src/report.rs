// SPDX-License-Identifier: MPL-2.0

//! The monthly report queries and their renderings.
//!
//! Each query builds its per-month sample trees through the archive, folds
//! the aggregates, and returns plain data; the render helpers turn that data
//! into the console and CSV layouts. File and terminal I/O stay with the
//! caller.

use std::io::{self, Write};

use crate::archive::{Sensor, WeatherArchive};
use crate::bst::SearchTree;
use crate::record::Date;
use crate::stats::{self, Sample};

/// Divisor converting a monthly sum of irradiance samples to kWh/m².
const RADIATION_TO_KWH: f64 = 3.6;

/// Mean of a sample set together with its sample standard deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanSpread {
    /// Arithmetic mean of the samples.
    pub mean: f64,
    /// Sample standard deviation, 0 when fewer than two samples exist.
    pub std_dev: f64,
}

/// Pearson coefficients for one month across all years.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationSummary {
    /// Wind speed against air temperature (`S_T`).
    pub wind_temperature: f64,
    /// Wind speed against solar radiation (`S_R`).
    pub wind_solar: f64,
    /// Air temperature against solar radiation (`T_R`).
    pub temperature_solar: f64,
}

/// One month's row of the year-overview export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateRow {
    /// Month number, 1 through 12.
    pub month: u32,
    /// Wind speed summary, when the month has wind data.
    pub wind: Option<MeanSpread>,
    /// Air temperature summary, when the month has temperature data.
    pub temperature: Option<MeanSpread>,
    /// Total solar radiation in kWh/m², when the month has radiation data.
    pub total_solar_kwh: Option<f64>,
}

fn summarize(samples: &SearchTree<Sample>) -> Option<MeanSpread> {
    let mean = stats::mean(samples)?;
    Some(MeanSpread {
        mean,
        std_dev: stats::sample_std_dev(samples).unwrap_or(0.0),
    })
}

fn solar_total(samples: &SearchTree<Sample>) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(stats::total(samples) / RADIATION_TO_KWH)
}

/// Mean wind speed and deviation for one month of one year, or `None` when
/// the month has no readings.
pub fn wind_speed_summary(
    archive: &WeatherArchive,
    month: u32,
    year: u32,
) -> Option<MeanSpread> {
    summarize(&archive.monthly_samples(Sensor::WindSpeed, month, year))
}

/// Mean air temperature and deviation for every month of a year.
pub fn temperature_by_month(
    archive: &WeatherArchive,
    year: u32,
) -> Vec<(u32, Option<MeanSpread>)> {
    (1..=12)
        .map(|month| {
            let samples = archive.monthly_samples(Sensor::AirTemperature, month, year);
            (month, summarize(&samples))
        })
        .collect()
}

/// Pearson coefficients between the sensor pairs for one month across all
/// years, or `None` when the month has no readings at all. A pair whose
/// coefficient is undefined reports 0.
pub fn correlations_for_month(
    archive: &WeatherArchive,
    month: u32,
) -> Option<CorrelationSummary> {
    let wind = archive.month_across_years(Sensor::WindSpeed, month);
    let temperature = archive.month_across_years(Sensor::AirTemperature, month);
    let solar = archive.month_across_years(Sensor::SolarRadiation, month);

    if wind.is_empty() && temperature.is_empty() && solar.is_empty() {
        return None;
    }

    Some(CorrelationSummary {
        wind_temperature: stats::pearson(&wind, &temperature).unwrap_or(0.0),
        wind_solar: stats::pearson(&wind, &solar).unwrap_or(0.0),
        temperature_solar: stats::pearson(&temperature, &solar).unwrap_or(0.0),
    })
}

/// The year overview: wind, temperature, and solar aggregates for every
/// month of a year.
pub fn climate_by_month(archive: &WeatherArchive, year: u32) -> Vec<ClimateRow> {
    (1..=12)
        .map(|month| ClimateRow {
            month,
            wind: summarize(&archive.monthly_samples(Sensor::WindSpeed, month, year)),
            temperature: summarize(&archive.monthly_samples(
                Sensor::AirTemperature,
                month,
                year,
            )),
            total_solar_kwh: solar_total(&archive.monthly_samples(
                Sensor::SolarRadiation,
                month,
                year,
            )),
        })
        .collect()
}

/// Total solar radiation in kWh/m² for every month of a year; empty months
/// carry `None`.
pub fn solar_by_month(archive: &WeatherArchive, year: u32) -> Vec<(u32, Option<f64>)> {
    (1..=12)
        .map(|month| {
            let samples = archive.monthly_samples(Sensor::SolarRadiation, month, year);
            (month, solar_total(&samples))
        })
        .collect()
}

/// Writes the year overview as CSV: the year on its own line, then one line
/// per month. A month missing any of the three sensors renders as
/// `No Data`; deviations follow their averages in parentheses.
pub fn write_climate_csv<W: Write>(
    out: &mut W,
    year: u32,
    rows: &[ClimateRow],
) -> io::Result<()> {
    writeln!(out, "{year}")?;
    for row in rows {
        let name = Date::month_name(row.month);
        match (row.wind, row.temperature, row.total_solar_kwh) {
            (Some(wind), Some(temperature), Some(solar)) => writeln!(
                out,
                "{name},{:.2}({:.2}),{:.2}({:.2}),{:.2}",
                wind.mean, wind.std_dev, temperature.mean, temperature.std_dev, solar,
            )?,
            _ => writeln!(out, "{name},No Data")?,
        }
    }
    Ok(())
}

/// Console layout for the single-month wind report.
pub fn render_wind_summary(month: u32, year: u32, summary: Option<MeanSpread>) -> String {
    let name = Date::month_name(month);
    match summary {
        Some(wind) => format!(
            "{name} {year}:\nAverage Wind Speed: {:.2} km/h\nSample Standard Deviation: {:.2}",
            wind.mean, wind.std_dev,
        ),
        None => format!("{name} {year}: No Data"),
    }
}

/// Console layout for the month-by-month temperature report.
pub fn render_temperature_report(year: u32, rows: &[(u32, Option<MeanSpread>)]) -> String {
    let mut sections = Vec::with_capacity(rows.len());
    for (month, summary) in rows {
        let name = Date::month_name(*month);
        sections.push(match summary {
            Some(temperature) => format!(
                "{name} {year}:\nAverage temperature: {:.2} degrees Celsius\n\
                 Standard deviation of temperature: {:.2}",
                temperature.mean, temperature.std_dev,
            ),
            None => format!("{name} {year}:\nNo Data"),
        });
    }
    sections.join("\n\n")
}

/// Console layout for the monthly correlation report.
pub fn render_correlations(month: u32, summary: Option<CorrelationSummary>) -> String {
    let name = Date::month_name(month);
    match summary {
        Some(correlations) => format!(
            "Sample Pearson Correlation Coefficient for {name}:\n\
             S_T: {:.2}\nS_R: {:.2}\nT_R: {:.2}",
            correlations.wind_temperature,
            correlations.wind_solar,
            correlations.temperature_solar,
        ),
        None => format!("{name}: No Data"),
    }
}

/// Console layout for the monthly solar radiation report.
pub fn render_solar_report(rows: &[(u32, Option<f64>)]) -> String {
    let mut lines = Vec::with_capacity(rows.len());
    for (month, total) in rows {
        let name = Date::month_name(*month);
        lines.push(match total {
            Some(kwh) => format!("{name}: {kwh:.2} kWh/m2"),
            None => format!("{name}: No Data"),
        });
    }
    lines.join("\n")
}

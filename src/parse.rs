// SPDX-License-Identifier: MPL-2.0

//! Parser for one line of the station's comma-separated export.
//!
//! A row carries 18 fields:
//!
//! ```txt
//! WAST,DP,Dta,Dts,EV,QFE,QFF,QNH,RF,RH,S,SR,ST1,ST2,ST3,ST4,Sx,T
//! ```
//!
//! Only four are read here: the `WAST` timestamp (`d/m/yyyy h:mm`), the wind
//! speed `S`, the solar irradiance `SR` in W/m², and the air temperature `T`
//! in degrees Celsius. Everything else is skipped unexamined, and a blank
//! measurement field is an error rather than a zero.

use crate::record::{Date, Reading, RecordError, Time};

/// Errors from parsing a log line.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The line ended before the named field.
    #[error("missing field {0}")]
    MissingField(&'static str),
    /// A measurement field did not parse as a number.
    #[error("invalid number in field {field}: {source}")]
    InvalidNumber {
        /// Name of the offending field.
        field: &'static str,
        /// The underlying parse failure.
        source: std::num::ParseFloatError,
    },
    /// A timestamp component did not parse as an integer.
    #[error("invalid integer in field {field}: {source}")]
    InvalidInteger {
        /// Name of the offending field.
        field: &'static str,
        /// The underlying parse failure.
        source: std::num::ParseIntError,
    },
    /// The `WAST` field is not `date time`.
    #[error("malformed timestamp {0:?}")]
    MalformedTimestamp(String),
    /// A timestamp component parsed but is out of range.
    #[error(transparent)]
    Record(#[from] RecordError),
}

const TIMESTAMP_FIELD: usize = 0;
const WIND_SPEED_FIELD: usize = 10;
const SOLAR_RADIATION_FIELD: usize = 11;
const AIR_TEMPERATURE_FIELD: usize = 17;

/// Parses one export row into a [`Reading`].
pub fn parse_reading(line: &str) -> Result<Reading, ParseError> {
    let fields: Vec<&str> = line.split(',').collect();

    let (date, time) = parse_timestamp(field(&fields, TIMESTAMP_FIELD, "WAST")?)?;
    let wind_speed = parse_f64(field(&fields, WIND_SPEED_FIELD, "S")?, "S")?;
    let solar_radiation = parse_f64(field(&fields, SOLAR_RADIATION_FIELD, "SR")?, "SR")?;
    let air_temperature = parse_f64(field(&fields, AIR_TEMPERATURE_FIELD, "T")?, "T")?;

    Ok(Reading {
        date,
        time,
        wind_speed,
        air_temperature,
        solar_radiation,
    })
}

fn field<'a>(
    fields: &[&'a str],
    index: usize,
    name: &'static str,
) -> Result<&'a str, ParseError> {
    fields
        .get(index)
        .map(|text| text.trim())
        .ok_or(ParseError::MissingField(name))
}

fn parse_timestamp(text: &str) -> Result<(Date, Time), ParseError> {
    let malformed = || ParseError::MalformedTimestamp(text.to_string());

    let (date_part, time_part) = text.split_once(' ').ok_or_else(malformed)?;

    let mut date_components = date_part.splitn(3, '/');
    let day = parse_u32(date_components.next().ok_or_else(malformed)?, "day")?;
    let month = parse_u32(date_components.next().ok_or_else(malformed)?, "month")?;
    let year = parse_u32(date_components.next().ok_or_else(malformed)?, "year")?;

    let (hours_part, minutes_part) = time_part.split_once(':').ok_or_else(malformed)?;
    let hours = parse_u32(hours_part, "hours")?;
    let minutes = parse_u32(minutes_part, "minutes")?;

    Ok((Date::new(year, month, day)?, Time::new(hours, minutes)?))
}

fn parse_u32(text: &str, name: &'static str) -> Result<u32, ParseError> {
    text.trim().parse().map_err(|source| ParseError::InvalidInteger {
        field: name,
        source,
    })
}

fn parse_f64(text: &str, name: &'static str) -> Result<f64, ParseError> {
    text.trim().parse().map_err(|source| ParseError::InvalidNumber {
        field: name,
        source,
    })
}

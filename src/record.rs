// SPDX-License-Identifier: MPL-2.0

//! Value types for weather-station observations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Errors from validating record components.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// Year zero is not a valid station year.
    #[error("year must be positive")]
    InvalidYear,
    /// Months run 1 through 12.
    #[error("month {0} is out of range")]
    InvalidMonth(u32),
    /// Days run 1 through 31.
    #[error("day {0} is out of range")]
    InvalidDay(u32),
    /// Hours run 0 through 23.
    #[error("hour {0} is out of range")]
    InvalidHour(u32),
    /// Minutes run 0 through 59.
    #[error("minute {0} is out of range")]
    InvalidMinute(u32),
}

/// Calendar date of an observation.
///
/// Field order is year, month, day so the derived ordering is chronological.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Date {
    year: u32,
    month: u32,
    day: u32,
}

impl Date {
    /// Creates a date, validating each component's range.
    pub fn new(year: u32, month: u32, day: u32) -> Result<Self, RecordError> {
        if year == 0 {
            return Err(RecordError::InvalidYear);
        }
        if !(1..=12).contains(&month) {
            return Err(RecordError::InvalidMonth(month));
        }
        if !(1..=31).contains(&day) {
            return Err(RecordError::InvalidDay(day));
        }
        Ok(Self { year, month, day })
    }

    /// The year component.
    pub fn year(&self) -> u32 {
        self.year
    }

    /// The month component, 1 through 12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The day component, 1 through 31.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// English name of a month number, for report headings.
    pub fn month_name(month: u32) -> &'static str {
        match month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "unknown",
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}

/// Wall-clock time of an observation, to the minute.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Time {
    hours: u32,
    minutes: u32,
}

impl Time {
    /// Creates a time, validating each component's range.
    pub fn new(hours: u32, minutes: u32) -> Result<Self, RecordError> {
        if hours > 23 {
            return Err(RecordError::InvalidHour(hours));
        }
        if minutes > 59 {
            return Err(RecordError::InvalidMinute(minutes));
        }
        Ok(Self { hours, minutes })
    }

    /// The hours component, 0 through 23.
    pub fn hours(&self) -> u32 {
        self.hours
    }

    /// The minutes component, 0 through 59.
    pub fn minutes(&self) -> u32 {
        self.minutes
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hours, self.minutes)
    }
}

/// One observation row from a station log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Calendar date of the observation.
    pub date: Date,
    /// Wall-clock time of the observation.
    pub time: Time,
    /// Wind speed as recorded, reported in km/h.
    pub wind_speed: f64,
    /// Ambient air temperature in degrees Celsius.
    pub air_temperature: f64,
    /// Solar irradiance in W/m² over the sampling interval.
    pub solar_radiation: f64,
}

impl Reading {
    /// The identity under which readings are de-duplicated.
    pub fn timestamp(&self) -> (Date, Time) {
        (self.date, self.time)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::{Date, Reading, RecordError, Time};

    #[test]
    fn date_validation() {
        assert!(Date::new(2015, 3, 1).is_ok());
        assert_matches!(Date::new(0, 3, 1), Err(RecordError::InvalidYear));
        assert_matches!(Date::new(2015, 0, 1), Err(RecordError::InvalidMonth(0)));
        assert_matches!(Date::new(2015, 13, 1), Err(RecordError::InvalidMonth(13)));
        assert_matches!(Date::new(2015, 3, 0), Err(RecordError::InvalidDay(0)));
        assert_matches!(Date::new(2015, 3, 32), Err(RecordError::InvalidDay(32)));
    }

    #[test]
    fn time_validation() {
        assert!(Time::new(0, 0).is_ok());
        assert!(Time::new(23, 59).is_ok());
        assert_matches!(Time::new(24, 0), Err(RecordError::InvalidHour(24)));
        assert_matches!(Time::new(9, 60), Err(RecordError::InvalidMinute(60)));
    }

    #[test]
    fn dates_order_chronologically() {
        let earlier = Date::new(2014, 12, 31).unwrap();
        let later = Date::new(2015, 1, 1).unwrap();
        assert!(earlier < later);

        let morning = Time::new(9, 0).unwrap();
        let evening = Time::new(21, 30).unwrap();
        assert!(morning < evening);

        // Within a year, month outranks day.
        assert!(Date::new(2015, 2, 28).unwrap() < Date::new(2015, 3, 1).unwrap());
    }

    #[test]
    fn display_formats() {
        let date = Date::new(2015, 3, 1).unwrap();
        assert_eq!(date.to_string(), "1/3/2015");

        let time = Time::new(9, 5).unwrap();
        assert_eq!(time.to_string(), "9:05");
    }

    #[test]
    fn reading_serde_round_trip() {
        let reading = Reading {
            date: Date::new(2015, 3, 1).unwrap(),
            time: Time::new(9, 0).unwrap(),
            wind_speed: 12.5,
            air_temperature: 21.0,
            solar_radiation: 864.0,
        };

        let encoded = serde_json::to_string(&reading).unwrap();
        let decoded: Reading = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, reading);
    }
}

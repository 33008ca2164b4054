use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use crate::util::{complete, split_char, unsigned};

/// A `d/m/y` date without calendar validation.
///
/// Field order matters: the derived ordering compares year, then month, then
/// day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Day,
    Month,
    Year,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateField::Day => f.write_str("day"),
            DateField::Month => f.write_str("month"),
            DateField::Year => f.write_str("year"),
        }
    }
}

/// A date segment that is not an unsigned integer. Not fatal: the field is
/// left at zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to parse {field} '{segment}' in date '{token}'")]
pub struct DateFieldError {
    pub field: DateField,
    pub segment: String,
    pub token: String,
}

impl Date {
    pub const MIN: Date = Date {
        year: 0,
        month: 0,
        day: 0,
    };

    pub const MAX: Date = Date {
        year: u32::MAX,
        month: u32::MAX,
        day: u32::MAX,
    };

    pub fn new(day: u32, month: u32, year: u32) -> Date {
        Date { year, month, day }
    }

    /// Parses `d/m/y`, splitting at most twice so that anything after the
    /// second `/` is taken as the year. Segments that fail to parse are
    /// reported and read as zero; values wider than 32 bits are truncated.
    pub fn parse(token: &str) -> (Date, Vec<DateFieldError>) {
        let token = token.trim();
        let (day_str, rest) = split_char(token, '/');
        let (month_str, year_str) = split_char(rest, '/');

        let mut errors = Vec::new();
        let mut read = |field: DateField, segment: &str| match complete(segment, unsigned) {
            Some(value) => value as u32,
            None => {
                errors.push(DateFieldError {
                    field,
                    segment: segment.to_string(),
                    token: token.to_string(),
                });
                0
            }
        };

        let day = read(DateField::Day, day_str);
        let month = read(DateField::Month, month_str);
        let year = read(DateField::Year, year_str);

        (Date { year, month, day }, errors)
    }

    /// The matching calendar date, if this date exists in the calendar.
    pub fn to_calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(i32::try_from(self.year).ok()?, self.month, self.day)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}

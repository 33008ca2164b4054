use tracing::warn;

use crate::date::Date;

/// Flag value meaning "no bound in this direction".
pub const UNBOUNDED: &str = "None";

/// Inclusive window of transaction dates to report on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

impl Default for DateRange {
    fn default() -> Self {
        DateRange {
            start: Date::MIN,
            end: Date::MAX,
        }
    }
}

impl DateRange {
    /// Missing bounds are open-ended.
    pub fn new(start: Option<Date>, end: Option<Date>) -> DateRange {
        DateRange {
            start: start.unwrap_or(Date::MIN),
            end: end.unwrap_or(Date::MAX),
        }
    }

    /// Resolves the raw `--start` / `--end` values.
    pub fn from_bounds(start: &str, end: &str) -> DateRange {
        DateRange::new(resolve_bound(start), resolve_bound(end))
    }

    pub fn contains(&self, date: &Date) -> bool {
        self.start <= *date && *date <= self.end
    }
}

/// `None` for the [`UNBOUNDED`] sentinel, otherwise the parsed date. Malformed
/// segments are logged and read as zero.
pub fn resolve_bound(value: &str) -> Option<Date> {
    if value == UNBOUNDED {
        return None;
    }
    let (date, errors) = Date::parse(value);
    for error in errors {
        warn!("{}", error);
    }
    Some(date)
}

use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime};

use crate::error::ClientError;

/// Days covered by a window with no explicit start.
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

/// Optional `start_date`/`end_date` bounds for range endpoints.
///
/// Missing bounds are filled in at call time: the end defaults to today and
/// the start to thirty days before today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateWindow {
    pub start: Option<Date>,
    pub end: Option<Date>,
}

impl DateWindow {
    pub const fn new() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    pub const fn between(start: Date, end: Date) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn starting(mut self, start: Date) -> Self {
        self.start = Some(start);
        self
    }

    pub fn ending(mut self, end: Date) -> Self {
        self.end = Some(end);
        self
    }

    /// Concrete `(start, end)` relative to `today`.
    pub fn resolve(self, today: Date) -> (Date, Date) {
        let start = self
            .start
            .unwrap_or_else(|| today.saturating_sub(Duration::days(DEFAULT_WINDOW_DAYS)));
        let end = self.end.unwrap_or(today);
        (start, end)
    }
}

/// Today's date in the local timezone, or UTC when the offset is unknown.
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// `YYYY-MM-DD`.
pub fn format_date(date: Date) -> Result<String, ClientError> {
    Ok(date.format(format_description!("[year]-[month]-[day]"))?)
}

/// `YYYY-MM-01` for the month containing `date`.
pub fn format_month_start(date: Date) -> Result<String, ClientError> {
    let first = date
        .replace_day(1)
        .map_err(|error| ClientError::invalid_params(error.to_string()))?;
    format_date(first)
}

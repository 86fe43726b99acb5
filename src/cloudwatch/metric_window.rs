// MetricWindow
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_sdk_cloudwatch::primitives::DateTime;
use aws_smithy_types_convert::date_time::DateTimeExt;
use chrono::{
    DateTime as ChronoDateTime,
    TimeDelta,
    Utc,
};

/// Number of days of `BucketSizeBytes` datapoints to consider.
///
/// CloudWatch publishes this metric about once a day, with some delay, so a
/// single day can easily be empty.
pub const TRAILING_DAYS: i64 = 3;

/// The start and end of the period that statistics are requested for.
///
/// A single window is shared by every query in a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricWindow {
    /// Start of the window.
    pub start: ChronoDateTime<Utc>,

    /// End of the window.
    pub end: ChronoDateTime<Utc>,
}

impl MetricWindow {
    /// Returns the window covering `days` days up to and including `end`.
    pub fn trailing(end: ChronoDateTime<Utc>, days: i64) -> Self {
        Self {
            start: end - TimeDelta::days(days),
            end,
        }
    }

    /// The default window, ending now.
    pub fn now() -> Self {
        Self::trailing(Utc::now(), TRAILING_DAYS)
    }

    /// Start of the window as an AWS `DateTime`.
    pub fn start_time(&self) -> DateTime {
        DateTime::from_chrono_utc(self.start)
    }

    /// End of the window as an AWS `DateTime`.
    pub fn end_time(&self) -> DateTime {
        DateTime::from_chrono_utc(self.end)
    }
}

// Imports all of the components needed for cloudwatch::client
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Implementation of the `BucketSizer` trait for our CloudWatch `Client`.
mod bucket_sizer;

/// CloudWatch `Client`.
mod client;

/// The time window that metric statistics are requested for.
mod metric_window;

pub use client::*;
pub use metric_window::*;

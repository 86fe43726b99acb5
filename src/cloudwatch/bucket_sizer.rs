// Implements the BucketSizer trait for CloudWatch Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_cloudwatch::types::Datapoint;
use aws_smithy_types_convert::date_time::DateTimeExt;
use crate::common::{
    BucketSizer,
    StorageType,
};
use humansize::{
    format_size,
    BINARY,
};
use super::client::Client;
use tracing::debug;

// Largest `Maximum` across the datapoints, if any datapoint carried one.
fn largest_maximum(datapoints: &[Datapoint]) -> Option<f64> {
    datapoints
        .iter()
        .filter_map(Datapoint::maximum)
        .reduce(f64::max)
}

#[async_trait]
impl BucketSizer for Client {
    /// Get the size of `storage_type` within `bucket`.
    ///
    /// This is the largest daily maximum within the `MetricWindow`. When
    /// CloudWatch has no datapoints, the size is `0`.
    async fn storage_type_size(
        &self,
        bucket: &str,
        storage_type: StorageType,
    ) -> Result<u64> {
        debug!(
            "storage_type_size: Calculating size for '{}' ({})",
            bucket,
            storage_type,
        );

        let output     = self.get_metric_statistics(bucket, storage_type).await?;
        let datapoints = output.datapoints();

        let latest = datapoints
            .iter()
            .filter_map(Datapoint::timestamp)
            .filter_map(|t| t.to_chrono_utc().ok())
            .max();

        debug!(
            "storage_type_size: {} datapoints for '{}' ({}), latest {:?}",
            datapoints.len(),
            bucket,
            storage_type,
            latest,
        );

        let size = match largest_maximum(datapoints) {
            // BucketSizeBytes is a whole number of bytes, the cast saturates
            // anything out of range.
            Some(bytes) => bytes as u64,
            None        => {
                debug!(
                    "storage_type_size: No datapoints for '{}' ({})",
                    bucket,
                    storage_type,
                );

                0
            },
        };

        debug!(
            "storage_type_size: Size for '{}' ({}) is '{}' ({})",
            bucket,
            storage_type,
            size,
            format_size(size, BINARY),
        );

        Ok(size)
    }
}

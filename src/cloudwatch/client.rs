// Implement the CloudWatch Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    Context,
    Result,
};
use aws_config::SdkConfig;
use aws_sdk_cloudwatch::client::Client as CloudWatchClient;
use aws_sdk_cloudwatch::operation::get_metric_statistics::GetMetricStatisticsOutput;
use aws_sdk_cloudwatch::types::{
    Dimension,
    StandardUnit,
    Statistic,
};
use crate::common::StorageType;
use std::time::Duration;
use super::MetricWindow;
use tracing::debug;

const ONE_DAY: Duration = Duration::from_secs(86_400);
const S3_BUCKETSIZEBYTES: &str = "BucketSizeBytes";
const S3_NAMESPACE: &str = "AWS/S3";

/// A `CloudWatch` `Client`
pub struct Client {
    /// The AWS SDK `CloudWatchClient`.
    pub client: CloudWatchClient,

    /// Time window that every statistics query covers.
    pub window: MetricWindow,
}

impl Client {
    /// Return a new `Client` built from the shared `SdkConfig`, querying
    /// statistics over `window`.
    pub fn new(config: &SdkConfig, window: MetricWindow) -> Self {
        debug!(
            "new: Creating CloudWatchClient in region '{:?}'",
            config.region(),
        );

        let client = CloudWatchClient::new(config);

        Self {
            client,
            window,
        }
    }

    /// Returns the `GetMetricStatisticsOutput` holding the daily maximum
    /// `BucketSizeBytes` datapoints for `storage_type` within `bucket`.
    pub async fn get_metric_statistics(
        &self,
        bucket: &str,
        storage_type: StorageType,
    ) -> Result<GetMetricStatisticsOutput> {
        debug!(
            "get_metric_statistics: Processing '{}' ({})",
            bucket,
            storage_type,
        );

        let period = i32::try_from(ONE_DAY.as_secs())
            .context("period")?;

        let dimensions = vec![
            Dimension::builder()
                .name("BucketName")
                .value(bucket)
                .build(),
            Dimension::builder()
                .name("StorageType")
                .value(storage_type.as_str())
                .build(),
        ];

        let input = self.client.get_metric_statistics()
            .end_time(self.window.end_time())
            .metric_name(S3_BUCKETSIZEBYTES)
            .namespace(S3_NAMESPACE)
            .period(period)
            .set_dimensions(Some(dimensions))
            .start_time(self.window.start_time())
            .statistics(Statistic::Maximum)
            .unit(StandardUnit::Bytes);

        debug!("{:?}", input);

        let output = input
            .send()
            .await
            .with_context(|| {
                format!(
                    "Failed to get metric statistics for '{}' ({})",
                    bucket,
                    storage_type,
                )
            })?;

        debug!("get_metric_statistics: API returned: {:#?}", output);

        Ok(output)
    }
}

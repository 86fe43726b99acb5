// ClientConfig
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_config::meta::region::RegionProviderChain;
use aws_config::{
    BehaviorVersion,
    SdkConfig,
};
use super::Region;
use tracing::debug;

/// Client configuration.
#[derive(Debug, Default)]
pub struct ClientConfig {
    /// The region that our AWS clients should be created in.
    ///
    /// When this has no region, the AWS default region chain is consulted.
    pub region: Region,
}

impl ClientConfig {
    /// Returns a `ClientConfig` with the region taken from the environment.
    pub fn new() -> Self {
        Self {
            region: Region::new(),
        }
    }

    /// Load the shared `SdkConfig` that both the S3 and CloudWatch clients
    /// are built from.
    pub async fn load_sdk_config(self) -> SdkConfig {
        debug!("load_sdk_config: Using region '{}'", self.region.name());

        let region_provider = RegionProviderChain::first_try(self.region)
            .or_default_provider();

        aws_config::defaults(BehaviorVersion::latest())
            .region(region_provider)
            .load()
            .await
    }
}

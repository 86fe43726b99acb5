// Implement the BucketLister trait for the s3::Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    Context,
    Result,
};
use async_trait::async_trait;
use crate::common::{
    BucketLister,
    BucketNames,
};
use super::client::Client;
use tracing::debug;

#[async_trait]
impl BucketLister for Client {
    /// Return the names of all buckets visible to our credentials.
    ///
    /// Names are returned exactly in the order S3 returns them. Only the
    /// buckets in the single `ListBuckets` response are considered.
    async fn list_buckets(&self) -> Result<BucketNames> {
        debug!("list_buckets: Listing...");

        let output = self.client.list_buckets()
            .send()
            .await
            .context("Failed to list buckets")?;

        let bucket_names: BucketNames = output.buckets()
            .iter()
            .filter_map(|b| b.name().map(ToOwned::to_owned))
            .collect();

        debug!("list_buckets: Found {} buckets", bucket_names.len());

        Ok(bucket_names)
    }
}

// BucketLister trait
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use super::BucketNames;

/// `BucketLister` represents the ability to enumerate S3 buckets.
#[async_trait]
pub trait BucketLister {
    /// Returns the bucket names visible to the current credentials, in the
    /// order the provider returned them.
    async fn list_buckets(&self) -> Result<BucketNames>;
}

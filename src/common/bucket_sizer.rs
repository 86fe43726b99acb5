// BucketSizer trait
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use super::StorageType;

/// `BucketSizer` represents the required method to find the size of a
/// single storage type within an S3 bucket.
///
/// This trait should be implemented by all `Client`s performing this task.
#[async_trait]
pub trait BucketSizer {
    /// Returns the size in bytes of `storage_type` within `bucket`.
    ///
    /// A storage type with no recorded size must be reported as `0`.
    async fn storage_type_size(
        &self,
        bucket: &str,
        storage_type: StorageType,
    ) -> Result<u64>;
}

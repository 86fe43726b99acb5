// Size of a single storage type within a bucket
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use super::StorageType;

/// The size of one `StorageType` within one bucket, as reported by a
/// `BucketSizer`.
#[derive(Clone, Debug, PartialEq)]
pub struct StorageTypeSize {
    /// Name of the bucket the size belongs to.
    pub bucket: String,

    /// The storage type that was measured.
    pub storage_type: StorageType,

    /// Size in bytes, `0` when nothing was recorded.
    pub bytes: u64,
}

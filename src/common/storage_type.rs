// S3 storage types that bucket sizes are reported for
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use std::fmt;

/// The S3 storage types that make up a bucket's reported size.
///
/// Each variant maps to a value of the `StorageType` dimension on the
/// `BucketSizeBytes` CloudWatch metric.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StorageType {
    /// Objects in the S3 Standard storage class.
    Standard,

    /// Intelligent-Tiering objects in the Infrequent Access tier.
    IntelligentTieringInfrequentAccess,

    /// Intelligent-Tiering objects in the Frequent Access tier.
    IntelligentTieringFrequentAccess,

    /// Intelligent-Tiering objects in the Archive Instant Access tier.
    IntelligentTieringArchiveInstantAccess,
}

impl StorageType {
    /// Every storage type that is summed into a bucket's size, in the order
    /// they are queried.
    pub const ALL: [Self; 4] = [
        Self::Standard,
        Self::IntelligentTieringInfrequentAccess,
        Self::IntelligentTieringFrequentAccess,
        Self::IntelligentTieringArchiveInstantAccess,
    ];

    /// Returns the CloudWatch `StorageType` dimension value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard                               => "StandardStorage",
            Self::IntelligentTieringInfrequentAccess     => "IntelligentTieringIAStorage",
            Self::IntelligentTieringFrequentAccess       => "IntelligentTieringFAStorage",
            Self::IntelligentTieringArchiveInstantAccess => "IntelligentTieringAIAStorage",
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

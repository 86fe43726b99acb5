// Fetch the size of every storage type within every bucket
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use crate::common::{
    BucketLister,
    BucketSizer,
    StorageType,
    StorageTypeSize,
};
use tracing::info;

/// Lists buckets with `lister` and queries `sizer` for each bucket and each
/// `StorageType`, one request at a time.
///
/// The returned sizes are in bucket order, with one entry per storage type
/// for each bucket. The first error aborts the whole run.
pub async fn storage_type_sizes<L, S>(
    lister: &L,
    sizer: &S,
) -> Result<Vec<StorageTypeSize>>
where
    L: BucketLister + Sync,
    S: BucketSizer + Sync,
{
    info!("Getting list of bucket names...");

    let bucket_names = lister.list_buckets().await?;

    let mut sizes = Vec::with_capacity(bucket_names.len() * StorageType::ALL.len());

    for bucket in bucket_names {
        info!("Working on bucket: {}...", bucket);

        for storage_type in StorageType::ALL {
            let bytes = sizer.storage_type_size(&bucket, storage_type).await?;

            sizes.push(StorageTypeSize {
                bucket: bucket.clone(),
                storage_type,
                bytes,
            });
        }
    }

    Ok(sizes)
}

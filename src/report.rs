// Aggregate storage type sizes into the largest buckets report
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::StorageTypeSize;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Number of buckets that the report shows.
pub const TOP_BUCKETS: usize = 10;

/// Bytes in a tebibyte (1024^4).
const TEBIBYTE: f64 = 1_099_511_627_776.0;

/// Title of the size column.
const SIZE_COLUMN: &str = "Size (TBs)";

/// The total size of a single bucket.
#[derive(Clone, Debug, PartialEq)]
pub struct BucketSize {
    /// Name of the bucket.
    pub name: String,

    /// Sum of the bucket's storage type sizes, in bytes.
    pub bytes: u64,
}

impl BucketSize {
    /// Size of the bucket in tebibytes.
    pub fn tebibytes(&self) -> f64 {
        self.bytes as f64 / TEBIBYTE
    }
}

/// The largest buckets, largest first.
#[derive(Debug, PartialEq)]
pub struct Report(Vec<BucketSize>);

impl Report {
    /// Rows of the report, at most `TOP_BUCKETS` of them.
    pub fn rows(&self) -> &[BucketSize] {
        &self.0
    }
}

/// Sum the storage type sizes of each bucket and keep the `TOP_BUCKETS`
/// largest.
///
/// Buckets keep the order they were first seen in, so the stable sort leaves
/// equally sized buckets in that order.
impl From<Vec<StorageTypeSize>> for Report {
    fn from(sizes: Vec<StorageTypeSize>) -> Self {
        let mut totals: Vec<BucketSize>       = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for size in sizes {
            debug!(
                "Report: '{}' has {} bytes of {}",
                size.bucket,
                size.bytes,
                size.storage_type,
            );

            match index.get(&size.bucket) {
                Some(&i) => {
                    let total = &mut totals[i];
                    total.bytes = total.bytes.saturating_add(size.bytes);
                },
                None => {
                    index.insert(size.bucket.clone(), totals.len());

                    totals.push(BucketSize {
                        name:  size.bucket,
                        bytes: size.bytes,
                    });
                },
            }
        }

        totals.sort_by(|a, b| b.tebibytes().total_cmp(&a.tebibytes()));
        totals.truncate(TOP_BUCKETS);

        Report(totals)
    }
}

/// Renders the report as a table. Bucket names are never truncated.
///
/// ```text
///               Size (TBs)
/// logs-archive        5.00
/// empty-bucket        0.00
/// ```
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();

        let values: Vec<String> = rows
            .iter()
            .map(|row| format!("{:.2}", row.tebibytes()))
            .collect();

        let name_width = rows
            .iter()
            .map(|row| row.name.chars().count())
            .max()
            .unwrap_or(0);

        let value_width = values
            .iter()
            .map(String::len)
            .chain([SIZE_COLUMN.len()])
            .max()
            .unwrap_or(0);

        writeln!(f, "{:name_width$}  {:>value_width$}", "", SIZE_COLUMN)?;

        for (row, value) in rows.iter().zip(values) {
            writeln!(f, "{:<name_width$}  {:>value_width$}", row.name, value)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket_sizes::storage_type_sizes;
    use crate::bucket_sizes::tests::FakeProvider;
    use crate::common::StorageType;
    use pretty_assertions::assert_eq;

    fn size(bucket: &str, storage_type: StorageType, bytes: u64) -> StorageTypeSize {
        StorageTypeSize {
            bucket: bucket.into(),
            storage_type,
            bytes,
        }
    }

    // All four storage types for a bucket.
    fn bucket_sizes(bucket: &str, bytes: [u64; 4]) -> Vec<StorageTypeSize> {
        StorageType::ALL
            .iter()
            .zip(bytes)
            .map(|(st, b)| size(bucket, *st, b))
            .collect()
    }

    #[test]
    fn test_report_sums_storage_types() {
        let sizes = bucket_sizes("mixed-bucket", [1, 20, 300, 4_000]);

        let report = Report::from(sizes);

        let expected = vec![
            BucketSize {
                name:  "mixed-bucket".into(),
                bytes: 4_321,
            },
        ];

        assert_eq!(report.rows(), expected.as_slice());
    }

    #[test]
    fn test_report_tebibytes() {
        let sizes = bucket_sizes("logs-archive", [5_497_558_138_880, 0, 0, 0]);

        let report = Report::from(sizes);
        let row    = &report.rows()[0];

        assert_eq!(row.bytes, 5_497_558_138_880);
        assert_eq!(row.tebibytes(), 5.0);
        assert_eq!(
            BucketSize { name: "b".into(), bytes: 1_649_267_441_664 }.tebibytes(),
            1.5,
        );
    }

    #[test]
    fn test_report_empty_bucket_last() {
        let mut sizes = bucket_sizes("empty-bucket", [0, 0, 0, 0]);
        sizes.extend(bucket_sizes("logs-archive", [5_497_558_138_880, 0, 0, 0]));
        sizes.extend(bucket_sizes("small-bucket", [0, 0, 1_024, 0]));

        let report = Report::from(sizes);

        let names: Vec<&str> = report.rows()
            .iter()
            .map(|r| r.name.as_str())
            .collect();

        assert_eq!(names, vec![
            "logs-archive",
            "small-bucket",
            "empty-bucket",
        ]);

        assert_eq!(report.rows()[2].bytes, 0);
    }

    #[test]
    fn test_report_ties_keep_first_seen_order() {
        let mut sizes = bucket_sizes("first", [10, 0, 0, 0]);
        sizes.extend(bucket_sizes("bigger", [0, 0, 0, 50]));
        sizes.extend(bucket_sizes("second", [0, 10, 0, 0]));

        let report = Report::from(sizes);

        let names: Vec<&str> = report.rows()
            .iter()
            .map(|r| r.name.as_str())
            .collect();

        assert_eq!(names, vec!["bigger", "first", "second"]);
    }

    #[test]
    fn test_report_top_ten() {
        // 15 buckets, sized 1..=15 TiB, listed smallest first.
        let sizes: Vec<StorageTypeSize> = (1..=15u64)
            .flat_map(|i| {
                let name = format!("bucket-{:02}", i);
                bucket_sizes(&name, [i * TEBIBYTE as u64, 0, 0, 0])
            })
            .collect();

        let report = Report::from(sizes);
        let rows   = report.rows();

        assert_eq!(rows.len(), TOP_BUCKETS);

        let names: Vec<String> = rows.iter()
            .map(|r| r.name.clone())
            .collect();

        let expected: Vec<String> = (6..=15u64)
            .rev()
            .map(|i| format!("bucket-{:02}", i))
            .collect();

        assert_eq!(names, expected);

        assert!(rows.windows(2).all(|w| w[0].tebibytes() >= w[1].tebibytes()));
    }

    #[test]
    fn test_report_display() {
        let mut sizes = bucket_sizes("empty-bucket", [0, 0, 0, 0]);
        sizes.extend(bucket_sizes("logs-archive", [5_497_558_138_880, 0, 0, 0]));

        let report = Report::from(sizes);

        let expected = concat!(
            "              Size (TBs)\n",
            "logs-archive        5.00\n",
            "empty-bucket        0.00\n",
        );

        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn test_report_display_long_names() {
        let name  = "a-bucket-with-a-rather-long-name-that-is-not-truncated";
        let sizes = bucket_sizes(name, [0, 0, 0, 12_345_678 * TEBIBYTE as u64]);

        let report   = Report::from(sizes);
        let rendered = report.to_string();

        let expected = format!(
            "{:width$}  {}\n{}  12345678.00\n",
            "",
            " Size (TBs)",
            name,
            width = name.len(),
        );

        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_report_display_no_buckets() {
        let report = Report::from(Vec::new());

        assert_eq!(report.to_string(), "  Size (TBs)\n");
    }

    #[tokio::test]
    async fn test_report_is_repeatable() {
        let provider = FakeProvider::new(&["logs-archive", "empty-bucket", "media"])
            .with_size("logs-archive", StorageType::Standard, 5_497_558_138_880)
            .with_size("media", StorageType::IntelligentTieringInfrequentAccess, 1_000)
            .with_size("media", StorageType::IntelligentTieringArchiveInstantAccess, 2_000);

        let first  = Report::from(storage_type_sizes(&provider, &provider).await.unwrap());
        let second = Report::from(storage_type_sizes(&provider, &provider).await.unwrap());

        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
        assert_eq!(first.rows()[1], BucketSize {
            name:  "media".into(),
            bytes: 3_000,
        });
    }
}

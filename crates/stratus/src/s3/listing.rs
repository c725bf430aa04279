//! Object listing aggregation.
//!
//! Pure functions over `ListObjectsV2` pages. No S3 access, so the
//! pagination edge cases are unit-testable with SDK builders.

use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
use aws_sdk_s3::primitives::DateTimeFormat;
use aws_sdk_s3::types::Object;

/// A single listed object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectInfo {
    pub key: String,
    pub size: i64,
    pub last_modified: String,
}

impl ObjectInfo {
    fn from_object(object: &Object) -> Self {
        Self {
            key: object.key().unwrap_or_default().to_string(),
            size: object.size().unwrap_or_default(),
            last_modified: object
                .last_modified()
                .and_then(|t| t.fmt(DateTimeFormat::DateTime).ok())
                .unwrap_or_default(),
        }
    }
}

/// Appends every object from one result page to the accumulator.
///
/// Pages with no contents (empty bucket, exhausted prefix) contribute
/// nothing.
pub fn collect_page(files: &mut Vec<ObjectInfo>, page: &ListObjectsV2Output) {
    files.extend(page.contents().iter().map(ObjectInfo::from_object));
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::primitives::DateTime;

    fn object(key: &str, size: i64) -> Object {
        Object::builder()
            .key(key)
            .size(size)
            .last_modified(DateTime::from_secs(1_700_000_000))
            .build()
    }

    #[test]
    fn test_empty_page_set_yields_empty_vec() {
        let mut files = Vec::new();
        collect_page(&mut files, &ListObjectsV2Output::builder().build());
        assert!(files.is_empty());
    }

    #[test]
    fn test_aggregates_across_pages() {
        let first = ListObjectsV2Output::builder()
            .contents(object("reports/2024.csv", 120))
            .contents(object("reports/2025.csv", 340))
            .build();
        let second = ListObjectsV2Output::builder()
            .contents(object("reports/archive.zip", 9000))
            .build();

        let mut files = Vec::new();
        collect_page(&mut files, &first);
        collect_page(&mut files, &second);

        assert_eq!(files.len(), 3);
        assert_eq!(files[0].key, "reports/2024.csv");
        assert_eq!(files[2].key, "reports/archive.zip");
        assert_eq!(files[2].size, 9000);
    }

    #[test]
    fn test_timestamps_are_formatted() {
        let page = ListObjectsV2Output::builder()
            .contents(object("a.txt", 1))
            .build();

        let mut files = Vec::new();
        collect_page(&mut files, &page);
        assert_eq!(files[0].last_modified, "2023-11-14T22:13:20Z");
    }
}

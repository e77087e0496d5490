//! The release list published on the documentation site.

use crate::model::ReleaseRecord;

/// Product the built-in catalog describes.
pub const BUILTIN_PRODUCT: &str = "Solidus";

/// Releases newest first, as they appear in the published table.
///
/// Releases up to v4.2 carry explicit end-of-life dates because their
/// support did not end exactly 540 days after release.
pub fn builtin_releases() -> Vec<ReleaseRecord> {
    vec![
        ReleaseRecord::new("v4.6", "2025-09-09"),
        ReleaseRecord::new("v4.5", "2025-02-20"),
        ReleaseRecord::new("v4.4", "2024-11-12"),
        ReleaseRecord::new("v4.3", "2023-12-22"),
        ReleaseRecord::new("v4.2", "2023-09-29").with_eol("2025-03-29"),
        ReleaseRecord::new("v4.1", "2023-06-29").with_eol("2024-12-29"),
        ReleaseRecord::new("v4.0", "2023-05-08").with_eol("2024-11-08"),
        ReleaseRecord::new("v3.4", "2023-04-21").with_eol("2024-10-21"),
        ReleaseRecord::new("v3.3", "2023-01-24").with_eol("2024-07-24"),
        ReleaseRecord::new("v3.2", "2022-08-18").with_eol("2024-02-18"),
        ReleaseRecord::new("v3.1", "2021-09-10").with_eol("2023-03-10"),
        ReleaseRecord::new("v3.0", "2021-04-20").with_eol("2022-10-20"),
        ReleaseRecord::new("v2.11", "2020-10-23").with_eol("2022-04-23"),
        ReleaseRecord::new("v2.10", "2020-01-15").with_eol("2021-07-15"),
        ReleaseRecord::new("v2.9", "2019-07-16").with_eol("2021-01-16"),
        ReleaseRecord::new("v2.8", "2019-01-29").with_eol("2020-07-29"),
        ReleaseRecord::new("v2.7", "2018-09-14").with_eol("2020-03-14"),
        ReleaseRecord::new("v2.6", "2018-06-16").with_eol("2019-12-16"),
        ReleaseRecord::new("v2.5", "2018-03-27").with_eol("2019-09-27"),
        ReleaseRecord::new("v2.4", "2017-11-07").with_eol("2019-05-07"),
    ]
}

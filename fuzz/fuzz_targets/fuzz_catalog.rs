#![no_main]
use libfuzzer_sys::fuzz_target;
use release_support::{CatalogFormat, ReleaseCatalog, VersionSupportCalculator};

/// Fuzz catalog parsing in both formats, then validate and render whatever
/// parsed.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for format in [CatalogFormat::Yaml, CatalogFormat::Json] {
            if let Ok(catalog) = ReleaseCatalog::parse_str(s, format) {
                let _ = catalog.validate(true);
                let _ = VersionSupportCalculator::new().render(&catalog.releases);
            }
        }
    }
});

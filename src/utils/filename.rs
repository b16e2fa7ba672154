use crate::error::{ProcessingError, Result};
use crate::utils::constants::{OUTPUT_FILE_PREFIX, OUTPUT_TIMESTAMP_FORMAT};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Generate default catalog filename with format: wellknowndso_{YYYYMMDDTHHMMSS}.csv
pub fn generate_default_catalog_filename(output_dir: &Path) -> PathBuf {
    catalog_filename_at(output_dir, Utc::now())
}

/// Catalog filename for a given UTC instant
pub fn catalog_filename_at(output_dir: &Path, when: DateTime<Utc>) -> PathBuf {
    let filename = format!(
        "{}{}.csv",
        OUTPUT_FILE_PREFIX,
        when.format(OUTPUT_TIMESTAMP_FORMAT)
    );
    output_dir.join(filename)
}

/// Whether a file name looks like one produced by `generate_default_catalog_filename`
pub fn is_catalog_filename(name: &str) -> bool {
    name.starts_with(OUTPUT_FILE_PREFIX) && name.ends_with(".csv")
}

/// Newest catalog in `dir`; the timestamp in the name sorts chronologically
pub fn latest_catalog_file(dir: &Path) -> Result<PathBuf> {
    let mut latest: Option<PathBuf> = None;

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_catalog = path
            .file_name()
            .map(|name| is_catalog_filename(&name.to_string_lossy()))
            .unwrap_or(false);

        if is_catalog && path.is_file() && latest.as_ref().map_or(true, |l| path > *l) {
            latest = Some(path);
        }
    }

    latest.ok_or_else(|| {
        ProcessingError::InvalidFormat(format!(
            "No {}*.csv catalog found in {}",
            OUTPUT_FILE_PREFIX,
            dir.display()
        ))
    })
}

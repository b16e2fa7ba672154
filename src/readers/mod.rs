pub mod catalog_reader;
pub mod dso_reader;
pub mod star_reader;

pub use catalog_reader::{CatalogReader, CatalogSet};
pub use dso_reader::DsoReader;
pub use star_reader::StarReader;

use crate::error::{ProcessingError, Result};
use serde::Serialize;

/// Row counts gathered during one pass over a source table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReadStats {
    pub rows_read: usize,
    pub emitted: usize,
    pub missing_magnitude: usize,
    pub missing_type: usize,
    pub no_names: usize,
    pub too_faint: usize,
    pub clamped_magnitude: usize,
    pub defaulted_magnitude: usize,
}

impl ReadStats {
    pub fn skipped(&self) -> usize {
        self.missing_magnitude + self.missing_type + self.no_names + self.too_faint
    }

    pub fn merge(&mut self, other: &ReadStats) {
        self.rows_read += other.rows_read;
        self.emitted += other.emitted;
        self.missing_magnitude += other.missing_magnitude;
        self.missing_type += other.missing_type;
        self.no_names += other.no_names;
        self.too_faint += other.too_faint;
        self.clamped_magnitude += other.clamped_magnitude;
        self.defaulted_magnitude += other.defaulted_magnitude;
    }
}

/// Non-empty value of an optional column
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Parse a numeric column whose presence the row policy requires
pub(crate) fn parse_number(field: &'static str, value: Option<&str>) -> Result<f64> {
    let value = value.unwrap_or("");
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ProcessingError::invalid_number(field, value))
}

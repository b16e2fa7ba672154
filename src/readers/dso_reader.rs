use crate::config::CatalogConfig;
use crate::error::Result;
use crate::models::CatalogEntry;
use crate::processors::name_normalizer::catalog_id;
use crate::readers::{parse_number, present, ReadStats};
use crate::utils::constants::{DSO_DEFAULT_MAGNITUDE, MAX_MAGNITUDE};
use crate::utils::coordinates::ra_to_degrees;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// One row of the HYG deep-sky object table
#[derive(Debug, Deserialize)]
struct DsoRow {
    name: Option<String>,
    cat1: Option<String>,
    id1: Option<String>,
    cat2: Option<String>,
    id2: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    ra: Option<String>,
    dec: Option<String>,
    mag: Option<String>,
}

pub struct DsoReader {
    max_magnitude: f64,
    default_magnitude: f64,
}

impl DsoReader {
    pub fn new() -> Self {
        Self {
            max_magnitude: MAX_MAGNITUDE,
            default_magnitude: DSO_DEFAULT_MAGNITUDE,
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self {
            max_magnitude: config.max_magnitude,
            default_magnitude: config.dso_default_magnitude,
        }
    }

    pub fn with_max_magnitude(mut self, max_magnitude: f64) -> Self {
        self.max_magnitude = max_magnitude;
        self
    }

    pub fn with_default_magnitude(mut self, default_magnitude: f64) -> Self {
        self.default_magnitude = default_magnitude;
        self
    }

    /// Read catalog entries from the deep-sky object table (dso.csv)
    pub fn read_deep_sky_objects(&self, path: &Path) -> Result<Vec<CatalogEntry>> {
        let (entries, _stats) = self.read_deep_sky_objects_with_stats(path)?;
        Ok(entries)
    }

    pub fn read_deep_sky_objects_with_stats(
        &self,
        path: &Path,
    ) -> Result<(Vec<CatalogEntry>, ReadStats)> {
        let file = File::open(path)?;
        let (entries, stats) = self.read_from(file)?;

        debug!(
            "{}: {} rows, {} objects kept, {} clamped, {} without magnitude",
            path.display(),
            stats.rows_read,
            stats.emitted,
            stats.clamped_magnitude,
            stats.defaulted_magnitude
        );

        Ok((entries, stats))
    }

    fn read_from<R: Read>(&self, source: R) -> Result<(Vec<CatalogEntry>, ReadStats)> {
        // Rows may stop short of the header; absent trailing columns read as None
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(source);
        let mut entries = Vec::new();
        let mut stats = ReadStats::default();

        for row_result in reader.deserialize::<DsoRow>() {
            let row = row_result?;
            stats.rows_read += 1;

            if let Some(entry) = self.parse_dso_row(row, &mut stats)? {
                entries.push(entry);
            }
        }

        stats.emitted = entries.len();
        Ok((entries, stats))
    }

    /// Deep-sky objects are never dropped for brightness, only clamped
    fn parse_dso_row(&self, row: DsoRow, stats: &mut ReadStats) -> Result<Option<CatalogEntry>> {
        let kind = match present(&row.kind) {
            Some(kind) => kind.to_string(),
            None => {
                stats.missing_type += 1;
                return Ok(None);
            }
        };

        let mut names = Vec::new();
        if let Some(name) = present(&row.name) {
            names.push(name.to_string());
        }
        if let Some(prefix) = present(&row.cat1) {
            names.push(catalog_id(prefix, present(&row.id1)));
        }
        if let Some(prefix) = present(&row.cat2) {
            names.push(catalog_id(prefix, present(&row.id2)));
        }

        if names.is_empty() {
            stats.no_names += 1;
            return Ok(None);
        }

        let magnitude = match present(&row.mag) {
            Some(mag) => {
                let magnitude = parse_number("mag", Some(mag))?;
                if magnitude > self.max_magnitude {
                    stats.clamped_magnitude += 1;
                    self.max_magnitude
                } else {
                    magnitude
                }
            }
            None => {
                stats.defaulted_magnitude += 1;
                self.default_magnitude
            }
        };

        let right_ascension = ra_to_degrees(parse_number("ra", present(&row.ra))?);
        let declination = parse_number("dec", present(&row.dec))?;

        Ok(Some(CatalogEntry::new(
            kind,
            right_ascension,
            declination,
            magnitude,
            names,
        )?))
    }
}

impl Default for DsoReader {
    fn default() -> Self {
        Self::new()
    }
}

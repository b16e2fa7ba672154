use crate::config::CatalogConfig;
use crate::error::Result;
use crate::models::CatalogEntry;
use crate::readers::{DsoReader, ReadStats, StarReader};
use crate::utils::progress::ProgressReporter;
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};
use validator::Validate;

/// Outcome of one catalog build
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildReport {
    pub stars: ReadStats,
    pub deep_sky_objects: ReadStats,
    /// Entries whose RA/Dec fall outside [0, 360) x [-90, 90]; they are still written
    pub out_of_range: usize,
}

impl BuildReport {
    pub fn total_entries(&self) -> usize {
        self.stars.emitted + self.deep_sky_objects.emitted
    }

    pub fn summary(&self) -> String {
        let mut totals = self.stars.clone();
        totals.merge(&self.deep_sky_objects);

        format!(
            "Build Summary:\n\
             - Deep-sky objects: {} of {} rows ({} clamped, {} without magnitude)\n\
             - Stars: {} of {} rows\n\
             - Skipped: {} (no magnitude: {}, no type: {}, no name: {}, too faint: {})\n\
             - Out of range coordinates: {}\n\
             - Total entries: {}",
            self.deep_sky_objects.emitted,
            self.deep_sky_objects.rows_read,
            self.deep_sky_objects.clamped_magnitude,
            self.deep_sky_objects.defaulted_magnitude,
            self.stars.emitted,
            self.stars.rows_read,
            totals.skipped(),
            totals.missing_magnitude,
            totals.missing_type,
            totals.no_names,
            totals.too_faint,
            self.out_of_range,
            self.total_entries()
        )
    }
}

/// Runs both readers and concatenates their output
pub struct CatalogBuilder {
    star_reader: StarReader,
    dso_reader: DsoReader,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self {
            star_reader: StarReader::new(),
            dso_reader: DsoReader::new(),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self {
            star_reader: StarReader::from_config(config),
            dso_reader: DsoReader::from_config(config),
        }
    }

    pub fn with_greek_symbols(mut self, greek_symbols: bool) -> Self {
        self.star_reader = self.star_reader.with_greek_symbols(greek_symbols);
        self
    }

    /// Deep-sky objects first, then stars, each in source order
    pub fn build(
        &self,
        star_path: &Path,
        dso_path: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<(Vec<CatalogEntry>, BuildReport)> {
        if let Some(p) = progress {
            p.set_message(&format!("Reading {}...", dso_path.display()));
        }
        let (mut entries, dso_stats) = self.dso_reader.read_deep_sky_objects_with_stats(dso_path)?;
        info!("Read {} deep-sky objects", entries.len());

        if let Some(p) = progress {
            p.set_message(&format!("Reading {}...", star_path.display()));
        }
        let (stars, star_stats) = self.star_reader.read_stars_with_stats(star_path)?;
        info!("Read {} stars", stars.len());
        entries.extend(stars);

        let out_of_range = entries.iter().filter(|e| e.validate().is_err()).count();
        if out_of_range > 0 {
            warn!("{} entries have coordinates outside the expected range", out_of_range);
        }

        let report = BuildReport {
            stars: star_stats,
            deep_sky_objects: dso_stats,
            out_of_range,
        };

        Ok((entries, report))
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

use crate::error::{ProcessingError, Result};
use crate::models::catalog_entry::NAME_SEPARATOR;
use crate::models::CatalogEntry;
use crate::utils::constants::{CATALOG_HEADER, MAX_RANGE_HITS};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Reads a generated catalog file back into entries
pub struct CatalogReader;

impl CatalogReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_catalog(&self, path: &Path) -> Result<CatalogSet> {
        let file = File::open(path)?;
        let set = self.read_from(file)?;
        debug!("{}: {} catalog entries", path.display(), set.len());
        Ok(set)
    }

    fn read_from<R: Read>(&self, source: R) -> Result<CatalogSet> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(source);
        let mut entries = Vec::new();

        for record_result in reader.records() {
            let record = record_result?;
            if record.len() != CATALOG_HEADER.len() {
                return Err(ProcessingError::InvalidFormat(format!(
                    "Expected {} columns, got {}: '{}'",
                    CATALOG_HEADER.len(),
                    record.len(),
                    record.iter().collect::<Vec<_>>().join(",")
                )));
            }

            let names = record[4]
                .split(NAME_SEPARATOR)
                .map(|name| name.to_string())
                .collect();

            entries.push(CatalogEntry::new(
                record[0].to_string(),
                parse_field("ra", &record[1])?,
                parse_field("dec", &record[2])?,
                parse_field("mag", &record[3])?,
                names,
            )?);
        }

        Ok(CatalogSet::new(entries))
    }
}

impl Default for CatalogReader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .map_err(|_| ProcessingError::invalid_number(field, value))
}

/// In-memory catalog with the lookups the downstream viewer needs
#[derive(Debug, Clone)]
pub struct CatalogSet {
    entries: Vec<CatalogEntry>,
}

impl CatalogSet {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Brightest first; on equal magnitude non-star objects come before stars
    pub fn sorted(mut self) -> Self {
        self.entries.sort_by(|a, b| {
            a.magnitude
                .partial_cmp(&b.magnitude)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.is_star().cmp(&b.is_star()))
        });
        self
    }

    pub fn find_by_name(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.has_name(name))
    }

    /// Entries inside the inclusive RA/Dec box, in catalog order, capped at 100
    pub fn find_in_range(
        &self,
        min_ra: f64,
        min_dec: f64,
        max_ra: f64,
        max_dec: f64,
    ) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|entry| {
                (min_ra..=max_ra).contains(&entry.right_ascension)
                    && (min_dec..=max_dec).contains(&entry.declination)
            })
            .take(MAX_RANGE_HITS)
            .collect()
    }

    pub fn summary(&self) -> CatalogSummary {
        let mut by_kind = BTreeMap::new();
        for entry in &self.entries {
            *by_kind.entry(entry.kind.clone()).or_insert(0) += 1;
        }

        let magnitudes = self.entries.iter().map(|e| e.magnitude);
        let brightest = magnitudes.clone().fold(None, |acc: Option<f64>, m| {
            Some(acc.map_or(m, |a| a.min(m)))
        });
        let faintest = magnitudes.fold(None, |acc: Option<f64>, m| {
            Some(acc.map_or(m, |a| a.max(m)))
        });

        CatalogSummary {
            total_entries: self.entries.len(),
            star_count: self.entries.iter().filter(|e| e.is_star()).count(),
            by_kind,
            brightest,
            faintest,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary {
    pub total_entries: usize,
    pub star_count: usize,
    pub by_kind: BTreeMap<String, usize>,
    pub brightest: Option<f64>,
    pub faintest: Option<f64>,
}

impl CatalogSummary {
    pub fn summary(&self) -> String {
        let mut text = format!(
            "Catalog Summary:\n- Total entries: {}\n- Stars: {}\n- Deep-sky objects: {}\n",
            self.total_entries,
            self.star_count,
            self.total_entries - self.star_count
        );

        if let (Some(brightest), Some(faintest)) = (self.brightest, self.faintest) {
            text.push_str(&format!(
                "- Magnitude range: {:.2} to {:.2}\n",
                brightest, faintest
            ));
        }

        text.push_str("- Entries by type:\n");
        for (kind, count) in &self.by_kind {
            text.push_str(&format!("    {:<8} {}\n", kind, count));
        }

        text
    }
}

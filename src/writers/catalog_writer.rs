use crate::error::Result;
use crate::models::CatalogEntry;
use crate::utils::constants::CATALOG_HEADER;
use csv::{QuoteStyle, WriterBuilder};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Serialized form of one entry: `typ,ra,dec,mag,names`
#[derive(Serialize)]
struct CatalogRow<'a> {
    typ: &'a str,
    ra: f64,
    dec: f64,
    mag: f64,
    names: String,
}

impl<'a> From<&'a CatalogEntry> for CatalogRow<'a> {
    fn from(entry: &'a CatalogEntry) -> Self {
        Self {
            typ: &entry.kind,
            ra: entry.right_ascension,
            dec: entry.declination,
            mag: entry.magnitude,
            names: entry.joined_names(),
        }
    }
}

/// Writes the flat catalog CSV.
///
/// Fields are never quoted; names containing `,` or `/` are not representable.
pub struct CatalogWriter;

impl CatalogWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write entries to `path`, replacing any existing file in one step
    pub fn write_catalog(&self, path: &Path, entries: &[CatalogEntry]) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let mut temp = NamedTempFile::new_in(dir)?;
        self.write_to(temp.as_file_mut(), entries)?;
        temp.persist(path).map_err(|e| e.error)?;

        info!("Wrote {} entries to {}", entries.len(), path.display());
        Ok(())
    }

    /// Header row, then one row per entry in input order
    pub fn write_to<W: Write>(&self, sink: W, entries: &[CatalogEntry]) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .from_writer(sink);

        writer.write_record(CATALOG_HEADER)?;
        for entry in entries {
            writer.serialize(CatalogRow::from(entry))?;
        }
        writer.flush()?;

        Ok(())
    }
}

impl Default for CatalogWriter {
    fn default() -> Self {
        Self::new()
    }
}

use crate::config::CatalogConfig;
use crate::error::Result;
use crate::models::{CatalogEntry, STAR_KIND};
use crate::processors::name_normalizer::{hd_name, normalize_bayer_flamsteed, substitute_greek};
use crate::readers::{parse_number, present, ReadStats};
use crate::utils::constants::MAX_MAGNITUDE;
use crate::utils::coordinates::ra_to_degrees;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// One row of the HYG star table; only the consumed columns are declared
#[derive(Debug, Deserialize)]
struct StarRow {
    #[serde(rename = "ProperName")]
    proper_name: Option<String>,
    #[serde(rename = "BayerFlamsteed")]
    bayer_flamsteed: Option<String>,
    #[serde(rename = "HD")]
    hd: Option<String>,
    #[serde(rename = "RA")]
    ra: Option<String>,
    #[serde(rename = "Dec")]
    dec: Option<String>,
    #[serde(rename = "Mag")]
    mag: Option<String>,
}

pub struct StarReader {
    max_magnitude: f64,
    greek_symbols: bool,
}

impl StarReader {
    pub fn new() -> Self {
        Self {
            max_magnitude: MAX_MAGNITUDE,
            greek_symbols: false,
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self {
            max_magnitude: config.max_magnitude,
            greek_symbols: false,
        }
    }

    pub fn with_max_magnitude(mut self, max_magnitude: f64) -> Self {
        self.max_magnitude = max_magnitude;
        self
    }

    pub fn with_greek_symbols(mut self, greek_symbols: bool) -> Self {
        self.greek_symbols = greek_symbols;
        self
    }

    /// Read catalog entries from the star table (hygfull.csv)
    pub fn read_stars(&self, path: &Path) -> Result<Vec<CatalogEntry>> {
        let (entries, _stats) = self.read_stars_with_stats(path)?;
        Ok(entries)
    }

    /// Read catalog entries and report how many rows were skipped and why
    pub fn read_stars_with_stats(&self, path: &Path) -> Result<(Vec<CatalogEntry>, ReadStats)> {
        let file = File::open(path)?;
        let (entries, stats) = self.read_from(file)?;

        debug!(
            "{}: {} rows, {} stars kept, {} skipped",
            path.display(),
            stats.rows_read,
            stats.emitted,
            stats.skipped()
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

        for row_result in reader.deserialize::<StarRow>() {
            let row = row_result?;
            stats.rows_read += 1;

            if let Some(entry) = self.parse_star_row(row, &mut stats)? {
                entries.push(entry);
            }
        }

        stats.emitted = entries.len();
        Ok((entries, stats))
    }

    /// Apply the star inclusion policy to one row
    fn parse_star_row(&self, row: StarRow, stats: &mut ReadStats) -> Result<Option<CatalogEntry>> {
        let magnitude = match present(&row.mag) {
            Some(mag) => parse_number("Mag", Some(mag))?,
            None => {
                stats.missing_magnitude += 1;
                return Ok(None);
            }
        };

        let mut names = Vec::new();
        if let Some(name) = present(&row.proper_name) {
            names.push(name.to_string());
        }
        if let Some(designation) = present(&row.bayer_flamsteed) {
            let normalized = normalize_bayer_flamsteed(designation);
            if self.greek_symbols {
                names.push(substitute_greek(&normalized));
            } else {
                names.push(normalized);
            }
        }
        let hd = present(&row.hd);
        if let Some(hd) = hd {
            names.push(hd_name(hd));
        }

        if names.is_empty() {
            stats.no_names += 1;
            return Ok(None);
        }

        // Stars with an HD number are always kept
        if hd.is_none() && magnitude > self.max_magnitude {
            stats.too_faint += 1;
            return Ok(None);
        }

        let right_ascension = ra_to_degrees(parse_number("RA", present(&row.ra))?);
        let declination = parse_number("Dec", present(&row.dec))?;

        Ok(Some(CatalogEntry::new(
            STAR_KIND.to_string(),
            right_ascension,
            declination,
            magnitude,
            names,
        )?))
    }
}

impl Default for StarReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessingError;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "StarID,HIP,HD,HR,Gliese,BayerFlamsteed,ProperName,RA,Dec,Distance,Mag,AbsMag,Spectrum,ColorIndex";

    fn read(rows: &[&str]) -> Result<(Vec<CatalogEntry>, ReadStats)> {
        let mut data = String::from(HEADER);
        for row in rows {
            data.push('\n');
            data.push_str(row);
        }
        StarReader::new().read_from(data.as_bytes())
    }

    #[test]
    fn test_sirius_row() -> Result<()> {
        let (entries, stats) =
            read(&["32263,32349,48915,2491,Gl 244A,9Alp CMa,Sirius,6.75,-16.7,2.63,-1.46,1.45,A1V,0.009"])?;

        assert_eq!(entries.len(), 1);
        assert_eq!(stats.emitted, 1);
        let sirius = &entries[0];
        assert_eq!(sirius.kind, "Star");
        assert_eq!(sirius.right_ascension, 101.25);
        assert_eq!(sirius.declination, -16.7);
        assert_eq!(sirius.magnitude, -1.46);
        assert_eq!(sirius.names, vec!["Sirius", "Alp CMa", "hd48915"]);

        Ok(())
    }

    #[test]
    fn test_magnitude_boundary() -> Result<()> {
        let (entries, stats) = read(&[
            "1,,,,,,Boundary,1.0,10.0,,13.0,,,",
            "2,,,,,,TooFaint,1.0,10.0,,13.1,,,",
            "3,,12345,,,,,1.0,10.0,,20.0,,,",
        ])?;

        let names: Vec<&str> = entries.iter().map(|e| e.primary_name()).collect();
        assert_eq!(names, vec!["Boundary", "hd12345"]);
        assert_eq!(entries[1].magnitude, 20.0);
        assert_eq!(stats.too_faint, 1);

        Ok(())
    }

    #[test]
    fn test_rows_without_magnitude_or_names_skipped() -> Result<()> {
        let (entries, stats) = read(&[
            "1,,,,,,NoMag,1.0,10.0,,,,,",
            "2,,,,,,,1.0,10.0,,5.0,,,",
            "3,,,,,24Alp,,2.0,-5.0,,5.0,,,",
        ])?;

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].names, vec!["Alp"]);
        assert_eq!(entries[0].right_ascension, 30.0);
        assert_eq!(stats.missing_magnitude, 1);
        assert_eq!(stats.no_names, 1);
        assert_eq!(stats.skipped(), 2);

        Ok(())
    }

    #[test]
    fn test_missing_magnitude_short_circuits_coordinates() -> Result<()> {
        // Unparsable RA is never looked at when there is no magnitude
        let (entries, _) = read(&["1,,,,,,NoMag,bogus,bogus,,,,,"])?;
        assert!(entries.is_empty());
        Ok(())
    }

    #[test]
    fn test_unparsable_magnitude_fails_run() {
        let result = read(&["1,,,,,,Broken,1.0,10.0,,bright,,,"]);
        assert!(matches!(
            result,
            Err(ProcessingError::InvalidNumber { field: "Mag", .. })
        ));
    }

    #[test]
    fn test_unparsable_coordinate_fails_run() {
        let result = read(&["1,,,,,,Broken,6h45m,10.0,,1.0,,,"]);
        assert!(matches!(
            result,
            Err(ProcessingError::InvalidNumber { field: "RA", .. })
        ));
    }

    #[test]
    fn test_greek_symbols() -> Result<()> {
        let data = format!("{}\n1,,,,,58Alp Ori,Betelgeuse,5.92,7.4,,0.45,,,", HEADER);
        let (entries, _) = StarReader::new()
            .with_greek_symbols(true)
            .read_from(data.as_bytes())?;

        assert_eq!(entries[0].names, vec!["Betelgeuse", "α Ori"]);
        Ok(())
    }

    #[test]
    fn test_read_stars_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "ProperName,BayerFlamsteed,HD,RA,Dec,Mag")?;
        writeln!(temp_file, "Sirius,9Alp,48915,6.75,-16.7,-1.46")?;
        writeln!(temp_file, ",,,1.0,1.0,1.0")?;

        let reader = StarReader::new().with_max_magnitude(0.0);
        let stars = reader.read_stars(temp_file.path())?;

        assert_eq!(stars.len(), 1);
        assert_eq!(stars[0].joined_names(), "Sirius/Alp/hd48915");

        Ok(())
    }

    #[test]
    fn test_short_row_treated_as_missing_columns() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "ProperName,BayerFlamsteed,HD,RA,Dec,Mag")?;
        writeln!(temp_file, "Sirius,9Alp,48915,6.75,-16.7,-1.46")?;
        writeln!(temp_file, "Truncated,,,1.0,1.0")?;

        let (stars, stats) = StarReader::new().read_stars_with_stats(temp_file.path())?;

        assert_eq!(stars.len(), 1);
        assert_eq!(stars[0].primary_name(), "Sirius");
        assert_eq!(stats.rows_read, 2);
        assert_eq!(stats.missing_magnitude, 1);

        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let reader = StarReader::new();
        let result = reader.read_stars(Path::new("does/not/exist/hygfull.csv"));
        assert!(matches!(result, Err(ProcessingError::Io(_))));
    }
}

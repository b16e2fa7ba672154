use crate::error::Result;
use crate::utils::constants::{
    CONFIG_ENV_PREFIX, DEFAULT_NICKNAME_CACHE, DEFAULT_OUTPUT_DIR, DSO_DEFAULT_MAGNITUDE,
    DSO_SOURCE_FILE, MAX_MAGNITUDE, STAR_SOURCE_FILE,
};
use ::config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use validator::Validate;

/// Settings for a catalog run.
///
/// Layered as built-in defaults, then an optional TOML file, then
/// `WELLKNOWN_*` environment variables.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CatalogConfig {
    /// Faintest magnitude kept for stars without an HD number; DSO magnitudes are clamped to it
    #[validate(range(min = -30.0, max = 30.0))]
    pub max_magnitude: f64,

    /// Magnitude given to deep-sky objects whose source row has none
    #[validate(range(min = -30.0, max = 30.0))]
    pub dso_default_magnitude: f64,

    pub star_source: PathBuf,
    pub dso_source: PathBuf,
    pub output_dir: PathBuf,

    pub nickname_url: Option<String>,
    pub nickname_cache: PathBuf,
}

impl CatalogConfig {
    /// Load configuration, reading `path` if it exists
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());

        let settings = Config::builder()
            .set_default("max_magnitude", MAX_MAGNITUDE)?
            .set_default("dso_default_magnitude", DSO_DEFAULT_MAGNITUDE)?
            .set_default("star_source", STAR_SOURCE_FILE)?
            .set_default("dso_source", DSO_SOURCE_FILE)?
            .set_default("output_dir", DEFAULT_OUTPUT_DIR)?
            .set_default("nickname_cache", DEFAULT_NICKNAME_CACHE)?
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix(CONFIG_ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: CatalogConfig = settings.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_magnitude: MAX_MAGNITUDE,
            dso_default_magnitude: DSO_DEFAULT_MAGNITUDE,
            star_source: PathBuf::from(STAR_SOURCE_FILE),
            dso_source: PathBuf::from(DSO_SOURCE_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            nickname_url: None,
            nickname_cache: PathBuf::from(DEFAULT_NICKNAME_CACHE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() -> Result<()> {
        let dir = TempDir::new()?;
        let config = CatalogConfig::load(&dir.path().join("missing.toml"))?;

        assert_eq!(config.max_magnitude, 13.0);
        assert_eq!(config.dso_default_magnitude, 4.0);
        assert_eq!(config.star_source, PathBuf::from("hygfull.csv"));
        assert_eq!(config.dso_source, PathBuf::from("dso.csv"));
        assert!(config.nickname_url.is_none());

        Ok(())
    }

    #[test]
    fn test_file_overrides_defaults() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("wellknown.toml");
        let mut file = std::fs::File::create(&path)?;
        writeln!(file, "max_magnitude = 8.5")?;
        writeln!(file, "star_source = \"hyg/hygfull.csv\"")?;
        writeln!(file, "nickname_url = \"https://example.org/names.txt\"")?;

        let config = CatalogConfig::load(&path)?;

        assert_eq!(config.max_magnitude, 8.5);
        assert_eq!(config.dso_default_magnitude, 4.0);
        assert_eq!(config.star_source, PathBuf::from("hyg/hygfull.csv"));
        assert_eq!(
            config.nickname_url.as_deref(),
            Some("https://example.org/names.txt")
        );

        Ok(())
    }

    #[test]
    fn test_out_of_range_magnitude_rejected() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("wellknown.toml");
        std::fs::write(&path, "max_magnitude = 99.0\n")?;

        assert!(CatalogConfig::load(&path).is_err());

        Ok(())
    }
}

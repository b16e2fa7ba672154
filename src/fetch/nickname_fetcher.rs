use crate::error::Result;
use crate::utils::constants::HTTP_TIMEOUT_SECS;
use std::borrow::Cow;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Fetches the star nickname reference once and keeps the raw bytes on disk.
///
/// Nothing here feeds the catalog; the lines are only printed.
pub struct NicknameFetcher {
    url: String,
    cache_path: PathBuf,
    user_agent: String,
}

impl NicknameFetcher {
    pub fn new(url: impl Into<String>, cache_path: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            cache_path: cache_path.into(),
            user_agent: format!("wellknown-catalog/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    pub fn is_cached(&self) -> bool {
        self.cache_path.exists()
    }

    /// Cached bytes if present, otherwise download and cache them
    pub async fn load(&self) -> Result<Vec<u8>> {
        if self.is_cached() {
            debug!("Using cached nicknames at {}", self.cache_path.display());
            return Ok(tokio::fs::read(&self.cache_path).await?);
        }

        let bytes = self.download().await?;
        self.write_cache(&bytes)?;
        Ok(bytes)
    }

    async fn download(&self) -> Result<Vec<u8>> {
        info!("Downloading {}", self.url);

        let client = reqwest::Client::builder()
            .user_agent(&self.user_agent)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;

        let response = client.get(&self.url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;

        info!("Downloaded {} bytes", bytes.len());
        Ok(bytes.to_vec())
    }

    fn write_cache(&self, bytes: &[u8]) -> Result<()> {
        let dir = match self.cache_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(bytes)?;
        temp.persist(&self.cache_path).map_err(|e| e.error)?;

        debug!("Cached nicknames at {}", self.cache_path.display());
        Ok(())
    }
}

/// Decode the reference document and return its non-blank lines, trimmed
pub fn decode_lines(bytes: &[u8]) -> Vec<String> {
    let text: Cow<str> = match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => encoding_rs::WINDOWS_1252.decode(bytes).0,
    };

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

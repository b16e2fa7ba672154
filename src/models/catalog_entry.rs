use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{ProcessingError, Result};

/// Kind tag given to every record read from the star table
pub const STAR_KIND: &str = "Star";

/// Separator between names in the serialized `names` column
pub const NAME_SEPARATOR: char = '/';

/// A star or deep-sky object ready for the well-known catalog.
///
/// Right ascension is always held in degrees. `names` is ordered with the
/// preferred display name first and is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CatalogEntry {
    /// "Star" for stellar records, the verbatim DSO type otherwise ("Gxy", "OC", ...)
    pub kind: String,

    #[validate(range(min = 0.0, exclusive_max = 360.0))]
    pub right_ascension: f64,

    #[validate(range(min = -90.0, max = 90.0))]
    pub declination: f64,

    pub magnitude: f64,

    #[validate(length(min = 1))]
    pub names: Vec<String>,
}

impl CatalogEntry {
    pub fn new(
        kind: String,
        right_ascension: f64,
        declination: f64,
        magnitude: f64,
        names: Vec<String>,
    ) -> Result<Self> {
        if names.is_empty() {
            return Err(ProcessingError::InvalidFormat(format!(
                "{} entry at ra={} dec={} has no names",
                kind, right_ascension, declination
            )));
        }

        Ok(Self {
            kind,
            right_ascension,
            declination,
            magnitude,
            names,
        })
    }

    pub fn is_star(&self) -> bool {
        self.kind == STAR_KIND
    }

    pub fn primary_name(&self) -> &str {
        // names is non-empty by construction
        &self.names[0]
    }

    pub fn joined_names(&self) -> String {
        self.names.join(&NAME_SEPARATOR.to_string())
    }

    pub fn has_name(&self, wanted: &str) -> bool {
        self.names.iter().any(|n| n.eq_ignore_ascii_case(wanted))
    }
}

impl std::fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} (ra={:.4}, dec={:.4}, mag={:.2})",
            self.kind,
            self.joined_names(),
            self.right_ascension,
            self.declination,
            self.magnitude
        )
    }
}

/// Source file names inside the HYG database checkout
pub const STAR_SOURCE_FILE: &str = "hygfull.csv";
pub const DSO_SOURCE_FILE: &str = "dso.csv";

/// Output defaults
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const OUTPUT_FILE_PREFIX: &str = "wellknowndso_";
pub const OUTPUT_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S";
pub const CATALOG_HEADER: [&str; 5] = ["typ", "ra", "dec", "mag", "names"];

/// Magnitude policy
pub const MAX_MAGNITUDE: f64 = 13.0;
pub const DSO_DEFAULT_MAGNITUDE: f64 = 4.0;

/// Prefix for Henry Draper names ("hd48915")
pub const HD_NAME_PREFIX: &str = "hd";

/// Angle conversions
pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const IDEG_RA_FULL_CIRCLE: f64 = 864000.0;
pub const IDEG_DEC_QUARTER_CIRCLE: f64 = 324000.0;

/// Lookup limits
pub const MAX_RANGE_HITS: usize = 100;

/// Configuration defaults
pub const DEFAULT_CONFIG_FILE: &str = "wellknown.toml";
pub const CONFIG_ENV_PREFIX: &str = "WELLKNOWN";
pub const DEFAULT_NICKNAME_CACHE: &str = "cache/nicknames.txt";
pub const HTTP_TIMEOUT_SECS: u64 = 30;

pub mod constants;
pub mod coordinates;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use coordinates::{ideg_to_dec, ideg_to_ra, ra_to_degrees};
pub use filename::{catalog_filename_at, generate_default_catalog_filename, latest_catalog_file};
pub use progress::ProgressReporter;

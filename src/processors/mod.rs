pub mod catalog_builder;
pub mod name_normalizer;

pub use catalog_builder::{BuildReport, CatalogBuilder};
pub use name_normalizer::{normalize_bayer_flamsteed, substitute_greek};

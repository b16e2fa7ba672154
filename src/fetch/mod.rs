pub mod nickname_fetcher;

pub use nickname_fetcher::{decode_lines, NicknameFetcher};

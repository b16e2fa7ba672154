use crate::utils::constants::DEFAULT_CONFIG_FILE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wellknown-catalog")]
#[command(about = "Build a catalog of well-known stars and deep-sky objects")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Hide progress spinners")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE, help = "Configuration file (optional)")]
    pub config: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the catalog from the star and deep-sky object tables
    Generate {
        #[arg(short, long, help = "Star table [default: star_source from config]")]
        stars: Option<PathBuf>,

        #[arg(short, long, help = "Deep-sky object table [default: dso_source from config]")]
        dsos: Option<PathBuf>,

        #[arg(
            short,
            long,
            help = "Output CSV path [default: {output_dir}/wellknowndso_{YYYYMMDDTHHMMSS}.csv]"
        )]
        output_file: Option<PathBuf>,

        #[arg(long, help = "Replace Bayer abbreviations with Greek letters")]
        greek: bool,
    },

    /// Display information about a generated catalog
    Info {
        #[arg(short, long, help = "Catalog file [default: newest catalog in output_dir]")]
        file: Option<PathBuf>,

        #[arg(short, long, default_value = "10")]
        sample: usize,

        #[arg(long, help = "Print the summary as JSON")]
        json: bool,
    },

    /// Look up an entry in a generated catalog by any of its names
    Lookup {
        #[arg(short, long, help = "Catalog file [default: newest catalog in output_dir]")]
        file: Option<PathBuf>,

        #[arg(short, long)]
        name: String,
    },

    /// Fetch (or read from cache) and print the star nickname reference
    Nicknames {
        #[arg(short, long, help = "Reference URL [default: nickname_url from config]")]
        url: Option<String>,

        #[arg(short, long, help = "Cache file [default: nickname_cache from config]")]
        cache: Option<PathBuf>,
    },

    /// Convert integer-scaled RA and Dec units to HHhMMmSS and degrees
    ToRadec {
        #[arg(allow_negative_numbers = true, help = "RA in units of 1/864000 of a circle")]
        ra: f64,

        #[arg(allow_negative_numbers = true, help = "Dec in units of 1/324000 of 90 degrees")]
        dec: f64,
    },
}

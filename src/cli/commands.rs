use crate::cli::args::{Cli, Commands};
use crate::config::CatalogConfig;
use crate::error::{ProcessingError, Result};
use crate::fetch::{decode_lines, NicknameFetcher};
use crate::processors::CatalogBuilder;
use crate::readers::CatalogReader;
use crate::utils::coordinates::{ideg_to_dec, ideg_to_ra};
use crate::utils::filename::{generate_default_catalog_filename, latest_catalog_file};
use crate::utils::progress::ProgressReporter;
use crate::writers::CatalogWriter;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, Level};

pub async fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let config = CatalogConfig::load(&cli.config)?;
    debug!("Configuration: {:?}", config);

    match cli.command {
        Commands::Generate {
            stars,
            dsos,
            output_file,
            greek,
        } => {
            let star_path = stars.unwrap_or_else(|| config.star_source.clone());
            let dso_path = dsos.unwrap_or_else(|| config.dso_source.clone());
            let output_file =
                output_file.unwrap_or_else(|| generate_default_catalog_filename(&config.output_dir));

            println!("Generating well-known object catalog...");
            println!("Star table: {}", star_path.display());
            println!("Deep-sky object table: {}", dso_path.display());
            println!("Output file: {}", output_file.display());
            println!("Max magnitude: {}", config.max_magnitude);

            let progress = ProgressReporter::new_spinner("Reading source tables...", cli.quiet);

            let builder = CatalogBuilder::from_config(&config).with_greek_symbols(greek);
            let (entries, report) = builder.build(&star_path, &dso_path, Some(&progress))?;

            progress.set_message("Writing catalog...");
            CatalogWriter::new().write_catalog(&output_file, &entries)?;
            progress.finish_with_message(&format!("Wrote {} entries", entries.len()));

            println!("\n{}", report.summary());
            println!("Catalog complete!");
        }

        Commands::Info { file, sample, json } => {
            let file = match file {
                Some(file) => file,
                None => latest_catalog_file(&config.output_dir)?,
            };
            let catalog = CatalogReader::new().read_catalog(&file)?;
            let summary = catalog.summary();

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
                return Ok(());
            }

            println!("Analyzing catalog: {}", file.display());
            println!("\n{}", summary.summary());

            if sample > 0 {
                println!("Brightest Entries (showing {} entries):", sample);
                for (i, entry) in catalog.sorted().entries().iter().take(sample).enumerate() {
                    println!("{}. {}", i + 1, entry);
                }
            }
        }

        Commands::Lookup { file, name } => {
            let file = match file {
                Some(file) => file,
                None => latest_catalog_file(&config.output_dir)?,
            };
            let catalog = CatalogReader::new().read_catalog(&file)?;
            match catalog.find_by_name(&name) {
                Some(entry) => println!("{}", entry),
                None => println!("No entry named '{}' in {}", name, file.display()),
            }
        }

        Commands::Nicknames { url, cache } => {
            let url = url.or_else(|| config.nickname_url.clone()).ok_or_else(|| {
                ProcessingError::Config(::config::ConfigError::NotFound(
                    "nickname_url".to_string(),
                ))
            })?;
            let cache = cache.unwrap_or_else(|| config.nickname_cache.clone());

            let fetcher = NicknameFetcher::new(url, cache);
            let progress = ProgressReporter::new_spinner(
                "Loading nickname reference...",
                cli.quiet || fetcher.is_cached(),
            );
            let bytes = fetcher.load().await?;
            progress.finish_with_message(&format!(
                "Loaded {} bytes ({})",
                bytes.len(),
                fetcher.cache_path().display()
            ));

            for line in decode_lines(&bytes) {
                println!("{}", line);
            }
        }

        Commands::ToRadec { ra, dec } => {
            println!("RA:  {} {:?}", ideg_to_ra(ra), ideg_to_dec(dec));
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}

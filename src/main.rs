use clap::Parser;
use wellknown_catalog::cli::{run, Cli};
use wellknown_catalog::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}

use anyhow::Result;
use clap::Parser;
use ridgeline::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    ridgeline::logging::init(cli.log_file.as_deref())?;
    ridgeline::run(cli).await
}

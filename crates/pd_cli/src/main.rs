use std::process::ExitCode;
use clap::Parser;
use pd_cli::{Cli, Pipeline};
use pd_core::logging::init_logging;
use pd_core::{Config, Result};

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()?;
    tracing::debug!("Loaded configuration: {:?}", config);
    let pipeline = Pipeline::from_config(&config)?;
    pipeline.run(&cli.url).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let logger = init_logging();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger.error(&format!("❌ {}", e));
            ExitCode::from(e.exit_code())
        }
    }
}

use log::info;

use crate::app::controller::AppController;
use crate::cli::Cli;
use crate::config::load_config;
use crate::error::Result;
use crate::logging;

/// Entry point used by `main` to bootstrap the controller stack.
pub async fn run(cli: Cli) -> Result<()> {
    logging::init(&cli.log_file, &cli.log_level)?;

    let config = load_config(cli.config.as_deref(), cli.api_url.as_deref())?;
    info!("recommendation endpoint: {}", config.endpoint()?);

    let controller = AppController::new(&config)?;
    controller.run().await
}

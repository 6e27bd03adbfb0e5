use clap::Parser;

use skincare_bot::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    skincare_bot::app::run(cli).await?;
    Ok(())
}

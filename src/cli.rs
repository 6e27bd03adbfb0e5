use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "skincare-bot")]
#[command(about = "Answer a short skincare questionnaire and get product recommendations")]
#[command(version)]
pub struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base URL of the recommendation service (overrides SKINCARE_BOT_API_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    /// File receiving diagnostic logs (the terminal belongs to the UI)
    #[arg(long, default_value = "skincare-bot.log")]
    pub log_file: PathBuf,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

// jamlink — VDO.Ninja link generator companion for group audio sessions.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "jamlink",
    about = "VDO.Ninja video link generator for group audio sessions"
)]
struct Args {
    /// Path to the config JSON file.
    #[arg(long, default_value = "jamlink.json")]
    config: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    info!("jamlink starting");

    jam_launcher::run_launcher(&args.config)
}

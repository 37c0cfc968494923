//! Delivery ETA prediction - entry point

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "delivery-eta",
    about = "Estimate food delivery time from pre-fitted model artifacts"
)]
struct Cli {
    /// Directory containing the pre-fitted artifact bundle
    #[arg(long, default_value = "artifacts")]
    artifact_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "delivery_eta=info".into()),
        )
        .init();

    let cli = Cli::parse();
    delivery_eta::cli::run(&cli.artifact_dir)?;
    Ok(())
}

use anyhow::Result;
use clap::Parser;

mod config;
mod run;

#[derive(Parser, Debug)]
#[command(
    name = "ynab-forecast",
    version,
    about = "Project recurring budget entries into one-time forecasts"
)]
struct Cli {
    /// Report every change without making API calls (read-only)
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::Config::from_env()?;
    run::run(&config, cli.dry_run).await
}

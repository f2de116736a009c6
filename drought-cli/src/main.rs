//! Drought CLI - Command line tool for checking drought datasets.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "drought-cli",
    version,
    about = "World drought map data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: drought_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    drought_cmd::run(cli.command).await
}

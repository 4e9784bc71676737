//! MCO CLI - Command line tool for fetching and rendering MOPITT CO data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "mco-cli",
    version,
    about = "MOPITT carbon monoxide data toolkit"
)]
struct Cli {
    #[command(flatten)]
    source: mco_cmd::SourceOptions,

    #[command(subcommand)]
    command: mco_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Data source options: {:?}", cli.source);
    mco_cmd::run(cli.command, cli.source).await
}

//! Mood CLI - Command line tool for seeding and inspecting mood data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "mood-cli",
    version,
    about = "Mood calendar data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: mood_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    mood_cmd::run(cli.command)
}

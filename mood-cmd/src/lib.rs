//! Command implementations for the mood CLI.
//!
//! Provides subcommands for seeding sample check-in data and printing
//! per-day rollup tables from a moods CSV.

use clap::Subcommand;

pub mod seed;
pub mod stats;

#[derive(Subcommand)]
pub enum Command {
    /// Generate a deterministic sample moods CSV covering every render strategy
    Seed {
        /// Output path for the moods CSV
        #[arg(short, long)]
        output: String,

        /// Year to generate records for
        #[arg(long, default_value_t = 2024)]
        year: i32,

        /// Month to generate records for (1-12)
        #[arg(long, default_value_t = 3)]
        month: u32,
    },

    /// Print a per-day rollup table (count, primary mood, avg intensity, strategy)
    Stats {
        /// Path to an existing moods CSV
        #[arg(short, long)]
        moods_csv: String,

        /// Year to report on
        #[arg(long)]
        year: i32,

        /// Month to report on (1-12)
        #[arg(long)]
        month: u32,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Seed {
            output,
            year,
            month,
        } => seed::run_seed(&output, year, month),
        Command::Stats {
            moods_csv,
            year,
            month,
        } => stats::run_stats(&moods_csv, year, month),
    }
}

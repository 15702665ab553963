#![cfg(feature = "demo")]

//! Command line interface of the `tp-demo` binary.
//!
//! A small tool for poking at the data-source layer during development:
//! inspect and flip the persisted mode, and dump the simulated datasets
//! the dashboard would render for a demo account.

use std::sync::Arc;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::simulated::{channels, growth, posts};
use crate::storage::memory::MemoryStore;
use crate::{init, open, DsError, DsResult, Mode, ModeController};

#[derive(Parser)]
#[command(author, version, about = "Telepulse data-source demo CLI", long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the current data-source mode
    Show,
    /// Set the data-source mode and persist it
    Set {
        /// `live` or `simulated`
        mode: String,
    },
    /// Dump simulated datasets as JSON
    Sample {
        /// Seed for the dataset generators
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Number of channels to generate
        #[arg(long, default_value_t = 5)]
        channels: usize,
    },
}

/// Entry point invoked by the `tp-demo` binary.
pub async fn run() -> DsResult<()> {
    let cli = Cli::parse();
    let config = init(cli.config.as_deref())?;
    let controller = open(&config).await?;

    match cli.command {
        Commands::Show => {
            println!("{}", controller.mode());
        }
        Commands::Set { mode } => {
            let mode: Mode = mode.parse().map_err(DsError::invalid_input)?;
            controller.set_mode(mode);
            controller.persist().await?;
            println!("data-source mode set to '{}'", mode);
        }
        Commands::Sample { seed, channels } => {
            sample(seed, channels)?;
        }
    }

    Ok(())
}

/// Prints one sample of every simulated dataset.
///
/// Runs against a throwaway simulated-mode controller so sampling never
/// touches the persisted preference.
fn sample(seed: u64, channel_count: usize) -> DsResult<()> {
    let sampler = ModeController::with_mode(Arc::new(MemoryStore::new()), Mode::Simulated);

    let directory = channels::channel_directory(&sampler, seed, channel_count)?;
    println!("channels:\n{}", serde_json::to_string_pretty(&directory)?);

    let start = NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid constant date");
    let series = growth::subscriber_growth(&sampler, seed, start, 14, 10_000)?;
    println!("growth:\n{}", serde_json::to_string_pretty(&series)?);

    if let Some(first) = directory.first() {
        let history = posts::post_history(&sampler, seed, first.id, 10)?;
        println!("posts for {}:\n{}", first.username, serde_json::to_string_pretty(&history)?);
    }

    Ok(())
}

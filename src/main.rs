use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use analytics_etl::config::StoreConfig;
use analytics_etl::error::EtlResult;
use analytics_etl::pipeline;
use analytics_etl::store::{CLEAN_TABLE, STAGING_TABLE};

#[derive(Parser)]
#[command(
    name = "analytics-etl",
    version,
    about = "Ingest a tabular source file into a staging table, then derive a typed clean table"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ingest a spreadsheet or delimited-text file into the staging table.
    Load {
        /// Path to the source file.
        source: PathBuf,
    },
    /// Derive the clean table from the staging table.
    Transform,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = StoreConfig::from_env();

    if let Err(err) = run(&config, cli.command) {
        log::error!("{err}");
        process::exit(1);
    }
}

fn run(config: &StoreConfig, command: Command) -> EtlResult<()> {
    match command {
        Command::Load { source } => {
            let rows = pipeline::load(config, &source)?;
            println!(
                "ingested {rows} rows from {} into {STAGING_TABLE}",
                source.display()
            );
        }
        Command::Transform => {
            let report = pipeline::transform(config)?;
            println!(
                "clean rows in {CLEAN_TABLE}: {} | total nulls: {}",
                report.rows, report.nulls
            );
        }
    }
    Ok(())
}

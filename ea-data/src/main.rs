//! EA Data - command line tool for preparing the dashboard datasets.

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use ea_data::{cleaner, combine, generator};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ea-data",
    version,
    about = "E-commerce analytics dataset toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate products.csv and sales.csv
    Generate {
        /// Output directory
        #[arg(long, default_value = "data/sample")]
        out: PathBuf,
        /// RNG seed
        #[arg(long, default_value_t = generator::DEFAULT_SEED)]
        seed: u64,
        /// Last day of sales (YYYY-MM-DD), defaults to today
        #[arg(long)]
        end: Option<NaiveDate>,
    },
    /// Normalize a price column and optionally select columns
    Clean {
        input: PathBuf,
        output: PathBuf,
        #[arg(long, default_value = "price")]
        price_column: String,
        /// Columns to keep, in order (default: all)
        #[arg(long, value_delimiter = ',')]
        columns: Vec<String>,
    },
    /// Combine checkpoint CSVs in a directory into one deduplicated file
    Combine {
        #[arg(long, default_value = "data/raw")]
        dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate { out, seed, end } => {
            let end = end.unwrap_or_else(|| Local::now().date_naive());
            let dataset = generator::generate(seed, end);
            generator::save_dataset(&dataset, &out)?;
            println!(
                "Generated {} products and {} sales records in {}",
                dataset.products.len(),
                dataset.sales.len(),
                out.display()
            );
        }
        Command::Clean {
            input,
            output,
            price_column,
            columns,
        } => {
            let reader = fs::File::open(&input)
                .with_context(|| format!("Failed to open {}", input.display()))?;
            if let Some(parent) = output.parent() {
                fs::create_dir_all(parent)?;
            }
            let writer = fs::File::create(&output)
                .with_context(|| format!("Failed to create {}", output.display()))?;
            let keep: Vec<&str> = columns.iter().map(String::as_str).collect();
            let rows = cleaner::clean_prices(reader, writer, &price_column, &keep)?;
            println!("Saved {} cleaned rows to {}", rows, output.display());
        }
        Command::Combine { dir } => {
            let files = combine::find_checkpoints(&dir)?;
            anyhow::ensure!(!files.is_empty(), "No checkpoint files found in {}", dir.display());

            let timestamp = Local::now().format("%Y%m%d_%H%M%S");
            let output = dir.join(format!("raw_combined_data_{}.csv", timestamp));
            let stats = combine::combine_files(&files, &output)?;
            println!("Total input rows: {}", stats.input_rows);
            println!("Duplicates removed: {}", stats.duplicates_removed);
            println!("Final rows after deduplication: {}", stats.output_rows);
            println!("Total columns: {}", stats.columns);
            println!("Saved combined data to: {}", output.display());
        }
    }
    Ok(())
}

pub mod commands;
pub mod logging;
pub mod settings;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::settings::PolicyArgs;

#[derive(Debug, Parser)]
#[command(
    name = "replen",
    about = "Inventory replenishment planner",
    long_about = "Compute safety stock, reorder points and suggested order quantities from demand statistics, stock levels and supplier lead times.",
    after_help = "Examples:\n  replen generate --out data/raw\n  replen plan --data data/raw --service-level 0.97\n  replen report --category Spirits --json"
)]
pub struct Cli {
    /// Debug 等級日誌（RUST_LOG 優先）
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Generate a deterministic synthetic dataset as CSV files")]
    Generate {
        #[arg(long, default_value = "data/raw")]
        out: PathBuf,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value_t = 90)]
        days: u32,
    },
    #[command(about = "Compute the reorder plan and write it as CSV")]
    Plan {
        #[command(flatten)]
        policy: PolicyArgs,
        #[arg(long, default_value = "data/processed/reorder_plan.csv")]
        out: PathBuf,
    },
    #[command(about = "Summarize the reorder plan and list products below their reorder point")]
    Report {
        #[command(flatten)]
        policy: PolicyArgs,
        #[arg(long = "category", help = "Only include these categories (repeatable)")]
        categories: Vec<String>,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Command::Generate { out, seed, days } => commands::generate::run(&out, seed, days),
        Command::Plan { policy, out } => commands::plan::run(&policy, &out),
        Command::Report {
            policy,
            categories,
            json,
        } => commands::report::run(&policy, &categories, json),
    };

    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

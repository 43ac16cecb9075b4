//! CLI commands for reports

use clap::Subcommand;
use serde::Serialize;

use crate::config::Settings;
use crate::display::report::{format_category_breakdown, format_summary};
use crate::error::FinResult;
use crate::models::OwnerId;
use crate::reports::{breakdown_by_category, summarize};
use crate::services::TransactionService;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Total income, total expenses and balance
    Summary {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Income and expense totals per category
    #[command(alias = "by-category")]
    Categories {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    owner: &OwnerId,
    cmd: ReportCommands,
) -> FinResult<()> {
    let transactions = TransactionService::new(storage).list(owner)?;
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Summary { json } => {
            let summary = summarize(&transactions)?;
            if json {
                print_json(&summary)?;
            } else {
                print!("{}", format_summary(&summary, symbol));
            }
        }
        ReportCommands::Categories { json } => {
            let breakdown = breakdown_by_category(&transactions)?;
            if json {
                print_json(&breakdown)?;
            } else {
                print!("{}", format_category_breakdown(&breakdown, symbol));
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> FinResult<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

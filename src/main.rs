use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

use fintooz::cli::{
    handle_advice_command, handle_ask_command, handle_report_command,
    handle_transaction_command, ReportCommands, TransactionCommands,
};
use fintooz::config::{paths::FinPaths, settings::Settings};
use fintooz::models::OwnerId;
use fintooz::storage::{DataLock, Storage};

/// How long to wait for another fintooz run to finish with the data files
const LOCK_WAIT: Duration = Duration::from_secs(10);

#[derive(Parser)]
#[command(
    name = "fintooz",
    version,
    about = "Personal finance tracker with an AI assistant",
    long_about = "FinTooz records income and expenses, summarizes them by category, \
                  and answers money questions. Quick entries like 'add, food, 250' \
                  are recorded directly; anything else is sent to the assistant."
)]
struct Cli {
    /// Owner whose transactions are used (defaults to the configured owner)
    #[arg(short, long, global = true)]
    user: Option<String>,

    /// Language for assistant replies (defaults to the configured language)
    #[arg(long, global = true)]
    language: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Summaries and per-category breakdowns
    #[command(subcommand)]
    Report(ReportCommands),

    /// Record a quick entry ("add, food, 250") or ask the assistant anything
    Ask {
        /// Query text
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Ask the assistant for advice based on your transactions
    Advice {
        /// Question text
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    fintooz::init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = FinPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage; the lock is held until main returns
    let mut storage = Storage::new(paths.clone())?;
    let _lock = DataLock::acquire(paths.lock_file(), LOCK_WAIT)?;
    storage.load_all()?;

    let owner = OwnerId::new(cli.user.unwrap_or_else(|| settings.default_owner.clone()));
    let language = cli.language.unwrap_or_else(|| settings.language.clone());

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, &owner, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, &owner, cmd)?;
        }
        Some(Commands::Ask { query }) => {
            handle_ask_command(&storage, &settings, &owner, &language, &query.join(" ")).await?;
        }
        Some(Commands::Advice { question }) => {
            handle_advice_command(&storage, &settings, &owner, &language, &question.join(" "))
                .await?;
        }
        Some(Commands::Init) => {
            println!("Initializing FinTooz at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            storage.save_all()?;
            println!("Initialization complete!");
            println!();
            println!("Try: fintooz ask \"add, salary, 2500\"");
        }
        Some(Commands::Config) => {
            println!("FinTooz Configuration");
            println!("=====================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!();
            println!("Settings:");
            println!("  Default owner:    {}", settings.default_owner);
            println!("  Language:         {}", settings.language);
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Assistant model:  {}", settings.assistant.model);
            println!("  Assistant URL:    {}", settings.assistant.effective_api_url());
            println!(
                "  API key:          {}",
                if settings.assistant.api_key().is_ok() { "set" } else { "not set" }
            );
        }
        None => {
            println!("FinTooz - personal finance tracking");
            println!();
            println!("Run 'fintooz --help' for usage information.");
        }
    }

    Ok(())
}

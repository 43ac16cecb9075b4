//! FinTooz - personal finance tracking from the command line
//!
//! This library records income and expense transactions per owner, interprets
//! shorthand chat commands such as `add, food, 250`, aggregates transactions
//! into summaries and per-category breakdowns, and forwards free-form
//! questions to an OpenAI-compatible chat-completion service.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, identifiers)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer, including the command interpreter
//! - `reports`: Summary and per-category aggregation
//! - `assistant`: Chat-completion client and prompts
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use fintooz::config::{paths::FinPaths, settings::Settings};
//!
//! let paths = FinPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

use std::sync::Once;

pub mod assistant;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinError, FinResult};

static TRACING_INIT: Once = Once::new();

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or debug
/// output for this crate when `verbose` is on.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let default = if verbose { "fintooz=debug" } else { "fintooz=warn" };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

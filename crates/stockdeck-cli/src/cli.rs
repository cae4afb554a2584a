//! CLI argument definitions for stockdeck.
//!
//! One subcommand per dashboard action, all hitting the same remote
//! price API.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `save` | Save a price record |
//! | `price` | Fetch the latest stored price for a symbol |
//! | `history` | Fetch price history with aggregate statistics |
//! | `analyze` | Fetch the technical-analysis report |
//! | `portfolio` | Fetch the full portfolio |
//! | `fetch` | Trigger a refresh from the upstream market-data provider |
//!
//! # Examples
//!
//! ```bash
//! stockdeck save AAPL 150.25 --volume 1200000
//! stockdeck price aapl
//! stockdeck history AAPL --days 30 --limit 100
//! stockdeck analyze MSFT
//! stockdeck portfolio
//! stockdeck fetch IBM
//! ```

use clap::{Args, Parser, Subcommand};

/// stockdeck - dashboard client for a remote stock-price API.
#[derive(Debug, Parser)]
#[command(
    name = "stockdeck",
    author,
    version,
    about = "Query and update stock price data through a remote HTTP API"
)]
pub struct Cli {
    /// Base URL of the price API.
    #[arg(long, global = true, default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Per-request timeout in milliseconds.
    #[arg(long, global = true, default_value_t = stockdeck_core::DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// 💾 Save a price record for a symbol.
    ///
    /// Optional fields are sent only when provided.
    Save(SaveArgs),

    /// 💰 Fetch the latest stored price for a symbol.
    Price(PriceArgs),

    /// 📈 Fetch price history and aggregate statistics.
    ///
    /// `--days` and `--limit` are forwarded to the service as-is.
    History(HistoryArgs),

    /// 📊 Fetch the technical-analysis report for a symbol.
    Analyze(AnalyzeArgs),

    /// 💼 Fetch the full portfolio.
    Portfolio,

    /// 🌐 Refresh a symbol from the upstream market-data provider.
    Fetch(FetchArgs),
}

/// Arguments for the `save` command.
#[derive(Debug, Args)]
pub struct SaveArgs {
    /// Market symbol (e.g. AAPL).
    pub symbol: String,

    /// Price to record.
    pub price: String,

    /// Traded volume (integer).
    #[arg(long, default_value = "")]
    pub volume: String,

    /// Absolute price change.
    #[arg(long, default_value = "")]
    pub change: String,

    /// Percentage price change.
    #[arg(long, default_value = "")]
    pub change_percent: String,
}

/// Arguments for the `price` command.
#[derive(Debug, Args)]
pub struct PriceArgs {
    /// Market symbol to look up.
    pub symbol: String,
}

/// Arguments for the `history` command.
#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Market symbol to fetch history for.
    pub symbol: String,

    /// Look-back window in days (forwarded unvalidated).
    #[arg(long, default_value = "30")]
    pub days: String,

    /// Maximum number of records (forwarded unvalidated).
    #[arg(long, default_value = "100")]
    pub limit: String,
}

/// Arguments for the `analyze` command.
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Market symbol to analyze.
    pub symbol: String,
}

/// Arguments for the `fetch` command.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Market symbol to refresh from the upstream provider.
    pub symbol: String,
}

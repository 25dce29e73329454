use clap::Parser;

use crate::models::{ApiProvider, DEFAULT_SYMBOLS, Lookback};

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Comma-separated ticker symbols
    #[arg(short, long, default_value = DEFAULT_SYMBOLS)]
    pub symbols: String,

    /// Number of trailing trading days to compare (1-252)
    #[arg(short, long, default_value_t = Lookback::DEFAULT.to_string())]
    pub lookback: String,

    /// Price history provider
    #[arg(short, long, value_enum, default_value_t = ApiProvider::Yahoo)]
    pub provider: ApiProvider,

    /// Print the report as JSON instead of starting the dashboard
    #[arg(long)]
    pub json: bool,

    #[arg(long, default_value = "stock-change-tui.log")]
    pub log_file: String,
}

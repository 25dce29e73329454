pub const DEFAULT_SYMBOLS: &str = "AAPL, MSFT, GOOGL";

/// Splits a comma-separated list of tickers, keeping input order.
pub fn parse_symbols(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|symbol| !symbol.is_empty())
        .map(str::to_uppercase)
        .collect()
}

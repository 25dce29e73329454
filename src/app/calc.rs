use rust_decimal::Decimal;

use crate::models::{ChangeComputation, ChangeResult, Lookback, PriceSeries};

/// Measures the change between the first and last observation of the
/// trailing `lookback` window. Series shorter than the window yield an
/// insufficient-data result with an empty window.
pub fn compute_change(series: &PriceSeries, lookback: Lookback) -> ChangeComputation {
    let symbol = series.symbol().clone();
    let days = lookback.days();

    if series.len() < days {
        return ChangeComputation::new(ChangeResult::insufficient(symbol), Vec::new());
    }

    let window = series.trailing(days).to_vec();
    let latest = *window[window.len() - 1].close();
    let previous = *window[0].close();
    let change = latest - previous;
    let change_percent = if previous == Decimal::ZERO {
        Decimal::ZERO
    } else {
        (change / previous) * Decimal::ONE_HUNDRED
    };

    ChangeComputation::new(
        ChangeResult::new(symbol, Some(latest), Some(change), Some(change_percent)),
        window,
    )
}

pub fn compute_changes(series: &[PriceSeries], lookback: Lookback) -> Vec<ChangeComputation> {
    series
        .iter()
        .map(|series| compute_change(series, lookback))
        .collect()
}

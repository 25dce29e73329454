use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::{
    api::{FetchError, PriceHistoryProvider},
    app::calc::compute_change,
    models::{DashboardReport, DashboardRequest, PriceSeries, SymbolReport},
};

/// Answers a dashboard request: fetches each symbol's history and measures
/// its change over the requested lookback.
#[derive(Debug)]
pub struct Dashboard<P> {
    provider: Arc<P>,
}

impl<P> Dashboard<P>
where
    P: PriceHistoryProvider + 'static,
{
    pub fn new(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn set_provider(&mut self, provider: P) {
        self.provider = Arc::new(provider);
    }

    /// Never fails as a whole. Fetch failures become empty series and a
    /// notice; the report keeps the order of `request.symbols()`.
    pub async fn run(&self, request: &DashboardRequest) -> DashboardReport {
        let symbols = request.symbols();
        let lookback = *request.lookback();
        let mut notices = Vec::new();

        info!(count = symbols.len(), %lookback, "running dashboard request");

        let mut tasks = JoinSet::new();
        for (index, symbol) in symbols.iter().cloned().enumerate() {
            let provider = Arc::clone(&self.provider);
            tasks.spawn(async move {
                let fetched = provider.fetch_daily_closes(&symbol).await;
                (index, fetched)
            });
        }

        let mut fetched: Vec<Option<Result<PriceSeries, FetchError>>> =
            (0..symbols.len()).map(|_| None).collect();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, result)) => fetched[index] = Some(result),
                Err(err) => warn!(error = %err, "fetch task did not complete"),
            }
        }

        // Notices are raised here so they follow input order, not completion order
        let rows = symbols
            .iter()
            .zip(fetched)
            .map(|(symbol, fetched)| {
                let series = match fetched {
                    Some(Ok(series)) => series,
                    Some(Err(err)) => {
                        warn!(symbol = %symbol, error = %err, "fetch failed");
                        notices.push(format!("Error fetching data for {}: {}", symbol, err));
                        PriceSeries::empty(symbol.clone())
                    }
                    None => {
                        notices.push(format!("Error fetching data for {}", symbol));
                        PriceSeries::empty(symbol.clone())
                    }
                };
                let (result, window) = compute_change(&series, lookback).into_parts();
                SymbolReport::new(result, window)
            })
            .collect();

        DashboardReport::new(lookback, rows, notices)
    }
}

use std::future::Future;

use reqwest::Client;
use tracing::debug;

use super::{
    FetchError, av, fmp, marketstack,
    utils::{api_key, history_start, require_observations, today},
    yahoo,
};
use crate::models::{ApiProvider, PriceSeries};

/// Source of trailing daily closing prices for a symbol.
pub trait PriceHistoryProvider: Send + Sync {
    fn fetch_daily_closes(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<PriceSeries, FetchError>> + Send;
}

/// HTTP-backed provider that dispatches on the selected API.
#[derive(Clone, Debug)]
pub struct MarketData {
    api: ApiProvider,
    client: Client,
}

impl MarketData {
    pub fn new(api: ApiProvider) -> Self {
        Self {
            api,
            client: Client::new(),
        }
    }

    pub fn api(&self) -> ApiProvider {
        self.api
    }

    fn key(&self) -> Result<String, FetchError> {
        match self.api.api_key_var() {
            Some(var) => api_key(var),
            None => Ok(String::new()),
        }
    }
}

impl PriceHistoryProvider for MarketData {
    async fn fetch_daily_closes(&self, symbol: &str) -> Result<PriceSeries, FetchError> {
        let from = history_start(today());
        let from_str = from.format("%Y-%m-%d").to_string();

        let series = match self.api {
            ApiProvider::Yahoo => yahoo::get_daily_closes(symbol).await?,
            ApiProvider::Fmp => {
                let key = self.key()?;
                fmp::get_daily_closes(symbol, &from_str, &self.client, &key).await?
            }
            ApiProvider::AlphaVantage => {
                let key = self.key()?;
                av::get_daily_closes(symbol, from, &self.client, &key).await?
            }
            ApiProvider::Marketstack => {
                let key = self.key()?;
                marketstack::get_daily_closes(symbol, &from_str, &self.client, &key).await?
            }
        };

        debug!(
            symbol,
            api = self.api.to_str(),
            observations = series.len(),
            "fetched daily closes"
        );

        require_observations(symbol, series)
    }
}

use std::collections::BTreeMap;

use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::{FetchError, utils::parse_date};
use crate::models::{PricePoint, PriceSeries};

#[derive(Debug, Deserialize, Getters, new)]
pub struct AvTimeSeriesDailyDto {
    #[serde(rename = "Time Series (Daily)")]
    time_series: BTreeMap<String, AvDailyBarDto>,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct AvDailyBarDto {
    #[serde(rename = "1. open")]
    open: String,
    #[serde(rename = "2. high")]
    high: String,
    #[serde(rename = "3. low")]
    low: String,
    #[serde(rename = "4. close")]
    close: String,
    #[serde(rename = "5. volume")]
    volume: String,
}

impl AvTimeSeriesDailyDto {
    /// Closes dated on or after `from`.
    pub fn to_price_series(&self, symbol: &str, from: NaiveDate) -> Result<PriceSeries, FetchError> {
        let mut points = Vec::with_capacity(self.time_series.len());
        for (date, bar) in &self.time_series {
            let date = parse_date(date)?;
            if date < from {
                continue;
            }
            let close = bar.close.parse::<Decimal>().map_err(|_| {
                FetchError::Parse(format!("Failed to parse close '{}' for {}", bar.close, symbol))
            })?;
            points.push(PricePoint::new(date, close));
        }
        Ok(PriceSeries::new(symbol.to_string(), points))
    }
}

use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::{FetchError, utils::parse_date};
use crate::models::{PricePoint, PriceSeries};

#[derive(Debug, Deserialize, Getters, new)]
pub struct MarketstackEodDto {
    open: Option<Decimal>,
    high: Option<Decimal>,
    low: Option<Decimal>,
    close: Decimal,
    volume: Option<Decimal>,
    adj_close: Option<Decimal>,
    symbol: String,
    exchange: Option<String>,
    date: String,
}

impl MarketstackEodDto {
    pub fn to_price_point(&self) -> Result<PricePoint, FetchError> {
        Ok(PricePoint::new(parse_date(&self.date)?, self.close))
    }
}

pub fn to_price_series(
    symbol: &str,
    history: &[MarketstackEodDto],
) -> Result<PriceSeries, FetchError> {
    let points = history
        .iter()
        .map(MarketstackEodDto::to_price_point)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(PriceSeries::new(symbol.to_string(), points))
}

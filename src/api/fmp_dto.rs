use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::{FetchError, utils::parse_date};
use crate::models::{PricePoint, PriceSeries};

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct FmpQuoteHistoryDto {
    symbol: String,
    date: String,
    price: Decimal,
    volume: i64,
}

impl FmpQuoteHistoryDto {
    pub fn to_price_point(&self) -> Result<PricePoint, FetchError> {
        Ok(PricePoint::new(parse_date(&self.date)?, self.price))
    }
}

pub fn to_price_series(
    symbol: &str,
    history: &[FmpQuoteHistoryDto],
) -> Result<PriceSeries, FetchError> {
    let points = history
        .iter()
        .map(FmpQuoteHistoryDto::to_price_point)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(PriceSeries::new(symbol.to_string(), points))
}

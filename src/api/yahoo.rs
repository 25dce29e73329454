use chrono::DateTime;
use rust_decimal::{Decimal, prelude::FromPrimitive};
use yahoo_finance_api as yahoo;

use super::FetchError;
use crate::models::{PricePoint, PriceSeries};

const INTERVAL: &str = "1d";
const RANGE: &str = "1y";

pub async fn get_quotes(symbol: &str) -> Result<Vec<yahoo::Quote>, FetchError> {
    let connector =
        yahoo::YahooConnector::new().map_err(|err| FetchError::Yahoo(err.to_string()))?;
    let response = connector
        .get_quote_range(symbol, INTERVAL, RANGE)
        .await
        .map_err(|err| FetchError::Yahoo(format!("{} ({})", err, symbol)))?;

    response
        .quotes()
        .map_err(|err| FetchError::Yahoo(format!("{} ({})", err, symbol)))
}

pub fn to_price_point(quote: &yahoo::Quote) -> Option<PricePoint> {
    let date = DateTime::from_timestamp(quote.timestamp as i64, 0)?.date_naive();
    let close = Decimal::from_f64(quote.close)?.round_dp(4);
    Some(PricePoint::new(date, close))
}

pub async fn get_daily_closes(symbol: &str) -> Result<PriceSeries, FetchError> {
    let quotes = get_quotes(symbol).await?;
    let points = quotes.iter().filter_map(to_price_point).collect();
    Ok(PriceSeries::new(symbol.to_string(), points))
}

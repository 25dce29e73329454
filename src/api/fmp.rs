use reqwest::Client;

use super::{
    FetchError,
    fmp_dto::{FmpQuoteHistoryDto, to_price_series},
    utils::{make_request, parse_response_array},
};
use crate::models::PriceSeries;

const BASE_URL: &str = "https://financialmodelingprep.com/stable";

pub async fn get_price_history(
    symbol: &str,
    from: &str,
    client: &Client,
    api_key: &str,
) -> Result<Vec<FmpQuoteHistoryDto>, FetchError> {
    let params = format!("symbol={}&from={}&apikey={}", symbol, from, api_key);
    let res = make_request(client, BASE_URL, "historical-price-eod/light", &params).await?;

    parse_response_array::<FmpQuoteHistoryDto>(
        res,
        &format!("No price history for symbol {}", symbol),
    )
}

pub async fn get_daily_closes(
    symbol: &str,
    from: &str,
    client: &Client,
    api_key: &str,
) -> Result<PriceSeries, FetchError> {
    let history = get_price_history(symbol, from, client, api_key).await?;
    to_price_series(symbol, &history)
}

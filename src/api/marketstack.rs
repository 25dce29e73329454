use reqwest::Client;

use super::{
    FetchError,
    marketstack_dto::{MarketstackEodDto, to_price_series},
    utils::{make_request, parse_response_array},
};
use crate::models::PriceSeries;

const BASE_URL: &str = "https://api.marketstack.com/v2";
// One year of trading days fits in a single page
const PAGE_LIMIT: u32 = 1000;

pub async fn get_eod_history(
    symbol: &str,
    from: &str,
    client: &Client,
    api_key: &str,
) -> Result<Vec<MarketstackEodDto>, FetchError> {
    let params = format!(
        "access_key={}&symbols={}&date_from={}&limit={}",
        api_key, symbol, from, PAGE_LIMIT
    );
    let res = make_request(client, BASE_URL, "eod", &params).await?;

    let data = res
        .get("data")
        .ok_or_else(|| FetchError::Parse(String::from("Failed to get 'data' in response")))?;

    parse_response_array::<MarketstackEodDto>(
        data.clone(),
        &format!("Failed to parse Marketstack history for {}", symbol),
    )
}

pub async fn get_daily_closes(
    symbol: &str,
    from: &str,
    client: &Client,
    api_key: &str,
) -> Result<PriceSeries, FetchError> {
    let history = get_eod_history(symbol, from, client, api_key).await?;
    to_price_series(symbol, &history)
}

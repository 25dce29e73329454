use chrono::NaiveDate;
use reqwest::Client;

use super::{
    FetchError,
    av_dto::AvTimeSeriesDailyDto,
    utils::{make_request, parse_response_object},
};
use crate::models::PriceSeries;

const BASE_URL: &str = "https://www.alphavantage.co";

pub async fn get_time_series_daily(
    symbol: &str,
    client: &Client,
    api_key: &str,
) -> Result<AvTimeSeriesDailyDto, FetchError> {
    let params = format!(
        "function=TIME_SERIES_DAILY&symbol={}&outputsize=full&apikey={}",
        symbol, api_key
    );
    let res = make_request(client, BASE_URL, "query", &params).await?;

    // Rate limits and unknown symbols come back as 200 with a message body
    if let Some(message) = res
        .get("Error Message")
        .or_else(|| res.get("Information"))
        .or_else(|| res.get("Note"))
        .and_then(|message| message.as_str())
    {
        return Err(FetchError::Parse(format!("Alpha Vantage ({}): {}", symbol, message)));
    }

    parse_response_object::<AvTimeSeriesDailyDto>(
        res,
        &format!("No results for symbol {}", symbol),
    )
}

pub async fn get_daily_closes(
    symbol: &str,
    from: NaiveDate,
    client: &Client,
    api_key: &str,
) -> Result<PriceSeries, FetchError> {
    get_time_series_daily(symbol, client, api_key)
        .await?
        .to_price_series(symbol, from)
}

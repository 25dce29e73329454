use chrono::{Local, NaiveDate, TimeDelta};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::FetchError;
use crate::models::PriceSeries;

/// Calendar days of history requested from every provider.
pub const HISTORY_DAYS: i64 = 365;

pub async fn make_request(
    client: &Client,
    base_url: &str,
    endpoint: &str,
    params: &str,
) -> Result<Value, FetchError> {
    let url = format!("{}/{}?{}", base_url, endpoint, params);
    let res = client.get(&url).send().await?;

    if !res.status().is_success() {
        return Err(FetchError::Status(res.status()));
    }

    let text = res.text().await?;
    let data = serde_json::from_str::<Value>(&text)?;

    Ok(data)
}

pub fn parse_response_array<T>(data: Value, error_msg: &str) -> Result<Vec<T>, FetchError>
where
    T: DeserializeOwned,
{
    match data {
        Value::Array(items) => {
            let total = items.len();
            let result: Vec<T> = items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect();

            if result.is_empty() {
                return Err(FetchError::Parse(error_msg.to_string()));
            }

            // A dropped row would shift the lookback window
            let dropped = total - result.len();
            if dropped > 0 {
                warn!(dropped, total, "malformed rows in response");
                return Err(FetchError::Parse(format!(
                    "{}: {} of {} rows could not be parsed",
                    error_msg, dropped, total
                )));
            }

            Ok(result)
        }
        _ => Err(FetchError::Parse(String::from(
            "Unexpected API response format: not an array",
        ))),
    }
}

pub fn parse_response_object<T>(data: Value, error_msg: &str) -> Result<T, FetchError>
where
    T: DeserializeOwned,
{
    match data {
        Value::Object(obj) => serde_json::from_value(Value::Object(obj))
            .map_err(|_| FetchError::Parse(error_msg.to_string())),
        _ => Err(FetchError::Parse(String::from(
            "Unexpected API response format: not an object",
        ))),
    }
}

pub fn history_start(today: NaiveDate) -> NaiveDate {
    today - TimeDelta::days(HISTORY_DAYS)
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses the date part of `2024-01-02` or `2024-01-02T00:00:00+0000`.
pub fn parse_date(field: &str) -> Result<NaiveDate, FetchError> {
    let date = field.get(..10).unwrap_or(field);
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| FetchError::Parse(format!("Failed to parse date '{}'", field)))
}

/// A provider that answers with no rows has no history for the symbol.
pub fn require_observations(symbol: &str, series: PriceSeries) -> Result<PriceSeries, FetchError> {
    if series.is_empty() {
        return Err(FetchError::NoData(symbol.to_string()));
    }
    Ok(series)
}

pub fn api_key(var: &'static str) -> Result<String, FetchError> {
    std::env::var(var).map_err(|_| FetchError::MissingApiKey(var))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use crate::{
        api::{
            FetchError,
            av_dto::AvTimeSeriesDailyDto,
            fmp_dto::{self, FmpQuoteHistoryDto},
            marketstack_dto::{self, MarketstackEodDto},
            utils::{
                history_start, parse_date, parse_response_array, parse_response_object,
                require_observations,
            },
        },
        models::{PricePoint, PriceSeries},
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn fmp_history_is_returned_oldest_first() {
        let body = json!([
            { "symbol": "AAPL", "date": "2025-01-03", "price": 243.36, "volume": 40244114 },
            { "symbol": "AAPL", "date": "2025-01-02", "price": 243.85, "volume": 55740731 }
        ]);
        let history = parse_response_array::<FmpQuoteHistoryDto>(body, "no data").unwrap();
        let series = fmp_dto::to_price_series("AAPL", &history).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(*series.points()[0].date(), date(2025, 1, 2));
        assert_eq!(series.closes(), vec![dec!(243.85), dec!(243.36)]);
    }

    #[test]
    fn empty_array_is_an_error() {
        let result = parse_response_array::<FmpQuoteHistoryDto>(json!([]), "No price history");

        assert!(matches!(result, Err(FetchError::Parse(msg)) if msg == "No price history"));
    }

    #[test]
    fn malformed_row_fails_the_whole_response() {
        let body = json!([
            { "symbol": "AAPL", "date": "2025-01-03", "price": 243.36, "volume": 40244114 },
            { "symbol": "AAPL", "date": "2025-01-02", "volume": 55740731 }
        ]);
        let result = parse_response_array::<FmpQuoteHistoryDto>(body, "No price history");

        assert!(
            matches!(result, Err(FetchError::Parse(msg)) if msg.contains("1 of 2 rows could not be parsed"))
        );
    }

    #[test]
    fn empty_series_is_no_data() {
        let result = require_observations("GONE", PriceSeries::empty(String::from("GONE")));
        assert!(matches!(result, Err(FetchError::NoData(symbol)) if symbol == "GONE"));

        let series = PriceSeries::new(
            String::from("AAPL"),
            vec![PricePoint::new(date(2025, 1, 2), dec!(243.85))],
        );
        assert_eq!(require_observations("AAPL", series).unwrap().len(), 1);
    }

    #[test]
    fn non_array_is_an_error() {
        let result = parse_response_array::<FmpQuoteHistoryDto>(json!({ "error": "x" }), "none");
        assert!(result.is_err());
    }

    #[test]
    fn alpha_vantage_series_is_filtered_to_window() {
        let body = json!({
            "Meta Data": { "2. Symbol": "IBM" },
            "Time Series (Daily)": {
                "2025-01-03": { "1. open": "220.0", "2. high": "223.0", "3. low": "219.0", "4. close": "222.65", "5. volume": "2000000" },
                "2025-01-02": { "1. open": "219.0", "2. high": "221.0", "3. low": "218.0", "4. close": "219.94", "5. volume": "1800000" },
                "2023-06-01": { "1. open": "130.0", "2. high": "131.0", "3. low": "129.0", "4. close": "130.50", "5. volume": "1500000" }
            }
        });
        let dto = parse_response_object::<AvTimeSeriesDailyDto>(body, "none").unwrap();
        let series = dto.to_price_series("IBM", date(2024, 1, 3)).unwrap();

        assert_eq!(series.closes(), vec![dec!(219.94), dec!(222.65)]);
        assert_eq!(series.symbol(), "IBM");
    }

    #[test]
    fn alpha_vantage_bad_close_is_reported() {
        let body = json!({
            "Time Series (Daily)": {
                "2025-01-02": { "1. open": "1", "2. high": "1", "3. low": "1", "4. close": "n/a", "5. volume": "1" }
            }
        });
        let dto = parse_response_object::<AvTimeSeriesDailyDto>(body, "none").unwrap();

        assert!(dto.to_price_series("IBM", date(2024, 1, 1)).is_err());
    }

    #[test]
    fn marketstack_eod_parses_timestamps() {
        let body = json!([
            {
                "open": 129.8, "high": 133.04, "low": 129.47, "close": 132.995,
                "volume": 106686703.0, "adj_close": null,
                "symbol": "AAPL", "exchange": "XNAS", "date": "2021-04-09T00:00:00+0000"
            },
            {
                "open": null, "high": null, "low": null, "close": 130.36,
                "volume": null, "adj_close": 130.36,
                "symbol": "AAPL", "exchange": null, "date": "2021-04-08T00:00:00+0000"
            }
        ]);
        let history = parse_response_array::<MarketstackEodDto>(body, "none").unwrap();
        let series = marketstack_dto::to_price_series("AAPL", &history).unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(*series.points()[0].date(), date(2021, 4, 8));
        assert_eq!(series.closes(), vec![dec!(130.36), dec!(132.995)]);
    }

    #[test]
    fn dates_with_and_without_time() {
        assert_eq!(parse_date("2024-02-29").unwrap(), date(2024, 2, 29));
        assert_eq!(
            parse_date("2024-02-29T00:00:00+0000").unwrap(),
            date(2024, 2, 29)
        );
        assert!(parse_date("29/02/2024").is_err());
    }

    #[test]
    fn history_window_is_one_year() {
        assert_eq!(history_start(date(2025, 3, 1)), date(2024, 3, 1));
    }

    #[test]
    fn missing_key_message_names_variable() {
        let err = FetchError::MissingApiKey("FMP_API_KEY");
        assert_eq!(
            err.to_string(),
            "Missing API key: set FMP_API_KEY in the environment"
        );
    }
}

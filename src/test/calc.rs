#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeDelta};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::{
        app::calc::{compute_change, compute_changes},
        models::{Lookback, PricePoint, PriceSeries},
    };

    fn series(symbol: &str, closes: &[Decimal]) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let points = closes
            .iter()
            .enumerate()
            .map(|(i, close)| PricePoint::new(start + TimeDelta::days(i as i64), *close))
            .collect();
        PriceSeries::new(symbol.to_string(), points)
    }

    fn lookback(days: usize) -> Lookback {
        Lookback::new(days).unwrap()
    }

    #[test]
    fn change_over_trailing_window() {
        let prices = series("AAPL", &[dec!(10), dec!(12), dec!(9), dec!(15)]);
        let computation = compute_change(&prices, lookback(3));
        let result = computation.result();

        assert_eq!(result.symbol(), "AAPL");
        assert_eq!(*result.latest_price(), Some(dec!(15)));
        assert_eq!(*result.change_absolute(), Some(dec!(3)));
        assert_eq!(*result.change_percent(), Some(dec!(25)));

        let window: Vec<Decimal> = computation.window().iter().map(|p| *p.close()).collect();
        assert_eq!(window, vec![dec!(12), dec!(9), dec!(15)]);
    }

    #[test]
    fn insufficient_history() {
        let prices = series("MSFT", &[dec!(5)]);
        let computation = compute_change(&prices, lookback(2));

        assert!(computation.result().is_insufficient());
        assert_eq!(*computation.result().latest_price(), None);
        assert_eq!(*computation.result().change_absolute(), None);
        assert_eq!(*computation.result().change_percent(), None);
        assert!(computation.window().is_empty());
    }

    #[test]
    fn empty_series_is_insufficient() {
        let computation = compute_change(&PriceSeries::empty(String::from("GOOGL")), lookback(1));

        assert!(computation.result().is_insufficient());
        assert!(computation.window().is_empty());
    }

    #[test]
    fn window_spanning_whole_series() {
        let prices = series("AAPL", &[dec!(8), dec!(9), dec!(10)]);
        let computation = compute_change(&prices, lookback(3));

        assert_eq!(*computation.result().change_absolute(), Some(dec!(2)));
        assert_eq!(*computation.result().change_percent(), Some(dec!(25)));
        assert_eq!(computation.window().len(), 3);
    }

    #[test]
    fn single_day_lookback_has_no_change() {
        let prices = series("AAPL", &[dec!(8), dec!(9), dec!(10)]);
        let computation = compute_change(&prices, lookback(1));

        assert_eq!(*computation.result().latest_price(), Some(dec!(10)));
        assert_eq!(*computation.result().change_absolute(), Some(Decimal::ZERO));
        assert_eq!(*computation.result().change_percent(), Some(Decimal::ZERO));
        assert_eq!(computation.window().len(), 1);
    }

    #[test]
    fn zero_previous_price_yields_zero_percent() {
        let prices = series("PENNY", &[dec!(0), dec!(1.5)]);
        let computation = compute_change(&prices, lookback(2));

        assert_eq!(*computation.result().change_absolute(), Some(dec!(1.5)));
        assert_eq!(*computation.result().change_percent(), Some(Decimal::ZERO));
    }

    #[test]
    fn percent_matches_formula() {
        let closes = [dec!(181.91), dec!(184.25), dec!(179.80), dec!(183.10), dec!(185.64)];
        let prices = series("AAPL", &closes);

        for days in 1..=closes.len() {
            let computation = compute_change(&prices, lookback(days));
            let latest = closes[closes.len() - 1];
            let previous = closes[closes.len() - days];
            let expected = (latest - previous) / previous * dec!(100);

            assert_eq!(*computation.result().change_percent(), Some(expected));
        }
    }

    #[test]
    fn falling_prices_give_negative_change() {
        let prices = series("AMC", &[dec!(20), dec!(15)]);
        let computation = compute_change(&prices, lookback(2));

        assert_eq!(*computation.result().change_absolute(), Some(dec!(-5)));
        assert_eq!(*computation.result().change_percent(), Some(dec!(-25)));
    }

    #[test]
    fn batch_results_are_independent() {
        let long = series("AAPL", &[dec!(10), dec!(12), dec!(9), dec!(15)]);
        let short = series("NEW", &[dec!(5)]);

        let forward = compute_changes(&[long.clone(), short.clone()], lookback(3));
        let reversed = compute_changes(&[short, long], lookback(3));

        assert_eq!(forward.len(), 2);
        assert_eq!(*forward[0].result().change_percent(), Some(dec!(25)));
        assert!(forward[1].result().is_insufficient());
        assert_eq!(forward[0], reversed[1]);
        assert_eq!(forward[1], reversed[0]);
    }
}

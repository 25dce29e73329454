#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use crate::{
        app::ui::{line_points, percent_bars, surface_status},
        models::{ChangeResult, DashboardReport, Lookback, PricePoint, SymbolReport},
    };

    fn point(day: u32, close: rust_decimal::Decimal) -> PricePoint {
        PricePoint::new(NaiveDate::from_ymd_opt(2024, 5, day).unwrap(), close)
    }

    fn report() -> DashboardReport {
        DashboardReport::new(
            Lookback::new(2).unwrap(),
            vec![
                SymbolReport::new(
                    ChangeResult::new(
                        String::from("AAPL"),
                        Some(dec!(15)),
                        Some(dec!(3)),
                        Some(dec!(25)),
                    ),
                    vec![point(1, dec!(12)), point(2, dec!(15))],
                ),
                SymbolReport::new(ChangeResult::insufficient(String::from("NEW")), Vec::new()),
                SymbolReport::new(
                    ChangeResult::new(
                        String::from("AMC"),
                        Some(dec!(4.5)),
                        Some(dec!(-0.5)),
                        Some(dec!(-10)),
                    ),
                    vec![point(1, dec!(5)), point(2, dec!(4.5))],
                ),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn line_points_skip_empty_windows() {
        let report = report();
        let series = report.chart_series();
        let points = line_points(&series);

        assert_eq!(series.len(), 2);
        assert_eq!(series[1].0, "AMC");
        assert_eq!(points[0].len(), 2);
        assert_eq!(points[0][1].1, 15.0);
        assert_eq!(points[0][1].0 - points[0][0].0, 1.0);
    }

    #[test]
    fn bars_only_for_computed_changes() {
        let bars = percent_bars(&report());
        assert_eq!(bars.len(), 2);
    }

    #[test]
    fn status_lists_generated_surfaces() {
        assert_eq!(
            surface_status(&report(), true, true, true),
            vec![
                "Table generated successfully.",
                "Line chart generated successfully.",
                "Bar chart generated successfully.",
            ]
        );
        assert_eq!(
            surface_status(&report(), false, true, false),
            vec!["Line chart generated successfully."]
        );
    }

    #[test]
    fn status_is_empty_without_data() {
        let empty = DashboardReport::new(Lookback::DEFAULT, Vec::new(), Vec::new());
        assert!(surface_status(&empty, true, true, true).is_empty());
        assert!(surface_status(&report(), false, false, false).is_empty());
    }

    #[test]
    fn change_column_names_lookback() {
        assert_eq!(report().change_column_title(), "Change over 2 days");
    }
}

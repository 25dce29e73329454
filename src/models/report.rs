use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;

use super::{ChangeResult, Lookback, LookbackInput, PricePoint, parse_lookback, parse_symbols};

#[derive(Clone, Debug, Getters, PartialEq, new)]
pub struct DashboardRequest {
    symbols: Vec<String>,
    lookback: Lookback,
}

impl DashboardRequest {
    /// Builds a request from raw text inputs. The second value is the
    /// validation notice when the lookback fell back to the default.
    pub fn from_inputs(symbols: &str, lookback: &str) -> (Self, Option<String>) {
        let LookbackInput { lookback, notice } = parse_lookback(lookback);
        (Self::new(parse_symbols(symbols), lookback), notice)
    }
}

#[derive(Clone, Debug, Getters, PartialEq, Serialize, new)]
pub struct SymbolReport {
    result: ChangeResult,
    window: Vec<PricePoint>,
}

#[derive(Clone, Debug, Getters, PartialEq, Serialize, new)]
pub struct DashboardReport {
    lookback: Lookback,
    rows: Vec<SymbolReport>,
    notices: Vec<String>,
}

impl DashboardReport {
    pub fn prepend_notice(&mut self, notice: String) {
        self.notices.insert(0, notice);
    }

    pub fn has_table_data(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Symbols with a non-empty trailing window, in input order.
    pub fn chart_series(&self) -> Vec<(&str, &[PricePoint])> {
        self.rows
            .iter()
            .filter(|row| !row.window.is_empty())
            .map(|row| (row.result.symbol().as_str(), row.window.as_slice()))
            .collect()
    }

    pub fn change_column_title(&self) -> String {
        format!("Change over {} days", self.lookback)
    }
}

use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PricePoint;

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct ChangeResult {
    symbol: String,
    latest_price: Option<Decimal>,
    change_absolute: Option<Decimal>,
    change_percent: Option<Decimal>,
}

impl ChangeResult {
    pub fn insufficient(symbol: String) -> Self {
        Self {
            symbol,
            latest_price: None,
            change_absolute: None,
            change_percent: None,
        }
    }

    pub fn is_insufficient(&self) -> bool {
        self.latest_price.is_none()
    }
}

/// A change result together with the trailing window it was computed over.
#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct ChangeComputation {
    result: ChangeResult,
    window: Vec<PricePoint>,
}

impl ChangeComputation {
    pub fn into_parts(self) -> (ChangeResult, Vec<PricePoint>) {
        (self.result, self.window)
    }
}

use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct PricePoint {
    date: NaiveDate,
    close: Decimal,
}

use derive_getters::Getters;
use rust_decimal::Decimal;

use super::PricePoint;

/// Daily closing prices for one symbol, oldest first.
#[derive(Clone, Debug, Getters, PartialEq)]
pub struct PriceSeries {
    symbol: String,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(symbol: String, mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|point| *point.date());
        Self { symbol, points }
    }

    pub fn empty(symbol: String) -> Self {
        Self {
            symbol,
            points: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn latest(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// The last `n` observations, or the whole series if it is shorter.
    pub fn trailing(&self, n: usize) -> &[PricePoint] {
        let start = self.points.len().saturating_sub(n);
        &self.points[start..]
    }

    pub fn closes(&self) -> Vec<Decimal> {
        self.points.iter().map(|point| *point.close()).collect()
    }
}

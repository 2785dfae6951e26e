pub use super::value_objects::{Price, Timestamp};
use serde::{Deserialize, Serialize};

/// Domain entity - one sample of the price history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: Timestamp,
    pub price: Price,
}

impl PricePoint {
    pub fn new(timestamp: Timestamp, price: Price) -> Self {
        Self { timestamp, price }
    }
}

/// Domain entity - ordered price history, kept only until the chart is drawn
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Keeps the upstream order; the API already returns ascending timestamps.
    pub fn new(points: Vec<PricePoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price.value()).collect()
    }
}

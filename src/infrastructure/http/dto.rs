use crate::domain::errors::{FetchError, FetchResult};
use crate::domain::market_data::{
    AssetId, ExchangeRate, FiatCurrency, Price, PricePoint, PriceSeries, Timestamp,
};
use serde::Deserialize;
use serde_json::Value;

/// Pulls `{ <asset>: { <currency>: <number> } }` out of a simple/price body.
///
/// A missing field, a non-number and zero are all structural errors, as is
/// a negative or non-finite price.
pub fn parse_spot_rate(body: &Value, asset: &AssetId, currency: FiatCurrency) -> FetchResult<ExchangeRate> {
    let raw = body
        .get(asset.value())
        .and_then(|quotes| quotes.get(currency.api_code()))
        .and_then(Value::as_f64)
        .ok_or_else(|| {
            FetchError::Structural(format!("Missing {}.{} in quote response", asset, currency.api_code()))
        })?;

    if raw == 0.0 {
        return Err(FetchError::Structural(format!("Zero {}.{} in quote response", asset, currency.api_code())));
    }

    ExchangeRate::new(raw).map_err(FetchError::Structural)
}

/// Body of the market_chart endpoint. Each sample is read by position, so
/// entries with trailing extra elements still parse.
#[derive(Debug, Deserialize)]
pub struct MarketChartResponse {
    pub prices: Vec<Vec<Value>>,
}

impl MarketChartResponse {
    pub fn to_domain_series(&self) -> FetchResult<PriceSeries> {
        let mut points = Vec::with_capacity(self.prices.len());
        for (i, sample) in self.prices.iter().enumerate() {
            let number_at = |pos: usize| sample.get(pos).and_then(Value::as_f64);
            let (Some(ts), Some(price)) = (number_at(0), number_at(1)) else {
                return Err(FetchError::Structural(format!("Malformed price point at index {}", i)));
            };
            if !ts.is_finite() || !price.is_finite() {
                return Err(FetchError::Structural(format!("Non-finite price point at index {}", i)));
            }
            points.push(PricePoint::new(Timestamp::from_millis(ts as i64), Price::new(price)));
        }
        Ok(PriceSeries::new(points))
    }
}

/// Reads `{ prices: [[<epoch-ms>, <number>], ...] }`; any other shape is structural.
pub fn parse_price_history(body: Value) -> FetchResult<PriceSeries> {
    let response: MarketChartResponse = serde_json::from_value(body)
        .map_err(|e| FetchError::Structural(format!("Unexpected market_chart shape: {}", e)))?;
    response.to_domain_series()
}

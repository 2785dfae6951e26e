use crate::domain::errors::FetchResult;
use crate::domain::market_data::{ExchangeRate, PriceSeries};

/// Source of the current spot rate
#[allow(async_fn_in_trait)]
pub trait SpotRateRepository {
    async fn fetch_spot_rate(&self) -> FetchResult<ExchangeRate>;
}

/// Source of the recent price history
#[allow(async_fn_in_trait)]
pub trait PriceHistoryRepository {
    async fn fetch_price_history(&self) -> FetchResult<PriceSeries>;
}

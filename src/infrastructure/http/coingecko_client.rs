use crate::config::WidgetConfig;
use crate::domain::errors::{FetchError, FetchResult};
use crate::domain::logging::{LogComponent, LogLevel, get_logger};
use crate::domain::market_data::{
    AssetId, ExchangeRate, FiatCurrency, HistoryWindow, PriceHistoryRepository, PriceSeries,
    SpotRateRepository,
};
use crate::infrastructure::http::dto::{parse_price_history, parse_spot_rate};
use gloo_net::http::Request;
use serde_json::Value;

/// REST client for the CoinGecko public API
#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    base_url: String,
    asset: AssetId,
    currency: FiatCurrency,
    window: HistoryWindow,
}

impl CoinGeckoClient {
    pub fn new(base_url: &str, asset: AssetId, currency: FiatCurrency, window: HistoryWindow) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            asset,
            currency,
            window,
        }
    }

    pub fn from_config(config: &WidgetConfig) -> Self {
        Self::new(config.base_url(), config.asset.clone(), config.currency, config.history_days)
    }

    pub fn spot_price_url(&self) -> String {
        format!(
            "{}/simple/price?ids={}&vs_currencies={}",
            self.base_url,
            self.asset.value(),
            self.currency.api_code()
        )
    }

    pub fn market_chart_url(&self) -> String {
        format!(
            "{}/coins/{}/market_chart?vs_currency={}&days={}",
            self.base_url,
            self.asset.value(),
            self.currency.api_code(),
            self.window.days()
        )
    }

    /// GET + JSON decode, returning the HTTP status with the body.
    ///
    /// A non-2xx status is not an error by itself: rate-limit and error
    /// replies still carry JSON, and the caller decides whether it holds the
    /// expected data. Only a failed request or an undecodable body is a
    /// transport error.
    async fn fetch_json(&self, url: &str) -> FetchResult<(u16, Value)> {
        crate::log_debug!(LogComponent::Infrastructure("CoinGecko"), "📡 GET {url}");

        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(format!("Failed to send request: {e:?}")))?;
        let status = response.status();

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::Transport(format!("Failed to parse JSON (HTTP {status}): {e:?}")))?;
        Ok((status, body))
    }

    /// The single log line for a failed fetch
    fn log_failure(&self, what: &str, url: &str, status: Option<u16>, error: &FetchError) {
        let level = if error.is_structural() { LogLevel::Warn } else { LogLevel::Error };
        get_logger().emit(
            level,
            LogComponent::Infrastructure("CoinGecko"),
            &format!("❌ {what} failed ({})", error.kind()),
            Some(&failure_metadata(url, status, error)),
        );
    }
}

/// `url=... status=... error=...`; the status is absent when no response arrived
pub fn failure_metadata(url: &str, status: Option<u16>, error: &FetchError) -> String {
    match status {
        Some(status) => format!("url={url} status={status} error={error}"),
        None => format!("url={url} error={error}"),
    }
}

impl SpotRateRepository for CoinGeckoClient {
    async fn fetch_spot_rate(&self) -> FetchResult<ExchangeRate> {
        let url = self.spot_price_url();
        let (status, result) = match self.fetch_json(&url).await {
            Ok((status, body)) => (Some(status), parse_spot_rate(&body, &self.asset, self.currency)),
            Err(e) => (None, Err(e)),
        };
        if let Err(e) = &result {
            self.log_failure("Spot price", &url, status, e);
        }
        result
    }
}

impl PriceHistoryRepository for CoinGeckoClient {
    async fn fetch_price_history(&self) -> FetchResult<PriceSeries> {
        let url = self.market_chart_url();
        let (status, result) = match self.fetch_json(&url).await {
            Ok((status, body)) => (Some(status), parse_price_history(body)),
            Err(e) => (None, Err(e)),
        };
        match &result {
            Ok(series) => get_logger().info(
                LogComponent::Infrastructure("CoinGecko"),
                &format!("✅ Loaded {} history points", series.len()),
            ),
            Err(e) => self.log_failure("Price history", &url, status, e),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> CoinGeckoClient {
        CoinGeckoClient::new(
            "https://api.coingecko.com/api/v3/",
            AssetId::from("tether"),
            FiatCurrency::Brl,
            HistoryWindow::from(7),
        )
    }

    #[test]
    fn test_spot_price_url() {
        assert_eq!(
            client().spot_price_url(),
            "https://api.coingecko.com/api/v3/simple/price?ids=tether&vs_currencies=brl"
        );
    }

    #[test]
    fn test_market_chart_url() {
        assert_eq!(
            client().market_chart_url(),
            "https://api.coingecko.com/api/v3/coins/tether/market_chart?vs_currency=brl&days=7"
        );
    }

    #[test]
    fn rate_limited_reply_is_structural() {
        let body = serde_json::json!({ "status": { "error_code": 429, "error_message": "rate limited" } });
        let err = parse_spot_rate(&body, &AssetId::from("tether"), FiatCurrency::Brl).unwrap_err();
        assert!(err.is_structural());
        assert_eq!(
            crate::domain::page::QuoteDisplay::for_error(&err, "01/03/2024").price_label,
            crate::domain::page::PRICE_LOAD_ERROR
        );
    }

    #[test]
    fn failure_metadata_carries_status() {
        let err = FetchError::Structural("Missing tether.brl".to_string());
        assert_eq!(
            failure_metadata("u", Some(429), &err),
            "url=u status=429 error=Structural Error: Missing tether.brl"
        );
        let err = FetchError::Transport("offline".to_string());
        assert_eq!(failure_metadata("u", None, &err), "url=u error=Transport Error: offline");
    }
}

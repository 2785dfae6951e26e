use super::PageView;
use super::in_flight::InFlight;
use crate::domain::{
    converter::ConverterBinder,
    errors::FetchResult,
    logging::{LogComponent, get_logger},
    market_data::{ExchangeRate, FiatCurrency, SharedRate, SpotRateRepository},
    page::QuoteDisplay,
};

/// Fetches the spot rate and projects it onto the page.
///
/// On success the rate is stored, the three page surfaces are rewritten and
/// the converter is activated. On failure the prior rate stays as it was and
/// only the page text changes.
pub struct RateFetcher<R, V> {
    repository: R,
    view: V,
    rate: SharedRate,
    converter: ConverterBinder,
    currency: FiatCurrency,
    date_text: String,
    in_flight: InFlight,
}

impl<R: SpotRateRepository, V: PageView> RateFetcher<R, V> {
    pub fn new(
        repository: R,
        view: V,
        rate: SharedRate,
        converter: ConverterBinder,
        currency: FiatCurrency,
        date_text: String,
    ) -> Self {
        Self {
            repository,
            view,
            rate,
            converter,
            currency,
            date_text,
            in_flight: InFlight::new(),
        }
    }

    pub async fn refresh(&self) -> FetchResult<ExchangeRate> {
        match self.repository.fetch_spot_rate().await {
            Ok(rate) => {
                self.rate.set(rate);
                self.view.show_quote(&QuoteDisplay::for_rate(rate, self.currency, &self.date_text));
                self.converter.activate();
                get_logger().info(
                    LogComponent::Application("RateFetcher"),
                    &format!("💰 Spot rate updated: {}", rate),
                );
                Ok(rate)
            }
            Err(error) => {
                // Logged once, with url and status, by the repository.
                self.view.show_quote(&QuoteDisplay::for_error(&error, &self.date_text));
                Err(error)
            }
        }
    }

    /// Like [`refresh`](Self::refresh) but skipped while a previous call is
    /// still pending. `None` means the call was skipped.
    pub async fn refresh_if_idle(&self) -> Option<FetchResult<ExchangeRate>> {
        let Some(_guard) = self.in_flight.try_begin() else {
            get_logger().debug(
                LogComponent::Application("RateFetcher"),
                "Previous quote request still pending, skipping tick",
            );
            return None;
        };
        Some(self.refresh().await)
    }

    pub fn current_rate(&self) -> Option<ExchangeRate> {
        self.rate.get()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_busy()
    }
}

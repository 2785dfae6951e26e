use super::PageView;
use super::history_fetcher::{HistoryFetcher, SharedChartSlot};
use super::rate_fetcher::RateFetcher;
use super::scheduler::schedule_rate_refresh;
use crate::domain::{
    chart::ChartBackend,
    converter::ConverterBinder,
    errors::{FetchResult, HistoryError},
    logging::{LogComponent, get_logger},
    market_data::{ExchangeRate, PriceHistoryRepository, SharedRate, SpotRateRepository},
};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

/// Outcome of the first load after the page opens
#[derive(Debug)]
pub struct InitialLoad {
    /// `None` if the rate fetch was skipped as already in flight
    pub rate: Option<FetchResult<ExchangeRate>>,
    pub history: Result<usize, HistoryError>,
}

/// Wires the fetchers, the converter and the refresh timer together.
pub struct WidgetCoordinator<R, H, B: ChartBackend, V> {
    rate: SharedRate,
    converter: ConverterBinder,
    rate_fetcher: Rc<RateFetcher<R, V>>,
    history_fetcher: Rc<HistoryFetcher<H, B, V>>,
    refresh_interval_ms: u32,
}

impl<R, H, B, V> WidgetCoordinator<R, H, B, V>
where
    R: SpotRateRepository + 'static,
    H: PriceHistoryRepository + 'static,
    B: ChartBackend + 'static,
    V: PageView + 'static,
{
    pub fn new(
        rate: SharedRate,
        converter: ConverterBinder,
        rate_fetcher: RateFetcher<R, V>,
        history_fetcher: HistoryFetcher<H, B, V>,
        refresh_interval_ms: u32,
    ) -> Self {
        get_logger().info(
            LogComponent::Application("WidgetCoordinator"),
            "Creating widget coordinator",
        );
        Self {
            rate,
            converter,
            rate_fetcher: Rc::new(rate_fetcher),
            history_fetcher: Rc::new(history_fetcher),
            refresh_interval_ms,
        }
    }

    /// Issues both fetches back to back; they complete in any order.
    pub async fn load_initial(&self) -> InitialLoad {
        let (rate, history) = futures::join!(
            self.rate_fetcher.refresh_if_idle(),
            self.history_fetcher.refresh()
        );
        InitialLoad { rate, history }
    }

    /// Starts the initial load and the periodic rate refresh.
    pub fn start(self: Rc<Self>) {
        let this = self.clone();
        spawn_local(async move {
            let outcome = this.load_initial().await;
            get_logger().info(
                LogComponent::Application("WidgetCoordinator"),
                &format!(
                    "Initial load finished (rate ok: {}, chart ok: {})",
                    matches!(outcome.rate, Some(Ok(_))),
                    outcome.history.is_ok()
                ),
            );
        });
        schedule_rate_refresh(self.rate_fetcher.clone(), self.refresh_interval_ms);
    }

    pub fn rate(&self) -> &SharedRate {
        &self.rate
    }

    pub fn converter(&self) -> &ConverterBinder {
        &self.converter
    }

    pub fn chart_slot(&self) -> SharedChartSlot<B> {
        self.history_fetcher.slot()
    }
}

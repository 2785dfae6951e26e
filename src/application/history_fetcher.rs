use super::PageView;
use crate::domain::{
    chart::{ChartBackend, ChartSeries, ChartSlot, LineChartConfig},
    errors::{HistoryError, RenderResult},
    logging::{LogComponent, get_logger},
    market_data::{FiatCurrency, PriceHistoryRepository, PriceSeries},
    page::CHART_LOAD_ERROR,
};
use crate::time_utils::ZoneOffset;
use std::cell::RefCell;
use std::rc::Rc;

pub type SharedChartSlot<B> = Rc<RefCell<ChartSlot<<B as ChartBackend>::Instance>>>;

/// Fetches the price history and redraws the chart from scratch.
pub struct HistoryFetcher<H, B: ChartBackend, V> {
    repository: H,
    backend: B,
    slot: SharedChartSlot<B>,
    zone: Rc<dyn ZoneOffset>,
    currency: FiatCurrency,
    view: V,
}

impl<H: PriceHistoryRepository, B: ChartBackend, V: PageView> HistoryFetcher<H, B, V> {
    pub fn new(repository: H, backend: B, zone: Rc<dyn ZoneOffset>, currency: FiatCurrency, view: V) -> Self {
        Self {
            repository,
            backend,
            slot: Rc::new(RefCell::new(ChartSlot::new())),
            zone,
            currency,
            view,
        }
    }

    /// Handle to the chart slot, shared with the pointer/tooltip handlers
    pub fn slot(&self) -> SharedChartSlot<B> {
        self.slot.clone()
    }

    /// Fetch and draw. Failures are shown in the chart status line;
    /// the chart on screen, if any, is left alone.
    pub async fn refresh(&self) -> Result<usize, HistoryError> {
        let outcome = self.load_and_render().await;
        match &outcome {
            Ok(points) => {
                self.view.show_chart_status(None);
                get_logger().info(
                    LogComponent::Application("HistoryFetcher"),
                    &format!("📈 Chart rendered with {} points", points),
                );
            }
            Err(error) => {
                self.view.show_chart_status(Some(CHART_LOAD_ERROR));
                // Fetch failures were already logged by the repository.
                if let HistoryError::Render(render) = error {
                    get_logger().error(
                        LogComponent::Application("HistoryFetcher"),
                        &format!("Failed to draw chart: {}", render),
                    );
                }
            }
        }
        outcome
    }

    async fn load_and_render(&self) -> Result<usize, HistoryError> {
        let series = self.repository.fetch_price_history().await?;
        Ok(self.render_series(&series)?)
    }

    /// Builds the chart config from `series` and swaps it into the slot.
    pub fn render_series(&self, series: &PriceSeries) -> RenderResult<usize> {
        let config = self.build_config(series);
        let mut slot = self.slot.borrow_mut();
        slot.render(&self.backend, &config)?;
        Ok(config.point_count())
    }

    pub fn build_config(&self, series: &PriceSeries) -> LineChartConfig {
        let chart_series = ChartSeries::from_price_series(series, self.zone.as_ref());
        LineChartConfig::price_history(chart_series, self.currency)
    }
}

use super::value_objects::{ChartSeries, LineChartConfig};
use crate::domain::errors::RenderResult;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::PriceSeries;
use crate::time_utils::{ZoneOffset, format_day_month};

impl ChartSeries {
    /// Labels are the local `DD/MM` of each sample, values its price.
    pub fn from_price_series(series: &PriceSeries, zone: &(impl ZoneOffset + ?Sized)) -> Self {
        let labels = series
            .points()
            .iter()
            .map(|p| format_day_month(p.timestamp.value(), zone))
            .collect();
        Self { labels, values: series.values() }
    }
}

/// A drawn chart. Destroying it releases whatever the backend holds.
pub trait ChartInstance {
    fn destroy(self);
}

/// Charting collaborator: turns a config into a live chart.
pub trait ChartBackend {
    type Instance: ChartInstance;

    fn construct(&self, config: &LineChartConfig) -> RenderResult<Self::Instance>;
}

/// Holder of the single live chart.
///
/// Any existing instance is destroyed before the backend is asked for a new
/// one, so two instances never coexist.
#[derive(Debug)]
pub struct ChartSlot<I: ChartInstance> {
    current: Option<I>,
    renders: u64,
}

impl<I: ChartInstance> Default for ChartSlot<I> {
    fn default() -> Self {
        Self { current: None, renders: 0 }
    }
}

impl<I: ChartInstance> ChartSlot<I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render<B>(&mut self, backend: &B, config: &LineChartConfig) -> RenderResult<&I>
    where
        B: ChartBackend<Instance = I>,
    {
        if let Some(previous) = self.current.take() {
            get_logger().debug(
                LogComponent::Domain("ChartSlot"),
                "Destroying previous chart instance",
            );
            previous.destroy();
        }

        let instance = backend.construct(config)?;
        self.renders += 1;
        get_logger().debug(
            LogComponent::Domain("ChartSlot"),
            &format!("Chart #{} constructed with {} points", self.renders, config.point_count()),
        );
        Ok(self.current.insert(instance))
    }

    pub fn current(&self) -> Option<&I> {
        self.current.as_ref()
    }

    pub fn is_live(&self) -> bool {
        self.current.is_some()
    }

    /// Number of charts constructed over the slot's lifetime
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            previous.destroy();
        }
    }
}

//! Fakes shared by the host-side tests.
#![allow(dead_code)]

use dolar_hoje_wasm::application::PageView;
use dolar_hoje_wasm::domain::{
    chart::{ChartBackend, ChartInstance, LineChartConfig},
    errors::{FetchError, FetchResult, RenderError, RenderResult},
    market_data::{
        ExchangeRate, Price, PriceHistoryRepository, PricePoint, PriceSeries, SpotRateRepository, Timestamp,
    },
    page::QuoteDisplay,
};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

pub const DAY_MS: i64 = 86_400_000;
/// 2024-03-01T00:00:00Z
pub const MARCH_1_UTC: i64 = 1_709_251_200_000;

pub fn rate(value: f64) -> ExchangeRate {
    ExchangeRate::new(value).unwrap()
}

pub fn series(samples: &[(i64, f64)]) -> PriceSeries {
    PriceSeries::new(
        samples
            .iter()
            .map(|&(ts, price)| PricePoint::new(Timestamp::from_millis(ts), Price::new(price)))
            .collect(),
    )
}

/// Records everything written to the page
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    pub quotes: Rc<RefCell<Vec<QuoteDisplay>>>,
    pub statuses: Rc<RefCell<Vec<Option<String>>>>,
}

impl RecordingView {
    pub fn last_quote(&self) -> Option<QuoteDisplay> {
        self.quotes.borrow().last().cloned()
    }

    pub fn last_status(&self) -> Option<Option<String>> {
        self.statuses.borrow().last().cloned()
    }
}

impl PageView for RecordingView {
    fn show_quote(&self, display: &QuoteDisplay) {
        self.quotes.borrow_mut().push(display.clone());
    }

    fn show_chart_status(&self, status: Option<&str>) {
        self.statuses.borrow_mut().push(status.map(str::to_string));
    }
}

/// Spot source answering from a queue of scripted results
#[derive(Debug, Clone, Default)]
pub struct ScriptedSpot {
    pub responses: Rc<RefCell<VecDeque<FetchResult<ExchangeRate>>>>,
    pub calls: Rc<Cell<usize>>,
}

impl ScriptedSpot {
    pub fn with(responses: Vec<FetchResult<ExchangeRate>>) -> Self {
        Self {
            responses: Rc::new(RefCell::new(responses.into())),
            calls: Rc::new(Cell::new(0)),
        }
    }

    pub fn push(&self, response: FetchResult<ExchangeRate>) {
        self.responses.borrow_mut().push_back(response);
    }
}

impl SpotRateRepository for ScriptedSpot {
    async fn fetch_spot_rate(&self) -> FetchResult<ExchangeRate> {
        self.calls.set(self.calls.get() + 1);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Transport("no scripted response".to_string())))
    }
}

/// History source answering from a queue of scripted results
#[derive(Debug, Clone, Default)]
pub struct ScriptedHistory {
    pub responses: Rc<RefCell<VecDeque<FetchResult<PriceSeries>>>>,
}

impl ScriptedHistory {
    pub fn with(responses: Vec<FetchResult<PriceSeries>>) -> Self {
        Self { responses: Rc::new(RefCell::new(responses.into())) }
    }
}

impl PriceHistoryRepository for ScriptedHistory {
    async fn fetch_price_history(&self) -> FetchResult<PriceSeries> {
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Transport("no scripted response".to_string())))
    }
}

/// Chart backend that only counts instances
#[derive(Debug, Clone, Default)]
pub struct CountingBackend {
    pub live: Rc<Cell<usize>>,
    pub constructed: Rc<Cell<usize>>,
    pub fail: Rc<Cell<bool>>,
}

#[derive(Debug)]
pub struct FakeChart {
    pub config: LineChartConfig,
    live: Rc<Cell<usize>>,
}

impl ChartInstance for FakeChart {
    fn destroy(self) {
        self.live.set(self.live.get() - 1);
    }
}

impl ChartBackend for CountingBackend {
    type Instance = FakeChart;

    fn construct(&self, config: &LineChartConfig) -> RenderResult<FakeChart> {
        if self.fail.get() {
            return Err(RenderError::Canvas("backend refused".to_string()));
        }
        self.live.set(self.live.get() + 1);
        self.constructed.set(self.constructed.get() + 1);
        Ok(FakeChart { config: config.clone(), live: self.live.clone() })
    }
}

mod common;

use common::{CountingBackend, RecordingView, ScriptedHistory, ScriptedSpot};
use dolar_hoje_wasm::application::{HistoryFetcher, RateFetcher};
use dolar_hoje_wasm::domain::{
    converter::ConverterBinder,
    errors::FetchError,
    logging::{LogEntry, LogLevel, Logger, init_logger, set_min_level},
    market_data::{FiatCurrency, SharedRate},
};
use dolar_hoje_wasm::time_utils::FixedZone;
use futures::executor::block_on;
use std::rc::Rc;
use std::sync::Mutex;

static ENTRIES: Mutex<Vec<(LogLevel, String)>> = Mutex::new(Vec::new());

struct Capture;

impl Logger for Capture {
    fn write(&self, entry: &LogEntry) {
        ENTRIES.lock().unwrap().push((entry.level, entry.component.to_string()));
    }
}

fn errors_from(component: &str) -> usize {
    ENTRIES
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, c)| *level == LogLevel::Error && c == component)
        .count()
}

#[test]
fn fetch_failures_are_left_to_the_repository_log() {
    init_logger(Box::new(Capture));
    set_min_level(LogLevel::Debug);

    let shared = SharedRate::new();
    let rate_fetcher = RateFetcher::new(
        ScriptedSpot::with(vec![Err(FetchError::Transport("offline".to_string()))]),
        RecordingView::default(),
        shared.clone(),
        ConverterBinder::new(shared),
        FiatCurrency::Brl,
        "01/03/2024".to_string(),
    );
    assert!(block_on(rate_fetcher.refresh()).is_err());
    assert_eq!(errors_from("APP:RateFetcher"), 0);

    let history_fetcher = HistoryFetcher::new(
        ScriptedHistory::with(vec![Err(FetchError::Transport("offline".to_string()))]),
        CountingBackend::default(),
        Rc::new(FixedZone(0)),
        FiatCurrency::Brl,
        RecordingView::default(),
    );
    assert!(block_on(history_fetcher.refresh()).is_err());
    assert_eq!(errors_from("APP:HistoryFetcher"), 0);

    // A drawing failure has no repository log, so the fetcher reports it.
    let backend = CountingBackend::default();
    backend.fail.set(true);
    let drawing = HistoryFetcher::new(
        ScriptedHistory::with(vec![Ok(common::series(&[(0, 5.0)]))]),
        backend,
        Rc::new(FixedZone(0)),
        FiatCurrency::Brl,
        RecordingView::default(),
    );
    assert!(block_on(drawing.refresh()).is_err());
    assert_eq!(errors_from("APP:HistoryFetcher"), 1);
}

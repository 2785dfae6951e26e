mod common;

use common::{CountingBackend, DAY_MS, MARCH_1_UTC, RecordingView, ScriptedHistory, series};
use dolar_hoje_wasm::application::HistoryFetcher;
use dolar_hoje_wasm::domain::{
    errors::{FetchError, HistoryError},
    market_data::FiatCurrency,
    page::CHART_LOAD_ERROR,
};
use dolar_hoje_wasm::time_utils::{FixedZone, ZoneOffset};
use futures::executor::block_on;
use std::rc::Rc;

fn fetcher(
    history: ScriptedHistory,
    backend: CountingBackend,
    zone: Rc<dyn ZoneOffset>,
) -> (HistoryFetcher<ScriptedHistory, CountingBackend, RecordingView>, RecordingView) {
    let view = RecordingView::default();
    let fetcher = HistoryFetcher::new(history, backend, zone, FiatCurrency::Brl, view.clone());
    (fetcher, view)
}

fn two_days() -> dolar_hoje_wasm::domain::market_data::PriceSeries {
    let noon = MARCH_1_UTC + DAY_MS / 2;
    series(&[(noon, 5.0), (noon + DAY_MS, 5.1)])
}

#[test]
fn chart_labels_and_values_follow_samples() {
    let backend = CountingBackend::default();
    let (fetcher, view) = fetcher(
        ScriptedHistory::with(vec![Ok(two_days())]),
        backend.clone(),
        Rc::new(FixedZone(0)),
    );

    assert_eq!(block_on(fetcher.refresh()), Ok(2));

    let slot = fetcher.slot();
    let slot = slot.borrow();
    let chart = slot.current().unwrap();
    assert_eq!(chart.config.labels(), ["01/03", "02/03"]);
    assert_eq!(chart.config.values(), [5.0, 5.1]);
    assert_eq!(chart.config.tooltip_text(1).as_deref(), Some("R$ 5.10"));
    assert_eq!(view.last_status(), Some(None));
}

#[test]
fn labels_use_local_calendar_day() {
    // 00:30 UTC on 1 March is still 29 February at UTC-3
    let (fetcher, _) = fetcher(ScriptedHistory::default(), CountingBackend::default(), Rc::new(FixedZone(-180)));
    let config = fetcher.build_config(&series(&[(MARCH_1_UTC + 30 * 60_000, 5.0)]));
    assert_eq!(config.labels(), ["29/02"]);
}

#[test]
fn redraw_replaces_previous_chart() {
    let backend = CountingBackend::default();
    let (fetcher, _) = fetcher(
        ScriptedHistory::with(vec![Ok(two_days()), Ok(two_days())]),
        backend.clone(),
        Rc::new(FixedZone(0)),
    );

    block_on(fetcher.refresh()).unwrap();
    block_on(fetcher.refresh()).unwrap();

    assert_eq!(backend.constructed.get(), 2);
    assert_eq!(backend.live.get(), 1);
    assert_eq!(fetcher.slot().borrow().render_count(), 2);
}

#[test]
fn empty_history_draws_empty_chart() {
    let backend = CountingBackend::default();
    let (fetcher, _) = fetcher(
        ScriptedHistory::with(vec![Ok(series(&[]))]),
        backend.clone(),
        Rc::new(FixedZone(0)),
    );

    assert_eq!(block_on(fetcher.refresh()), Ok(0));
    assert_eq!(backend.live.get(), 1);
}

#[test]
fn fetch_failure_shows_status_and_keeps_chart() {
    let backend = CountingBackend::default();
    let (fetcher, view) = fetcher(
        ScriptedHistory::with(vec![
            Ok(two_days()),
            Err(FetchError::Structural("Unexpected market_chart shape".to_string())),
        ]),
        backend.clone(),
        Rc::new(FixedZone(0)),
    );

    block_on(fetcher.refresh()).unwrap();
    let err = block_on(fetcher.refresh()).unwrap_err();

    assert!(matches!(err, HistoryError::Fetch(ref e) if e.is_structural()));
    assert_eq!(view.last_status(), Some(Some(CHART_LOAD_ERROR.to_string())));
    assert_eq!(backend.constructed.get(), 1);
    assert!(fetcher.slot().borrow().is_live());
}

#[test]
fn backend_failure_surfaces_as_render_error() {
    let backend = CountingBackend::default();
    backend.fail.set(true);
    let (fetcher, view) = fetcher(
        ScriptedHistory::with(vec![Ok(two_days())]),
        backend.clone(),
        Rc::new(FixedZone(0)),
    );

    let err = block_on(fetcher.refresh()).unwrap_err();

    assert!(matches!(err, HistoryError::Render(_)));
    assert_eq!(view.last_status(), Some(Some(CHART_LOAD_ERROR.to_string())));
    assert!(!fetcher.slot().borrow().is_live());
}

use super::PageView;
use super::rate_fetcher::RateFetcher;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::SpotRateRepository;
use gloo_timers::callback::Interval;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

/// Re-runs the rate fetch every `period_ms` for the lifetime of the page.
///
/// The interval is never cancelled. A tick that lands while the previous
/// fetch is pending is skipped by the fetcher.
pub fn schedule_rate_refresh<R, V>(fetcher: Rc<RateFetcher<R, V>>, period_ms: u32)
where
    R: SpotRateRepository + 'static,
    V: PageView + 'static,
{
    crate::log_info!(LogComponent::Application("Scheduler"), "⏰ Rate refresh every {} ms", period_ms);

    Interval::new(period_ms, move || {
        let fetcher = fetcher.clone();
        spawn_local(async move {
            let _ = fetcher.refresh_if_idle().await;
        });
    })
    .forget();
}

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

use crate::{
    app::{App, BrowserWidget, ChartFrame, LeptosPageView},
    application::{HistoryFetcher, RateFetcher, WidgetCoordinator},
    config::active_config,
    domain::{
        converter::{ConverterBinder, format_amount, usd_to_brl},
        logging::{LogComponent, get_logger},
        market_data::SharedRate,
    },
    global_state::header_date,
    infrastructure::{http::CoinGeckoClient, rendering::CanvasChartBackend},
    time_utils::{BrowserZone, format_full_date, now_ms},
};

thread_local! {
    static WIDGET: RefCell<Option<Rc<BrowserWidget>>> = const { RefCell::new(None) };
}

fn build_widget() -> BrowserWidget {
    let config = active_config();
    let view = LeptosPageView::new();
    let rate = SharedRate::new();
    let converter = ConverterBinder::new(rate.clone());
    let date_text = format_full_date(now_ms(), &BrowserZone);
    header_date().set(date_text.clone());

    let rate_fetcher = RateFetcher::new(
        CoinGeckoClient::from_config(config),
        view,
        rate.clone(),
        converter.clone(),
        config.currency,
        date_text,
    );
    let history_fetcher = HistoryFetcher::new(
        CoinGeckoClient::from_config(config),
        CanvasChartBackend::new(&config.canvas_id, config.chart_width, config.chart_height),
        Rc::new(BrowserZone),
        config.currency,
        view,
    );

    WidgetCoordinator::new(rate, converter, rate_fetcher, history_fetcher, config.refresh_interval_ms)
}

/// Mount the widget and start fetching. Calling it again is a no-op.
#[wasm_bindgen(js_name = startWidget)]
pub fn start_widget() {
    if WIDGET.with(|slot| slot.borrow().is_some()) {
        get_logger().warn(
            LogComponent::Presentation("WasmApi"),
            "Widget already started, ignoring",
        );
        return;
    }

    let config = active_config();
    let widget = Rc::new(build_widget());
    WIDGET.with(|slot| *slot.borrow_mut() = Some(widget.clone()));

    let frame = ChartFrame {
        canvas_id: config.canvas_id.clone(),
        width: config.chart_width,
        height: config.chart_height,
    };
    let mounted = widget.clone();
    mount_to_body(move || view! { <App widget=mounted frame=frame /> });

    get_logger().info(
        LogComponent::Presentation("WasmApi"),
        "🚀 Widget mounted, starting fetchers",
    );
    widget.start();
}

/// Last successfully fetched rate, if any
#[wasm_bindgen(js_name = currentRate)]
pub fn current_rate() -> Option<f64> {
    WIDGET.with(|slot| {
        slot.borrow()
            .as_ref()
            .and_then(|widget| widget.rate().get())
            .map(|rate| rate.value())
    })
}

/// Convert with the current rate; `None` until a rate has been fetched
#[wasm_bindgen(js_name = convertUsdToBrl)]
pub fn convert_usd_to_brl(usd: f64) -> Option<String> {
    WIDGET.with(|slot| {
        let widget = slot.borrow();
        let rate = widget.as_ref()?.rate().get()?;
        Some(format_amount(usd_to_brl(usd, rate)))
    })
}

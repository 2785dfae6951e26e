use leptos::*;
use std::rc::Rc;

use crate::{
    application::{PageView, WidgetCoordinator},
    domain::{
        converter::ConverterField,
        page::QuoteDisplay,
    },
    global_state::{brl_value, chart_status, header_date, price_text, tooltip_data, usd_value},
    infrastructure::{
        http::CoinGeckoClient,
        rendering::CanvasChartBackend,
        ui::DocumentHead,
    },
};

/// The coordinator as wired in the browser
pub type BrowserWidget = WidgetCoordinator<CoinGeckoClient, CoinGeckoClient, CanvasChartBackend, LeptosPageView>;

/// Canvas size and id, handed to the chart container
#[derive(Debug, Clone)]
pub struct ChartFrame {
    pub canvas_id: String,
    pub width: u32,
    pub height: u32,
}

/// 🌉 Page view backed by the global Leptos signals plus the document head
#[derive(Debug, Clone, Copy, Default)]
pub struct LeptosPageView {
    head: DocumentHead,
}

impl LeptosPageView {
    pub fn new() -> Self {
        Self { head: DocumentHead::new() }
    }
}

impl PageView for LeptosPageView {
    fn show_quote(&self, display: &QuoteDisplay) {
        price_text().set(display.price_label.clone());
        self.head.apply(display);
    }

    fn show_chart_status(&self, status: Option<&str>) {
        chart_status().set(status.map(str::to_string));
    }
}

/// 🦀 Root component of the widget
#[component]
pub fn App(widget: Rc<BrowserWidget>, frame: ChartFrame) -> impl IntoView {
    provide_context(widget);

    view! {
        <style>
            {r#"
            .dolar-hoje-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: linear-gradient(135deg, #1e3c72 0%, #2a5298 100%);
                min-height: 100vh;
                padding: 20px;
                color: #e0e7ff;
            }

            .header, .converter, .chart-container {
                max-width: 840px;
                margin: 0 auto 20px;
                text-align: center;
                background: rgba(255, 255, 255, 0.1);
                backdrop-filter: blur(10px);
                padding: 20px;
                border-radius: 15px;
                border: 1px solid rgba(255, 255, 255, 0.2);
            }

            .price-value {
                font-size: 42px;
                font-weight: 700;
                color: #72c685;
                text-shadow: 0 0 10px rgba(114, 198, 133, 0.3);
            }

            .converter-row {
                display: flex;
                justify-content: center;
                gap: 20px;
            }

            .converter input {
                font-size: 18px;
                padding: 8px;
                border-radius: 6px;
                border: 1px solid #4a5d73;
                width: 160px;
            }

            .chart-wrapper {
                position: relative;
                display: inline-block;
            }

            .tooltip {
                position: absolute;
                background: rgba(0, 0, 0, 0.9);
                color: white;
                padding: 6px 10px;
                border-radius: 6px;
                font-size: 12px;
                white-space: pre-line;
                pointer-events: none;
                transform: translate(10px, -100%);
            }

            .status {
                color: #ff8a80;
                font-size: 14px;
                min-height: 1em;
            }
            "#}
        </style>
        <div class="dolar-hoje-app">
            <Header />
            <ConverterPanel />
            <ChartContainer frame=frame />
        </div>
    }
}

/// 📊 Date and current price
#[component]
fn Header() -> impl IntoView {
    let date = header_date();
    let price = price_text();

    view! {
        <div class="header">
            <h1>"Dólar Hoje"</h1>
            <p id="date">{move || date.get()}</p>
            <div id="price" class="price-value">{move || price.get()}</div>
        </div>
    }
}

/// 💱 Two inputs kept in sync through the converter binder.
///
/// The handlers are attached once, when the view is built; they ask the
/// binder for the counterpart value on every keystroke. Each signal only
/// ever carries text computed for its own input.
#[component]
fn ConverterPanel() -> impl IntoView {
    let widget = expect_context::<Rc<BrowserWidget>>();
    let usd = usd_value();
    let brl = brl_value();

    // Only the counterpart is written; the edited input keeps the visitor's text.
    let handle_input = move |field: ConverterField, raw: String| {
        if let Some((target, converted)) = widget.converter().update_for(field, &raw) {
            match target {
                ConverterField::Usd => usd.set(converted),
                ConverterField::Brl => brl.set(converted),
            }
        }
    };
    let on_usd = {
        let handle_input = handle_input.clone();
        move |ev: web_sys::Event| handle_input(ConverterField::Usd, event_target_value(&ev))
    };
    let on_brl = move |ev: web_sys::Event| handle_input(ConverterField::Brl, event_target_value(&ev));

    view! {
        <div class="converter">
            <h2>"Conversor"</h2>
            <div class="converter-row">
                <label>
                    "USD "
                    <input id="usd-input" type="number" step="0.01" placeholder="0.00"
                        prop:value=move || usd.get()
                        on:input=on_usd
                    />
                </label>
                <label>
                    "BRL "
                    <input id="brl-input" type="number" step="0.01" placeholder="0.00"
                        prop:value=move || brl.get()
                        on:input=on_brl
                    />
                </label>
            </div>
        </div>
    }
}

/// 🎨 Canvas for the price history plus its tooltip and status line
#[component]
fn ChartContainer(frame: ChartFrame) -> impl IntoView {
    let widget = expect_context::<Rc<BrowserWidget>>();
    let slot = widget.chart_slot();
    let tooltip = tooltip_data();
    let status = chart_status();

    let handle_mouse_move = move |event: web_sys::MouseEvent| {
        let slot = slot.borrow();
        let Some(chart) = slot.current() else {
            tooltip.set(None);
            return;
        };
        // Pointer offsets are in CSS pixels; the chart works in canvas pixels.
        let canvas = chart.canvas();
        let scale = canvas.width() as f64 / canvas.client_width().max(1) as f64;
        let hit = chart.tooltip_at(event.offset_x() as f64 * scale).map(|mut t| {
            t.x /= scale;
            t.y /= scale;
            t
        });
        tooltip.set(hit);
    };

    let handle_mouse_leave = move |_event: web_sys::MouseEvent| {
        tooltip.set(None);
    };

    view! {
        <div class="chart-container">
            <h2>"Últimos 7 dias"</h2>
            <div class="chart-wrapper">
                <canvas
                    id=frame.canvas_id
                    width=frame.width
                    height=frame.height
                    style="max-width: 100%; cursor: crosshair;"
                    on:mousemove=handle_mouse_move
                    on:mouseleave=handle_mouse_leave
                />
                <ChartTooltip />
            </div>
            <div id="chart-status" class="status">
                {move || status.get().unwrap_or_default()}
            </div>
        </div>
    }
}

/// 🎯 Tooltip over the hovered sample
#[component]
fn ChartTooltip() -> impl IntoView {
    let tooltip = tooltip_data();

    view! {
        <div
            class="tooltip"
            style:display=move || if tooltip.with(Option::is_some) { "block" } else { "none" }
            style:left=move || tooltip.with(|t| format!("{}px", t.as_ref().map(|t| t.x).unwrap_or(0.0)))
            style:top=move || tooltip.with(|t| format!("{}px", t.as_ref().map(|t| t.y).unwrap_or(0.0)))
        >
            {move || tooltip.with(|t| {
                t.as_ref().map(|t| format!("{}\n{}", t.label, t.text)).unwrap_or_default()
            })}
        </div>
    }
}

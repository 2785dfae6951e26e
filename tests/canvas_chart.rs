#![cfg(target_arch = "wasm32")]

use dolar_hoje_wasm::domain::chart::{ChartBackend, ChartSeries, ChartSlot, LineChartConfig};
use dolar_hoje_wasm::domain::errors::RenderError;
use dolar_hoje_wasm::domain::market_data::FiatCurrency;
use dolar_hoje_wasm::infrastructure::rendering::CanvasChartBackend;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_canvas(id: &str) -> web_sys::HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

fn config(values: Vec<f64>) -> LineChartConfig {
    let labels = (0..values.len()).map(|i| format!("{:02}/03", i + 1)).collect();
    LineChartConfig::price_history(ChartSeries::new(labels, values).unwrap(), FiatCurrency::Brl)
}

fn painted_pixels(canvas: &web_sys::HtmlCanvasElement) -> usize {
    let ctx = canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .unwrap();
    let data = ctx
        .get_image_data(0.0, 0.0, canvas.width() as f64, canvas.height() as f64)
        .unwrap()
        .data();
    data.chunks(4).filter(|px| px[3] != 0).count()
}

#[wasm_bindgen_test]
fn draws_and_clears_line_chart() {
    let canvas = mount_canvas("chart-draw-test");
    let backend = CanvasChartBackend::new("chart-draw-test", 400, 200);
    let mut slot = ChartSlot::new();

    slot.render(&backend, &config(vec![5.0, 5.1, 5.05])).unwrap();
    assert_eq!(canvas.width(), 400);
    assert!(painted_pixels(&canvas) > 0);

    slot.clear();
    assert_eq!(painted_pixels(&canvas), 0);
}

#[wasm_bindgen_test]
fn tooltip_snaps_to_nearest_sample() {
    mount_canvas("chart-tooltip-test");
    let backend = CanvasChartBackend::new("chart-tooltip-test", 400, 200);
    let chart = backend.construct(&config(vec![5.0, 5.2])).unwrap();

    let left = chart.tooltip_at(80.0).unwrap();
    assert_eq!(left.label, "01/03");
    assert_eq!(left.text, "R$ 5.00");

    let right = chart.tooltip_at(375.0).unwrap();
    assert_eq!(right.label, "02/03");
    assert_eq!(right.text, "R$ 5.20");
}

#[wasm_bindgen_test]
fn missing_canvas_is_reported() {
    let backend = CanvasChartBackend::new("no-such-canvas", 400, 200);
    let err = backend.construct(&config(vec![5.0])).unwrap_err();
    assert_eq!(err, RenderError::ElementNotFound("no-such-canvas".to_string()));
}

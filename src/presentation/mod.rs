//! JavaScript-facing entry points.

pub mod wasm_api;

pub use wasm_api::{convert_usd_to_brl, current_rate, start_widget};

use chrono::{DateTime, FixedOffset};

/// Source of the visitor's UTC offset at a given instant.
pub trait ZoneOffset {
    /// Offset east of UTC in minutes (UTC-3 is `-180`)
    fn offset_minutes(&self, timestamp_ms: i64) -> i32;
}

/// A zone that never changes its offset
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedZone(pub i32);

impl ZoneOffset for FixedZone {
    fn offset_minutes(&self, _timestamp_ms: i64) -> i32 {
        self.0
    }
}

/// The browser's local zone, looked up per instant so DST edges are honoured.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserZone;

impl ZoneOffset for BrowserZone {
    fn offset_minutes(&self, timestamp_ms: i64) -> i32 {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp_ms as f64));
        // getTimezoneOffset is positive west of UTC
        -(date.get_timezone_offset() as i32)
    }
}

fn local_time(timestamp_ms: i64, zone: &(impl ZoneOffset + ?Sized)) -> Option<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(zone.offset_minutes(timestamp_ms) * 60)?;
    Some(DateTime::from_timestamp_millis(timestamp_ms)?.with_timezone(&offset))
}

/// Short chart label, `DD/MM` in the visitor's zone.
pub fn format_day_month(timestamp_ms: i64, zone: &(impl ZoneOffset + ?Sized)) -> String {
    match local_time(timestamp_ms, zone) {
        Some(t) => t.format("%d/%m").to_string(),
        None => "--/--".to_string(),
    }
}

/// Header date, `DD/MM/YYYY` in the visitor's zone.
pub fn format_full_date(timestamp_ms: i64, zone: &(impl ZoneOffset + ?Sized)) -> String {
    match local_time(timestamp_ms, zone) {
        Some(t) => t.format("%d/%m/%Y").to_string(),
        None => "--/--/----".to_string(),
    }
}

/// Milliseconds since epoch from the browser clock
pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

//! Two-way USD/BRL converter.
//!
//! The binder is activated once, after the first successful quote, and reads
//! the rate from [`SharedRate`] every time a field changes. Later refreshes
//! therefore apply without re-installing any input handler.

use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{ExchangeRate, SharedRate};
use std::cell::Cell;
use std::rc::Rc;

/// The converter input the visitor just edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConverterField {
    Usd,
    Brl,
}

impl ConverterField {
    /// The field whose value is recomputed after an edit of `self`
    pub fn counterpart(&self) -> Self {
        match self {
            Self::Usd => Self::Brl,
            Self::Brl => Self::Usd,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConverterBinder {
    rate: SharedRate,
    active: Rc<Cell<bool>>,
}

impl ConverterBinder {
    pub fn new(rate: SharedRate) -> Self {
        Self { rate, active: Rc::new(Cell::new(false)) }
    }

    /// Turns the converter on. No-op while the rate is unset or once already
    /// active; returns `true` only on the call that actually activated it.
    pub fn activate(&self) -> bool {
        if !self.rate.is_set() || self.active.get() {
            return false;
        }
        self.active.set(true);
        get_logger().info(
            LogComponent::Domain("Converter"),
            "Converter activated",
        );
        true
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Handles an edit of `field` and returns the text for the other field.
    /// `None` means the converter is not active and nothing should change.
    pub fn on_input(&self, field: ConverterField, raw: &str) -> Option<String> {
        if !self.is_active() {
            return None;
        }
        let rate = self.rate.get()?;
        let amount = parse_lenient(raw);
        let converted = match field {
            ConverterField::Usd => usd_to_brl(amount, rate),
            ConverterField::Brl => brl_to_usd(amount, rate),
        };
        Some(format_amount(converted))
    }

    /// The field to rewrite after an edit of `field`, with its new text.
    /// Never the edited field itself, whose text stays as the visitor typed it.
    pub fn update_for(&self, field: ConverterField, raw: &str) -> Option<(ConverterField, String)> {
        let text = self.on_input(field, raw)?;
        Some((field.counterpart(), text))
    }

    pub fn on_usd_input(&self, raw: &str) -> Option<String> {
        self.on_input(ConverterField::Usd, raw)
    }

    pub fn on_brl_input(&self, raw: &str) -> Option<String> {
        self.on_input(ConverterField::Brl, raw)
    }
}

pub fn usd_to_brl(usd: f64, rate: ExchangeRate) -> f64 {
    usd * rate.value()
}

pub fn brl_to_usd(brl: f64, rate: ExchangeRate) -> f64 {
    brl / rate.value()
}

/// Two decimals, as written back into the input fields
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Lenient number parsing for free-form input.
///
/// Reads the longest numeric prefix after leading whitespace (`"12abc"` is
/// 12, `".5"` is 0.5). Empty, non-numeric, zero and non-finite input all
/// become 0.
pub fn parse_lenient(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if digits + (j - frac_start) > 0 {
            digits += j - frac_start;
            end = j;
        }
    }

    if digits == 0 {
        return 0.0;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut j = end + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    match s[..end].parse::<f64>() {
        Ok(v) if v.is_finite() && v != 0.0 => v,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_parse_takes_numeric_prefix() {
        assert_eq!(parse_lenient("12abc"), 12.0);
        assert_eq!(parse_lenient("  3.5"), 3.5);
        assert_eq!(parse_lenient(".5"), 0.5);
        assert_eq!(parse_lenient("-2"), -2.0);
        assert_eq!(parse_lenient("1e2x"), 100.0);
        assert_eq!(parse_lenient("1e"), 1.0);
        assert_eq!(parse_lenient("7."), 7.0);
    }

    #[test]
    fn lenient_parse_coerces_garbage_to_zero() {
        assert_eq!(parse_lenient(""), 0.0);
        assert_eq!(parse_lenient("abc"), 0.0);
        assert_eq!(parse_lenient("."), 0.0);
        assert_eq!(parse_lenient("-"), 0.0);
        assert_eq!(parse_lenient("1e999"), 0.0);
    }

    #[test]
    fn field_counterpart() {
        assert_eq!(ConverterField::Usd.counterpart(), ConverterField::Brl);
        assert_eq!(ConverterField::Brl.counterpart(), ConverterField::Usd);
    }
}

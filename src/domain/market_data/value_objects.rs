use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::AsRefStr;

/// Value Object - Price of the tracked asset in the fiat currency
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - Epoch milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn from_millis(value: i64) -> Self {
        Self(value)
    }
}

/// Value Object - Spot rate, fiat units per one unit of the tracked asset.
///
/// Always finite and strictly positive, so dividing by it is safe.
#[derive(Debug, Clone, Copy, PartialEq, Display, Serialize)]
#[display(fmt = "{:.2}", _0)]
pub struct ExchangeRate(f64);

impl ExchangeRate {
    pub fn new(value: f64) -> Result<Self, String> {
        if !value.is_finite() {
            return Err(format!("Exchange rate must be finite, got {}", value));
        }
        if value <= 0.0 {
            return Err(format!("Exchange rate must be positive, got {}", value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - Upstream asset identifier (`tether`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct AssetId(String);

impl AssetId {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetId {
    fn from(value: &str) -> Self {
        Self(value.trim().to_lowercase())
    }
}

impl Default for AssetId {
    fn default() -> Self {
        Self::from("tether")
    }
}

/// Value Object - Quote currency as the upstream API spells it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Serialize, Deserialize)]
pub enum FiatCurrency {
    #[default]
    #[strum(serialize = "brl")]
    #[serde(rename = "brl")]
    Brl,
}

impl FiatCurrency {
    pub fn api_code(&self) -> &str {
        self.as_ref()
    }

    /// Prefix used when the amount is shown to the visitor
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Brl => "R$",
        }
    }
}

/// Value Object - Length of the history window in days
#[derive(Debug, Clone, Copy, PartialEq, Eq, From, Into, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct HistoryWindow(u32);

impl HistoryWindow {
    pub fn days(&self) -> u32 {
        self.0
    }
}

impl Default for HistoryWindow {
    fn default() -> Self {
        Self(7)
    }
}

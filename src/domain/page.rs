//! Texts projected onto the page. Visitor-facing strings are pt-BR.

use crate::domain::errors::FetchError;
use crate::domain::market_data::{ExchangeRate, FiatCurrency};

pub const PRICE_LOAD_ERROR: &str = "Erro ao carregar preço";
pub const CONNECTION_ERROR: &str = "Erro ao conectar à API";
pub const CHART_LOAD_ERROR: &str = "Erro ao carregar gráfico";
pub const ERROR_TITLE: &str = "Dólar Hoje - Erro";
pub const LOADING_TEXT: &str = "Carregando...";

/// `R$5.20`
pub fn format_price(rate: ExchangeRate, currency: FiatCurrency) -> String {
    format!("{}{:.2}", currency.symbol(), rate.value())
}

/// The three surfaces rewritten after every quote attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteDisplay {
    pub price_label: String,
    pub title: String,
    pub meta_description: String,
}

impl QuoteDisplay {
    pub fn for_rate(rate: ExchangeRate, currency: FiatCurrency, date: &str) -> Self {
        let price_text = format_price(rate, currency);
        Self {
            title: format!("Dólar Hoje é {}", price_text),
            meta_description: format!("O Valor do Dólar Hoje, {}, é de {}", date, price_text),
            price_label: price_text,
        }
    }

    pub fn for_error(error: &FetchError, date: &str) -> Self {
        let price_label = match error {
            FetchError::Structural(_) => PRICE_LOAD_ERROR,
            FetchError::Transport(_) => CONNECTION_ERROR,
        };
        Self {
            price_label: price_label.to_string(),
            title: ERROR_TITLE.to_string(),
            meta_description: format!("O Valor do Dólar Hoje, {}, não pôde ser carregado", date),
        }
    }
}

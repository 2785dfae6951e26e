//! HTTP access to the quote and history endpoints.

pub mod coingecko_client;
pub mod dto;

pub use coingecko_client::CoinGeckoClient;

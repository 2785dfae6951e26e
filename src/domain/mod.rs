pub mod chart;
pub mod converter;
pub mod errors;
pub mod logging;
pub mod market_data;
pub mod page;

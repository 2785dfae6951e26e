//! Application layer: the fetch-and-render routines and their wiring.

pub mod coordinator;
pub mod history_fetcher;
pub mod in_flight;
pub mod rate_fetcher;
pub mod scheduler;

pub use coordinator::{InitialLoad, WidgetCoordinator};
pub use history_fetcher::HistoryFetcher;
pub use rate_fetcher::RateFetcher;

use crate::domain::page::QuoteDisplay;

/// Page surfaces the routines write to
pub trait PageView {
    /// Price label, document title and meta description
    fn show_quote(&self, display: &QuoteDisplay);
    /// Chart status line; `None` clears it
    fn show_chart_status(&self, status: Option<&str>);
}

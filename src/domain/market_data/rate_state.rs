use super::value_objects::ExchangeRate;
use std::cell::Cell;
use std::rc::Rc;

/// Page-wide holder of the latest spot rate.
///
/// Unset until the first successful quote, then overwritten on every
/// refresh and never cleared. Clones share the same cell, so a reader that
/// captured a clone always sees the newest rate. Single-threaded only: the
/// widget runs on the browser event loop.
#[derive(Debug, Clone, Default)]
pub struct SharedRate {
    inner: Rc<Cell<Option<ExchangeRate>>>,
}

impl SharedRate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<ExchangeRate> {
        self.inner.get()
    }

    pub fn set(&self, rate: ExchangeRate) {
        self.inner.set(Some(rate));
    }

    pub fn is_set(&self) -> bool {
        self.inner.get().is_some()
    }
}

use std::cell::Cell;
use std::rc::Rc;

/// Marks a routine as running so an overlapping call can be skipped.
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    busy: Rc<Cell<bool>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` while a previous guard is still alive
    pub fn try_begin(&self) -> Option<InFlightGuard> {
        if self.busy.replace(true) {
            return None;
        }
        Some(InFlightGuard { busy: self.busy.clone() })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

/// Clears the busy flag when dropped, including on early return.
#[derive(Debug)]
pub struct InFlightGuard {
    busy: Rc<Cell<bool>>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}

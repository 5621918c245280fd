use std::sync::atomic::{AtomicBool, Ordering};

use crate::foundation::core::RunId;

/// Single-slot guard that lets at most one run proceed at a time.
///
/// Owned by whatever triggers runs (CLI loop, scheduler); the core pipeline itself holds no
/// global state.
#[derive(Debug, Default)]
pub struct RunSlot {
    busy: AtomicBool,
}

/// Proof of holding the [`RunSlot`]; releases it on drop.
#[derive(Debug)]
pub struct RunTicket<'a> {
    slot: &'a RunSlot,
    run_id: RunId,
}

impl RunSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the slot for `run_id`, or `None` if another run holds it.
    pub fn try_acquire(&self, run_id: RunId) -> Option<RunTicket<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| RunTicket { slot: self, run_id })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl RunTicket<'_> {
    pub fn run_id(&self) -> &RunId {
        &self.run_id
    }
}

impl Drop for RunTicket<'_> {
    fn drop(&mut self) {
        self.slot.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/slot.rs"]
mod tests;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::input::Direction;

/// Single-slot mailbox for the most recent direction request.
///
/// Writers overwrite whatever is pending; the tick driver takes it once per
/// tick. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct DirectionSlot {
    pending: Arc<Mutex<Option<Direction>>>,
}

impl DirectionSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `direction`, replacing any request not yet taken.
    pub fn set(&self, direction: Direction) {
        *self.lock() = Some(direction);
    }

    /// Removes and returns the pending request, if any.
    #[must_use]
    pub fn take(&self) -> Option<Direction> {
        self.lock().take()
    }

    // The slot holds a plain `Option`, so a panicked writer cannot leave it
    // half-updated.
    fn lock(&self) -> MutexGuard<'_, Option<Direction>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

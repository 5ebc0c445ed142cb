use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, drag_to_value};

/// Which bound of the user range a drag gesture is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragHandle {
    Lower,
    Upper,
}

/// Stage of a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragPhase {
    /// Continuous pointer movement; updates are ephemeral.
    Move,
    /// Pointer released; the value is kept without widening the domain.
    End,
    /// Value committed; the domain is widened if needed.
    Submit,
}

impl DragPhase {
    #[must_use]
    pub fn commits(self) -> bool {
        matches!(self, Self::Submit)
    }
}

/// A resolved drag sample ready to be applied to a range editor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragUpdate {
    pub handle: DragHandle,
    pub phase: DragPhase,
    pub value: f64,
}

/// Resolves a pointer position into a [`DragUpdate`].
///
/// Returns `None` when the position cannot be mapped to a price.
#[must_use]
pub fn resolve_drag(
    handle: DragHandle,
    phase: DragPhase,
    scale: LinearScale,
    pixel: f64,
) -> Option<DragUpdate> {
    drag_to_value(scale, pixel).map(|value| DragUpdate {
        handle,
        phase,
        value,
    })
}

/// Default quiet window for drag-move updates.
pub const DEFAULT_MOVE_DEBOUNCE_MS: u64 = 100;

/// Trailing-edge debounce for high-frequency drag-move samples.
///
/// Time is supplied by the caller so the decorator stays deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveDebouncer<T> {
    window_ms: u64,
    pending: Option<T>,
    last_push_ms: u64,
}

impl<T> Default for MoveDebouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_MOVE_DEBOUNCE_MS)
    }
}

impl<T> MoveDebouncer<T> {
    #[must_use]
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            pending: None,
            last_push_ms: 0,
        }
    }

    #[must_use]
    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Replaces the pending sample and restarts the quiet window.
    pub fn push(&mut self, value: T, now_ms: u64) {
        self.pending = Some(value);
        self.last_push_ms = now_ms;
    }

    /// Releases the pending sample once the quiet window has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        if now_ms.saturating_sub(self.last_push_ms) < self.window_ms {
            return None;
        }
        self.pending.take()
    }

    /// Releases the pending sample immediately.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Drops the pending sample, e.g. when a gesture ends with a submit.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

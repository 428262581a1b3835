//! Scheduling seams between the animations and their host.
//!
//! Components never call back into the host's event loop directly. They ask
//! for a frame or a timeout, remember the returned id, and act only when the
//! host hands that same id back. Anything cancelled or superseded is ignored
//! on arrival, so stale callbacks cannot mutate state.

use crate::ids::{FrameId, IdAllocator, TimerId};

/// Source of display-refresh callbacks (`requestAnimationFrame` in a browser).
pub trait Ticker {
    /// Register interest in the next frame.
    fn request_frame(&mut self) -> FrameId;
    /// Withdraw a frame request. Unknown ids are ignored.
    fn cancel_frame(&mut self, id: FrameId);
}

/// Millisecond clock with one-shot timeouts (`setTimeout` in a browser).
pub trait Clock {
    fn now_ms(&self) -> f64;
    fn set_timeout(&mut self, delay_ms: u32) -> TimerId;
    /// Withdraw a timeout. Unknown ids are ignored.
    fn clear_timeout(&mut self, id: TimerId);
}

/// Ticker that holds at most one pending frame until the caller fires it.
///
/// Used by tests and by hosts that poll (`needs_frame` then `fire`).
#[derive(Debug, Default)]
pub struct VirtualTicker {
    ids: IdAllocator,
    pending: Option<FrameId>,
    requests: u64,
}

impl VirtualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<FrameId> {
        self.pending
    }

    /// Take the pending frame, as a display refresh would.
    pub fn fire(&mut self) -> Option<FrameId> {
        self.pending.take()
    }

    /// Total frames requested since construction.
    pub fn requests(&self) -> u64 {
        self.requests
    }
}

impl Ticker for VirtualTicker {
    fn request_frame(&mut self) -> FrameId {
        let id = self.ids.alloc_frame();
        self.pending = Some(id);
        self.requests += 1;
        id
    }

    fn cancel_frame(&mut self, id: FrameId) {
        if self.pending == Some(id) {
            self.pending = None;
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    id: TimerId,
    due_ms: f64,
}

/// Clock whose time only moves when the caller says so.
///
/// [`VirtualClock::pop_due`] releases timers one at a time, earliest first
/// (ties in registration order), and moves `now` to each timer's due time,
/// so anything scheduled from inside a timer callback is measured from the
/// instant that timer fired.
#[derive(Debug, Default)]
pub struct VirtualClock {
    ids: IdAllocator,
    now_ms: f64,
    timers: Vec<PendingTimer>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_count(&self) -> usize {
        self.timers.len()
    }

    pub fn next_due_ms(&self) -> Option<f64> {
        self.timers.iter().map(|t| t.due_ms).reduce(f64::min)
    }

    /// Remove and return the earliest timer due at or before `until_ms`.
    pub fn pop_due(&mut self, until_ms: f64) -> Option<TimerId> {
        let (idx, timer) = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= until_ms)
            .min_by(|(_, a), (_, b)| a.due_ms.total_cmp(&b.due_ms).then(a.id.cmp(&b.id)))
            .map(|(i, t)| (i, *t))?;
        self.timers.remove(idx);
        if timer.due_ms > self.now_ms {
            self.now_ms = timer.due_ms;
        }
        Some(timer.id)
    }

    /// Move time forward to `until_ms` without firing anything.
    pub fn settle(&mut self, until_ms: f64) {
        if until_ms > self.now_ms {
            self.now_ms = until_ms;
        }
    }
}

impl Clock for VirtualClock {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }

    fn set_timeout(&mut self, delay_ms: u32) -> TimerId {
        let id = self.ids.alloc_timer();
        self.timers.push(PendingTimer {
            id,
            due_ms: self.now_ms + f64::from(delay_ms),
        });
        id
    }

    fn clear_timeout(&mut self, id: TimerId) {
        self.timers.retain(|t| t.id != id);
    }
}

//! Identifiers for outstanding frame and timer registrations.

use serde::{Deserialize, Serialize};

/// Handle for one requested display refresh.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct FrameId(pub u32);

/// Handle for one scheduled timeout.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct TimerId(pub u32);

/// Monotonic allocator for FrameId and TimerId.
/// Ids are never reused within one allocator, so a stale handle can always
/// be told apart from a live one.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_frame: u32,
    next_timer: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_frame(&mut self) -> FrameId {
        let id = FrameId(self.next_frame);
        self.next_frame = self.next_frame.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_timer(&mut self) -> TimerId {
        let id = TimerId(self.next_timer);
        self.next_timer = self.next_timer.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.alloc_frame(), FrameId(0));
        assert_eq!(alloc.alloc_frame(), FrameId(1));
        assert_eq!(alloc.alloc_timer(), TimerId(0));
        assert_eq!(alloc.alloc_timer(), TimerId(1));
        assert_eq!(alloc.alloc_frame(), FrameId(2));
    }
}

//! Pool usage snapshot.

use serde::Serialize;

/// Point-in-time usage figures for a [`super::Vec3Pool`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PoolStats {
    /// Number of preallocated slots.
    pub capacity: usize,
    /// Slots currently free.
    pub available: usize,
    /// Peak simultaneous demand since construction, fallback buffers included.
    ///
    /// A value above `capacity` means some frame overflowed the pool.
    pub high_water: usize,
    /// Fallback buffers currently checked out.
    pub live_fallbacks: usize,
    /// Overflow buffers held by the pool right now, checked out or parked.
    ///
    /// Released fallbacks are reused, so this never exceeds the frame's
    /// peak fallback demand.
    pub fallback_buffers: usize,
    /// Fallback acquires since the last reset, reused buffers included.
    pub frame_fallbacks: usize,
    /// Fallback acquires since construction, reused buffers included.
    pub total_fallbacks: u64,
    /// Number of resets since construction.
    pub frames: u64,
}

impl PoolStats {
    /// Slots currently checked out of the preallocated store.
    pub fn in_use(&self) -> usize {
        self.capacity.saturating_sub(self.available)
    }

    /// Whether any frame so far needed more buffers than the pool holds.
    pub fn has_overflowed(&self) -> bool {
        self.total_fallbacks > 0
    }
}

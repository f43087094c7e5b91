//! Fixed-capacity frame pool of [`Vec3`] buffers.
//!
//! The pool preallocates `capacity` vectors and hands them out last-in,
//! first-out so a frame loop can borrow scratch vectors without touching
//! the heap. Buffers are reached through owned [`Vec3Handle`]s rather than
//! raw references:
//!
//! - Releasing consumes the handle, so a buffer cannot be released twice.
//! - Every [`Vec3Pool::reset`] starts a new frame epoch. Handles kept past
//!   a reset are rejected with [`PoolErrorCode::StaleHandle`] instead of
//!   silently aliasing a slot someone else now owns.
//! - A handle used with a pool other than the one it came from is
//!   rejected with [`PoolErrorCode::ForeignHandle`].
//!
//! When every slot is checked out, [`Vec3Pool::acquire`] still succeeds but
//! returns [`Acquired::Fallback`], backed by a per-frame overflow arena.
//! Callers can see the allocation pressure in the returned variant and in
//! [`PoolStats`]. [`Vec3Pool::try_acquire`] refuses instead.
//!
//! # Example
//!
//! ```rust
//! use arcade_math_core::pool::{with_vec3_frame, PoolError, Vec3Pool};
//! use arcade_math_core::vector_math::add3_to;
//! use arcade_math_core::Vec3;
//!
//! let mut pool = Vec3Pool::new(4);
//! let sum = with_vec3_frame(&mut pool, |pool| -> Result<Vec3, PoolError> {
//!     let out = pool.acquire().into_handle();
//!     add3_to(pool.get_mut(&out)?, &Vec3::x(), &Vec3::y());
//!     pool.get(&out).copied()
//! })
//! .unwrap();
//! assert_eq!(sum, Vec3::new(1.0, 1.0, 0.0));
//! assert_eq!(pool.available(), 4);
//! ```

mod config;
mod error;
mod frame;
mod stats;

pub use config::PoolConfig;
pub use error::{PoolError, PoolErrorCode};
pub use frame::{with_vec3_frame, FrameGuard};
pub use stats::PoolStats;

use crate::core_types::Vec3;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::{debug, trace, warn};

/// Source of unique pool ids, stamped into every handle.
static NEXT_POOL_ID: AtomicU32 = AtomicU32::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Slot {
    Pooled(usize),
    Fallback(usize),
}

/// Owned, opaque reference to one buffer of one [`Vec3Pool`].
///
/// Not `Clone`: giving the handle back through [`Vec3Pool::release`]
/// consumes it. Dropping a handle without releasing it simply leaves the
/// slot checked out until the next reset.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Vec3Handle {
    pool: u32,
    epoch: u32,
    slot: Slot,
}

impl Vec3Handle {
    /// Whether this handle names an overflow buffer rather than a pooled slot.
    pub fn is_fallback(&self) -> bool {
        matches!(self.slot, Slot::Fallback(_))
    }
}

/// Outcome of [`Vec3Pool::acquire`].
#[derive(Debug, PartialEq, Eq)]
#[must_use = "the acquired handle is the only way to reach the buffer"]
pub enum Acquired {
    /// A preallocated slot. Its contents are whatever the last holder left.
    Pooled(Vec3Handle),

    /// The pool was exhausted; a zeroed buffer was allocated for this frame.
    Fallback(Vec3Handle),
}

impl Acquired {
    /// Borrow the handle regardless of where the buffer came from.
    pub fn handle(&self) -> &Vec3Handle {
        match self {
            Self::Pooled(h) | Self::Fallback(h) => h,
        }
    }

    /// Take the handle regardless of where the buffer came from.
    pub fn into_handle(self) -> Vec3Handle {
        match self {
            Self::Pooled(h) | Self::Fallback(h) => h,
        }
    }

    /// Whether the pool had to fall back to allocation.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Outcome of a successful [`Vec3Pool::release`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Released {
    /// The slot is available again.
    Returned,

    /// The buffer was a fallback allocation. It does not join the
    /// preallocated slots; its storage is parked for the next fallback
    /// acquire and freed at the next reset.
    Dropped,
}

/// Fixed-capacity last-in-first-out pool of [`Vec3`] buffers.
///
/// Single-threaded: every mutating operation takes `&mut self`.
#[derive(Debug)]
pub struct Vec3Pool {
    id: u32,
    label: String,
    /// Preallocated storage, `capacity` entries, never resized.
    slots: Vec<Vec3>,
    /// Free slot indices; `free.len()` is the number of available slots.
    free: Vec<usize>,
    /// Overflow buffers allocated in the current frame.
    fallback: Vec<Vec3>,
    /// Released overflow indices, reused before `fallback` grows.
    fallback_free: Vec<usize>,
    /// Fallback acquires since the last reset, reuses included.
    frame_fallbacks: usize,
    epoch: u32,
    high_water: usize,
    total_fallbacks: u64,
    frames: u64,
}

impl Vec3Pool {
    /// Create a pool of `capacity` zeroed buffers, all available.
    pub fn new(capacity: usize) -> Self {
        Self::from_config(&PoolConfig::new(capacity))
    }

    /// Create a pool from a [`PoolConfig`].
    pub fn from_config(config: &PoolConfig) -> Self {
        let capacity = config.capacity;
        let id = NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed);
        debug!(pool = %config.label, id, capacity, "Created vec3 pool");

        Self {
            id,
            label: config.label.clone(),
            slots: vec![Vec3::zeros(); capacity],
            free: (0..capacity).collect(),
            fallback: Vec::new(),
            fallback_free: Vec::new(),
            frame_fallbacks: 0,
            epoch: 0,
            high_water: 0,
            total_fallbacks: 0,
            frames: 0,
        }
    }

    /// Check out a buffer.
    ///
    /// Pops the most recently freed slot. If none is free, hands out a
    /// zeroed overflow buffer (a released one if available, otherwise a new
    /// allocation that lives until the next reset) and reports it as
    /// [`Acquired::Fallback`]. Never fails.
    pub fn acquire(&mut self) -> Acquired {
        let acquired = match self.free.pop() {
            Some(index) => Acquired::Pooled(self.handle(Slot::Pooled(index))),
            None => {
                let index = match self.fallback_free.pop() {
                    Some(index) => {
                        self.fallback[index] = Vec3::zeros();
                        index
                    }
                    None => {
                        self.fallback.push(Vec3::zeros());
                        self.fallback.len() - 1
                    }
                };
                self.frame_fallbacks += 1;
                self.total_fallbacks += 1;
                debug!(
                    pool = %self.label,
                    capacity = self.capacity(),
                    overflow = self.live_fallbacks(),
                    "Vec3 pool exhausted, handing out fallback buffer"
                );
                Acquired::Fallback(self.handle(Slot::Fallback(index)))
            }
        };
        self.high_water = self
            .high_water
            .max(self.in_use() + self.live_fallbacks());
        acquired
    }

    /// Check out a pooled buffer, refusing to fall back to allocation.
    ///
    /// # Errors
    ///
    /// Returns [`PoolErrorCode::Exhausted`] when no slot is free.
    pub fn try_acquire(&mut self) -> Result<Vec3Handle, PoolError> {
        if self.free.is_empty() {
            return Err(PoolError::exhausted(&self.label, self.capacity()));
        }
        Ok(self.acquire().into_handle())
    }

    /// Give a buffer back to the pool.
    ///
    /// # Errors
    ///
    /// Returns [`PoolErrorCode::StaleHandle`] if the handle predates the
    /// last reset, or [`PoolErrorCode::ForeignHandle`] if it came from
    /// another pool. The pool is left unchanged in both cases.
    #[allow(clippy::needless_pass_by_value)] // consuming the handle is the point
    pub fn release(&mut self, handle: Vec3Handle) -> Result<Released, PoolError> {
        let slot = match self.resolve(&handle) {
            Ok(slot) => slot,
            Err(e) => {
                warn!(pool = %self.label, error = %e, "Rejected vec3 release");
                return Err(e);
            }
        };

        match slot {
            Slot::Pooled(index) => {
                // A live pooled handle is unique for its epoch, so its slot is checked out
                debug_assert!(self.free.len() < self.slots.len());
                self.free.push(index);
                Ok(Released::Returned)
            }
            Slot::Fallback(index) => {
                trace!(pool = %self.label, "Parked released fallback buffer");
                self.fallback_free.push(index);
                Ok(Released::Dropped)
            }
        }
    }

    /// Borrow the buffer behind a handle.
    ///
    /// # Errors
    ///
    /// Same validation as [`Vec3Pool::release`].
    pub fn get(&self, handle: &Vec3Handle) -> Result<&Vec3, PoolError> {
        Ok(match self.resolve(handle)? {
            Slot::Pooled(index) => &self.slots[index],
            Slot::Fallback(index) => &self.fallback[index],
        })
    }

    /// Mutably borrow the buffer behind a handle.
    ///
    /// # Errors
    ///
    /// Same validation as [`Vec3Pool::release`].
    pub fn get_mut(&mut self, handle: &Vec3Handle) -> Result<&mut Vec3, PoolError> {
        Ok(match self.resolve(handle)? {
            Slot::Pooled(index) => &mut self.slots[index],
            Slot::Fallback(index) => &mut self.fallback[index],
        })
    }

    /// Make every slot available again and start a new frame.
    ///
    /// Discards this frame's fallback buffers. Handles acquired before the
    /// reset are invalidated.
    pub fn reset(&mut self) {
        if self.frame_fallbacks > 0 {
            warn!(
                pool = %self.label,
                capacity = self.capacity(),
                fallbacks = self.frame_fallbacks,
                "Frame exceeded vec3 pool capacity"
            );
        }
        self.free.clear();
        self.free.extend(0..self.slots.len());
        self.fallback.clear();
        self.fallback_free.clear();
        self.frame_fallbacks = 0;
        self.epoch = self.epoch.wrapping_add(1);
        self.frames += 1;
    }

    /// Start a frame scope that resets the pool when dropped.
    pub fn frame(&mut self) -> FrameGuard<'_> {
        FrameGuard::new(self)
    }

    /// Number of free pooled slots.
    pub fn available(&self) -> usize {
        self.free.len()
    }

    /// Number of preallocated slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of pooled slots currently checked out.
    pub fn in_use(&self) -> usize {
        self.capacity() - self.available()
    }

    /// Number of fallback buffers currently checked out.
    pub fn live_fallbacks(&self) -> usize {
        self.fallback.len() - self.fallback_free.len()
    }

    /// Peak simultaneous demand since construction, fallbacks included.
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// The label given in the pool's configuration.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Snapshot of the pool's usage counters.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            capacity: self.capacity(),
            available: self.available(),
            high_water: self.high_water,
            live_fallbacks: self.live_fallbacks(),
            fallback_buffers: self.fallback.len(),
            frame_fallbacks: self.frame_fallbacks,
            total_fallbacks: self.total_fallbacks,
            frames: self.frames,
        }
    }

    fn handle(&self, slot: Slot) -> Vec3Handle {
        Vec3Handle {
            pool: self.id,
            epoch: self.epoch,
            slot,
        }
    }

    fn resolve(&self, handle: &Vec3Handle) -> Result<Slot, PoolError> {
        if handle.pool != self.id {
            return Err(PoolError::foreign_handle(&self.label));
        }
        if handle.epoch != self.epoch {
            return Err(PoolError::stale_handle(
                &self.label,
                handle.epoch,
                self.epoch,
            ));
        }
        Ok(handle.slot)
    }
}

impl Default for Vec3Pool {
    fn default() -> Self {
        Self::from_config(&PoolConfig::default())
    }
}

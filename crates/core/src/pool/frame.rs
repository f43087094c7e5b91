//! Frame-scoped pool usage.
//!
//! A frame borrows freely from the pool and gives everything back at once
//! when it ends, arena style. [`FrameGuard`] ties the reset to scope exit,
//! so it also runs when the frame's work returns early or panics.

use super::Vec3Pool;
use std::ops::{Deref, DerefMut};

/// RAII frame scope over a [`Vec3Pool`].
///
/// Derefs to the pool; resets it when dropped.
#[derive(Debug)]
pub struct FrameGuard<'a> {
    pool: &'a mut Vec3Pool,
}

impl<'a> FrameGuard<'a> {
    pub(super) fn new(pool: &'a mut Vec3Pool) -> Self {
        Self { pool }
    }
}

impl Deref for FrameGuard<'_> {
    type Target = Vec3Pool;

    fn deref(&self) -> &Vec3Pool {
        self.pool
    }
}

impl DerefMut for FrameGuard<'_> {
    fn deref_mut(&mut self) -> &mut Vec3Pool {
        self.pool
    }
}

impl Drop for FrameGuard<'_> {
    fn drop(&mut self) {
        self.pool.reset();
    }
}

/// Run `work` against `pool`, then reset the pool.
///
/// The reset happens however `work` finishes: normal return, returning an
/// `Err`, or panicking. Whatever `work` returns is passed back unchanged,
/// and a panic keeps unwinding after the reset.
pub fn with_vec3_frame<R, F>(pool: &mut Vec3Pool, work: F) -> R
where
    F: FnOnce(&mut Vec3Pool) -> R,
{
    let mut frame = pool.frame();
    work(&mut frame)
}

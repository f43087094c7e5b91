//! Pool error codes and messages.

use std::fmt;

/// Failure categories reported by [`super::Vec3Pool`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolErrorCode {
    /// Every pooled slot is checked out and the caller asked for no fallback.
    Exhausted,

    /// Handle was acquired before the most recent reset.
    ///
    /// The slot it names may already belong to someone else.
    StaleHandle,

    /// Handle was acquired from a different pool.
    ForeignHandle,
}

impl fmt::Display for PoolErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Exhausted => "pool exhausted",
            Self::StaleHandle => "stale handle",
            Self::ForeignHandle => "foreign handle",
        };
        f.write_str(s)
    }
}

/// Error returned by fallible pool operations.
///
/// Pairs a [`PoolErrorCode`] with a diagnostic message naming the pool.
///
/// # Example
/// ```rust
/// use arcade_math_core::pool::{PoolErrorCode, Vec3Pool};
///
/// let mut pool = Vec3Pool::new(0);
/// let err = pool.try_acquire().unwrap_err();
/// assert_eq!(err.code(), PoolErrorCode::Exhausted);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolError {
    code: PoolErrorCode,
    msg: String,
}

impl PoolError {
    /// Create error for an acquire that found no free slot.
    ///
    /// # Arguments
    /// * `label` - The label of the exhausted pool
    /// * `capacity` - The pool's slot count
    pub fn exhausted(label: &str, capacity: usize) -> Self {
        Self {
            code: PoolErrorCode::Exhausted,
            msg: format!("Pool '{label}' has no free slots (capacity {capacity})"),
        }
    }

    /// Create error for a handle acquired in an earlier frame.
    ///
    /// # Arguments
    /// * `label` - The label of the pool
    /// * `handle_epoch` - The frame epoch stamped on the handle
    /// * `pool_epoch` - The pool's current frame epoch
    pub fn stale_handle(label: &str, handle_epoch: u32, pool_epoch: u32) -> Self {
        Self {
            code: PoolErrorCode::StaleHandle,
            msg: format!(
                "Handle from frame {handle_epoch} used in pool '{label}' at frame {pool_epoch}"
            ),
        }
    }

    /// Create error for a handle that belongs to another pool.
    pub fn foreign_handle(label: &str) -> Self {
        Self {
            code: PoolErrorCode::ForeignHandle,
            msg: format!("Handle was not acquired from pool '{label}'"),
        }
    }

    /// Returns the error category.
    pub fn code(&self) -> PoolErrorCode {
        self.code
    }

    /// Returns the human-readable error message.
    pub fn msg(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.msg)
    }
}

impl std::error::Error for PoolError {}

impl From<PoolError> for PoolErrorCode {
    fn from(error: PoolError) -> Self {
        error.code
    }
}

//! Pool sizing configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a [`super::Vec3Pool`].
///
/// Every field has a default, so a partial document such as
/// `{"capacity": 256}` deserializes cleanly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Number of preallocated slots.
    ///
    /// Size this from the pool's high-water mark
    /// ([`super::PoolStats::high_water`]) under a representative load.
    pub capacity: usize,

    /// Name attached to every log event emitted by the pool.
    pub label: String,
}

impl Default for PoolConfig {
    /// 64 slots labelled `"vec3"`.
    fn default() -> Self {
        Self {
            capacity: 64,
            label: String::from("vec3"),
        }
    }
}

impl PoolConfig {
    /// Create a configuration with the given capacity and default label.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Replace the log label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

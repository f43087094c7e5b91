//! Arcade Math Core Library
//!
//! Allocation-free 3D vector math for game-engine extensions that run
//! inside a host's per-frame loop, plus a fixed-capacity pool of scratch
//! vectors so that loop never has to allocate.
//!
//! ## Modules
//!
//! - [`vector_math`] - dot, cross, add/sub/scale, normalize on [`Vec3`],
//!   with by-value and write-into-`out` variants, and offset-addressed
//!   helpers for packed `[f32]` buffers
//! - [`pool`] - [`Vec3Pool`] with owned handles, explicit fallback
//!   reporting and frame-scoped reset ([`with_vec3_frame`])
//! - [`shader`] - [`VertShader`] / [`FragShader`] call contracts for host code
//!
//! Everything is single-threaded and synchronous.

// Core types and utilities
pub mod core_types;

pub mod pool;
pub mod shader;
pub mod vector_math;

// Re-export core types
pub use core_types::Vec3;

// Re-export pool types
pub use pool::{
    with_vec3_frame, Acquired, FrameGuard, PoolConfig, PoolError, PoolErrorCode, PoolStats,
    Released, Vec3Handle, Vec3Pool,
};

// Re-export shader contracts
pub use shader::{FragShader, Uniforms, VertShader};

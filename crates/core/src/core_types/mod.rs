//! Core types and utilities

pub mod vec3;

pub use vec3::{as_flat, as_flat_mut, Vec3, VEC3_COMPONENTS};

//! Vector type alias for 3D positions, directions and normals.

use nalgebra::Vector3;

/// 3D vector type used by every math helper and pool slot.
///
/// This is a simple alias for `nalgebra::Vector3<f32>`: a fixed-size,
/// `Copy` triple laid out as three contiguous `f32` values, so a slice of
/// `Vec3` can be viewed as a packed `[f32]` buffer without copying.
pub type Vec3 = Vector3<f32>;

/// Number of scalar components in a [`Vec3`].
pub const VEC3_COMPONENTS: usize = 3;

/// View a slice of vectors as a packed `x0 y0 z0 x1 y1 z1 ...` buffer.
///
/// The returned slice has `3 * vectors.len()` elements and is suitable for
/// the offset-addressed helpers in [`crate::vector_math`].
#[inline]
pub fn as_flat(vectors: &[Vec3]) -> &[f32] {
    bytemuck::cast_slice(vectors)
}

/// Mutable counterpart of [`as_flat`].
#[inline]
pub fn as_flat_mut(vectors: &mut [Vec3]) -> &mut [f32] {
    bytemuck::cast_slice_mut(vectors)
}

//! Allocation-free 3D vector arithmetic.
//!
//! Every helper here is either pure (returns a new [`Vec3`] by value) or
//! writes its result into a caller-supplied `out` vector. Nothing touches
//! the heap, so these are safe to call from a per-frame hot loop with
//! buffers drawn from a [`crate::pool::Vec3Pool`].
//!
//! Helpers suffixed `_to` write into `out`; helpers suffixed `_at` address
//! three consecutive elements of a packed `[f32]` buffer (see
//! [`crate::core_types::as_flat`]).

use crate::core_types::{Vec3, VEC3_COMPONENTS};

/// Dot product `a.x*b.x + a.y*b.y + a.z*b.z`.
#[inline]
pub fn dot(a: &Vec3, b: &Vec3) -> f32 {
    a.dot(b)
}

/// Scalar 2D cross product of the XY components: `a.x*b.y - a.y*b.x`.
///
/// This is the Z component of the full cross product only. Use
/// [`cross3`] or [`cross3_to`] for the 3D vector.
#[inline]
pub fn cross_2d(a: &Vec3, b: &Vec3) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Overwrite `out` with literal components.
#[inline]
pub fn set3(out: &mut Vec3, x: f32, y: f32, z: f32) -> &mut Vec3 {
    out.x = x;
    out.y = y;
    out.z = z;
    out
}

/// Copy the components of `src` into `out`.
#[inline]
pub fn copy3<'a>(out: &'a mut Vec3, src: &Vec3) -> &'a mut Vec3 {
    out.copy_from(src);
    out
}

/// Dot product over three consecutive elements of two packed buffers.
///
/// Reads `a[ai..ai + 3]` and `b[bi..bi + 3]`. Returns `None` if either
/// range runs past the end of its buffer.
#[inline]
pub fn dot3_at(a: &[f32], ai: usize, b: &[f32], bi: usize) -> Option<f32> {
    let a = a.get(ai..ai.checked_add(VEC3_COMPONENTS)?)?;
    let b = b.get(bi..bi.checked_add(VEC3_COMPONENTS)?)?;
    Some(a[0] * b[0] + a[1] * b[1] + a[2] * b[2])
}

/// Read three consecutive elements of a packed buffer as a [`Vec3`].
#[inline]
pub fn load3_at(buffer: &[f32], offset: usize) -> Option<Vec3> {
    let c = buffer.get(offset..offset.checked_add(VEC3_COMPONENTS)?)?;
    Some(Vec3::new(c[0], c[1], c[2]))
}

/// Write `v` into three consecutive elements of a packed buffer.
///
/// Returns `false` (and leaves the buffer untouched) if the range runs
/// past the end of the buffer.
#[inline]
pub fn store3_at(buffer: &mut [f32], offset: usize, v: &Vec3) -> bool {
    let Some(end) = offset.checked_add(VEC3_COMPONENTS) else {
        return false;
    };
    match buffer.get_mut(offset..end) {
        Some(c) => {
            c.copy_from_slice(v.as_slice());
            true
        }
        None => false,
    }
}

/// `a + b`
#[inline]
pub fn add3(a: &Vec3, b: &Vec3) -> Vec3 {
    a + b
}

/// `out = a + b`
#[inline]
pub fn add3_to<'a>(out: &'a mut Vec3, a: &Vec3, b: &Vec3) -> &'a mut Vec3 {
    out.x = a.x + b.x;
    out.y = a.y + b.y;
    out.z = a.z + b.z;
    out
}

/// `a - b`
#[inline]
pub fn sub3(a: &Vec3, b: &Vec3) -> Vec3 {
    a - b
}

/// `out = a - b`
#[inline]
pub fn sub3_to<'a>(out: &'a mut Vec3, a: &Vec3, b: &Vec3) -> &'a mut Vec3 {
    out.x = a.x - b.x;
    out.y = a.y - b.y;
    out.z = a.z - b.z;
    out
}

/// `a * s`
#[inline]
pub fn scale3(a: &Vec3, s: f32) -> Vec3 {
    a * s
}

/// `out = a * s`
#[inline]
pub fn scale3_to<'a>(out: &'a mut Vec3, a: &Vec3, s: f32) -> &'a mut Vec3 {
    out.x = a.x * s;
    out.y = a.y * s;
    out.z = a.z * s;
    out
}

/// Full 3D cross product `a × b`.
#[inline]
pub fn cross3(a: &Vec3, b: &Vec3) -> Vec3 {
    a.cross(b)
}

/// `out = a × b`
#[inline]
pub fn cross3_to<'a>(out: &'a mut Vec3, a: &Vec3, b: &Vec3) -> &'a mut Vec3 {
    out.x = a.y * b.z - a.z * b.y;
    out.y = a.z * b.x - a.x * b.z;
    out.z = a.x * b.y - a.y * b.x;
    out
}

/// `a = a × b`
///
/// The output aliases the left operand, so all components are read into
/// locals before any is written.
#[inline]
pub fn cross3_in_place<'a>(a: &'a mut Vec3, b: &Vec3) -> &'a mut Vec3 {
    let (ax, ay, az) = (a.x, a.y, a.z);
    let (bx, by, bz) = (b.x, b.y, b.z);
    a.x = ay * bz - az * by;
    a.y = az * bx - ax * bz;
    a.z = ax * by - ay * bx;
    a
}

/// Squared length `x² + y² + z²`.
#[inline]
pub fn len_sq3(v: &Vec3) -> f32 {
    v.x * v.x + v.y * v.y + v.z * v.z
}

/// Scale `v` to unit length in place.
///
/// A vector with squared length `<= 0` is returned unchanged.
#[inline]
pub fn normalize3_in_place(v: &mut Vec3) -> &mut Vec3 {
    let len_sq = len_sq3(v);
    if len_sq <= 0.0 {
        return v;
    }
    let inv = 1.0 / len_sq.sqrt();
    v.x *= inv;
    v.y *= inv;
    v.z *= inv;
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dot_of_axes_is_zero() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(dot(&x, &y), 0.0);
        assert_eq!(dot(&x, &x), 1.0);
    }

    #[test]
    fn test_cross_2d_ignores_z() {
        let a = Vec3::new(2.0, 3.0, 100.0);
        let b = Vec3::new(5.0, 7.0, -100.0);
        // 2*7 - 3*5
        assert_eq!(cross_2d(&a, &b), -1.0);
        assert_eq!(cross_2d(&a, &b), cross3(&a, &b).z);
    }

    #[test]
    fn test_cross3_to_of_axes() {
        let mut out = Vec3::new(9.0, 9.0, 9.0);
        cross3_to(&mut out, &Vec3::x(), &Vec3::y());
        assert_relative_eq!(out, Vec3::z());
    }

    #[test]
    fn test_cross3_in_place_matches_cross3() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 2.0);
        let mut aliased = a;
        cross3_in_place(&mut aliased, &b);
        assert_relative_eq!(aliased, cross3(&a, &b));
    }

    #[test]
    fn test_elementwise_to_variants_match_allocating() {
        let a = Vec3::new(1.5, -2.0, 4.0);
        let b = Vec3::new(0.5, 3.0, -1.0);
        let mut out = Vec3::zeros();

        add3_to(&mut out, &a, &b);
        assert_eq!(out, add3(&a, &b));
        assert_eq!(out, Vec3::new(2.0, 1.0, 3.0));

        sub3_to(&mut out, &a, &b);
        assert_eq!(out, sub3(&a, &b));
        assert_eq!(out, Vec3::new(1.0, -5.0, 5.0));

        scale3_to(&mut out, &a, 2.0);
        assert_eq!(out, scale3(&a, 2.0));
        assert_eq!(out, Vec3::new(3.0, -4.0, 8.0));
    }

    #[test]
    fn test_set3_and_copy3() {
        let mut out = Vec3::zeros();
        set3(&mut out, 1.0, 2.0, 3.0);
        assert_eq!(out, Vec3::new(1.0, 2.0, 3.0));

        let src = Vec3::new(-1.0, -2.0, -3.0);
        copy3(&mut out, &src);
        assert_eq!(out, src);
    }

    #[test]
    fn test_len_sq3() {
        assert_eq!(len_sq3(&Vec3::new(1.0, 2.0, 2.0)), 9.0);
        assert_eq!(len_sq3(&Vec3::zeros()), 0.0);
    }

    #[test]
    fn test_normalize_nonzero_is_unit() {
        let mut v = Vec3::new(3.0, 0.0, 4.0);
        normalize3_in_place(&mut v);
        assert_relative_eq!(len_sq3(&v), 1.0, epsilon = 1e-6);
        assert_relative_eq!(v, Vec3::new(0.6, 0.0, 0.8), epsilon = 1e-6);
    }

    #[test]
    fn test_normalize_zero_is_unchanged() {
        let mut v = Vec3::zeros();
        normalize3_in_place(&mut v);
        assert_eq!(v, Vec3::zeros());
    }

    #[test]
    fn test_dot3_at_packed_offsets() {
        // Two vectors packed back to back, plus one with a leading pad
        let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let b = [0.0, 1.0, 1.0, 1.0];
        assert_eq!(dot3_at(&a, 0, &b, 1), Some(6.0));
        assert_eq!(dot3_at(&a, 3, &b, 1), Some(15.0));
    }

    #[test]
    fn test_dot3_at_out_of_range_is_none() {
        let a = [1.0, 2.0, 3.0];
        assert_eq!(dot3_at(&a, 1, &a, 0), None);
        assert_eq!(dot3_at(&a, 0, &a, usize::MAX), None);
    }

    #[test]
    fn test_load_and_store_at() {
        let mut buffer = [0.0; 7];
        assert!(store3_at(&mut buffer, 4, &Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(buffer, [0.0, 0.0, 0.0, 0.0, 1.0, 2.0, 3.0]);
        assert_eq!(load3_at(&buffer, 4), Some(Vec3::new(1.0, 2.0, 3.0)));

        assert!(!store3_at(&mut buffer, 5, &Vec3::zeros()));
        assert_eq!(buffer[5], 2.0);
        assert_eq!(load3_at(&buffer, 5), None);
    }
}

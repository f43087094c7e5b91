//! Shader call contracts
//!
//! This module defines the signatures host code must satisfy to plug
//! per-vertex and per-pixel functions into a renderer. There is no
//! pipeline here: nothing in this crate invokes a shader. Any closure with
//! a matching signature implements the traits.

use crate::core_types::Vec3;
use rustc_hash::FxHashMap;

/// Named uniform values shared by every invocation of a draw.
///
/// Each uniform is a flat `f32` array (a scalar, a packed `Vec3`, a 3x3
/// matrix, ...). Names double as slots: the renderer and the shader agree
/// on them out of band.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Uniforms {
    values: FxHashMap<String, Vec<f32>>,
}

impl Uniforms {
    /// Create an empty uniform set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or replace a uniform, returning the previous value.
    pub fn set(&mut self, name: impl Into<String>, values: Vec<f32>) -> Option<Vec<f32>> {
        self.values.insert(name.into(), values)
    }

    /// Set a uniform to the components of a vector.
    pub fn set_vec3(&mut self, name: impl Into<String>, v: &Vec3) -> Option<Vec<f32>> {
        self.set(name, v.as_slice().to_vec())
    }

    /// Look up a uniform by name.
    pub fn get(&self, name: &str) -> Option<&[f32]> {
        self.values.get(name).map(Vec::as_slice)
    }

    /// Remove a uniform, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<Vec<f32>> {
        self.values.remove(name)
    }

    /// Number of uniforms set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no uniforms are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, values)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f32])> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Per-vertex shading function.
///
/// Implementations write their results into `out` and return nothing.
pub trait VertShader {
    /// Shade one vertex.
    ///
    /// # Arguments
    ///
    /// * `out` - Output buffer; layout is agreed between shader and renderer
    /// * `input` - Packed per-vertex attributes
    /// * `normal` - Vertex normal
    /// * `uniforms` - Values shared by the whole draw
    fn shade(&self, out: &mut [f32], input: &[f32], normal: &Vec3, uniforms: &Uniforms);
}

impl<F> VertShader for F
where
    F: Fn(&mut [f32], &[f32], &Vec3, &Uniforms),
{
    #[inline]
    fn shade(&self, out: &mut [f32], input: &[f32], normal: &Vec3, uniforms: &Uniforms) {
        self(out, input, normal, uniforms);
    }
}

/// Per-pixel shading function.
///
/// Takes one packed numeric input (for example interpolated attributes
/// quantized into a `u32`) and returns one packed 8-bit colour.
pub trait FragShader {
    /// Shade one fragment.
    fn shade(&self, input: u32) -> u8;
}

impl<F> FragShader for F
where
    F: Fn(u32) -> u8,
{
    #[inline]
    fn shade(&self, input: u32) -> u8 {
        self(input)
    }
}

#![warn(missing_docs)]

//! Math types for the rayrect intersection kernel.
//!
//! Thin wrappers around nalgebra providing the single-precision point and
//! vector types shared by the CPU reference kernel and the GPU buffers.

use nalgebra::Vector3;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f32>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f32>;

/// Tolerance constants for floating-point comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Absolute tolerance for scalar and distance comparisons.
    pub linear: f32,
}

impl Tolerance {
    /// Default single-precision tolerance.
    pub const DEFAULT: Self = Self { linear: 1e-5 };

    /// Check if two scalars are effectively equal.
    pub fn scalars_equal(&self, a: f32, b: f32) -> bool {
        (a - b).abs() < self.linear
    }

    /// Check if a scalar is effectively zero.
    pub fn is_zero(&self, d: f32) -> bool {
        d.abs() < self.linear
    }

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

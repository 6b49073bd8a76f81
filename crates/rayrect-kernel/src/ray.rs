//! Ray representation and structure-of-arrays ray batches.

use rayrect_math::{Point3, Vec3};

/// A ray in 3D space defined by origin and direction.
///
/// The direction doubles as a velocity: it is deliberately not normalized,
/// so the intersection time `t` is parameterized by the caller's magnitude
/// (`point = origin + t * direction`).
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Direction of the ray, in units per time step.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray from origin and direction.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f32) -> Point3 {
        self.origin + t * self.direction
    }
}

/// A batch of rays stored as six parallel coordinate arrays.
///
/// The layout matches what the GPU kernel consumes: one array per coordinate
/// component, index-aligned across all six. The arrays always have identical
/// length; the only way to grow a batch is [`RayBatch::push`], which appends
/// to all of them.
#[derive(Debug, Clone, Default)]
pub struct RayBatch {
    rx: Vec<f32>,
    ry: Vec<f32>,
    rz: Vec<f32>,
    vx: Vec<f32>,
    vy: Vec<f32>,
    vz: Vec<f32>,
}

impl RayBatch {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty batch with room for `n` rays.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            rx: Vec::with_capacity(n),
            ry: Vec::with_capacity(n),
            rz: Vec::with_capacity(n),
            vx: Vec::with_capacity(n),
            vy: Vec::with_capacity(n),
            vz: Vec::with_capacity(n),
        }
    }

    /// Append one ray to the batch.
    pub fn push(&mut self, origin: Point3, direction: Vec3) {
        self.rx.push(origin.x);
        self.ry.push(origin.y);
        self.rz.push(origin.z);
        self.vx.push(direction.x);
        self.vy.push(direction.y);
        self.vz.push(direction.z);
    }

    /// Number of rays in the batch.
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    /// Whether the batch contains no rays.
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }

    /// Reconstruct the ray at index `i`.
    ///
    /// # Panics
    /// Panics if `i` is out of bounds.
    pub fn ray(&self, i: usize) -> Ray {
        Ray::new(
            Point3::new(self.rx[i], self.ry[i], self.rz[i]),
            Vec3::new(self.vx[i], self.vy[i], self.vz[i]),
        )
    }

    /// Iterate over the rays in the batch.
    pub fn rays(&self) -> impl Iterator<Item = Ray> + '_ {
        (0..self.len()).map(|i| self.ray(i))
    }

    /// Origin x components, one per ray.
    pub fn origins_x(&self) -> &[f32] {
        &self.rx
    }

    /// Origin y components, one per ray.
    pub fn origins_y(&self) -> &[f32] {
        &self.ry
    }

    /// Origin z components, one per ray.
    pub fn origins_z(&self) -> &[f32] {
        &self.rz
    }

    /// Direction x components, one per ray.
    pub fn directions_x(&self) -> &[f32] {
        &self.vx
    }

    /// Direction y components, one per ray.
    pub fn directions_y(&self) -> &[f32] {
        &self.vy
    }

    /// Direction z components, one per ray.
    pub fn directions_z(&self) -> &[f32] {
        &self.vz
    }
}

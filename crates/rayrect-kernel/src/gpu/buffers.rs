//! GPU-compatible parameter layout for the intersection shader.

use bytemuck::{Pod, Zeroable};

use crate::rect::Rect;

/// Rectangle and batch parameters for the compute shader.
///
/// Matches the WGSL uniform block layout: scalars first, 16-byte aligned via
/// explicit trailing padding.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct RectParams {
    /// Coordinate of the rectangle's plane along the normal axis.
    pub plane: f32,
    /// In-plane bound along the first (cyclic) in-plane axis.
    pub extent_u: f32,
    /// In-plane bound along the second (cyclic) in-plane axis.
    pub extent_v: f32,
    /// Component index of the plane-normal axis (0, 1 or 2).
    pub normal_axis: u32,
    /// Number of rays in the batch.
    pub ray_count: u32,
    /// Padding to a 16-byte multiple.
    pub _pad: [u32; 3],
}

impl RectParams {
    /// Pack a rectangle and batch size into the shader parameter block.
    pub fn new(rect: &Rect, ray_count: usize) -> Self {
        let (extent_u, extent_v) = rect.bounds();
        Self {
            plane: rect.plane_coord(),
            extent_u,
            extent_v,
            normal_axis: rect.normal_axis.index() as u32,
            ray_count: ray_count as u32,
            _pad: [0; 3],
        }
    }
}

//! GPU compute path for the batched intersection kernel.
//!
//! Dispatches one compute shader invocation per ray; the WGSL source in
//! [`shaders`] mirrors the CPU reference in [`crate::intersect`] exactly.

mod buffers;
mod pipeline;
pub mod shaders;

pub use buffers::RectParams;
pub use pipeline::{intersect_rectangle_gpu, intersect_rectangle_gpu_blocking};

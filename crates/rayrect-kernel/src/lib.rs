#![warn(missing_docs)]

//! Batched ray/rectangle intersection kernel.
//!
//! Computes, for a batch of N rays, the parametric time at which each ray
//! crosses a bounded axis-aligned rectangle, or [`NO_HIT`] when it does not.
//! Every ray is processed independently: the CPU reference implementation
//! iterates the batch, and the GPU path (behind the `gpu` feature) dispatches
//! one compute invocation per ray with identical per-ray semantics.
//!
//! # Architecture
//!
//! - [`Ray`] / [`RayBatch`] - single ray and structure-of-arrays batch
//! - [`Rect`] - axis-aligned rectangle with a selectable plane-normal axis
//! - [`intersect`] - per-ray time primitive and batched CPU reference
//! - [`gpu`] - wgpu compute pipeline mirroring the CPU reference
//!
//! # Example
//!
//! ```
//! use rayrect_kernel::{intersect_rectangle, Axis, RayBatch, Rect};
//! use rayrect_math::{Point3, Vec3};
//!
//! let rect = Rect::new(2.0, 2.0, 5.0, Axis::Z);
//! let mut batch = RayBatch::new();
//! batch.push(Point3::new(1.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
//!
//! let ts = intersect_rectangle(&batch, &rect);
//! assert!((ts[0] - 5.0).abs() < 1e-6);
//! ```

mod ray;
mod rect;
pub mod intersect;

#[cfg(feature = "gpu")]
pub mod gpu;

pub use intersect::{hit_time, intersect_rectangle, plane_time, NO_HIT};
pub use ray::{Ray, RayBatch};
pub use rect::{Axis, Rect};

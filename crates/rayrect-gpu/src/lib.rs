#![warn(missing_docs)]

//! GPU device management for the rayrect intersection kernel.
//!
//! Provides a process-wide wgpu device and compute queue. The intersection
//! pipeline itself lives in `rayrect-kernel` behind its `gpu` feature; this
//! crate only owns adapter selection and the shared context.

mod context;

pub use context::{GpuContext, GpuError};

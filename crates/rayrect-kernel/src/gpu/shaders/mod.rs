//! WGSL shader sources for the intersection kernel.

/// The batched ray/rectangle intersection compute shader.
pub const RECT_INTERSECT_SHADER: &str = include_str!("rect_intersect.wgsl");

//! Ray/rectangle intersection: per-ray time primitive and batched CPU
//! reference.
//!
//! This is the reference semantics the GPU compute shader mirrors: any change
//! here must be reflected in `gpu/shaders/rect_intersect.wgsl`.

use crate::ray::{Ray, RayBatch};
use crate::rect::{Axis, Rect};

/// Sentinel written for rays that do not hit the rectangle.
///
/// Valid intersection times are always non-negative, so any negative value is
/// unambiguous; `-1.0` survives the f32 round trip through the GPU buffer
/// exactly.
pub const NO_HIT: f32 = -1.0;

/// Direction components smaller than this count as parallel to the plane.
const PARALLEL_EPS: f32 = 1e-6;

/// Time at which `ray` reaches the plane `coordinate = plane` along `axis`.
///
/// Returns the raw parametric time, which may be negative when the plane is
/// behind the ray's origin; rejecting that is the caller's responsibility.
/// Returns [`NO_HIT`] when the direction component along `axis` is
/// numerically zero (ray parallel to the plane) or the division does not
/// produce a finite value.
#[inline]
pub fn plane_time(ray: &Ray, plane: f32, axis: Axis) -> f32 {
    let denom = ray.direction[axis.index()];
    if denom.abs() < PARALLEL_EPS {
        return NO_HIT;
    }

    let t = (plane - ray.origin[axis.index()]) / denom;
    if !t.is_finite() {
        return NO_HIT;
    }
    t
}

/// Intersect a single ray with a rectangle.
///
/// Returns the intersection time, or [`NO_HIT`] if the ray is parallel to
/// the rectangle's plane, reaches it at negative time, or crosses the plane
/// outside the rectangle's bounds.
pub fn hit_time(ray: &Ray, rect: &Rect) -> f32 {
    let axis = rect.normal_axis;
    let t = plane_time(ray, rect.plane_coord(), axis);
    if t < 0.0 {
        // Covers both the parallel sentinel and behind-origin intersections.
        return NO_HIT;
    }

    let p = ray.at(t);
    let (u_axis, v_axis) = axis.in_plane();
    let (extent_u, extent_v) = rect.bounds();
    let u = p[u_axis.index()];
    let v = p[v_axis.index()];
    if u < 0.0 || u > extent_u || v < 0.0 || v > extent_v {
        return NO_HIT;
    }
    t
}

/// Intersect a batch of rays with a rectangle on the CPU.
///
/// Returns one time per ray, index-aligned with the batch; misses are
/// [`NO_HIT`]. Each ray is computed independently, so the output is
/// order-independent and deterministic for identical inputs.
pub fn intersect_rectangle(batch: &RayBatch, rect: &Rect) -> Vec<f32> {
    batch.rays().map(|ray| hit_time(&ray, rect)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayrect_math::{Point3, Vec3};

    #[test]
    fn test_plane_time_direct() {
        let ray = Ray::new(Point3::new(0.5, 0.5, 0.0), Vec3::new(0.0, 0.0, 1.0));
        let t = plane_time(&ray, 5.0, Axis::Z);
        assert!((t - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_plane_time_scaled_by_speed() {
        // Twice the speed reaches the plane in half the time.
        let ray = Ray::new(Point3::new(0.5, 0.5, 0.0), Vec3::new(0.0, 0.0, 2.0));
        let t = plane_time(&ray, 5.0, Axis::Z);
        assert!((t - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_plane_time_parallel_is_sentinel() {
        let ray = Ray::new(Point3::new(0.5, 0.5, 0.0), Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(plane_time(&ray, 5.0, Axis::Z), NO_HIT);
    }

    #[test]
    fn test_plane_time_overflow_is_sentinel() {
        // Distance / speed overflows f32; the sentinel comes back, not +inf.
        let ray = Ray::new(Point3::new(0.0, 0.0, -3.0e38), Vec3::new(0.0, 0.0, 1e-6));
        assert_eq!(plane_time(&ray, 5.0, Axis::Z), NO_HIT);
    }

    #[test]
    fn test_plane_time_negative_passed_through() {
        // Plane behind the origin: the raw time is negative, not the sentinel.
        let ray = Ray::new(Point3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, 1.0));
        let t = plane_time(&ray, 5.0, Axis::Z);
        assert!((t + 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_hit_center() {
        let rect = Rect::new(2.0, 2.0, 5.0, Axis::Z);
        let ray = Ray::new(Point3::new(1.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        let t = hit_time(&ray, &rect);
        assert!((t - 5.0).abs() < 1e-6);

        // The hit point lies inside [0,X] x [0,Y].
        let p = ray.at(t);
        assert!(p.x >= 0.0 && p.x <= 2.0);
        assert!(p.y >= 0.0 && p.y <= 2.0);
    }

    #[test]
    fn test_miss_parallel() {
        let rect = Rect::new(2.0, 2.0, 5.0, Axis::Z);
        let ray = Ray::new(Point3::new(1.0, 1.0, 0.0), Vec3::new(0.3, -0.7, 0.0));
        assert_eq!(hit_time(&ray, &rect), NO_HIT);
    }

    #[test]
    fn test_miss_behind_origin() {
        let rect = Rect::new(2.0, 2.0, 5.0, Axis::Z);
        let ray = Ray::new(Point3::new(1.0, 1.0, 10.0), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(hit_time(&ray, &rect), NO_HIT);
    }

    #[test]
    fn test_miss_outside_bounds() {
        let rect = Rect::new(2.0, 2.0, 5.0, Axis::Z);
        // Crosses the plane at (8, 1), outside [0,2].
        let ray = Ray::new(Point3::new(8.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(hit_time(&ray, &rect), NO_HIT);
    }

    #[test]
    fn test_miss_overflowed_time() {
        // A far-away origin with a tiny normal speed overflows t to +inf;
        // the in-plane hit point then degenerates to NaN (inf * 0).
        let rect = Rect::new(2.0, 2.0, 5.0, Axis::Z);
        let ray = Ray::new(Point3::new(1.0, 1.0, -3.0e38), Vec3::new(0.0, 0.0, 1e-6));
        assert_eq!(hit_time(&ray, &rect), NO_HIT);
    }

    #[test]
    fn test_hit_on_edge_counts() {
        let rect = Rect::new(2.0, 2.0, 5.0, Axis::Z);
        let ray = Ray::new(Point3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        let t = hit_time(&ray, &rect);
        assert!((t - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_hit_x_normal_axis() {
        // Plane x = 3, in-plane axes (y, z) bounded by [0,4] x [0,2].
        let rect = Rect::new(3.0, 4.0, 2.0, Axis::X);
        let ray = Ray::new(Point3::new(0.0, 2.0, 1.0), Vec3::new(1.5, 0.0, 0.0));
        let t = hit_time(&ray, &rect);
        assert!((t - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_hit_y_normal_axis() {
        // Plane y = 4, in-plane axes (z, x) bounded by [0,2] x [0,3].
        let rect = Rect::new(3.0, 4.0, 2.0, Axis::Y);
        let ray = Ray::new(Point3::new(1.0, 0.0, 1.0), Vec3::new(0.0, 2.0, 0.0));
        let t = hit_time(&ray, &rect);
        assert!((t - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_batch_output_is_index_aligned() {
        let rect = Rect::new(2.0, 2.0, 5.0, Axis::Z);
        let mut batch = RayBatch::new();
        batch.push(Point3::new(1.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0)); // hit, t=5
        batch.push(Point3::new(1.0, 1.0, 0.0), Vec3::new(1.0, 0.0, 0.0)); // parallel
        batch.push(Point3::new(8.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0)); // off-rect
        batch.push(Point3::new(1.0, 1.0, 1.0), Vec3::new(0.0, 0.0, 2.0)); // hit, t=2

        let ts = intersect_rectangle(&batch, &rect);
        assert_eq!(ts.len(), batch.len());
        assert!((ts[0] - 5.0).abs() < 1e-6);
        assert_eq!(ts[1], NO_HIT);
        assert_eq!(ts[2], NO_HIT);
        assert!((ts[3] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_swapping_rays_swaps_only_their_outputs() {
        let rect = Rect::new(2.0, 2.0, 5.0, Axis::Z);
        let mut a = RayBatch::new();
        a.push(Point3::new(1.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        a.push(Point3::new(0.5, 0.5, 1.0), Vec3::new(0.0, 0.0, 1.0));
        a.push(Point3::new(1.0, 1.0, 0.0), Vec3::new(1.0, 0.0, 0.0));

        let mut b = RayBatch::new();
        b.push(Point3::new(0.5, 0.5, 1.0), Vec3::new(0.0, 0.0, 1.0));
        b.push(Point3::new(1.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        b.push(Point3::new(1.0, 1.0, 0.0), Vec3::new(1.0, 0.0, 0.0));

        let ta = intersect_rectangle(&a, &rect);
        let tb = intersect_rectangle(&b, &rect);
        assert_eq!(ta[0], tb[1]);
        assert_eq!(ta[1], tb[0]);
        assert_eq!(ta[2], tb[2]);
    }

    #[test]
    fn test_empty_batch() {
        let rect = Rect::new(2.0, 2.0, 5.0, Axis::Z);
        let ts = intersect_rectangle(&RayBatch::new(), &rect);
        assert!(ts.is_empty());
    }
}

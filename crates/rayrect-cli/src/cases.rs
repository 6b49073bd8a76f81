//! Named test cases dispatched by numeric ID.
//!
//! The set of cases is a closed enum: dispatch is an exhaustive match, so an
//! ID that passes validation can never reach an unhandled branch at runtime.

use log::info;
use rayrect_gpu::GpuContext;
use rayrect_kernel::gpu::intersect_rectangle_gpu_blocking;
use rayrect_kernel::{intersect_rectangle, Axis, RayBatch, Rect, NO_HIT};
use rayrect_math::{Point3, Tolerance, Vec3};

/// A runnable test case. Discriminants are the CLI test IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TestCase {
    /// Batched ray/rectangle intersection against the CPU reference, plus a
    /// GPU comparison when a device is available.
    RectangleIntersection,
    /// Vector math sanity checks.
    VectorMath,
}

impl TestCase {
    /// Every test case, in ID order.
    pub const ALL: [TestCase; 2] = [TestCase::RectangleIntersection, TestCase::VectorMath];

    /// Look up a test case by its numeric ID.
    pub fn from_id(id: usize) -> Option<Self> {
        Self::ALL.get(id).copied()
    }

    /// Numeric ID of this test case.
    pub fn id(self) -> usize {
        self as usize
    }

    /// Human-readable name, as shown in the usage text.
    pub fn name(self) -> &'static str {
        match self {
            TestCase::RectangleIntersection => "Rectangle Intersection",
            TestCase::VectorMath => "Vector Math",
        }
    }

    /// Run the test case.
    ///
    /// A failed assertion panics, aborting the whole run; there is no
    /// partial reporting or continuation.
    pub fn run(self) {
        match self {
            TestCase::RectangleIntersection => run_rectangle_intersection(),
            TestCase::VectorMath => run_vector_math(),
        }
    }
}

fn run_rectangle_intersection() {
    let tol = Tolerance::DEFAULT;
    let rect = Rect::new(2.0, 2.0, 5.0, Axis::Z);

    let center = rect.center();

    let mut batch = RayBatch::with_capacity(6);
    // Straight at the center: t equals the distance along the normal axis.
    batch.push(Point3::new(center.x, center.y, 0.0), Vec3::new(0.0, 0.0, 1.0));
    // Parallel to the plane.
    batch.push(Point3::new(1.0, 1.0, 0.0), Vec3::new(1.0, -0.5, 0.0));
    // Plane behind the origin.
    batch.push(Point3::new(1.0, 1.0, 10.0), Vec3::new(0.0, 0.0, 1.0));
    // Crosses the plane outside the rectangle bounds.
    batch.push(Point3::new(8.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
    // Double speed halves the time.
    batch.push(Point3::new(0.5, 0.5, 1.0), Vec3::new(0.0, 0.0, 2.0));
    // Distance / speed overflows f32; the time must collapse to the sentinel.
    batch.push(Point3::new(1.0, 1.0, -3.0e38), Vec3::new(0.0, 0.0, 1e-6));

    let ts = intersect_rectangle(&batch, &rect);
    assert_eq!(ts.len(), batch.len());
    assert!(
        tol.scalars_equal(ts[0], center.z),
        "center hit time: {}",
        ts[0]
    );
    assert_eq!(ts[1], NO_HIT, "parallel ray must miss");
    assert_eq!(ts[2], NO_HIT, "behind-origin intersection must miss");
    assert_eq!(ts[3], NO_HIT, "out-of-bounds crossing must miss");
    assert!(tol.scalars_equal(ts[4], 2.0), "scaled hit time: {}", ts[4]);
    assert_eq!(ts[5], NO_HIT, "overflowed time must miss");

    // The center hit lands inside [0,X] x [0,Y].
    let p = batch.ray(0).at(ts[0]);
    assert!(p.x >= 0.0 && p.x <= rect.extents[0]);
    assert!(p.y >= 0.0 && p.y <= rect.extents[1]);

    // Compare against the GPU kernel when a device is present.
    match GpuContext::init_blocking() {
        Ok(_) => {
            let gpu_ts = intersect_rectangle_gpu_blocking(&batch, &rect)
                .expect("GPU dispatch failed after device init succeeded");
            assert_eq!(gpu_ts.len(), ts.len());
            for (i, (c, g)) in ts.iter().zip(gpu_ts.iter()).enumerate() {
                assert!(
                    tol.scalars_equal(*c, *g),
                    "ray {i} diverged: cpu {c} vs gpu {g}"
                );
            }
            info!("GPU kernel matches CPU reference for {} rays", ts.len());
        }
        Err(err) => {
            info!("GPU unavailable ({err}); skipping GPU comparison");
        }
    }
}

fn run_vector_math() {
    let tol = Tolerance::DEFAULT;

    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-2.0, 0.5, 4.0);

    assert!(tol.scalars_equal(a.dot(&b), 11.0));

    // Cross product is perpendicular to both operands.
    let c = a.cross(&b);
    assert!(tol.is_zero(c.dot(&a)));
    assert!(tol.is_zero(c.dot(&b)));

    assert!(tol.scalars_equal(Vec3::new(3.0, 4.0, 0.0).norm(), 5.0));
    assert!(tol.scalars_equal(a.normalize().norm(), 1.0));

    // Point advected along a direction, the way the kernel evaluates rays.
    let p = Point3::new(1.0, 0.0, -1.0) + 2.0 * Vec3::new(0.0, 1.5, 0.5);
    assert!(tol.points_equal(&p, &Point3::new(1.0, 3.0, 0.0)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_covers_all_cases() {
        for (i, case) in TestCase::ALL.iter().enumerate() {
            assert_eq!(TestCase::from_id(i), Some(*case));
            assert_eq!(case.id(), i);
        }
        assert_eq!(TestCase::from_id(TestCase::ALL.len()), None);
    }

    #[test]
    fn test_rectangle_intersection_case_passes() {
        // Falls back to CPU-only assertions when no GPU is present.
        run_rectangle_intersection();
    }

    #[test]
    fn test_vector_math_case_passes() {
        run_vector_math();
    }
}

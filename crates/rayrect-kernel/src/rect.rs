//! Axis-aligned rectangle with a selectable plane-normal axis.

use rayrect_math::Point3;

/// A coordinate axis, used to select the rectangle's plane normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The x axis.
    X,
    /// The y axis.
    Y,
    /// The z axis.
    Z,
}

impl Axis {
    /// Component index of this axis in a coordinate triple.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The two in-plane axes for a plane normal to this axis, in cyclic
    /// `(u, v)` order: X -> (Y, Z), Y -> (Z, X), Z -> (X, Y).
    #[inline]
    pub fn in_plane(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::Z, Axis::X),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }
}

/// A bounded axis-aligned rectangle.
///
/// The rectangle is anchored at the origin along its two in-plane axes and
/// lies in the plane `coordinate = extent` along the normal axis. For
/// `normal_axis = Axis::Z` this is the region `[0, X] x [0, Y]` in the plane
/// `z = Z`.
#[derive(Debug, Clone, Copy)]
pub struct Rect {
    /// Extents along the x, y and z axes.
    pub extents: [f32; 3],
    /// Axis perpendicular to the rectangle's plane.
    pub normal_axis: Axis,
}

impl Rect {
    /// Create a rectangle from its three extents and plane-normal axis.
    pub fn new(x: f32, y: f32, z: f32, normal_axis: Axis) -> Self {
        Self {
            extents: [x, y, z],
            normal_axis,
        }
    }

    /// Coordinate of the rectangle's plane along the normal axis.
    #[inline]
    pub fn plane_coord(&self) -> f32 {
        self.extents[self.normal_axis.index()]
    }

    /// In-plane bounds `(extent_u, extent_v)` in cyclic axis order.
    #[inline]
    pub fn bounds(&self) -> (f32, f32) {
        let (u, v) = self.normal_axis.in_plane();
        (self.extents[u.index()], self.extents[v.index()])
    }

    /// Center of the rectangle, on its plane.
    pub fn center(&self) -> Point3 {
        let mut c = [0.0f32; 3];
        let (u, v) = self.normal_axis.in_plane();
        c[u.index()] = self.extents[u.index()] / 2.0;
        c[v.index()] = self.extents[v.index()] / 2.0;
        c[self.normal_axis.index()] = self.plane_coord();
        Point3::new(c[0], c[1], c[2])
    }
}

//! Basic plan-view types and tolerances.
//!
//! - `GeomCfg`: centralizes epsilons for degenerate-vector and distance checks.
//! - `Aabb`: axis-aligned box with normalizing constructors and conservative
//!   overlap (touching counts).
//! - `Polygon`: ordered vertex list, implicitly closed. Fewer than 3 vertices
//!   means "no constraint" to every consumer in this crate.
//! - `Boundary`: a named walkable region.
//!
//! Code cross-refs: `primitives::{point_in_polygon, nearest_point_on_segment}`,
//! `boundary::query`, `placement::place`.

use nalgebra::Vector2;

/// Geometry configuration (tolerances).
///
/// `eps_len` guards divisions by near-zero vector lengths; `eps_dist` is the
/// slack used by distance comparisons in callers and tests.
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    pub eps_len: f64,
    pub eps_dist: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_len: 1e-9,
            eps_dist: 1e-9,
        }
    }
}

/// Axis-aligned bounding box on the horizontal plane.
///
/// Invariant: `min.x <= max.x` and `min.y <= max.y`. Constructors normalize
/// their inputs so the invariant holds for any argument order. Zero-area
/// boxes are legal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Aabb {
    /// Build from two opposite corners in any order.
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self {
            min: Vector2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Vector2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Box of extent `size_x` by `size_y` centered at `center`.
    #[inline]
    pub fn from_center_size(center: Vector2<f64>, size_x: f64, size_y: f64) -> Self {
        let half = Vector2::new(size_x.abs() / 2.0, size_y.abs() / 2.0);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Tight box around a point set. `None` for an empty set.
    pub fn from_points(points: &[Vector2<f64>]) -> Option<Self> {
        let first = *points.first()?;
        let mut min = first;
        let mut max = first;
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Self { min, max })
    }

    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        (self.min + self.max) / 2.0
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Grow (or shrink, for negative `margin`) by `margin` on every side.
    /// Shrinking past zero extent collapses to the center point.
    pub fn expand(&self, margin: f64) -> Self {
        let m = Vector2::new(margin, margin);
        let min = self.min - m;
        let max = self.max + m;
        if min.x > max.x || min.y > max.y {
            let c = self.center();
            return Self { min: c, max: c };
        }
        Self { min, max }
    }

    /// True if the boxes intersect or touch on any axis.
    ///
    /// Touching counts as overlap: placement treats a shared edge as a
    /// collision, which keeps accepted positions strictly separated.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

/// Ordered vertex list, implicitly closed (last vertex connects to first).
///
/// Invariants (design choice):
/// - Any vertex count is accepted, including 0. Polygons with fewer than 3
///   vertices carry no containment information; consumers treat them as
///   "no constraint" rather than rejecting them.
/// - Winding order does not matter for the even-odd containment test.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub verts: Vec<Vector2<f64>>,
}

impl Polygon {
    #[inline]
    pub fn new(verts: Vec<Vector2<f64>>) -> Self {
        Self { verts }
    }

    /// True when the vertex list cannot bound an area.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.verts.len() < 3
    }

    /// Even-odd containment. Degenerate polygons return `false`
    /// unconditionally; callers must read that as "no containment info".
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        super::primitives::point_in_polygon(p, &self.verts)
    }

    /// Edge `k` is the segment from vertex `k` to vertex `(k + 1) % n`.
    pub fn edge(&self, k: usize) -> (Vector2<f64>, Vector2<f64>) {
        let n = self.verts.len();
        (self.verts[k], self.verts[(k + 1) % n])
    }

    /// Tight bounding box, `None` for a vertex-free polygon.
    pub fn bounding_box(&self) -> Option<Aabb> {
        Aabb::from_points(&self.verts)
    }
}

/// A named walkable region.
#[derive(Clone, Debug)]
pub struct Boundary {
    pub id: String,
    pub polygon: Polygon,
}

impl Boundary {
    pub fn new(id: impl Into<String>, polygon: Polygon) -> Self {
        Self {
            id: id.into(),
            polygon,
        }
    }
}

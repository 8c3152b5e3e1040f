//! Point and segment primitives shared by the boundary queries and the
//! placement engine.
//!
//! All functions are pure, O(n) in vertex count, and allocate nothing.

use nalgebra::Vector2;

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (b - a).norm()
}

/// Closest point to `p` on the segment `a..b`.
///
/// The projection parameter is clamped to [0, 1], so the result always lies
/// on the segment. A zero-length segment returns `a`.
pub fn nearest_point_on_segment(
    p: Vector2<f64>,
    a: Vector2<f64>,
    b: Vector2<f64>,
) -> Vector2<f64> {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq <= 0.0 {
        return a;
    }
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Even-odd (ray casting) containment test against an implicitly closed
/// vertex loop.
///
/// Iterates edges `(i, i-1 mod n)` and counts crossings of a horizontal ray
/// from `p`. Fewer than 3 vertices returns `false` unconditionally; that is
/// "no containment info", not "definitely outside", and consumers that treat
/// such polygons as unconstrained must filter them out before calling.
pub fn point_in_polygon(p: Vector2<f64>, verts: &[Vector2<f64>]) -> bool {
    let n = verts.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = verts[i];
        let vj = verts[j];
        // Edge straddles the ray's y, and the crossing is to the right of p.
        if (vi.y > p.y) != (vj.y > p.y)
            && p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

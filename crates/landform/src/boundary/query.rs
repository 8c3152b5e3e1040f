//! Containment and nearest-edge queries over boundary sets.
//!
//! Purpose
//! - Answer, for a point and zero or more walkable regions: "is it inside",
//!   "where is the nearest edge", and "how far from the nearest edge, signed".
//! - Boundaries whose polygons cannot bound an area (fewer than 3 vertices)
//!   are skipped everywhere; a set with no effective boundary behaves exactly
//!   like an empty set (free roam).
//!
//! Code cross-refs: `geom::{nearest_point_on_segment, Polygon, Boundary}`,
//! `constrain`.

use nalgebra::Vector2;

use crate::geom::{distance, nearest_point_on_segment, Boundary, Polygon};

/// Nearest point on a polygon's edge loop.
#[derive(Clone, Copy, Debug)]
pub struct EdgeProjection {
    pub point: Vector2<f64>,
    pub distance: f64,
    /// Index `k` of the winning edge, the segment from vertex `k` to vertex
    /// `(k + 1) % n`. Ties go to the lowest index.
    pub edge_index: usize,
}

/// Signed distance from a point to the nearest boundary edge.
///
/// Positive while inside the nearest containing boundary, negative while
/// outside every boundary. `boundary_id` borrows from the queried slice so
/// per-tick calls allocate nothing.
#[derive(Clone, Copy, Debug)]
pub struct EdgeDistance<'a> {
    pub signed_distance: f64,
    pub is_inside: bool,
    pub boundary_id: Option<&'a str>,
}

/// True when no effective boundary exists (unconstrained) or at least one
/// effective boundary contains `point`.
pub fn is_inside_any(point: Vector2<f64>, boundaries: &[Boundary]) -> bool {
    let mut any_effective = false;
    for b in boundaries {
        if b.polygon.is_degenerate() {
            continue;
        }
        any_effective = true;
        if b.polygon.contains(point) {
            return true;
        }
    }
    !any_effective
}

/// Globally nearest projected point across every edge of `polygon`.
///
/// Scans all edges and keeps the first-encountered minimum, so ties break
/// toward the lowest edge index. `None` only for a vertex-free polygon; a
/// one- or two-vertex loop still projects onto its (possibly zero-length)
/// edges.
pub fn nearest_point_on_polygon(point: Vector2<f64>, polygon: &Polygon) -> Option<EdgeProjection> {
    let n = polygon.verts.len();
    if n == 0 {
        return None;
    }
    let mut best: Option<EdgeProjection> = None;
    for k in 0..n {
        let (a, b) = polygon.edge(k);
        let candidate = nearest_point_on_segment(point, a, b);
        let d = distance(point, candidate);
        if best.as_ref().is_none_or(|e| d < e.distance) {
            best = Some(EdgeProjection {
                point: candidate,
                distance: d,
                edge_index: k,
            });
        }
    }
    best
}

/// Signed distance to the nearest boundary edge across all boundaries.
///
/// Inside at least one effective boundary: positive distance to the nearest
/// edge of the nearest containing boundary. Outside all: negative, magnitude
/// is the distance to the closest boundary's nearest edge. No effective
/// boundary: positive infinity and `is_inside = true`.
pub fn distance_to_boundary_edge<'a>(
    point: Vector2<f64>,
    boundaries: &'a [Boundary],
) -> EdgeDistance<'a> {
    let mut inside_best: Option<(f64, &'a str)> = None;
    let mut outside_best: Option<(f64, &'a str)> = None;
    for b in boundaries {
        if b.polygon.is_degenerate() {
            continue;
        }
        let Some(proj) = nearest_point_on_polygon(point, &b.polygon) else {
            continue;
        };
        let slot = if b.polygon.contains(point) {
            &mut inside_best
        } else {
            &mut outside_best
        };
        if slot.is_none_or(|(d, _)| proj.distance < d) {
            *slot = Some((proj.distance, b.id.as_str()));
        }
    }
    match (inside_best, outside_best) {
        (Some((d, id)), _) => EdgeDistance {
            signed_distance: d,
            is_inside: true,
            boundary_id: Some(id),
        },
        (None, Some((d, id))) => EdgeDistance {
            signed_distance: -d,
            is_inside: false,
            boundary_id: Some(id),
        },
        (None, None) => EdgeDistance {
            signed_distance: f64::INFINITY,
            is_inside: true,
            boundary_id: None,
        },
    }
}

//! Pushback constraint resolver.
//!
//! Purpose
//! - Turn a desired position into one that keeps a minimum inset from every
//!   boundary edge, by pushing rather than rejecting. Called once per
//!   movement tick, so the whole path is O(total vertices) with no heap
//!   allocation.
//! - Total: every input returns a result, worst case the input unchanged.
//!
//! Code cross-refs: `query::{nearest_point_on_polygon, EdgeProjection}`,
//! `geom::{Boundary, GeomCfg}`.

use nalgebra::Vector2;

use super::query::{nearest_point_on_polygon, EdgeProjection};
use crate::geom::{Boundary, GeomCfg};

/// Outcome of a constraint resolution.
///
/// `was_constrained` drives the caller's edge-proximity feedback.
/// `boundary_id` names the boundary that decided the outcome (the nearest
/// containing one, or the closest one when the position was outside all);
/// it borrows from the input slice so per-tick calls allocate nothing.
#[derive(Clone, Copy, Debug)]
pub struct Constrained<'a> {
    pub position: Vector2<f64>,
    pub was_constrained: bool,
    pub boundary_id: Option<&'a str>,
}

/// Constrain `position` with default tolerances.
pub fn constrain<'a>(
    position: Vector2<f64>,
    boundaries: &'a [Boundary],
    pushback_distance: f64,
) -> Constrained<'a> {
    constrain_cfg(position, boundaries, pushback_distance, GeomCfg::default())
}

/// Constrain `position` to keep at least `pushback_distance` from every
/// boundary edge.
///
/// - No effective boundary (empty set, or only polygons with fewer than 3
///   vertices): unchanged, unconstrained.
/// - Inside some boundary: if the nearest edge is closer than
///   `pushback_distance`, the position moves along the edge-to-position
///   direction out to exactly `pushback_distance` from the edge point.
/// - Outside every boundary: the position moves to the globally nearest
///   edge point, continued inward past the edge by `pushback_distance`.
/// - Nearest-edge vector shorter than `cfg.eps_len` (point essentially on
///   the edge): the push is skipped to avoid dividing by a near-zero
///   length, and the input is returned unchanged.
pub fn constrain_cfg<'a>(
    position: Vector2<f64>,
    boundaries: &'a [Boundary],
    pushback_distance: f64,
    cfg: GeomCfg,
) -> Constrained<'a> {
    let mut inside_best: Option<(&'a Boundary, EdgeProjection)> = None;
    let mut outside_best: Option<(&'a Boundary, EdgeProjection)> = None;
    for b in boundaries {
        if b.polygon.is_degenerate() {
            continue;
        }
        let Some(proj) = nearest_point_on_polygon(position, &b.polygon) else {
            continue;
        };
        let slot = if b.polygon.contains(position) {
            &mut inside_best
        } else {
            &mut outside_best
        };
        if slot.as_ref().is_none_or(|(_, e)| proj.distance < e.distance) {
            *slot = Some((b, proj));
        }
    }

    if let Some((b, proj)) = inside_best {
        // Within eps_dist of the required inset counts as compliant, so a
        // just-corrected point is a fixed point of this function.
        if proj.distance >= pushback_distance - cfg.eps_dist {
            return Constrained {
                position,
                was_constrained: false,
                boundary_id: Some(&b.id),
            };
        }
        // Too close to the wall: push inward, away from the nearest edge.
        let away = position - proj.point;
        let len = away.norm();
        if len < cfg.eps_len {
            return Constrained {
                position,
                was_constrained: false,
                boundary_id: Some(&b.id),
            };
        }
        return Constrained {
            position: proj.point + away * (pushback_distance / len),
            was_constrained: true,
            boundary_id: Some(&b.id),
        };
    }

    if let Some((b, proj)) = outside_best {
        // Outside every region: pull to the nearest edge point, then inset
        // by continuing the approach direction into the interior.
        let toward = proj.point - position;
        let len = toward.norm();
        if len < cfg.eps_len {
            return Constrained {
                position,
                was_constrained: false,
                boundary_id: Some(&b.id),
            };
        }
        return Constrained {
            position: proj.point + toward * (pushback_distance / len),
            was_constrained: true,
            boundary_id: Some(&b.id),
        };
    }

    Constrained {
        position,
        was_constrained: false,
        boundary_id: None,
    }
}

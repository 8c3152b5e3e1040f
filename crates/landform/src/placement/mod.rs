//! Automatic arrangement of comparison objects around a land area.
//!
//! Purpose
//! - Compute non-overlapping positions for a batch of rectangular footprints
//!   around the land bounding box, without touching the land itself.
//!
//! Why this design (short)
//! - Candidates walk an expanding spiral seeded by the golden angle, so
//!   successive objects fan out around the land instead of clustering.
//! - The search budget is a hard 50 attempts per item; when it is exhausted
//!   a deterministic ring position is used instead. Placement is best-effort,
//!   never an error: with pathological densities it degrades to overlapping
//!   positions rather than failing.
//! - These constants are load-bearing for the surrounding visual layout; do
//!   not retune them casually.
//!
//! Code cross-refs: `geom::Aabb`, `geom::rand::draw_footprint_set`.

use nalgebra::Vector2;

use crate::geom::Aabb;

/// Spiral search budget per item.
const MAX_ATTEMPTS: usize = 50;
/// Clearance added around the land bounding box, in plan units.
const LAND_BUFFER: f64 = 10.0;
/// Lower bounds for the distance-from-land and ring-spacing terms.
const MIN_SAFE_DISTANCE: f64 = 20.0;
const MIN_GRID_SPACING: f64 = 15.0;

/// Rectangular plan-view extent of a placeable object.
/// `length` runs along x, `width` along y; both are positive.
#[derive(Clone, Debug, PartialEq)]
pub struct Footprint {
    pub id: String,
    pub length: f64,
    pub width: f64,
}

impl Footprint {
    pub fn new(id: impl Into<String>, length: f64, width: f64) -> Self {
        Self {
            id: id.into(),
            length,
            width,
        }
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    /// Axis-aligned box of this footprint centered at `center`.
    #[inline]
    pub fn aabb_at(&self, center: Vector2<f64>) -> Aabb {
        Aabb::from_center_size(center, self.length, self.width)
    }
}

/// One computed position per input footprint, emitted in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacementResult {
    pub id: String,
    pub position: Vector2<f64>,
}

/// Arrange `items` around `land_bounds` without overlaps where possible.
///
/// Items are processed largest-area first (hardest to fit, first choice of
/// position); results are mapped back to input order, with each input id
/// echoed verbatim. The function is total and deterministic: identical
/// inputs produce identical outputs.
pub fn place(items: &[Footprint], land_bounds: Aabb) -> Vec<PlacementResult> {
    if items.is_empty() {
        return Vec::new();
    }
    let land_center = land_bounds.center();
    let land_radius = land_bounds.width().max(land_bounds.height()) / 2.0;
    let safe_distance = MIN_SAFE_DISTANCE.max(land_radius * 0.2 * 2.0);
    let grid_spacing = MIN_GRID_SPACING.max(land_radius * 0.1 * 2.0);
    let keep_out = land_bounds.expand(LAND_BUFFER);
    // Low-discrepancy angular seed: successive items never share a direction.
    let golden_angle = std::f64::consts::PI * (3.0 - 5.0_f64.sqrt());

    // Largest first. The sort is stable, so equal areas keep input order and
    // the whole arrangement stays deterministic.
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| {
        items[b]
            .area()
            .partial_cmp(&items[a].area())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut placed: Vec<Aabb> = Vec::with_capacity(items.len());
    let mut positions: Vec<Vector2<f64>> = vec![land_center; items.len()];

    for (i, &orig) in order.iter().enumerate() {
        let item = &items[orig];
        let base_radius = land_radius + safe_distance + item.length / 2.0;
        let offset = i as f64 * golden_angle;

        let mut chosen: Option<Vector2<f64>> = None;
        for attempt in 0..MAX_ATTEMPTS {
            let frac = attempt as f64 / MAX_ATTEMPTS as f64;
            let radius = base_radius + frac * grid_spacing * 5.0;
            let angle = offset + frac * std::f64::consts::TAU;
            let candidate = land_center + Vector2::new(angle.cos(), angle.sin()) * radius;
            let bb = item.aabb_at(candidate);
            if bb.overlaps(&keep_out) {
                continue;
            }
            if placed.iter().any(|other| bb.overlaps(other)) {
                continue;
            }
            chosen = Some(candidate);
            break;
        }

        let position = chosen.unwrap_or_else(|| {
            // Budget exhausted: deterministic ring position. May overlap,
            // but always terminates with a usable position.
            let radius = base_radius + grid_spacing * placed.len() as f64;
            let slots = (placed.len() + 1).max(8) as f64;
            let angle = i as f64 * (std::f64::consts::TAU / slots);
            land_center + Vector2::new(angle.cos(), angle.sin()) * radius
        });

        // Fallback positions join the placed list too, so later items still
        // steer around them.
        placed.push(item.aabb_at(position));
        positions[orig] = position;
    }

    items
        .iter()
        .zip(positions)
        .map(|(item, position)| PlacementResult {
            id: item.id.clone(),
            position,
        })
        .collect()
}

#[cfg(test)]
mod tests;

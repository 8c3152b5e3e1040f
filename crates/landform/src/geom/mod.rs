//! Plan-view geometry primitives.
//!
//! Purpose
//! - Provide the small set of stateless primitives both engine features
//!   reduce to: distance, clamped segment projection, even-odd containment,
//!   and axis-aligned box overlap.
//! - Keep the API minimal and numerically explicit (eps-aware via `GeomCfg`).
//!
//! Code cross-refs: `boundary`, `placement`.

mod primitives;
pub mod rand;
mod types;

pub use primitives::{distance, nearest_point_on_segment, point_in_polygon};
pub use types::{Aabb, Boundary, GeomCfg, Polygon};

#[cfg(test)]
mod tests;

//! Walkable-boundary queries and the pushback constraint resolver.
//!
//! The query layer answers containment and nearest-edge questions over a set
//! of named regions; the resolver turns a desired position into one that
//! respects a minimum inset from every edge. Both are pure and total, and
//! treat polygons with fewer than 3 vertices as "no constraint".

mod constrain;
mod query;

pub use constrain::{constrain, constrain_cfg, Constrained};
pub use query::{
    distance_to_boundary_edge, is_inside_any, nearest_point_on_polygon, EdgeDistance,
    EdgeProjection,
};

//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the editor
//!   collaborators; breaking changes are allowed and expected.
//! - Prefer these re-exports for clarity and consistency across call sites.

// Plan-view primitives
pub use crate::geom::{
    distance, nearest_point_on_segment, point_in_polygon, Aabb, Boundary, GeomCfg, Polygon,
};
// Deterministic samplers for tests and benchmarks
pub use crate::geom::rand::{
    draw_footprint_set, draw_land_outline, FootprintSetCfg, OutlineCfg, ReplayToken,
};
// Boundary queries and the pushback resolver
pub use crate::boundary::{
    constrain, constrain_cfg, distance_to_boundary_edge, is_inside_any, nearest_point_on_polygon,
    Constrained, EdgeDistance, EdgeProjection,
};
// Placement engine
pub use crate::placement::{place, Footprint, PlacementResult};

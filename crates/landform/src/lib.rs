//! Spatial geometry engine for the land-visualization editor.
//!
//! Two independent editor features reduce to the primitives in this crate:
//! keeping the walkthrough viewpoint inside user-drawn walkable regions
//! (`boundary`), and arranging comparison objects around the drawn land
//! without overlaps (`placement`). Everything is a pure function over
//! caller-supplied values; no state survives a call.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; the
//!   surrounding editor is the only consumer.

pub mod api;
pub mod boundary;
pub mod geom;
pub mod placement;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports so call sites read like the plan-view math they do.
pub use geom::{Aabb, Boundary, GeomCfg, Polygon};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::boundary::{
        constrain, constrain_cfg, distance_to_boundary_edge, is_inside_any,
        nearest_point_on_polygon, Constrained, EdgeDistance, EdgeProjection,
    };
    pub use crate::geom::rand::{
        draw_footprint_set, draw_land_outline, FootprintSetCfg, OutlineCfg, ReplayToken,
    };
    pub use crate::geom::{
        distance, nearest_point_on_segment, point_in_polygon, Aabb, Boundary, GeomCfg, Polygon,
    };
    pub use crate::placement::{place, Footprint, PlacementResult};
    pub use nalgebra::Vector2 as Vec2;
}

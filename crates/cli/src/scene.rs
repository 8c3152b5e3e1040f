//! Scene files exchanged with the editor collaborators.
//!
//! The walkthrough side supplies boundaries and a desired camera path; the
//! comparison side supplies footprints and the drawn land's bounding box.
//! This module owns the JSON shapes at that edge and the conversion into
//! engine types; the engine itself stays serialization-free.

use anyhow::{Context, Result};
use landform::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub boundaries: Vec<BoundaryDef>,
    pub land_bounds: Option<BoundsDef>,
    #[serde(default)]
    pub footprints: Vec<FootprintDef>,
    /// Desired camera positions, one per movement step.
    #[serde(default)]
    pub path: Vec<[f64; 2]>,
}

#[derive(Debug, Deserialize)]
pub struct BoundaryDef {
    pub id: String,
    pub vertices: Vec<[f64; 2]>,
}

#[derive(Debug, Deserialize)]
pub struct BoundsDef {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

#[derive(Debug, Deserialize)]
pub struct FootprintDef {
    pub id: String,
    pub length: f64,
    pub width: f64,
}

/// One corrected step of the walkthrough path.
#[derive(Debug, Serialize)]
pub struct WalkStep {
    pub input: [f64; 2],
    pub position: [f64; 2],
    pub constrained: bool,
    pub boundary: Option<String>,
}

/// One placed comparison object.
#[derive(Debug, Serialize)]
pub struct PlacedObject {
    pub id: String,
    pub position: [f64; 2],
}

pub fn load_scene(path: &Path) -> Result<SceneFile> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

impl SceneFile {
    pub fn engine_boundaries(&self) -> Vec<Boundary> {
        self.boundaries
            .iter()
            .map(|b| {
                let verts = b.vertices.iter().map(|[x, y]| Vec2::new(*x, *y)).collect();
                Boundary::new(b.id.clone(), Polygon::new(verts))
            })
            .collect()
    }

    pub fn land_aabb(&self) -> Result<Aabb> {
        let bounds = self
            .land_bounds
            .as_ref()
            .context("scene has no land_bounds")?;
        Ok(Aabb::new(
            Vec2::new(bounds.min[0], bounds.min[1]),
            Vec2::new(bounds.max[0], bounds.max[1]),
        ))
    }

    pub fn engine_footprints(&self) -> Vec<Footprint> {
        self.footprints
            .iter()
            .map(|f| Footprint::new(f.id.clone(), f.length, f.width))
            .collect()
    }
}

/// Constrain every desired path position against the scene boundaries.
pub fn run_walk(scene: &SceneFile, pushback: f64) -> Vec<WalkStep> {
    let boundaries = scene.engine_boundaries();
    scene
        .path
        .iter()
        .map(|&[x, y]| {
            let c = constrain(Vec2::new(x, y), &boundaries, pushback);
            WalkStep {
                input: [x, y],
                position: [c.position.x, c.position.y],
                constrained: c.was_constrained,
                boundary: c.boundary_id.map(str::to_owned),
            }
        })
        .collect()
}

/// Arrange the scene footprints around the scene's land bounds.
pub fn run_place(scene: &SceneFile) -> Result<Vec<PlacedObject>> {
    let land = scene.land_aabb()?;
    let items = scene.engine_footprints();
    Ok(place(&items, land)
        .into_iter()
        .map(|r| PlacedObject {
            id: r.id,
            position: [r.position.x, r.position.y],
        })
        .collect())
}

//! Deterministic samplers for land outlines and footprint sets.
//!
//! Purpose
//! - Tests and benchmarks need representative "user-drawn" inputs: simple
//!   star-shaped land outlines and small batches of rectangular footprints.
//!   The samplers here are reproducible and indexable via a replay token so
//!   failures can be replayed from a single `(seed, index)` pair.
//!
//! Model
//! - Outlines start from `n` equally spaced angles on [0, 2pi), add bounded
//!   angular and radial jitter, and connect the sorted result into a simple
//!   polygon around the origin.
//!
//! Code cross-refs: `Polygon`, `placement::Footprint`.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Polygon;
use crate::placement::Footprint;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Land-outline sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct OutlineCfg {
    /// Inclusive vertex-count range; values below 3 are clamped up.
    pub vertex_range: (usize, usize),
    /// Angular jitter as a fraction of the base spacing 2pi/n. Clamped to [0, 0.49]
    /// so vertex order is preserved and the outline stays simple.
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii are `base_radius * (1 + u)`
    /// with `u` uniform in [-radial_jitter, radial_jitter].
    pub radial_jitter: f64,
    /// Base radius of the outline around the origin.
    pub base_radius: f64,
}

impl Default for OutlineCfg {
    fn default() -> Self {
        Self {
            vertex_range: (8, 16),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.2,
            base_radius: 10.0,
        }
    }
}

/// Draw a simple star-shaped land outline around the origin.
pub fn draw_land_outline(cfg: OutlineCfg, tok: ReplayToken) -> Polygon {
    let mut rng = tok.to_std_rng();
    let lo = cfg.vertex_range.0.max(3);
    let hi = cfg.vertex_range.1.max(lo);
    let n = rng.gen_range(lo..=hi);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            (k as f64) * delta + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let verts = angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-6) * r0;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    Polygon::new(verts)
}

/// Footprint-set sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct FootprintSetCfg {
    /// Inclusive count range.
    pub count_range: (usize, usize),
    /// Uniform side-length ranges, in plan units.
    pub length_range: (f64, f64),
    pub width_range: (f64, f64),
}

impl Default for FootprintSetCfg {
    fn default() -> Self {
        Self {
            count_range: (1, 10),
            length_range: (2.0, 8.0),
            width_range: (2.0, 8.0),
        }
    }
}

/// Draw a reproducible batch of footprints with ids `obj-0`, `obj-1`, ...
pub fn draw_footprint_set(cfg: FootprintSetCfg, tok: ReplayToken) -> Vec<Footprint> {
    let mut rng = tok.to_std_rng();
    let lo = cfg.count_range.0;
    let hi = cfg.count_range.1.max(lo);
    let count = rng.gen_range(lo..=hi);
    (0..count)
        .map(|k| {
            let length = rng.gen_range(cfg.length_range.0..=cfg.length_range.1);
            let width = rng.gen_range(cfg.width_range.0..=cfg.width_range.1);
            Footprint::new(format!("obj-{k}"), length, width)
        })
        .collect()
}

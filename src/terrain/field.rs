//! Per-sample height field: domain warp, Voronoi island closeness, layered
//! noise composition, land/water transition and edge falloff.
//!
//! Everything here is a pure function of its inputs. The generator owns the
//! seeded noise source and the seed-point set and drives these functions over
//! the grid; no logging or shared state lives at this level.

use glam::Vec2;
use noise::{NoiseFn, Perlin};

use crate::params::TerrainParams;

/// Voronoi cell center in world space.
pub type SeedPoint = Vec2;

/// Half extents of the centered generation domain plus its diagonal,
/// precomputed once per sweep.
#[derive(Debug, Clone, Copy)]
pub struct DomainExtent {
    pub half_width: f32,
    pub half_height: f32,
    /// Diagonal of the full domain, normalizes seed distances to [0, 1]
    pub diagonal: f32,
}

/// Seeded 2D noise sample in [-1, 1].
///
/// The second warp channel is obtained by offsetting the X input by
/// `warp_offset` instead of instantiating a second noise field; a fixed
/// large offset decorrelates the channels just as well.
pub fn noise2(perlin: &Perlin, x: f32, y: f32) -> f32 {
    perlin.get([x as f64, y as f64]) as f32
}

/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Sinusoidal ease-in-out over [0, 1].
pub fn ease_in_out_sine(t: f32) -> f32 {
    -((std::f32::consts::PI * t).cos() - 1.0) / 2.0
}

/// Distort `p` with two channels of low-frequency noise before it reaches
/// the island field. Sampling the Voronoi shape at warped coordinates breaks
/// up the geometric cell boundaries a raw distance field would show.
pub fn warp_point(perlin: &Perlin, p: Vec2, params: &TerrainParams) -> Vec2 {
    if params.warp_strength == 0.0 {
        return p;
    }
    let f = params.warp_frequency;
    let wx = p.x + noise2(perlin, p.x * f, p.y * f) * params.warp_strength;
    let wy = p.y + noise2(perlin, p.x * f + params.warp_offset, p.y * f) * params.warp_strength;
    Vec2::new(wx, wy)
}

/// Closeness of `p` to the nearest island center, in (0, 1].
///
/// Minimum Euclidean distance to any seed point, normalized by the domain
/// diagonal, pushed through an exponential falloff. Returns exactly 0 when
/// there are no seed points.
pub fn voronoi_closeness(
    p: Vec2,
    seed_points: &[SeedPoint],
    falloff: f32,
    normalization_distance: f32,
) -> f32 {
    let mut min_dist_sq = f32::INFINITY;
    for seed in seed_points {
        min_dist_sq = min_dist_sq.min(p.distance_squared(*seed));
    }
    if min_dist_sq == f32::INFINITY {
        return 0.0;
    }
    let normalized = min_dist_sq.sqrt() / normalization_distance;
    (-normalized * falloff).exp()
}

/// Height attenuation factor in [0, 1] near the domain boundary.
///
/// Per-axis normalized distance from the nearest edge, minimum of the two
/// axes (nearest edge dominates, giving a rounded-square falloff zone rather
/// than a circular one), eased through the band. Returns 1 when disabled or
/// outside the band.
pub fn edge_falloff(p: Vec2, extent: &DomainExtent, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 1.0;
    }
    let from_edge_x = 1.0 - p.x.abs() / extent.half_width;
    let from_edge_y = 1.0 - p.y.abs() / extent.half_height;
    let min_from_edge = from_edge_x.min(from_edge_y);
    if min_from_edge >= fraction {
        return 1.0;
    }
    ease_in_out_sine((min_from_edge / fraction).clamp(0.0, 1.0))
}

/// Fold the island closeness, composed land height and edge attenuation into
/// the final sample height.
///
/// Inside the transition band the height blends from sea floor to land
/// height along an eased curve; the edge falloff is applied afterwards as an
/// independent lerp toward the sea floor. The two effects stay orthogonal.
pub fn blend_height(
    islands: f32,
    land_height: f32,
    edge_multiplier: f32,
    params: &TerrainParams,
) -> f32 {
    let band = params.land_transition();
    if islands <= band.end {
        return params.sea_floor;
    }
    if islands <= band.start {
        let t = ease_in_out_sine((islands - band.end) / (band.start - band.end));
        let transitioned = lerp(params.sea_floor, land_height, t);
        return lerp(params.sea_floor, transitioned, edge_multiplier);
    }
    lerp(params.sea_floor, land_height, edge_multiplier)
}

/// Per-sample height function (the full compositor).
///
/// Water is detected on the warped island field alone and short-circuits
/// before any terrain or peaks noise is evaluated; both secondary layers
/// sample the original, unwarped coordinates.
pub fn sample_height(
    perlin: &Perlin,
    params: &TerrainParams,
    extent: &DomainExtent,
    seed_points: &[SeedPoint],
    p: Vec2,
) -> f32 {
    let warped = warp_point(perlin, p, params);
    let islands = voronoi_closeness(
        warped,
        seed_points,
        params.voronoi_falloff,
        extent.diagonal,
    );

    let band = params.land_transition();
    if islands <= band.end {
        return params.sea_floor;
    }

    let terrain = noise2(
        perlin,
        p.x * params.terrain_frequency,
        p.y * params.terrain_frequency,
    );
    let ridged = 1.0
        - noise2(
            perlin,
            p.x * params.peaks_frequency,
            p.y * params.peaks_frequency,
        )
        .abs();
    let peaks = params.peaks_amplitude * ridged;

    let land_height = islands * params.islands_weight
        + terrain * params.terrain_weight
        + peaks * params.peaks_weight;

    let edge = edge_falloff(p, extent, params.edge_falloff);
    blend_height(islands, land_height, edge, params)
}

//! Heightmap generation: seed-point scatter and the row-major grid sweep.

use glam::Vec2;
use noise::Perlin;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::field::{self, DomainExtent, SeedPoint};
use crate::params::{GridSpec, TerrainParams};

/// Dense row-major heightfield produced by one generation pass.
///
/// `samples[y * width + x]` is the height at world coordinate
/// `(x - width/2, y - height/2)` scaled by the grid spacing. Immutable once
/// returned; ownership moves to whoever applies it to a mesh.
#[derive(Debug, Clone)]
pub struct HeightField {
    pub width: usize,
    pub height: usize,
    pub samples: Vec<f32>,
}

impl HeightField {
    /// Height at grid cell (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.samples[y * self.width + x]
    }
}

/// Drives the per-sample compositor over the grid.
///
/// Owns the seeded noise source and the current seed-point set. Seed points
/// are scattered eagerly at construction and replaced only when a pass is
/// run without same-seed mode, so live parameter tuning never moves the
/// islands unless asked to.
pub struct HeightmapGenerator {
    grid: GridSpec,
    params: TerrainParams,
    perlin: Perlin,
    rng: ChaCha8Rng,
    seed_points: Vec<SeedPoint>,
}

impl HeightmapGenerator {
    /// Create a generator for the given grid, parameter snapshot and seed.
    ///
    /// Panics if either grid dimension is zero; a degenerate grid would make
    /// the sweep meaningless.
    pub fn new(grid: GridSpec, params: TerrainParams, seed: u32) -> Self {
        assert!(
            grid.width > 0 && grid.height > 0,
            "grid dimensions must be positive"
        );
        let mut generator = Self {
            grid,
            params,
            perlin: Perlin::new(seed),
            rng: ChaCha8Rng::seed_from_u64(seed as u64),
            seed_points: Vec::new(),
        };
        generator.scatter_seed_points();
        generator
    }

    /// Replace the parameter snapshot read by subsequent passes.
    pub fn apply_params(&mut self, params: TerrainParams) {
        self.params = params;
    }

    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    pub fn seed_points(&self) -> &[SeedPoint] {
        &self.seed_points
    }

    /// Full pass with freshly scattered seed points.
    pub fn regenerate(&mut self) -> HeightField {
        self.generate_height_map(false)
    }

    /// Full pass reusing the current seed points (parameter tuning only).
    pub fn update(&mut self) -> HeightField {
        self.generate_height_map(true)
    }

    /// Run one generation pass over the whole grid.
    ///
    /// With `same_seed` the existing seed points are kept; otherwise (or if
    /// none exist yet) `num_islands` new ones are scattered uniformly over
    /// the centered domain. Always a full O(width * height * num_islands)
    /// sweep; there is no incremental path.
    pub fn generate_height_map(&mut self, same_seed: bool) -> HeightField {
        if !same_seed || self.seed_points.is_empty() {
            self.scatter_seed_points();
        }

        let extent = DomainExtent {
            half_width: self.grid.half_width(),
            half_height: self.grid.half_height(),
            diagonal: self.grid.diagonal(),
        };

        let mut samples = Vec::with_capacity(self.grid.width * self.grid.height);
        for y in 0..self.grid.height {
            for x in 0..self.grid.width {
                let (wx, wy) = self.grid.world_pos(x, y);
                samples.push(field::sample_height(
                    &self.perlin,
                    &self.params,
                    &extent,
                    &self.seed_points,
                    Vec2::new(wx, wy),
                ));
            }
        }

        HeightField {
            width: self.grid.width,
            height: self.grid.height,
            samples,
        }
    }

    fn scatter_seed_points(&mut self) {
        let half_w = self.grid.half_width();
        let half_h = self.grid.half_height();
        self.seed_points.clear();
        for _ in 0..self.params.num_islands {
            self.seed_points.push(Vec2::new(
                self.rng.gen_range(-half_w..=half_w),
                self.rng.gen_range(-half_h..=half_h),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_grid() -> GridSpec {
        GridSpec {
            width: 16,
            height: 12,
            spacing_m: 1.0,
        }
    }

    #[test]
    fn test_heightmap_shape_and_row_major_order() {
        let grid = small_grid();
        let mut generator = HeightmapGenerator::new(grid, TerrainParams::default(), 42);
        let map = generator.regenerate();

        assert_eq!(map.width, grid.width);
        assert_eq!(map.height, grid.height);
        assert_eq!(map.samples.len(), grid.width * grid.height);

        // samples[y * W + x] corresponds to world (x - W/2, y - H/2):
        // recompute a few cells through the field functions directly.
        let perlin = Perlin::new(42);
        let extent = DomainExtent {
            half_width: grid.half_width(),
            half_height: grid.half_height(),
            diagonal: grid.diagonal(),
        };
        for &(x, y) in &[(0usize, 0usize), (5, 7), (15, 11)] {
            let (wx, wy) = grid.world_pos(x, y);
            let expected = field::sample_height(
                &perlin,
                generator.params(),
                &extent,
                generator.seed_points(),
                Vec2::new(wx, wy),
            );
            assert_eq!(map.get(x, y).to_bits(), expected.to_bits());
        }
    }

    #[test]
    fn test_same_seed_passes_are_identical() {
        let mut generator = HeightmapGenerator::new(small_grid(), TerrainParams::default(), 7);
        let first = generator.update();
        let second = generator.update();
        assert_eq!(first.samples.len(), second.samples.len());
        for (a, b) in first.samples.iter().zip(&second.samples) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_regenerate_moves_seed_points() {
        let mut generator = HeightmapGenerator::new(small_grid(), TerrainParams::default(), 3);
        let mut changed = 0;
        let mut previous = generator.seed_points().to_vec();
        for _ in 0..100 {
            generator.regenerate();
            if generator.seed_points() != previous.as_slice() {
                changed += 1;
            }
            previous = generator.seed_points().to_vec();
        }
        assert!(changed >= 99, "fresh scatters almost never repeat, got {changed}");
    }

    #[test]
    fn test_seed_points_initialized_eagerly() {
        let generator = HeightmapGenerator::new(small_grid(), TerrainParams::default(), 11);
        assert_eq!(
            generator.seed_points().len(),
            generator.params().num_islands
        );
    }

    #[test]
    fn test_seed_points_stay_inside_domain() {
        let grid = small_grid();
        let params = TerrainParams {
            num_islands: 64,
            ..TerrainParams::default()
        };
        let generator = HeightmapGenerator::new(grid, params, 5);
        for seed in generator.seed_points() {
            assert!(seed.x.abs() <= grid.half_width());
            assert!(seed.y.abs() <= grid.half_height());
        }
    }

    #[test]
    fn test_zero_islands_is_all_sea_floor() {
        let params = TerrainParams {
            num_islands: 0,
            ..TerrainParams::default()
        };
        let sea_floor = params.sea_floor;
        let mut generator = HeightmapGenerator::new(small_grid(), params, 1);
        let map = generator.regenerate();
        assert!(map.samples.iter().all(|&h| h == sea_floor));
    }

    #[test]
    #[should_panic(expected = "grid dimensions must be positive")]
    fn test_zero_grid_dimension_fails_fast() {
        let grid = GridSpec {
            width: 0,
            height: 12,
            spacing_m: 1.0,
        };
        HeightmapGenerator::new(grid, TerrainParams::default(), 1);
    }

    #[test]
    fn test_apply_params_does_not_move_islands_on_update() {
        let mut generator = HeightmapGenerator::new(small_grid(), TerrainParams::default(), 13);
        let before = generator.seed_points().to_vec();
        let mut tuned = TerrainParams::default();
        tuned.peaks_weight += 5.0;
        generator.apply_params(tuned);
        generator.update();
        assert_eq!(generator.seed_points(), before.as_slice());
    }
}

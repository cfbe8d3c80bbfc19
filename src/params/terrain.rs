//! Terrain generation parameters and grid layout.

/// Tunable scalars read at the start of each generation pass.
///
/// The control panel edits a copy and hands it to the generator through
/// `apply_params`; nothing mutates a snapshot mid-sweep.
#[derive(Debug, Clone)]
pub struct TerrainParams {
    /// Number of Voronoi seed points scattered across the domain
    pub num_islands: usize,

    /// Nominal land/water cutoff in (0, 1]; derives the transition band
    /// (start = threshold + 0.1, end = threshold - 0.05), never used as a
    /// hard cutoff on its own
    pub island_threshold: f32,

    /// Exponential decay rate turning normalized seed distance into island
    /// strength (higher = smaller, steeper islands)
    pub voronoi_falloff: f32,

    /// Domain warp displacement in world units (0 disables the warp)
    pub warp_strength: f32,

    /// Constant axis offset decorrelating the two warp noise channels
    pub warp_offset: f32,

    /// Spatial frequency of the warp noise (cycles per world unit)
    pub warp_frequency: f32,

    /// Frequency of the rolling-hills base noise layer
    pub terrain_frequency: f32,

    /// Frequency of the ridged-peaks noise layer
    pub peaks_frequency: f32,

    /// Amplitude multiplier applied to the ridged layer before blending
    pub peaks_amplitude: f32,

    /// Linear blend weight of the island field
    pub islands_weight: f32,

    /// Linear blend weight of the base terrain layer
    pub terrain_weight: f32,

    /// Linear blend weight of the peaks layer
    pub peaks_weight: f32,

    /// Height assigned to pure water (world units)
    pub sea_floor: f32,

    /// Fraction of the grid half-extent over which height attenuates toward
    /// the sea floor near the domain boundary, in [0, 1]; 0 disables
    pub edge_falloff: f32,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            num_islands: 6,
            island_threshold: 0.62,
            voronoi_falloff: 12.0,
            warp_strength: 30.0,
            warp_offset: 1000.0,
            warp_frequency: 0.02,
            terrain_frequency: 0.05,
            peaks_frequency: 0.02,
            peaks_amplitude: 1.0,
            islands_weight: 60.0,
            terrain_weight: 8.0,
            peaks_weight: 14.0,
            sea_floor: -4.0,
            edge_falloff: 0.25,
        }
    }
}

/// Island-field interval over which height blends from sea floor to full
/// land height. `end < start` always holds for thresholds above 0.05, which
/// keeps the blend monotonic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandTransition {
    pub start: f32,
    pub end: f32,
}

impl TerrainParams {
    /// Transition band derived from the island threshold.
    pub fn land_transition(&self) -> LandTransition {
        LandTransition {
            start: self.island_threshold + 0.1,
            end: self.island_threshold - 0.05,
        }
    }
}

/// Regular grid the heightmap generator sweeps, and its mapping to world
/// space. Grid index (x, y) lands at world (x - width/2, y - height/2)
/// scaled by the spacing, so the domain is centered on the origin.
#[derive(Debug, Clone, Copy)]
pub struct GridSpec {
    /// Vertices along X
    pub width: usize,

    /// Vertices along Y (world Z)
    pub height: usize,

    /// Distance between adjacent vertices in world units (meters)
    pub spacing_m: f32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            width: 257,
            height: 257,
            spacing_m: 1.0,
        }
    }
}

impl GridSpec {
    /// Half extent of the generation domain along X, in world units.
    pub fn half_width(&self) -> f32 {
        self.width as f32 * self.spacing_m / 2.0
    }

    /// Half extent of the generation domain along Y, in world units.
    pub fn half_height(&self) -> f32 {
        self.height as f32 * self.spacing_m / 2.0
    }

    /// Diagonal of the generation domain, used to normalize seed distances.
    pub fn diagonal(&self) -> f32 {
        let w = self.width as f32 * self.spacing_m;
        let h = self.height as f32 * self.spacing_m;
        (w * w + h * h).sqrt()
    }

    /// World coordinates of grid cell (x, y).
    pub fn world_pos(&self, x: usize, y: usize) -> (f32, f32) {
        (
            (x as f32 - self.width as f32 / 2.0) * self.spacing_m,
            (y as f32 - self.height as f32 / 2.0) * self.spacing_m,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_land_transition_band_ordering() {
        let params = TerrainParams::default();
        let band = params.land_transition();
        assert!(band.end < band.start, "blend band must be monotonic");
        assert_eq!(band.start, params.island_threshold + 0.1);
        assert_eq!(band.end, params.island_threshold - 0.05);
    }

    #[test]
    fn test_grid_world_mapping_is_centered() {
        let grid = GridSpec {
            width: 8,
            height: 6,
            spacing_m: 1.0,
        };
        let (x0, y0) = grid.world_pos(0, 0);
        assert_eq!((x0, y0), (-4.0, -3.0));
        let (cx, cy) = grid.world_pos(4, 3);
        assert_eq!((cx, cy), (0.0, 0.0));
    }

    #[test]
    fn test_grid_diagonal() {
        let grid = GridSpec {
            width: 3,
            height: 4,
            spacing_m: 1.0,
        };
        assert!((grid.diagonal() - 5.0).abs() < 1e-6);
    }
}

//! Water surface plane mesh.

use bytemuck::{Pod, Zeroable};

use crate::params::{GridSpec, WaterParams};

/// Vertex data for the water plane (position + UV coordinates)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct WaterVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Flat quad at the water surface level, spanning the terrain domain with a
/// margin so the horizon never shows a hard rim. All of the water's motion
/// happens in the fragment stage, so two triangles are plenty.
pub struct WaterPlane {
    pub vertices: Vec<WaterVertex>,
    pub indices: Vec<u32>,
}

/// Extra reach of the water plane beyond the terrain half-extent
const MARGIN_FACTOR: f32 = 3.0;

impl WaterPlane {
    pub fn new(grid: &GridSpec, params: &WaterParams) -> Self {
        let half_x = grid.half_width() * MARGIN_FACTOR;
        let half_z = grid.half_height() * MARGIN_FACTOR;
        let y = params.surface_level_m;

        let vertices = vec![
            WaterVertex {
                position: [-half_x, y, -half_z],
                uv: [0.0, 0.0],
            },
            WaterVertex {
                position: [half_x, y, -half_z],
                uv: [1.0, 0.0],
            },
            WaterVertex {
                position: [-half_x, y, half_z],
                uv: [0.0, 1.0],
            },
            WaterVertex {
                position: [half_x, y, half_z],
                uv: [1.0, 1.0],
            },
        ];

        // Counter-clockwise winding seen from above
        let indices = vec![0, 2, 1, 1, 2, 3];

        Self { vertices, indices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_plane_counts_and_level() {
        let grid = GridSpec::default();
        let params = WaterParams::default();
        let plane = WaterPlane::new(&grid, &params);
        assert_eq!(plane.vertices.len(), 4);
        assert_eq!(plane.indices.len(), 6);
        for vertex in &plane.vertices {
            assert_eq!(vertex.position[1], params.surface_level_m);
        }
    }

    #[test]
    fn test_water_plane_covers_terrain_domain() {
        let grid = GridSpec::default();
        let plane = WaterPlane::new(&grid, &WaterParams::default());
        let max_x = plane
            .vertices
            .iter()
            .map(|v| v.position[0].abs())
            .fold(0.0f32, f32::max);
        assert!(max_x >= grid.half_width());
    }
}

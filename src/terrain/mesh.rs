//! Terrain grid mesh: height application and normal recomputation.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use super::generator::HeightField;
use crate::params::GridSpec;

/// Vertex data for the terrain mesh (position + normal)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct TerrainVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Renderable terrain grid whose vertex order matches the heightfield's
/// row-major layout, so a generated field copies straight onto elevations.
pub struct TerrainGrid {
    pub vertices: Vec<TerrainVertex>,
    pub indices: Vec<u32>,
    grid: GridSpec,
}

impl TerrainGrid {
    /// Create a flat grid mesh covering the centered generation domain.
    pub fn new(grid: GridSpec) -> Self {
        let mut vertices = Vec::with_capacity(grid.width * grid.height);
        let mut indices = Vec::new();

        for y in 0..grid.height {
            for x in 0..grid.width {
                let (wx, wz) = grid.world_pos(x, y);
                vertices.push(TerrainVertex {
                    position: [wx, 0.0, wz],
                    normal: [0.0, 1.0, 0.0],
                });
            }
        }

        // Two counter-clockwise triangles per cell
        for y in 0..grid.height - 1 {
            for x in 0..grid.width - 1 {
                let top_left = (y * grid.width + x) as u32;
                let top_right = top_left + 1;
                let bottom_left = ((y + 1) * grid.width + x) as u32;
                let bottom_right = bottom_left + 1;

                indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    top_right,
                    bottom_left,
                    bottom_right,
                ]);
            }
        }

        Self {
            vertices,
            indices,
            grid,
        }
    }

    /// Copy a generated heightfield onto vertex elevations and recompute
    /// normals. The field's dimensions must match the grid the mesh was
    /// built for.
    pub fn apply_height_field(&mut self, field: &HeightField) {
        assert_eq!(
            (field.width, field.height),
            (self.grid.width, self.grid.height),
            "heightfield dimensions must match the mesh grid"
        );
        for (vertex, &height) in self.vertices.iter_mut().zip(&field.samples) {
            vertex.position[1] = height;
        }
        self.recompute_normals();
    }

    /// Area-weighted vertex normals accumulated from face normals.
    fn recompute_normals(&mut self) {
        let mut accumulated = vec![Vec3::ZERO; self.vertices.len()];

        for tri in self.indices.chunks(3) {
            let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let v0 = Vec3::from_array(self.vertices[i0].position);
            let v1 = Vec3::from_array(self.vertices[i1].position);
            let v2 = Vec3::from_array(self.vertices[i2].position);
            let face_normal = (v1 - v0).cross(v2 - v0);
            accumulated[i0] += face_normal;
            accumulated[i1] += face_normal;
            accumulated[i2] += face_normal;
        }

        for (vertex, normal) in self.vertices.iter_mut().zip(accumulated) {
            vertex.normal = normal.normalize_or(Vec3::Y).to_array();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::TerrainParams;
    use crate::terrain::generator::HeightmapGenerator;

    fn small_grid() -> GridSpec {
        GridSpec {
            width: 9,
            height: 7,
            spacing_m: 2.0,
        }
    }

    #[test]
    fn test_grid_mesh_counts() {
        let grid = small_grid();
        let mesh = TerrainGrid::new(grid);
        assert_eq!(mesh.vertices.len(), grid.width * grid.height);
        // (W-1)*(H-1) cells, 2 triangles each, 3 indices per triangle
        assert_eq!(mesh.indices.len(), (grid.width - 1) * (grid.height - 1) * 6);
    }

    #[test]
    fn test_apply_height_field_sets_elevations_in_order() {
        let grid = small_grid();
        let mut generator = HeightmapGenerator::new(grid, TerrainParams::default(), 21);
        let field = generator.regenerate();

        let mut mesh = TerrainGrid::new(grid);
        mesh.apply_height_field(&field);

        for y in 0..grid.height {
            for x in 0..grid.width {
                let vertex = &mesh.vertices[y * grid.width + x];
                assert_eq!(vertex.position[1], field.get(x, y));
                let (wx, wz) = grid.world_pos(x, y);
                assert_eq!(vertex.position[0], wx);
                assert_eq!(vertex.position[2], wz);
            }
        }
    }

    #[test]
    fn test_flat_field_normals_point_up() {
        let grid = small_grid();
        let field = HeightField {
            width: grid.width,
            height: grid.height,
            samples: vec![3.5; grid.width * grid.height],
        };
        let mut mesh = TerrainGrid::new(grid);
        mesh.apply_height_field(&field);
        for vertex in &mesh.vertices {
            assert!((Vec3::from_array(vertex.normal) - Vec3::Y).length() < 1e-5);
        }
    }

    #[test]
    fn test_normals_are_unit_length() {
        let grid = small_grid();
        let mut generator = HeightmapGenerator::new(grid, TerrainParams::default(), 2);
        let field = generator.regenerate();
        let mut mesh = TerrainGrid::new(grid);
        mesh.apply_height_field(&field);
        for vertex in &mesh.vertices {
            let len = Vec3::from_array(vertex.normal).length();
            assert!((len - 1.0).abs() < 1e-4, "normal length {len}");
        }
    }

    #[test]
    #[should_panic(expected = "heightfield dimensions must match")]
    fn test_mismatched_field_dimensions_fail_fast() {
        let mut mesh = TerrainGrid::new(small_grid());
        let field = HeightField {
            width: 4,
            height: 4,
            samples: vec![0.0; 16],
        };
        mesh.apply_height_field(&field);
    }
}

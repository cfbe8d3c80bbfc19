//! Windowless top-down PNG export of a generated archipelago.
//!
//! Maps every grid cell to one pixel: water cells take the animated flow
//! field's color at t = 0, land cells take an elevation ramp. Useful for
//! eyeballing parameter changes without spinning up a window.

use glam::{Vec2, Vec3};
use image::{Rgb, RgbImage};

use crate::params::{GridSpec, TerrainParams};
use crate::terrain::HeightField;
use crate::water::WaterField;

/// Lowland tone of the elevation ramp
const LOWLAND: Vec3 = Vec3::new(0.35, 0.48, 0.25);
/// Highland tone
const HIGHLAND: Vec3 = Vec3::new(0.52, 0.44, 0.30);
/// Summit tone
const SUMMIT: Vec3 = Vec3::new(0.95, 0.95, 0.95);

/// Render `field` to a PNG at `path`.
pub fn save_snapshot(
    path: &str,
    field: &HeightField,
    params: &TerrainParams,
    grid: &GridSpec,
    water: &WaterField,
) -> Result<(), String> {
    let mut img = RgbImage::new(field.width as u32, field.height as u32);

    let peak = field
        .samples
        .iter()
        .fold(params.sea_floor, |acc, &h| acc.max(h));
    let relief = (peak - params.sea_floor).max(f32::EPSILON);

    for y in 0..field.height {
        for x in 0..field.width {
            let height = field.get(x, y);
            let color = if height <= params.sea_floor {
                let (wx, wy) = grid.world_pos(x, y);
                water.surface_color(Vec2::new(wx, wy), 0.0)
            } else {
                elevation_ramp((height - params.sea_floor) / relief)
            };
            img.put_pixel(x as u32, y as u32, to_rgb8(color));
        }
    }

    img.save(path)
        .map_err(|e| format!("Failed to save snapshot to {}: {}", path, e))
}

/// Piecewise lowland-highland-summit ramp over normalized elevation.
fn elevation_ramp(t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.6 {
        LOWLAND.lerp(HIGHLAND, t / 0.6)
    } else {
        HIGHLAND.lerp(SUMMIT, (t - 0.6) / 0.4)
    }
}

fn to_rgb8(color: Vec3) -> Rgb<u8> {
    let c = (color.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
    Rgb([c.x as u8, c.y as u8, c.z as u8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::WaterParams;
    use crate::terrain::HeightmapGenerator;

    #[test]
    fn test_elevation_ramp_endpoints() {
        assert_eq!(elevation_ramp(0.0), LOWLAND);
        assert_eq!(elevation_ramp(1.0), SUMMIT);
        // Out-of-range inputs clamp instead of extrapolating
        assert_eq!(elevation_ramp(-2.0), LOWLAND);
        assert_eq!(elevation_ramp(5.0), SUMMIT);
    }

    #[test]
    fn test_snapshot_writes_png() {
        let grid = GridSpec {
            width: 24,
            height: 20,
            spacing_m: 1.0,
        };
        let mut generator = HeightmapGenerator::new(grid, TerrainParams::default(), 42);
        let field = generator.regenerate();
        let water = WaterField::new(WaterParams::default());

        let path = std::env::temp_dir().join("islewave_snapshot_test.png");
        let path = path.to_str().unwrap();
        save_snapshot(path, &field, generator.params(), &grid, &water).unwrap();

        let meta = std::fs::metadata(path).unwrap();
        assert!(meta.len() > 0);
        let _ = std::fs::remove_file(path);
    }
}

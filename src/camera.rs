//! Camera kinematics: orbiting view over the archipelago plus a fixed
//! debugging preset.

use glam::{Mat4, Vec3};

use crate::params::{CameraPreset, FixedCamera, OrbitCamera, RenderConfig};

/// Camera system driven by elapsed time
pub struct CameraSystem {
    preset: CameraPreset,
}

impl CameraSystem {
    /// Create new camera system with specified preset
    pub fn new(preset: CameraPreset) -> Self {
        Self { preset }
    }

    /// Compute camera position and look-at target for given time
    pub fn compute_position_and_target(&self, time_s: f32) -> (Vec3, Vec3) {
        match &self.preset {
            CameraPreset::Orbit(params) => Self::compute_orbit(params, time_s),
            CameraPreset::Fixed(params) => Self::compute_fixed(params),
        }
    }

    /// Circle the target at constant radius and height
    fn compute_orbit(p: &OrbitCamera, time_s: f32) -> (Vec3, Vec3) {
        let target = Vec3::from_array(p.target);
        let angle = time_s * p.angular_speed_rad_per_s;
        let eye = target
            + Vec3::new(
                angle.cos() * p.radius_m,
                p.height_m,
                angle.sin() * p.radius_m,
            );
        (eye, target)
    }

    fn compute_fixed(p: &FixedCamera) -> (Vec3, Vec3) {
        (Vec3::from_array(p.position), Vec3::from_array(p.target))
    }

    /// Create view-projection matrix for rendering
    ///
    /// # Returns
    /// Tuple of (view_proj_matrix, camera_position)
    pub fn create_view_proj_matrix(
        &self,
        time_s: f32,
        render_config: &RenderConfig,
    ) -> (Mat4, Vec3) {
        let (eye, target) = self.compute_position_and_target(time_s);

        // Always keep Y as up vector (camera never rolls)
        let up = Vec3::Y;

        let view = Mat4::look_at_rh(eye, target, up);
        let proj = Mat4::perspective_rh(
            render_config.fov_degrees.to_radians(),
            render_config.aspect_ratio(),
            render_config.near_plane_m,
            render_config.far_plane_m,
        );

        (proj * view, eye)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbit_keeps_constant_radius_and_height() {
        let params = OrbitCamera::default();
        let camera = CameraSystem::new(CameraPreset::Orbit(params.clone()));

        for t in 0..50 {
            let (eye, target) = camera.compute_position_and_target(t as f32 * 0.73);
            let horizontal =
                ((eye.x - target.x).powi(2) + (eye.z - target.z).powi(2)).sqrt();
            assert!(
                (horizontal - params.radius_m).abs() < 1e-2,
                "radius drifted to {horizontal} at t={t}"
            );
            assert!((eye.y - target.y - params.height_m).abs() < 1e-3);
        }
    }

    #[test]
    fn test_orbit_moves_over_time() {
        let camera = CameraSystem::new(CameraPreset::default());
        let (eye0, _) = camera.compute_position_and_target(0.0);
        let (eye1, _) = camera.compute_position_and_target(5.0);
        assert_ne!(eye0, eye1);
    }

    #[test]
    fn test_fixed_camera_is_stationary() {
        let params = FixedCamera::default();
        let camera = CameraSystem::new(CameraPreset::Fixed(params.clone()));
        let (eye0, target0) = camera.compute_position_and_target(0.0);
        let (eye1, target1) = camera.compute_position_and_target(99.0);
        assert_eq!(eye0, eye1);
        assert_eq!(target0, target1);
        assert_eq!(eye0, Vec3::from_array(params.position));
    }

    #[test]
    fn test_view_proj_matrix_generation() {
        let camera = CameraSystem::new(CameraPreset::default());
        let render_config = RenderConfig::default();

        let (view_proj, eye_pos) = camera.create_view_proj_matrix(0.0, &render_config);

        // Matrix should not be identity or zero
        assert_ne!(view_proj, Mat4::IDENTITY);
        assert_ne!(view_proj, Mat4::ZERO);

        // Eye position should be valid (not NaN or infinite)
        assert!(eye_pos.x.is_finite());
        assert!(eye_pos.y.is_finite());
        assert!(eye_pos.z.is_finite());
    }
}

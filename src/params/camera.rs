//! Camera presets and their parameters.

/// Orbiting camera parameters (default preset).
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Point the camera circles and looks at (meters)
    pub target: [f32; 3],

    /// Horizontal distance from the target (meters)
    pub radius_m: f32,

    /// Camera height above the target (meters)
    pub height_m: f32,

    /// Angular speed around the target (radians per second)
    pub angular_speed_rad_per_s: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: [0.0, 0.0, 0.0],
            radius_m: 280.0,
            height_m: 160.0,
            angular_speed_rad_per_s: 0.08,
        }
    }
}

/// Fixed camera position (for debugging)
#[derive(Debug, Clone)]
pub struct FixedCamera {
    /// Camera position (meters)
    pub position: [f32; 3],

    /// Look-at target (meters)
    pub target: [f32; 3],
}

impl Default for FixedCamera {
    fn default() -> Self {
        Self {
            position: [0.0, 220.0, -260.0], // High over the southern rim
            target: [0.0, 0.0, 0.0],        // Looking at the archipelago center
        }
    }
}

/// Camera preset selection
#[derive(Debug, Clone)]
pub enum CameraPreset {
    /// Orbit preset: circles the archipelago at constant radius and height
    Orbit(OrbitCamera),

    /// Fixed preset: stationary camera for debugging
    Fixed(FixedCamera),
}

impl Default for CameraPreset {
    fn default() -> Self {
        Self::Orbit(OrbitCamera::default())
    }
}

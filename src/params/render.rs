//! Rendering, material and recording configuration.

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (meters)
    pub near_plane_m: f32,

    /// Far clipping plane (meters)
    pub far_plane_m: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            fov_degrees: 60.0,
            near_plane_m: 0.1,
            far_plane_m: 2000.0, // Enough to keep the far rim of the domain visible
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height as f32
    }
}

/// Contour-shaded terrain material parameters (fragment-stage uniforms).
#[derive(Debug, Clone)]
pub struct TerrainMaterial {
    /// Base surface color (RGB, linear)
    pub base_color: [f32; 3],

    /// Topographic contour line color (RGB, linear)
    pub line_color: [f32; 3],

    /// Vertical distance between contour lines (meters)
    pub contour_spacing_m: f32,

    /// Contour line thickness (meters of elevation)
    pub contour_width_m: f32,

    /// Contour overlay strength in [0, 1]
    pub contour_intensity: f32,

    /// Direction toward the sun (normalized in the shader)
    pub sun_direction: [f32; 3],

    /// Camera distance at which contour lines begin to fade (meters)
    pub fade_start_m: f32,

    /// Camera distance past which contour lines are gone (meters)
    pub fade_end_m: f32,
}

impl Default for TerrainMaterial {
    fn default() -> Self {
        Self {
            base_color: [0.38, 0.42, 0.26],
            line_color: [0.16, 0.13, 0.08],
            contour_spacing_m: 4.0,
            contour_width_m: 0.35,
            contour_intensity: 0.65,
            sun_direction: [0.4, 0.8, 0.3],
            fade_start_m: 350.0,
            fade_end_m: 900.0,
        }
    }
}

/// Recording mode configuration
#[derive(Debug, Clone)]
pub struct RecordingConfig {
    /// Duration to record (seconds)
    pub duration_secs: f32,

    /// Output directory for frames
    pub output_dir: String,

    /// Frame rate (FPS)
    pub fps: u32,
}

impl RecordingConfig {
    pub fn new(duration_secs: f32) -> Self {
        Self {
            duration_secs,
            output_dir: "recording".to_string(),
            fps: 60,
        }
    }

    /// Total number of frames to capture
    pub fn total_frames(&self) -> usize {
        (self.duration_secs * self.fps as f32).ceil() as usize
    }

    /// Frame directory path
    pub fn frames_dir(&self) -> String {
        format!("{}/frames", self.output_dir)
    }
}

//! Water surface appearance parameters.

/// Water surface shading parameters.
///
/// The flow pattern is a triple-warped fBm evaluated per fragment; these
/// values feed the shader uniforms and the CPU field used by the snapshot
/// exporter and tests.
#[derive(Debug, Clone)]
pub struct WaterParams {
    /// Surface coordinate scale applied before the fBm (higher = busier flow)
    pub wave_scale: f32,

    /// Time rate of the slow warp channel (stage 2, first component)
    pub slow_rate: f32,

    /// Time rate of the fast warp channel (stage 2 second component and
    /// stage 3); differs from `slow_rate` so the flow never looks
    /// synchronized
    pub fast_rate: f32,

    /// Darkest water tone (RGB, linear)
    pub deep_color: [f32; 3],

    /// Mid water tone (RGB, linear)
    pub mid_color: [f32; 3],

    /// Lightest water tone, blended in where the warp magnitude is strong
    pub light_color: [f32; 3],

    /// Noise seed for the CPU field (the GPU path hashes coordinates and
    /// needs no seed)
    pub noise_seed: u32,

    /// Elevation of the water plane in world units
    pub surface_level_m: f32,
}

impl Default for WaterParams {
    fn default() -> Self {
        Self {
            wave_scale: 0.04,
            slow_rate: 0.06,
            fast_rate: 0.17,
            deep_color: [0.012, 0.055, 0.19],
            mid_color: [0.02, 0.14, 0.30],
            light_color: [0.22, 0.55, 0.62],
            noise_seed: 7,
            surface_level_m: 0.0,
        }
    }
}

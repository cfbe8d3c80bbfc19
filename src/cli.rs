//! Command-line argument parsing.

use clap::Parser;

use islewave::params::{
    CameraPreset, FixedCamera, GridSpec, OrbitCamera, RecordingConfig, TerrainParams,
};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Islewave")]
#[command(about = "Procedural archipelago terrain and water renderer", long_about = None)]
pub struct Args {
    /// Seed for island placement and terrain noise
    #[arg(long, default_value_t = 42)]
    pub seed: u32,

    /// Grid resolution (vertices per side)
    #[arg(long, default_value_t = 257)]
    pub grid_size: usize,

    /// Spacing between grid vertices (meters)
    #[arg(long, default_value_t = 1.0)]
    pub spacing: f32,

    /// Number of islands to scatter (defaults to the parameter preset)
    #[arg(long)]
    pub islands: Option<usize>,

    /// Camera preset: orbit (default), fixed
    #[arg(long, value_name = "PRESET", default_value = "orbit")]
    pub camera_preset: String,

    /// Camera height for the orbit preset (meters above the target)
    #[arg(long, value_name = "METERS", default_value_t = 160.0)]
    pub elevation: f32,

    /// Record rendered frames to PNG (duration in seconds)
    #[arg(long, value_name = "SECONDS")]
    pub record: Option<f32>,

    /// Write a top-down PNG of the generated terrain and exit
    #[arg(long, value_name = "PATH")]
    pub snapshot: Option<String>,
}

impl Args {
    /// Grid layout selected on the command line.
    pub fn grid_spec(&self) -> GridSpec {
        GridSpec {
            width: self.grid_size,
            height: self.grid_size,
            spacing_m: self.spacing,
        }
    }

    /// Terrain parameter preset with command-line overrides applied.
    pub fn terrain_params(&self) -> TerrainParams {
        let mut params = TerrainParams::default();
        if let Some(islands) = self.islands {
            params.num_islands = islands;
        }
        params
    }

    /// Parse camera preset from command-line arguments
    pub fn parse_camera_preset(&self) -> CameraPreset {
        match self.camera_preset.to_lowercase().as_str() {
            "orbit" => {
                println!("Camera: Orbit ({}m above target)", self.elevation);
                let mut orbit = OrbitCamera::default();
                orbit.height_m = self.elevation;
                CameraPreset::Orbit(orbit)
            }
            "fixed" => {
                println!("Camera: Fixed");
                CameraPreset::Fixed(FixedCamera::default())
            }
            other => {
                eprintln!("Warning: Unknown camera preset '{}', using orbit", other);
                CameraPreset::Orbit(OrbitCamera::default())
            }
        }
    }

    /// Create recording configuration if recording mode is enabled
    pub fn create_recording_config(&self) -> Option<RecordingConfig> {
        self.record.map(|duration| {
            let config = RecordingConfig::new(duration);

            // Create output directories
            std::fs::create_dir_all(config.frames_dir())
                .expect("Failed to create frames directory");

            config
        })
    }
}

//! Parameter definitions with physical units and documented semantics.
//!
//! All magic numbers are extracted here with:
//! - Physical units (meters, seconds, etc.)
//! - Documented ranges and meanings
//! - Type safety where possible

mod camera;
mod render;
mod terrain;
mod water;

// Re-export all types
pub use camera::{CameraPreset, FixedCamera, OrbitCamera};
pub use render::{RecordingConfig, RenderConfig, TerrainMaterial};
pub use terrain::{GridSpec, LandTransition, TerrainParams};
pub use water::WaterParams;

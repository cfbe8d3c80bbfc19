//! Islewave library - procedural archipelago terrain and water rendering

pub mod camera;
pub mod panel;
pub mod params;
pub mod rendering;
pub mod snapshot;
pub mod terrain;
pub mod water;

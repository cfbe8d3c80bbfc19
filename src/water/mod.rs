//! Animated water surface: flow field and plane mesh.

pub mod field;
pub mod mesh;

pub use field::{FlowSample, WaterField};
pub use mesh::{WaterPlane, WaterVertex};

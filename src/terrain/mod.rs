//! Procedural archipelago heightfield: noise composition, generation sweep
//! and mesh application.

pub mod field;
pub mod generator;
pub mod mesh;

pub use field::{DomainExtent, SeedPoint};
pub use generator::{HeightField, HeightmapGenerator};
pub use mesh::{TerrainGrid, TerrainVertex};

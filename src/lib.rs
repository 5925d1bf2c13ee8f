//! Voxel-space terrain flyer (workspace facade crate).
//!
//! Re-exports the workspace crates under short names
//! (`voxel_space::{core, engine, assets, input, term, types}`) and holds the
//! startup configuration shared by the binary and the integration tests.

pub mod config;

pub use voxel_space_assets as assets;
pub use voxel_space_core as core;
pub use voxel_space_engine as engine;
pub use voxel_space_input as input;
pub use voxel_space_term as term;
pub use voxel_space_types as types;

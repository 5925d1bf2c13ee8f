//! Map resources: PNG map pairs and procedurally generated terrain.
//!
//! Both loaders produce a [`MapData`] that
//! [`HeightfieldStore::from_maps`](voxel_space_core::HeightfieldStore::from_maps)
//! validates. Any failure is fatal to the caller.

pub mod generate;
pub mod png_loader;
pub mod template;

pub use voxel_space_core as core;
pub use voxel_space_types as types;

use voxel_space_core::{HeightfieldStore, MapData, ResourceError};

pub use generate::{generate, terrain_palette, GeneratedLoader, WATER_LEVEL};
pub use png_loader::{decode_png, palette_from_rgb, PngLoader};
pub use template::{map_paths, MapTemplate, DEFAULT_COLOR_TEMPLATE, DEFAULT_HEIGHT_TEMPLATE};

/// Produces a height/color grid pair and its initial palette.
pub trait ResourceLoader {
    fn load(&self) -> Result<MapData, ResourceError>;

    /// Load and validate in one step.
    fn load_store(&self) -> Result<HeightfieldStore, ResourceError> {
        HeightfieldStore::from_maps(self.load()?)
    }
}

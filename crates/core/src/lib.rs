//! Core renderer module - pure, deterministic, and testable
//!
//! This crate contains the flight model and the voxel-space rendering kernel.
//! It has **no dependencies** on terminals, windows or files, making it:
//!
//! - **Deterministic**: the same key sequence produces the same frames
//! - **Testable**: every stage runs headless on in-memory grids
//! - **Portable**: any presenter that can show a palette-indexed surface works
//!
//! # Module Structure
//!
//! - [`heightfield`]: co-registered height/color grids with toroidal lookup, day/night palettes
//! - [`camera`]: camera pose and six-axis accelerate/brake flight model
//! - [`tuning`]: far plane, scale, step growth and column replication knobs
//! - [`raymarch`]: per-column ray-marcher writing vertical spans
//! - [`surface`]: bounds-checked palette-indexed pixel surface
//! - [`keys`]: held/edge key states fed by input events
//! - [`error`]: resource loading errors
//!
//! # Example
//!
//! ```
//! use voxel_space_core::{
//!     render_frame, CameraState, FlightIntents, Grid, HeightfieldStore, MapData,
//!     RenderTuning, Surface,
//! };
//!
//! let store = HeightfieldStore::from_maps(MapData {
//!     heights: Grid::filled(64, 20),
//!     colors: Grid::filled(64, 7),
//!     palette: [0xFF00_0000; 256],
//! })
//! .unwrap();
//!
//! let mut camera = CameraState::default();
//! camera.update(FlightIntents::default());
//!
//! let mut surface = Surface::new(200, 120);
//! render_frame(&camera, &RenderTuning::default(), &store, &mut surface);
//! assert!(surface.pixels().contains(&7));
//! ```

pub mod camera;
pub mod error;
pub mod heightfield;
pub mod keys;
pub mod raymarch;
pub mod surface;
pub mod tuning;

pub use voxel_space_types as types;

pub use camera::{AxisDynamics, CameraState, Drive, FlightIntents};
pub use error::{MapLayer, ResourceError};
pub use heightfield::{derive_night_palette, Grid, HeightfieldStore, MapData};
pub use keys::KeyStates;
pub use raymarch::{march_column, render_frame, Frustum, Span};
pub use surface::Surface;
pub use tuning::RenderTuning;

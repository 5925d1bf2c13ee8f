//! Terminal presentation layer.
//!
//! The drawing surface is palette-indexed; this crate turns it into 24-bit
//! colored half-block cells and flushes them to the terminal with crossterm.
//!
//! - [`fb`]: styled cell framebuffer
//! - [`layer_view`]: surface + palette → framebuffer, centered in the viewport (pure)
//! - [`renderer`]: diffing terminal writer
//! - [`display`]: the compositor-facing [`TerminalDisplay`]

pub mod display;
pub mod fb;
pub mod layer_view;
pub mod renderer;

pub use voxel_space_core as core;
pub use voxel_space_engine as engine;
pub use voxel_space_types as types;

pub use display::TerminalDisplay;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use layer_view::{LayerView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

//! Terminal input module.
//!
//! Maps `crossterm` events into [`crate::types::InputEvent`]s and provides a
//! key tracker suitable for terminal environments (including terminals
//! without key-release events).

pub mod handler;
pub mod map;
pub mod terminal;

pub use voxel_space_engine as engine;
pub use voxel_space_types as types;

pub use handler::KeyTracker;
pub use map::{map_key_code, map_key_event};
pub use terminal::TerminalInput;

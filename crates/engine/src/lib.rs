//! Frame compositor.
//!
//! Drives one frame per tick: input events → flight model → ray-marcher →
//! present. The compositor owns every piece of mutable state (camera, tuning,
//! key states, surface), so the whole loop is single-threaded and lock-free.
//!
//! Presentation and input are reached through the [`Display`] and
//! [`InputSource`] traits, so the same loop runs in a terminal or headless in
//! tests.

pub mod compositor;
pub mod fps;

pub use voxel_space_core as core;
pub use voxel_space_types as types;

pub use compositor::{Compositor, Display, EventBatch, InputSource, MAX_EVENTS_PER_TICK};
pub use fps::FpsCounter;

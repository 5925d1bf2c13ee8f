//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the renderer.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (flight model, ray-marcher, terminal presenter).
//!
//! # Layer Dimensions
//!
//! The drawing layer is a palette-indexed surface, independent of the screen:
//!
//! - **Width**: 200 columns
//! - **Height**: 120 rows
//! - **Sky index**: 255, the color every frame starts from
//!
//! # Tuning Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FAR_PLANE` | 600.0 | Ray-march termination depth |
//! | `DEFAULT_SCALE_FACTOR` | 70.0 | Perspective height scale |
//! | `DEFAULT_STEP_GROWTH` | 0.01 | Per-iteration growth of the depth step |
//! | `DEFAULT_HORIZONTAL_DIVISIONS` | 1 | Pixel columns per computed column |
//! | `TICK_MS` | 33 | Fixed frame interval (~30 FPS) |
//!
//! # Examples
//!
//! ```
//! use voxel_space_types::{Key, InputEvent, PALETTE_SIZE};
//!
//! let key = Key::from_str("w").unwrap();
//! assert_eq!(key, Key::W);
//! assert_eq!(Key::ALL[key.index()], Key::W);
//!
//! let ev = InputEvent::KeyDown(Key::Escape);
//! assert!(ev.is_quit());
//! assert_eq!(PALETTE_SIZE, 256);
//! ```

/// Drawing layer width in pixels.
pub const LAYER_WIDTH: u16 = 200;

/// Drawing layer height in pixels.
pub const LAYER_HEIGHT: u16 = 120;

/// Palette index the layer is cleared to before each frame.
pub const SKY_INDEX: u8 = 255;

/// Number of entries in a color table.
pub const PALETTE_SIZE: usize = 256;

/// Side of the bundled map grids.
pub const DEFAULT_MAP_SIDE: usize = 1024;

/// Fixed frame interval in milliseconds (33ms ≈ 30 FPS).
pub const TICK_MS: u32 = 33;

pub const DEFAULT_FAR_PLANE: f32 = 600.0;
pub const DEFAULT_SCALE_FACTOR: f32 = 70.0;
pub const DEFAULT_STEP_GROWTH: f32 = 0.01;
pub const DEFAULT_HORIZONTAL_DIVISIONS: u8 = 1;

pub const MIN_FAR_PLANE: f32 = 10.0;
pub const MIN_SCALE_FACTOR: f32 = 10.0;
pub const MIN_STEP_GROWTH: f32 = 0.005;
pub const MAX_HORIZONTAL_DIVISIONS: u8 = 4;

pub const FAR_PLANE_STEP: f32 = 10.0;
pub const SCALE_FACTOR_STEP: f32 = 10.0;
pub const STEP_GROWTH_STEP: f32 = 0.001;

/// Camera altitude bounds.
pub const MIN_CAMERA_HEIGHT: f32 = 10.0;
pub const MAX_CAMERA_HEIGHT: f32 = 300.0;

/// Altitude change per tick while Up/Down is held.
pub const CLIMB_PER_TICK: f32 = 5.0;

/// A 256-entry color table of packed `0xAARRGGBB` values.
pub type Palette = [u32; PALETTE_SIZE];

/// Split a packed `0xAARRGGBB` value into `(a, r, g, b)`.
#[inline]
pub const fn unpack_argb(c: u32) -> (u8, u8, u8, u8) {
    (
        (c >> 24) as u8,
        (c >> 16) as u8,
        (c >> 8) as u8,
        c as u8,
    )
}

/// Pack `(a, r, g, b)` into `0xAARRGGBB`.
#[inline]
pub const fn pack_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Keyboard keys the renderer reacts to.
///
/// Each variant names a physical key; what it does is decided by the flight
/// model and the compositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Q,
    E,
    Z,
    X,
    C,
    V,
    N,
    K,
    L,
    Escape,
}

impl Key {
    pub const COUNT: usize = 16;

    pub const ALL: [Key; Key::COUNT] = [
        Key::W,
        Key::A,
        Key::S,
        Key::D,
        Key::Up,
        Key::Down,
        Key::Q,
        Key::E,
        Key::Z,
        Key::X,
        Key::C,
        Key::V,
        Key::N,
        Key::K,
        Key::L,
        Key::Escape,
    ];

    /// Dense index into per-key tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parse a key name (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use voxel_space_types::Key;
    ///
    /// assert_eq!(Key::from_str("Up"), Some(Key::Up));
    /// assert_eq!(Key::from_str("esc"), Some(Key::Escape));
    /// assert_eq!(Key::from_str("F1"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "w" => Some(Key::W),
            "a" => Some(Key::A),
            "s" => Some(Key::S),
            "d" => Some(Key::D),
            "up" => Some(Key::Up),
            "down" => Some(Key::Down),
            "q" => Some(Key::Q),
            "e" => Some(Key::E),
            "z" => Some(Key::Z),
            "x" => Some(Key::X),
            "c" => Some(Key::C),
            "v" => Some(Key::V),
            "n" => Some(Key::N),
            "k" => Some(Key::K),
            "l" => Some(Key::L),
            "esc" | "escape" => Some(Key::Escape),
            _ => None,
        }
    }
}

/// A discrete input event delivered to the compositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Any pointer button went down.
    PointerDown,
}

impl InputEvent {
    /// Escape and pointer clicks end the session.
    pub fn is_quit(&self) -> bool {
        matches!(self, InputEvent::KeyDown(Key::Escape) | InputEvent::PointerDown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_indices_are_dense_and_ordered() {
        for (i, key) in Key::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
    }

    #[test]
    fn tuning_defaults_match_classic_renderer() {
        assert_eq!(DEFAULT_FAR_PLANE, 600.0);
        assert_eq!(DEFAULT_SCALE_FACTOR, 70.0);
        assert_eq!(DEFAULT_STEP_GROWTH, 0.01);
        assert_eq!(DEFAULT_HORIZONTAL_DIVISIONS, 1);
        assert_eq!(LAYER_WIDTH, 200);
        assert_eq!(LAYER_HEIGHT, 120);
        assert!(DEFAULT_MAP_SIDE.is_power_of_two());
    }

    #[test]
    fn argb_pack_roundtrip() {
        let c = pack_argb(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c, 0x1234_5678);
        assert_eq!(unpack_argb(c), (0x12, 0x34, 0x56, 0x78));
    }

    #[test]
    fn quit_events() {
        assert!(InputEvent::PointerDown.is_quit());
        assert!(InputEvent::KeyDown(Key::Escape).is_quit());
        assert!(!InputEvent::KeyUp(Key::Escape).is_quit());
        assert!(!InputEvent::KeyDown(Key::Q).is_quit());
    }
}

//! Operator-adjustable render quality knobs.
//!
//! Every setter clamps, so the ray-marcher's preconditions (positive far plane,
//! positive scale, positive step growth, 1..=4 divisions) hold by construction.

use crate::keys::KeyStates;
use crate::types::{
    Key, DEFAULT_FAR_PLANE, DEFAULT_HORIZONTAL_DIVISIONS, DEFAULT_SCALE_FACTOR,
    DEFAULT_STEP_GROWTH, FAR_PLANE_STEP, MAX_HORIZONTAL_DIVISIONS, MIN_FAR_PLANE,
    MIN_SCALE_FACTOR, MIN_STEP_GROWTH, SCALE_FACTOR_STEP, STEP_GROWTH_STEP,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTuning {
    far_plane: f32,
    scale_factor: f32,
    step_growth: f32,
    horizontal_divisions: u8,
}

impl Default for RenderTuning {
    fn default() -> Self {
        Self {
            far_plane: DEFAULT_FAR_PLANE,
            scale_factor: DEFAULT_SCALE_FACTOR,
            step_growth: DEFAULT_STEP_GROWTH,
            horizontal_divisions: DEFAULT_HORIZONTAL_DIVISIONS,
        }
    }
}

impl RenderTuning {
    pub fn new(far_plane: f32, scale_factor: f32, step_growth: f32, divisions: u8) -> Self {
        let mut t = Self::default();
        t.set_far_plane(far_plane);
        t.set_scale_factor(scale_factor);
        t.set_step_growth(step_growth);
        t.set_horizontal_divisions(divisions);
        t
    }

    pub fn far_plane(&self) -> f32 {
        self.far_plane
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    pub fn step_growth(&self) -> f32 {
        self.step_growth
    }

    pub fn horizontal_divisions(&self) -> u8 {
        self.horizontal_divisions
    }

    // NaN falls back to the minimum instead of poisoning the march.
    pub fn set_far_plane(&mut self, v: f32) {
        self.far_plane = if v.is_nan() { MIN_FAR_PLANE } else { v.max(MIN_FAR_PLANE) };
    }

    pub fn set_scale_factor(&mut self, v: f32) {
        self.scale_factor = if v.is_nan() {
            MIN_SCALE_FACTOR
        } else {
            v.max(MIN_SCALE_FACTOR)
        };
    }

    pub fn set_step_growth(&mut self, v: f32) {
        self.step_growth = if v.is_nan() {
            MIN_STEP_GROWTH
        } else {
            v.max(MIN_STEP_GROWTH)
        };
    }

    pub fn set_horizontal_divisions(&mut self, v: u8) {
        self.horizontal_divisions = v.clamp(1, MAX_HORIZONTAL_DIVISIONS);
    }

    /// 1 → 2 → 3 → 4 → 1.
    pub fn cycle_horizontal_divisions(&mut self) {
        self.horizontal_divisions = if self.horizontal_divisions >= MAX_HORIZONTAL_DIVISIONS {
            1
        } else {
            self.horizontal_divisions + 1
        };
    }

    /// Apply one tick of the tuning keys.
    ///
    /// Q/E, Z/X and C/V repeat every tick while held; L cycles the divisions
    /// once per key-down.
    pub fn apply_keys(&mut self, keys: &KeyStates) {
        if keys.pressed(Key::Q) {
            self.set_far_plane(self.far_plane + FAR_PLANE_STEP);
        }
        if keys.pressed(Key::E) {
            self.set_far_plane(self.far_plane - FAR_PLANE_STEP);
        }
        if keys.pressed(Key::Z) {
            self.set_step_growth(self.step_growth + STEP_GROWTH_STEP);
        }
        if keys.pressed(Key::X) {
            self.set_step_growth(self.step_growth - STEP_GROWTH_STEP);
        }
        if keys.pressed(Key::C) {
            self.set_scale_factor(self.scale_factor + SCALE_FACTOR_STEP);
        }
        if keys.pressed(Key::V) {
            self.set_scale_factor(self.scale_factor - SCALE_FACTOR_STEP);
        }
        if keys.just_pressed(Key::L) {
            self.cycle_horizontal_divisions();
        }
    }
}

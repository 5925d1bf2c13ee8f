//! Per-key held state with press edges.

use crate::types::{InputEvent, Key};

/// Which keys are currently held, and which went down during this tick.
///
/// `pressed` is level-triggered and drives continuous controls (throttle,
/// tuning knobs). `just_pressed` is edge-triggered and drives toggles; it is
/// cleared by [`KeyStates::end_tick`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyStates {
    held: [bool; Key::COUNT],
    edge: [bool; Key::COUNT],
}

impl KeyStates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        let i = key.index();
        if !self.held[i] {
            self.edge[i] = true;
        }
        self.held[i] = true;
    }

    pub fn release(&mut self, key: Key) {
        self.held[key.index()] = false;
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(key) => self.press(key),
            InputEvent::KeyUp(key) => self.release(key),
            InputEvent::PointerDown => {}
        }
    }

    #[inline]
    pub fn pressed(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    #[inline]
    pub fn just_pressed(&self, key: Key) -> bool {
        self.edge[key.index()]
    }

    pub fn end_tick(&mut self) {
        self.edge = [false; Key::COUNT];
    }

    pub fn release_all(&mut self) {
        self.held = [false; Key::COUNT];
        self.edge = [false; Key::COUNT];
    }
}

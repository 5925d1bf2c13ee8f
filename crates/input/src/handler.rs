//! Held-key tracking for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;

use crate::types::{InputEvent, Key};

// In terminals without key-release events, a key counts as held while
// press/repeat events keep arriving. Until the first repeat the gap is the
// OS auto-repeat delay (about 500ms on Windows, 660ms on X11), so the first
// window must outlast it; once repeats flow they arrive every few tens of ms.
const DEFAULT_INITIAL_REPEAT_TIMEOUT_MS: u32 = 750;
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

#[derive(Debug, Clone, Copy)]
struct Held {
    last_seen: Instant,
    repeating: bool,
}

/// Turns press/repeat/release notifications into key-down/key-up events.
#[derive(Debug, Clone)]
pub struct KeyTracker {
    held: [Option<Held>; Key::COUNT],
    release_events_seen: bool,
    initial_repeat_timeout_ms: u32,
    key_release_timeout_ms: u32,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self {
            held: [None; Key::COUNT],
            release_events_seen: false,
            initial_repeat_timeout_ms: DEFAULT_INITIAL_REPEAT_TIMEOUT_MS,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    /// How long a key that has not repeated yet stays held.
    pub fn with_initial_repeat_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.initial_repeat_timeout_ms = timeout_ms;
        self
    }

    /// How long a repeating key stays held after its last repeat.
    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn initial_repeat_timeout_ms(&self) -> u32 {
        self.initial_repeat_timeout_ms
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// True once the terminal has delivered a real release event.
    pub fn has_release_events(&self) -> bool {
        self.release_events_seen
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.index()].is_some()
    }

    /// A press or auto-repeat. Only the first one of a hold is reported.
    pub fn press(&mut self, key: Key, now: Instant) -> Option<InputEvent> {
        let slot = &mut self.held[key.index()];
        if let Some(h) = slot {
            h.last_seen = now;
            h.repeating = true;
            return None;
        }
        *slot = Some(Held {
            last_seen: now,
            repeating: false,
        });
        Some(InputEvent::KeyDown(key))
    }

    pub fn release(&mut self, key: Key) -> InputEvent {
        self.release_events_seen = true;
        self.held[key.index()] = None;
        InputEvent::KeyUp(key)
    }

    /// Synthesize releases for keys that went quiet.
    ///
    /// Does nothing once real release events have been observed.
    pub fn expire(&mut self, now: Instant) -> ArrayVec<InputEvent, { Key::COUNT }> {
        let mut out = ArrayVec::new();
        if self.release_events_seen {
            return out;
        }
        for key in Key::ALL {
            let slot = &mut self.held[key.index()];
            if let Some(h) = *slot {
                let timeout_ms = if h.repeating {
                    self.key_release_timeout_ms
                } else {
                    self.initial_repeat_timeout_ms
                };
                if now.saturating_duration_since(h.last_seen)
                    > Duration::from_millis(timeout_ms as u64)
                {
                    *slot = None;
                    out.push(InputEvent::KeyUp(key));
                }
            }
        }
        out
    }

    /// Release every held key, e.g. when the terminal loses focus.
    pub fn release_all(&mut self) -> ArrayVec<InputEvent, { Key::COUNT }> {
        let mut out = ArrayVec::new();
        for key in Key::ALL {
            if self.held[key.index()].take().is_some() {
                out.push(InputEvent::KeyUp(key));
            }
        }
        out
    }
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new()
    }
}

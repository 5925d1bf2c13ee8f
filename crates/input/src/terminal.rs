//! crossterm-backed input source.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
    KeyEventKind, KeyboardEnhancementFlags, MouseEventKind, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};

use crate::engine::{EventBatch, InputSource, MAX_EVENTS_PER_TICK};
use crate::handler::KeyTracker;
use crate::map::map_key_event;
use crate::types::{InputEvent, Key};

// Reading stops here so a focus loss or timeout can still release every key.
const READ_LIMIT: usize = MAX_EVENTS_PER_TICK - Key::COUNT;

pub struct TerminalInput {
    tracker: KeyTracker,
    enhanced: bool,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::with_tracker(KeyTracker::new())
    }

    pub fn with_tracker(tracker: KeyTracker) -> Self {
        Self {
            tracker,
            enhanced: false,
        }
    }

    /// Enable mouse capture and focus reporting, plus key release reporting
    /// where the terminal supports it. Call after the terminal is in raw mode.
    pub fn enter(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(stdout, EnableMouseCapture, EnableFocusChange)?;
        if terminal::supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            self.enhanced = true;
        }
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        if self.enhanced {
            execute!(stdout, PopKeyboardEnhancementFlags)?;
            self.enhanced = false;
        }
        execute!(stdout, DisableFocusChange, DisableMouseCapture)?;
        Ok(())
    }

    /// Whether the terminal reports key releases natively.
    pub fn has_release_events(&self) -> bool {
        self.enhanced || self.tracker.has_release_events()
    }

    fn translate(&mut self, ev: Event, now: Instant, out: &mut EventBatch) {
        let mapped = match ev {
            Event::Key(key) => match map_key_event(key) {
                Some(k) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => self.tracker.press(k, now),
                    KeyEventKind::Release => Some(self.tracker.release(k)),
                },
                None => None,
            },
            Event::Mouse(m) => match m.kind {
                MouseEventKind::Down(_) => Some(InputEvent::PointerDown),
                _ => None,
            },
            // Releases that happen while unfocused are never reported.
            Event::FocusLost => {
                for e in self.tracker.release_all() {
                    let _ = out.try_push(e);
                }
                None
            }
            _ => None,
        };
        if let Some(e) = mapped {
            let _ = out.try_push(e);
        }
    }

    /// Pull events from `next` until it runs dry or the batch reaches
    /// `READ_LIMIT`, then append timeout releases.
    fn drain(&mut self, mut next: impl FnMut() -> Result<Option<Event>>) -> Result<EventBatch> {
        let mut out = EventBatch::new();
        while out.len() < READ_LIMIT {
            let Some(ev) = next()? else {
                break;
            };
            self.translate(ev, Instant::now(), &mut out);
        }

        for e in self.tracker.expire(Instant::now()) {
            let _ = out.try_push(e);
        }
        Ok(out)
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self, budget: Duration) -> Result<EventBatch> {
        let deadline = Instant::now() + budget;
        self.drain(|| {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if event::poll(remaining)? {
                Ok(Some(event::read()?))
            } else {
                Ok(None)
            }
        })
    }
}

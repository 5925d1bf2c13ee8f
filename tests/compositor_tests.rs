//! Headless frame loop: scripted input, recording display.

use std::collections::VecDeque;
use std::ops::Range;
use std::time::Duration;

use anyhow::Result;

use voxel_space::config::Settings;
use voxel_space::core::{derive_night_palette, Grid, HeightfieldStore, MapData, Surface};
use voxel_space::engine::{Compositor, Display, EventBatch, InputSource};
use voxel_space::types::{InputEvent, Key, Palette, PALETTE_SIZE, SKY_INDEX};

#[derive(Default)]
struct RecordingDisplay {
    palettes: Vec<Palette>,
    text: Vec<(u16, u16, String)>,
    frames: Vec<Surface>,
}

impl Display for RecordingDisplay {
    fn set_palette(&mut self, palette: &Palette, range: Range<usize>) -> Result<()> {
        assert_eq!(range, 0..PALETTE_SIZE);
        self.palettes.push(*palette);
        Ok(())
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str) {
        self.text.push((x, y, text.to_string()));
    }

    fn present(&mut self, surface: &Surface) -> Result<()> {
        self.frames.push(surface.clone());
        Ok(())
    }
}

/// Hands out one prepared batch per poll, then clicks to quit.
struct ScriptedInput {
    batches: VecDeque<Vec<InputEvent>>,
    polls: usize,
}

impl ScriptedInput {
    fn new(batches: Vec<Vec<InputEvent>>) -> Self {
        Self {
            batches: batches.into(),
            polls: 0,
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _budget: Duration) -> Result<EventBatch> {
        self.polls += 1;
        let mut batch = EventBatch::new();
        match self.batches.pop_front() {
            Some(events) => batch.extend(events),
            None => batch.push(InputEvent::PointerDown),
        }
        Ok(batch)
    }
}

fn day_palette() -> Palette {
    let mut palette = [0u32; PALETTE_SIZE];
    for (i, c) in palette.iter_mut().enumerate() {
        let i = i as u32;
        *c = 0xFF00_0000 | (i << 16) | ((255 - i) << 8) | (i / 2);
    }
    palette
}

fn store() -> HeightfieldStore {
    HeightfieldStore::from_maps(MapData {
        heights: Grid::filled(32, 20),
        colors: Grid::filled(32, 9),
        palette: day_palette(),
    })
    .unwrap()
}

fn compositor() -> Compositor<RecordingDisplay> {
    Compositor::new(store(), RecordingDisplay::default(), 64, 40)
}

const TICK: Duration = Duration::from_millis(1);

#[test]
fn run_renders_until_click() {
    let mut c = compositor();
    let mut input = ScriptedInput::new(vec![vec![], vec![InputEvent::KeyDown(Key::W)], vec![]]);

    c.run(&mut input, TICK).unwrap();

    // Three scripted frames plus the one carrying the click.
    assert_eq!(input.polls, 4);
    assert_eq!(c.frames(), 4);
    let display = c.display();
    assert_eq!(display.frames.len(), 4);
    assert_eq!(display.palettes[0], day_palette());
    for frame in &display.frames {
        assert_eq!(frame.width(), 64);
        assert_eq!(frame.height(), 40);
        assert!(frame.pixels().iter().all(|&p| p == 9 || p == SKY_INDEX));
    }
    assert!(c.camera().forward.velocity > 0.0);
}

#[test]
fn escape_ends_the_loop() {
    let mut c = compositor();
    let mut input = ScriptedInput::new(vec![vec![InputEvent::KeyDown(Key::Escape)]]);
    c.run(&mut input, TICK).unwrap();
    assert_eq!(input.polls, 1);
    assert!(c.should_exit());
}

#[test]
fn night_mode_twice_restores_day_palette() {
    let mut c = compositor();
    let mut input = ScriptedInput::new(vec![
        vec![InputEvent::KeyDown(Key::N)],
        vec![InputEvent::KeyUp(Key::N)],
        vec![InputEvent::KeyDown(Key::N)],
        vec![InputEvent::KeyUp(Key::N)],
    ]);

    c.run(&mut input, TICK).unwrap();

    let pushed = &c.display().palettes;
    assert_eq!(pushed.len(), 3);
    assert_eq!(pushed[0], day_palette());
    assert_eq!(pushed[1], derive_night_palette(&day_palette()));
    assert_eq!(pushed[2], day_palette());
    assert!(!c.heightfield().is_night_mode());
    assert_eq!(c.heightfield().current_palette(), &day_palette());
}

#[test]
fn holding_n_toggles_once() {
    let mut c = compositor();
    c.tick(&[InputEvent::KeyDown(Key::N)], 33).unwrap();
    for _ in 0..10 {
        c.tick(&[], 33).unwrap();
    }
    assert!(c.heightfield().is_night_mode());
    assert_eq!(c.display().palettes.len(), 1);
}

#[test]
fn tuning_keys_are_level_triggered() {
    let mut c = compositor();
    c.tick(&[InputEvent::KeyDown(Key::Q)], 33).unwrap();
    for _ in 0..4 {
        c.tick(&[], 33).unwrap();
    }
    assert_eq!(c.tuning().far_plane(), 650.0);

    c.tick(&[InputEvent::KeyUp(Key::Q), InputEvent::KeyDown(Key::V)], 33).unwrap();
    c.tick(&[], 33).unwrap();
    assert_eq!(c.tuning().far_plane(), 650.0);
    assert_eq!(c.tuning().scale_factor(), 50.0);
}

#[test]
fn divisions_cycle_on_each_press() {
    let mut c = compositor();
    let mut seen = Vec::new();
    for _ in 0..5 {
        c.tick(&[InputEvent::KeyDown(Key::L)], 33).unwrap();
        c.tick(&[], 33).unwrap();
        c.tick(&[InputEvent::KeyUp(Key::L)], 33).unwrap();
        seen.push(c.tuning().horizontal_divisions());
    }
    assert_eq!(seen, vec![2, 3, 4, 1, 2]);
}

#[test]
fn debug_overlay_reports_tuning() {
    let mut c = compositor().with_debug(true);
    c.tick(&[InputEvent::KeyDown(Key::Z)], 33).unwrap();

    let text = &c.display().text;
    assert_eq!(text.len(), 2);
    assert_eq!(text[0].0, 1);
    assert_eq!(text[0].1, 0);
    assert!(text[0].2.starts_with("fps:"));
    assert!(text[0].2.ends_with("Z_FAR: 600, SCALE: 70"));
    assert_eq!(text[1], (1, 1, "DELTA_Z: 0.011, H_DIVISIONS: 1".to_string()));

    c.tick(&[InputEvent::KeyDown(Key::K)], 33).unwrap();
    assert!(!c.is_debug());
    assert_eq!(c.display().text.len(), 2);
}

#[test]
fn settings_seed_camera_and_tuning() {
    let settings = Settings::from_json_str(
        r#"{"tuning": {"far_plane": 300, "horizontal_divisions": 9},
            "camera": {"x": 4, "y": 8, "height": 2}}"#,
    )
    .unwrap();
    let c = compositor()
        .with_camera(settings.camera_state())
        .with_tuning(settings.render_tuning());

    assert_eq!(c.tuning().far_plane(), 300.0);
    assert_eq!(c.tuning().horizontal_divisions(), 4);
    assert_eq!((c.camera().x, c.camera().y), (4.0, 8.0));
    assert_eq!(c.camera().height(), 10.0);
}

#[test]
fn night_mode_can_start_enabled() {
    let mut c = compositor().with_night_mode(true);
    let mut input = ScriptedInput::new(vec![]);
    c.run(&mut input, TICK).unwrap();
    assert_eq!(c.display().palettes[0], derive_night_palette(&day_palette()));
}

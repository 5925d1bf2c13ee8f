use std::ops::Range;
use std::time::{Duration, Instant};

use anyhow::Result;
use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::core::{
    render_frame, CameraState, FlightIntents, HeightfieldStore, KeyStates, RenderTuning, Surface,
};
use crate::fps::FpsCounter;
use crate::types::{InputEvent, Key, Palette, PALETTE_SIZE};

/// Upper bound on events consumed in one tick; extras are dropped.
pub const MAX_EVENTS_PER_TICK: usize = 64;

pub type EventBatch = ArrayVec<InputEvent, MAX_EVENTS_PER_TICK>;

/// Where frames end up.
pub trait Display {
    /// Activate `palette[range]` for subsequent presents.
    fn set_palette(&mut self, palette: &Palette, range: Range<usize>) -> Result<()>;

    /// Queue one overlay line at cell `(x, y)`; composed over the next presented frame.
    fn draw_text(&mut self, x: u16, y: u16, text: &str);

    /// Show `surface` and wait for the display to accept it.
    fn present(&mut self, surface: &Surface) -> Result<()>;
}

impl<D: Display + ?Sized> Display for &mut D {
    fn set_palette(&mut self, palette: &Palette, range: Range<usize>) -> Result<()> {
        (**self).set_palette(palette, range)
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str) {
        (**self).draw_text(x, y, text)
    }

    fn present(&mut self, surface: &Surface) -> Result<()> {
        (**self).present(surface)
    }
}

/// Source of discrete input events.
pub trait InputSource {
    /// Collect pending events, waiting at most `budget`.
    ///
    /// Implementations may spend the whole budget (this is how the loop paces
    /// itself) but must never block longer.
    fn poll(&mut self, budget: Duration) -> Result<EventBatch>;
}

pub struct Compositor<D: Display> {
    heightfield: HeightfieldStore,
    camera: CameraState,
    tuning: RenderTuning,
    keys: KeyStates,
    surface: Surface,
    display: D,
    debug: bool,
    exit: bool,
    fps: FpsCounter,
    frames: u64,
}

impl<D: Display> Compositor<D> {
    pub fn new(heightfield: HeightfieldStore, display: D, width: u16, height: u16) -> Self {
        Self {
            heightfield,
            camera: CameraState::default(),
            tuning: RenderTuning::default(),
            keys: KeyStates::new(),
            surface: Surface::new(width, height),
            display,
            debug: false,
            exit: false,
            fps: FpsCounter::new(),
            frames: 0,
        }
    }

    pub fn with_camera(mut self, camera: CameraState) -> Self {
        self.camera = camera;
        self
    }

    pub fn with_tuning(mut self, tuning: RenderTuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_night_mode(mut self, night: bool) -> Self {
        self.heightfield.set_night_mode(night);
        self
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut CameraState {
        &mut self.camera
    }

    pub fn tuning(&self) -> &RenderTuning {
        &self.tuning
    }

    pub fn heightfield(&self) -> &HeightfieldStore {
        &self.heightfield
    }

    pub fn keys(&self) -> &KeyStates {
        &self.keys
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn should_exit(&self) -> bool {
        self.exit
    }

    /// Ask the loop to stop after the current iteration.
    pub fn request_exit(&mut self) {
        self.exit = true;
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Push the active palette to the display.
    pub fn sync_palette(&mut self) -> Result<()> {
        self.display
            .set_palette(self.heightfield.current_palette(), 0..PALETTE_SIZE)
    }

    /// Run one frame.
    pub fn tick(&mut self, events: &[InputEvent], elapsed_ms: u32) -> Result<()> {
        for &event in events {
            if event.is_quit() {
                info!(?event, "quit requested");
                self.exit = true;
            }
            self.keys.apply(event);
        }

        self.camera.update(FlightIntents::from_keys(&self.keys));
        self.tuning.apply_keys(&self.keys);

        if self.keys.just_pressed(Key::N) {
            let night = !self.heightfield.is_night_mode();
            self.heightfield.set_night_mode(night);
            debug!(night, "palette switched");
            self.sync_palette()?;
        }
        if self.keys.just_pressed(Key::K) {
            self.debug = !self.debug;
            debug!(debug = self.debug, "debug overlay toggled");
        }

        render_frame(&self.camera, &self.tuning, &self.heightfield, &mut self.surface);

        self.fps.frame(elapsed_ms);
        if self.debug {
            self.draw_overlay();
        }
        self.display.present(&self.surface)?;

        self.keys.end_tick();
        self.frames += 1;
        Ok(())
    }

    fn draw_overlay(&mut self) {
        let line1 = format!(
            "fps:{}, Z_FAR: {:.0}, SCALE: {:.0}",
            self.fps.fps(),
            self.tuning.far_plane(),
            self.tuning.scale_factor()
        );
        let line2 = format!(
            "DELTA_Z: {:.3}, H_DIVISIONS: {}",
            self.tuning.step_growth(),
            self.tuning.horizontal_divisions()
        );
        self.display.draw_text(1, 0, &line1);
        self.display.draw_text(1, 1, &line2);
    }

    /// Loop until a quit event arrives.
    ///
    /// Each iteration drains input for whatever remains of `tick` and then
    /// renders exactly one frame. The exit flag is checked once per iteration.
    pub fn run<I: InputSource>(&mut self, input: &mut I, tick: Duration) -> Result<()> {
        self.sync_palette()?;
        info!(
            side = self.heightfield.side(),
            width = self.surface.width(),
            height = self.surface.height(),
            "entering frame loop"
        );

        let mut last = Instant::now();
        while !self.exit {
            let budget = tick.saturating_sub(last.elapsed());
            let events = input.poll(budget)?;
            let elapsed = last.elapsed();
            last = Instant::now();
            self.tick(&events, elapsed.as_millis().min(u32::MAX as u128) as u32)?;
        }

        info!(frames = self.frames, "frame loop finished");
        Ok(())
    }
}

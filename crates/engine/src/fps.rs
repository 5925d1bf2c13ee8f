/// Frames-per-second over a rolling one-second window.
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    window_ms: u32,
    frames: u32,
    fps: u32,
}

impl FpsCounter {
    const WINDOW_MS: u32 = 1000;

    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame that took `elapsed_ms`.
    pub fn frame(&mut self, elapsed_ms: u32) {
        self.frames += 1;
        self.window_ms = self.window_ms.saturating_add(elapsed_ms);
        if self.window_ms >= Self::WINDOW_MS {
            self.fps = (self.frames as u64 * 1000 / self.window_ms as u64) as u32;
            self.frames = 0;
            self.window_ms = 0;
        }
    }

    /// Rate measured over the last complete window; 0 until one has elapsed.
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

//! Terminal implementation of the compositor's [`Display`].

use std::ops::Range;

use anyhow::Result;

use crate::core::Surface;
use crate::engine::Display;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::layer_view::{LayerView, Viewport};
use crate::renderer::TerminalRenderer;
use crate::types::Palette;

const OVERLAY_STYLE: CellStyle = CellStyle {
    fg: Rgb::new(255, 255, 255),
    bg: Rgb::new(0, 0, 0),
    bold: true,
};

pub struct TerminalDisplay {
    view: LayerView,
    renderer: TerminalRenderer,
    fb: FrameBuffer,
    overlay: Vec<(u16, u16, String)>,
    last_viewport: Option<Viewport>,
}

impl TerminalDisplay {
    pub fn new() -> Self {
        Self {
            view: LayerView::new(),
            renderer: TerminalRenderer::new(),
            fb: FrameBuffer::new(0, 0),
            overlay: Vec::new(),
            last_viewport: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    fn viewport() -> Viewport {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        Viewport::new(w, h)
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for TerminalDisplay {
    fn set_palette(&mut self, palette: &Palette, range: Range<usize>) -> Result<()> {
        self.view.set_palette(palette, range);
        // Every cell may change color.
        self.renderer.invalidate();
        Ok(())
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str) {
        self.overlay.push((x, y, text.to_string()));
    }

    fn present(&mut self, surface: &Surface) -> Result<()> {
        let viewport = Self::viewport();
        if self.last_viewport != Some(viewport) {
            self.renderer.invalidate();
            self.last_viewport = Some(viewport);
        }

        self.view.render_into(surface, viewport, &mut self.fb);
        for (x, y, text) in self.overlay.drain(..) {
            self.fb.put_str(x, y, &text, OVERLAY_STYLE);
        }
        self.renderer.draw_swap(&mut self.fb)
    }
}

//! LayerView: maps a palette-indexed surface into a terminal framebuffer.
//!
//! This module is pure (no I/O). Two surface rows share one terminal cell:
//! the upper half block takes the even row as foreground and the odd row as
//! background, which also roughly squares the terminal's tall glyph cells.

use std::ops::Range;

use crate::core::Surface;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Palette, PALETTE_SIZE};

const HALF_BLOCK: char = '▀';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

pub struct LayerView {
    colors: [Rgb; PALETTE_SIZE],
    backdrop: Rgb,
}

impl Default for LayerView {
    fn default() -> Self {
        Self {
            colors: [Rgb::default(); PALETTE_SIZE],
            backdrop: Rgb::new(0, 0, 0),
        }
    }
}

impl LayerView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `palette[range]` into the active color table.
    pub fn set_palette(&mut self, palette: &Palette, range: Range<usize>) {
        let end = range.end.min(PALETTE_SIZE);
        for i in range.start.min(end)..end {
            self.colors[i] = Rgb::from_argb(palette[i]);
        }
    }

    pub fn color(&self, index: u8) -> Rgb {
        self.colors[index as usize]
    }

    /// Cell size of a surface once packed into half blocks.
    pub fn cell_size(surface: &Surface) -> (u16, u16) {
        (surface.width(), surface.height().div_ceil(2))
    }

    /// Top-left cell of the layer, centered in the viewport.
    pub fn origin(surface: &Surface, viewport: Viewport) -> (u16, u16) {
        let (w, h) = Self::cell_size(surface);
        (
            viewport.width.saturating_sub(w) / 2,
            viewport.height.saturating_sub(h) / 2,
        )
    }

    /// Render into an existing framebuffer (allocation-free once sized).
    ///
    /// A layer larger than the viewport is cropped on the right and bottom.
    pub fn render_into(&self, surface: &Surface, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle::new(self.backdrop, self.backdrop),
        });

        let (ox, oy) = Self::origin(surface, viewport);
        let (cols, rows) = Self::cell_size(surface);

        for cy in 0..rows {
            let y = oy.saturating_add(cy);
            if y >= viewport.height {
                break;
            }
            let top = surface.row(cy * 2);
            let bottom = surface.row(cy * 2 + 1);
            for cx in 0..cols {
                let x = ox.saturating_add(cx);
                if x >= viewport.width {
                    break;
                }
                let fg = top.map_or(self.backdrop, |r| self.color(r[cx as usize]));
                let bg = bottom.map_or(self.backdrop, |r| self.color(r[cx as usize]));
                fb.set(
                    x,
                    y,
                    Cell {
                        ch: HALF_BLOCK,
                        style: CellStyle::new(fg, bg),
                    },
                );
            }
        }
    }

    pub fn render(&self, surface: &Surface, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(surface, viewport, &mut fb);
        fb
    }
}

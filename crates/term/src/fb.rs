//! Cell framebuffer and style types for terminal presentation.

use crate::types::unpack_argb;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Drop the alpha channel of a packed `0xAARRGGBB` palette entry.
    pub const fn from_argb(c: u32) -> Self {
        let (_, r, g, b) = unpack_argb(c);
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
        }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when possible. Contents are unspecified
    /// afterwards; callers clear before drawing.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.set(cx, y, Cell { ch, style });
            cx += 1;
        }
    }

    /// Row `y` as text, for tests and debugging.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_str_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(2, 0, "abc", CellStyle::default());
        assert_eq!(fb.row_text(0), "  ab");
    }

    #[test]
    fn resize_keeps_dimensions_consistent() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(3, 5);
        assert_eq!(fb.cells().len(), 15);
        assert!(fb.get(2, 4).is_some());
        assert!(fb.get(3, 0).is_none());
    }

    #[test]
    fn argb_drops_alpha() {
        assert_eq!(Rgb::from_argb(0x80_11_22_33), Rgb::new(0x11, 0x22, 0x33));
    }
}

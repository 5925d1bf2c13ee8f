//! Palette-indexed drawing surface.

/// Row-major grid of palette indices, one byte per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u16,
    height: u16,
    pixels: Vec<u8>,
}

impl Surface {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![0; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<u8> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    pub fn set(&mut self, x: u16, y: u16, index: u8) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = index;
        }
    }

    pub fn row(&self, y: u16) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        Some(&self.pixels[start..start + self.width as usize])
    }

    pub fn clear(&mut self, index: u8) {
        self.pixels.fill(index);
    }

    /// Paint rows `[top, bottom)` of column `x`; rows outside the surface are skipped.
    pub fn fill_column(&mut self, x: u16, top: i32, bottom: i32, index: u8) {
        if x >= self.width {
            return;
        }
        let top = top.max(0);
        let bottom = bottom.min(self.height as i32);
        let stride = self.width as usize;
        for y in top..bottom {
            self.pixels[(y as usize) * stride + x as usize] = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_access_is_ignored() {
        let mut s = Surface::new(3, 2);
        s.set(3, 0, 9);
        s.set(0, 2, 9);
        assert!(s.pixels().iter().all(|&p| p == 0));
        assert_eq!(s.get(3, 0), None);
        assert_eq!(s.row(2), None);
    }

    #[test]
    fn fill_column_clips_to_surface() {
        let mut s = Surface::new(2, 4);
        s.fill_column(1, -3, 10, 7);
        for y in 0..4 {
            assert_eq!(s.get(0, y), Some(0));
            assert_eq!(s.get(1, y), Some(7));
        }
        s.fill_column(2, 0, 4, 5);
        assert!(!s.pixels().contains(&5));
    }

    #[test]
    fn rows_are_row_major() {
        let mut s = Surface::new(3, 2);
        s.set(2, 1, 4);
        assert_eq!(s.row(1), Some(&[0, 0, 4][..]));
        assert_eq!(s.pixels()[5], 4);
    }
}

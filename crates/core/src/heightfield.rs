//! Heightfield store: co-registered elevation and color grids plus the
//! day/night color tables.
//!
//! Lookups take unbounded world coordinates and wrap them onto the grid with a
//! bitmask, so the terrain repeats as a torus in both directions.

use crate::error::{MapLayer, ResourceError};
use crate::types::Palette;

/// One decoded raster, one byte per sample, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub samples: Vec<u8>,
}

impl Grid {
    pub fn new(width: usize, height: usize, samples: Vec<u8>) -> Self {
        Self {
            width,
            height,
            samples,
        }
    }

    /// A `side`x`side` grid filled with one value.
    pub fn filled(side: usize, value: u8) -> Self {
        Self::new(side, side, vec![value; side * side])
    }
}

/// Everything a resource loader hands over: both grids and the day palette.
#[derive(Debug, Clone)]
pub struct MapData {
    pub heights: Grid,
    pub colors: Grid,
    pub palette: Palette,
}

#[derive(Debug, Clone)]
pub struct HeightfieldStore {
    side: usize,
    mask: i64,
    heights: Vec<u8>,
    colors: Vec<u8>,
    day: Palette,
    night: Palette,
    night_mode: bool,
}

impl HeightfieldStore {
    /// Validate a loaded map pair and take ownership of it.
    ///
    /// Both grids must be square, share one power-of-two side, and hold exactly
    /// `side * side` samples.
    pub fn from_maps(data: MapData) -> Result<Self, ResourceError> {
        let MapData {
            heights,
            colors,
            palette,
        } = data;

        let height_side = square_side(&heights, MapLayer::Height)?;
        let color_side = square_side(&colors, MapLayer::Color)?;
        if height_side != color_side {
            return Err(ResourceError::DimensionMismatch {
                height_side,
                color_side,
            });
        }
        if !height_side.is_power_of_two() {
            return Err(ResourceError::NotPowerOfTwo { side: height_side });
        }

        Ok(Self {
            side: height_side,
            mask: (height_side - 1) as i64,
            heights: heights.samples,
            colors: colors.samples,
            night: derive_night_palette(&palette),
            day: palette,
            night_mode: false,
        })
    }

    /// Grid side `N`.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Row-major offset of the cell containing `(x, y)`, wrapped into `[0, N)`.
    ///
    /// Masking instead of `%` is only valid because `N` is a power of two, and
    /// it also maps negative cells onto the torus correctly.
    #[inline(always)]
    pub fn offset(&self, x: f32, y: f32) -> usize {
        let cx = (x.floor() as i64) & self.mask;
        let cy = (y.floor() as i64) & self.mask;
        (cy as usize) * self.side + cx as usize
    }

    #[inline(always)]
    pub fn elevation_at(&self, x: f32, y: f32) -> u8 {
        self.heights[self.offset(x, y)]
    }

    #[inline(always)]
    pub fn color_index_at(&self, x: f32, y: f32) -> u8 {
        self.colors[self.offset(x, y)]
    }

    /// Elevation and color of one cell in a single offset computation.
    #[inline(always)]
    pub fn sample(&self, x: f32, y: f32) -> (u8, u8) {
        let i = self.offset(x, y);
        (self.heights[i], self.colors[i])
    }

    pub fn day_palette(&self) -> &Palette {
        &self.day
    }

    pub fn night_palette(&self) -> &Palette {
        &self.night
    }

    pub fn is_night_mode(&self) -> bool {
        self.night_mode
    }

    pub fn set_night_mode(&mut self, night: bool) {
        self.night_mode = night;
    }

    /// The table the presenter should currently display.
    pub fn current_palette(&self) -> &Palette {
        if self.night_mode {
            &self.night
        } else {
            &self.day
        }
    }
}

fn square_side(grid: &Grid, layer: MapLayer) -> Result<usize, ResourceError> {
    if grid.width != grid.height {
        return Err(ResourceError::NotSquare {
            layer,
            width: grid.width,
            height: grid.height,
        });
    }
    let expected = grid.width * grid.height;
    if grid.samples.len() != expected {
        return Err(ResourceError::LengthMismatch {
            layer,
            len: grid.samples.len(),
            expected,
        });
    }
    Ok(grid.width)
}

/// Night filter: keep alpha and green, drop red and blue.
///
/// A stylistic tint, not a physical day-to-night conversion.
pub fn derive_night_palette(day: &Palette) -> Palette {
    let mut night = [0u32; crate::types::PALETTE_SIZE];
    for (n, &d) in night.iter_mut().zip(day.iter()) {
        *n = d & 0xFF00_FF00;
    }
    night
}

//! Procedural fallback terrain.
//!
//! Used when no map files are available. The noise field is blended across
//! its own edges so the grid tiles seamlessly, matching the renderer's
//! toroidal lookups.

use fastnoise_lite::{FastNoiseLite, FractalType, NoiseType};
use tracing::info;

use crate::core::{Grid, MapData, ResourceError};
use crate::types::{pack_argb, Palette, PALETTE_SIZE, SKY_INDEX};
use crate::ResourceLoader;

/// Elevation of the flat water surface.
pub const WATER_LEVEL: u8 = 48;

/// Noise features across one map side at the base octave.
const BASE_FEATURES: f32 = 4.0;
const OCTAVES: i32 = 6;

/// Color stops `(palette index, r, g, b)`, interpolated linearly.
const STOPS: [(u8, u8, u8, u8); 8] = [
    (0, 10, 30, 90),
    (47, 40, 100, 170),
    (48, 194, 178, 128),
    (60, 150, 160, 90),
    (120, 40, 110, 40),
    (170, 100, 90, 70),
    (215, 140, 135, 130),
    (254, 250, 250, 255),
];

const SKY: (u8, u8, u8) = (135, 190, 235);

/// Palette for generated maps: a gradient indexed by elevation, sky at 255.
pub fn terrain_palette() -> Palette {
    let mut palette = [0u32; PALETTE_SIZE];
    for pair in STOPS.windows(2) {
        let (i0, r0, g0, b0) = pair[0];
        let (i1, r1, g1, b1) = pair[1];
        let span = (i1 - i0).max(1) as f32;
        for i in i0..=i1 {
            let t = (i - i0) as f32 / span;
            let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            palette[i as usize] = pack_argb(0xFF, lerp(r0, r1), lerp(g0, g1), lerp(b0, b1));
        }
    }
    palette[SKY_INDEX as usize] = pack_argb(0xFF, SKY.0, SKY.1, SKY.2);
    palette
}

/// Seamless fBm elevation field stretched to the full `0..=255` range.
pub fn elevation_field(seed: i32, side: usize) -> Vec<u8> {
    let mut noise = FastNoiseLite::with_seed(seed);
    noise.set_noise_type(Some(NoiseType::OpenSimplex2));
    noise.set_frequency(Some(BASE_FEATURES / side as f32));
    noise.set_fractal_type(Some(FractalType::FBm));
    noise.set_fractal_octaves(Some(OCTAVES));
    noise.set_fractal_gain(Some(0.5));
    noise.set_fractal_lacunarity(Some(2.0));

    let n = side as f32;
    let mut raw = Vec::with_capacity(side * side);
    for y in 0..side {
        for x in 0..side {
            let (fx, fy) = (x as f32, y as f32);
            // Bilinear blend of the four wrapped copies: f(x, y) == f(x + n, y).
            let a = noise.get_noise_2d(fx, fy) * (n - fx) * (n - fy);
            let b = noise.get_noise_2d(fx - n, fy) * fx * (n - fy);
            let c = noise.get_noise_2d(fx, fy - n) * (n - fx) * fy;
            let d = noise.get_noise_2d(fx - n, fy - n) * fx * fy;
            raw.push((a + b + c + d) / (n * n));
        }
    }

    let (lo, hi) = raw
        .iter()
        .fold((f32::MAX, f32::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let range = (hi - lo).max(f32::EPSILON);
    raw.iter()
        .map(|&v| (((v - lo) / range) * 255.0).round() as u8)
        .collect()
}

/// Build a complete map: water is flattened to [`WATER_LEVEL`] but keeps its
/// depth in the color index.
pub fn generate(seed: i32, side: usize) -> MapData {
    let field = elevation_field(seed, side);
    let heights = field.iter().map(|&e| e.max(WATER_LEVEL)).collect();
    let colors = field.iter().map(|&e| e.min(SKY_INDEX - 1)).collect();
    MapData {
        heights: Grid::new(side, side, heights),
        colors: Grid::new(side, side, colors),
        palette: terrain_palette(),
    }
}

#[derive(Debug, Clone)]
pub struct GeneratedLoader {
    seed: i32,
    side: usize,
}

impl GeneratedLoader {
    pub fn new(seed: i32, side: usize) -> Self {
        Self { seed, side }
    }
}

impl ResourceLoader for GeneratedLoader {
    fn load(&self) -> Result<MapData, ResourceError> {
        if !self.side.is_power_of_two() {
            return Err(ResourceError::NotPowerOfTwo { side: self.side });
        }
        info!(seed = self.seed, side = self.side, "generating terrain");
        Ok(generate(self.seed, self.side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let a = generate(42, 64);
        let b = generate(42, 64);
        assert_eq!(a.heights, b.heights);
        assert_eq!(a.colors, b.colors);
        assert_ne!(generate(7, 64).heights, a.heights);
    }

    #[test]
    fn test_full_range_and_water_floor() {
        let field = elevation_field(3, 64);
        assert_eq!(*field.iter().min().unwrap(), 0);
        assert_eq!(*field.iter().max().unwrap(), 255);

        let map = generate(3, 64);
        assert!(map.heights.samples.iter().all(|&h| h >= WATER_LEVEL));
        assert!(map.colors.samples.iter().all(|&c| c != SKY_INDEX));
    }

    #[test]
    fn test_tiles_seamlessly() {
        let side = 64;
        let field = elevation_field(11, side);
        let at = |x: usize, y: usize| field[y * side + x] as i32;

        let mut interior = 0;
        for y in 0..side {
            for x in 1..side {
                interior = interior.max((at(x, y) - at(x - 1, y)).abs());
            }
        }
        let mut seam = 0;
        for y in 0..side {
            seam = seam.max((at(0, y) - at(side - 1, y)).abs());
        }
        assert!(seam <= interior * 2 + 2, "seam {seam} vs interior {interior}");
    }

    #[test]
    fn test_palette_reserves_sky() {
        let p = terrain_palette();
        assert_eq!(p[SKY_INDEX as usize], pack_argb(0xFF, 135, 190, 235));
        assert_eq!(p[0], pack_argb(0xFF, 10, 30, 90));
        assert_eq!(p[254], pack_argb(0xFF, 250, 250, 255));
        assert!(p.iter().all(|c| c >> 24 == 0xFF));
    }

    #[test]
    fn test_loader_rejects_non_power_of_two() {
        assert!(matches!(
            GeneratedLoader::new(1, 100).load(),
            Err(ResourceError::NotPowerOfTwo { side: 100 })
        ));
    }
}

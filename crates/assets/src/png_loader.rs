//! PNG map pairs.
//!
//! The height map is an 8-bit grayscale or 8-bit indexed image whose raw
//! sample is the elevation. The color map must be 8-bit indexed; its PLTE
//! chunk becomes the day palette.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use png::{BitDepth, ColorType, Transformations};
use tracing::info;

use crate::core::{Grid, MapData, MapLayer, ResourceError};
use crate::types::{pack_argb, Palette, PALETTE_SIZE};
use crate::ResourceLoader;

/// One decoded 8-bit single-channel image.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub grid: Grid,
    pub color_type: ColorType,
    /// Raw RGB triples from PLTE, if present.
    pub palette: Option<Vec<u8>>,
}

pub fn decode_png<R: Read>(
    reader: R,
    layer: MapLayer,
    path: &Path,
) -> Result<DecodedImage, ResourceError> {
    let decode_err = |e: png::DecodingError| ResourceError::Decode {
        layer,
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    let mut decoder = png::Decoder::new(reader);
    // Keep palette indices as-is; expanding them to RGB would lose the index.
    decoder.set_transformations(Transformations::IDENTITY);
    let mut reader = decoder.read_info().map_err(decode_err)?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf).map_err(decode_err)?;

    if frame.bit_depth != BitDepth::Eight
        || !matches!(frame.color_type, ColorType::Grayscale | ColorType::Indexed)
    {
        return Err(ResourceError::UnsupportedFormat {
            layer,
            format: format!("{:?} {:?}", frame.color_type, frame.bit_depth),
        });
    }

    let width = frame.width as usize;
    let height = frame.height as usize;
    let mut samples = Vec::with_capacity(width * height);
    for row in buf[..frame.buffer_size()].chunks(frame.line_size).take(height) {
        samples.extend_from_slice(&row[..width]);
    }

    let palette = reader.info().palette.as_ref().map(|p| p.to_vec());

    Ok(DecodedImage {
        grid: Grid::new(width, height, samples),
        color_type: frame.color_type,
        palette,
    })
}

/// Convert PLTE RGB triples into an opaque ARGB table; missing entries are black.
pub fn palette_from_rgb(rgb: &[u8]) -> Palette {
    let mut palette = [pack_argb(0xFF, 0, 0, 0); PALETTE_SIZE];
    for (entry, chunk) in palette.iter_mut().zip(rgb.chunks_exact(3)) {
        *entry = pack_argb(0xFF, chunk[0], chunk[1], chunk[2]);
    }
    palette
}

fn decode_file(path: &Path, layer: MapLayer) -> Result<DecodedImage, ResourceError> {
    let file = File::open(path).map_err(|source| ResourceError::Io {
        layer,
        path: path.to_path_buf(),
        source,
    })?;
    decode_png(BufReader::new(file), layer, path)
}

/// Build map data from two decoded images.
pub fn assemble(height: DecodedImage, color: DecodedImage) -> Result<MapData, ResourceError> {
    if color.color_type != ColorType::Indexed {
        return Err(ResourceError::UnsupportedFormat {
            layer: MapLayer::Color,
            format: format!("{:?}", color.color_type),
        });
    }
    let rgb = color.palette.ok_or(ResourceError::MissingPalette)?;
    Ok(MapData {
        heights: height.grid,
        colors: color.grid,
        palette: palette_from_rgb(&rgb),
    })
}

#[derive(Debug, Clone)]
pub struct PngLoader {
    height_path: PathBuf,
    color_path: PathBuf,
}

impl PngLoader {
    pub fn new(height_path: impl Into<PathBuf>, color_path: impl Into<PathBuf>) -> Self {
        Self {
            height_path: height_path.into(),
            color_path: color_path.into(),
        }
    }

    pub fn height_path(&self) -> &Path {
        &self.height_path
    }

    pub fn color_path(&self) -> &Path {
        &self.color_path
    }
}

impl ResourceLoader for PngLoader {
    fn load(&self) -> Result<MapData, ResourceError> {
        let height = decode_file(&self.height_path, MapLayer::Height)?;
        let color = decode_file(&self.color_path, MapLayer::Color)?;
        info!(
            height = %self.height_path.display(),
            color = %self.color_path.display(),
            width = height.grid.width,
            rows = height.grid.height,
            "decoded map pair"
        );
        assemble(height, color)
    }
}

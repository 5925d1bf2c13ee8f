//! Resource loading errors.
//!
//! Every variant is fatal: the frame loop never starts without a valid
//! heightfield.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Which of the two co-registered grids an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapLayer {
    Height,
    Color,
}

impl std::fmt::Display for MapLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapLayer::Height => f.write_str("height map"),
            MapLayer::Color => f.write_str("color map"),
        }
    }
}

/// Height/color grids failed to load or do not form a valid pair.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The file could not be opened or read
    #[error("cannot read {layer} {path}: {source}")]
    Io {
        layer: MapLayer,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The image decoder rejected the file
    #[error("cannot decode {layer} {path}: {reason}")]
    Decode {
        layer: MapLayer,
        path: PathBuf,
        reason: String,
    },

    /// Decoded fine, but not a one-byte-per-pixel image
    #[error("{layer} has unsupported pixel format {format}")]
    UnsupportedFormat { layer: MapLayer, format: String },

    /// Color map carries no palette
    #[error("color map has no palette")]
    MissingPalette,

    #[error("{layer} is {width}x{height}, expected a square grid")]
    NotSquare {
        layer: MapLayer,
        width: usize,
        height: usize,
    },

    #[error("grid side {side} is not a power of two")]
    NotPowerOfTwo { side: usize },

    #[error("height map is {height_side}x{height_side} but color map is {color_side}x{color_side}")]
    DimensionMismatch {
        height_side: usize,
        color_side: usize,
    },

    /// Sample buffer length disagrees with the declared side
    #[error("{layer} holds {len} samples, expected {expected}")]
    LengthMismatch {
        layer: MapLayer,
        len: usize,
        expected: usize,
    },
}

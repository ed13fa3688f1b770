//! Error types for offscreen block handling.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when decoding and reassembling block files.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Common library error.
    #[error("{0}")]
    Common(#[from] clipraster_common::Error),

    /// Input directory does not exist.
    #[error("block directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Block file too short for its raster planes.
    #[error("truncated block file {}: expected at least {expected} bytes, got {actual}", .path.display())]
    TruncatedBlock {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },

    /// Tile placement exceeds the canvas bounds.
    #[error("block {index} at ({col}, {row}) exceeds the {width}x{height} canvas")]
    OutOfBounds {
        index: usize,
        col: u32,
        row: u32,
        width: u32,
        height: u32,
    },

    /// Zlib inflate failed.
    #[error("decompression failed: {0}")]
    Decompression(String),

    /// Image encoding error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for offscreen block operations.
pub type Result<T> = std::result::Result<T, Error>;

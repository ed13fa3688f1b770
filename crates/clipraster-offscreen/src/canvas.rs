//! Canvas reconstruction from ordered block files.

use std::fs;
use std::path::Path;

use image::{imageops, GrayImage, RgbaImage};

use crate::{locate_blocks, BlockPlanes, Error, Result, BLOCK_DIM};

/// The reconstructed transparency and color canvases of one layer.
#[derive(Debug, Clone)]
pub struct OffscreenImage {
    /// Single-channel transparency canvas.
    pub transparency: GrayImage,
    /// Four-channel color canvas in RGBA order.
    pub color: RgbaImage,
}

impl OffscreenImage {
    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.color.width()
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.color.height()
    }

    /// Composite the two canvases.
    ///
    /// Returns a copy of the color canvas whose alpha channel is replaced,
    /// per pixel, by the transparency sample at the same coordinate. The
    /// alpha decoded from the color plane is discarded here; the separate
    /// transparency plane is the authority for the merged image.
    pub fn merged(&self) -> RgbaImage {
        let mut merged = self.color.clone();
        for (px, alpha) in merged.pixels_mut().zip(self.transparency.pixels()) {
            px.0[3] = alpha.0[0];
        }
        merged
    }

    /// Write `transparency.png`, `color.png` and `merged.png` into `dir`.
    ///
    /// The directory is created if missing; existing files are overwritten.
    pub fn save_to_dir<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        self.transparency.save(dir.join("transparency.png"))?;
        self.color.save(dir.join("color.png"))?;
        self.merged().save(dir.join("merged.png"))?;

        Ok(())
    }
}

/// Pastes decoded blocks into a pair of canvases in row-major order.
///
/// The placement cursor starts at (0, 0) and advances one block width per
/// paste, wrapping to the next block row when it reaches the canvas width.
#[derive(Debug)]
pub struct CanvasReconstructor {
    transparency: GrayImage,
    color: RgbaImage,
    col: u32,
    row: u32,
    index: usize,
}

impl CanvasReconstructor {
    /// Create a reconstructor with two zero-initialized canvases.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            transparency: GrayImage::new(width, height),
            color: RgbaImage::new(width, height),
            col: 0,
            row: 0,
            index: 0,
        }
    }

    /// Paste one decoded block at the cursor and advance it.
    ///
    /// Destination pixels are overwritten, not blended. Fails with
    /// [`Error::OutOfBounds`] when the block would overhang either canvas
    /// dimension.
    pub fn paste(&mut self, block: &BlockPlanes) -> Result<()> {
        let (width, height) = self.color.dimensions();

        if self.col + BLOCK_DIM > width || self.row + BLOCK_DIM > height {
            return Err(Error::OutOfBounds {
                index: self.index,
                col: self.col,
                row: self.row,
                width,
                height,
            });
        }

        let (x, y) = (i64::from(self.col), i64::from(self.row));
        imageops::replace(&mut self.transparency, &block.transparency, x, y);
        imageops::replace(&mut self.color, &block.color, x, y);

        self.index += 1;
        self.col += BLOCK_DIM;
        if self.col >= width {
            self.col = 0;
            self.row += BLOCK_DIM;
        }

        Ok(())
    }

    /// Read, decode and paste one block file.
    ///
    /// The file is fully read and released before the call returns.
    pub fn paste_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let block = BlockPlanes::from_file(path)?;
        self.paste(&block)
    }

    /// Consume the reconstructor and return the canvases.
    pub fn finish(self) -> OffscreenImage {
        OffscreenImage {
            transparency: self.transparency,
            color: self.color,
        }
    }
}

/// Reconstruct a canvas from an ordered list of block files.
///
/// Blocks are pasted strictly in the given order. An empty list yields two
/// all-zero canvases. Any failure aborts the whole reconstruction; no
/// partial canvas is returned.
pub fn reconstruct<P: AsRef<Path>>(
    width: u32,
    height: u32,
    filepaths: &[P],
) -> Result<OffscreenImage> {
    let mut reconstructor = CanvasReconstructor::new(width, height);

    for path in filepaths {
        reconstructor.paste_file(path)?;
    }

    Ok(reconstructor.finish())
}

/// Locate the block files in `dir` and reconstruct a canvas from them.
pub fn reconstruct_dir<P: AsRef<Path>>(width: u32, height: u32, dir: P) -> Result<OffscreenImage> {
    let paths = locate_blocks(dir)?;
    reconstruct(width, height, &paths)
}

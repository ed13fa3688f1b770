//! Offscreen block decoding and canvas reconstruction.
//!
//! Clip Studio Paint stores layer pixel data in fixed-size 256x256
//! "offscreen" blocks. A dumped block file carries two rasters back to back:
//!
//! - bytes `[0, 0x10000)` - the transparency plane, one byte per pixel
//! - bytes `[0x10000, 0x50000)` - the color plane, four bytes per pixel
//!   in [B, G, R, A] order
//!
//! This crate decodes block files and reassembles them into the
//! full-resolution transparency and color images of one canvas, tiling
//! blocks in row-major order, plus the alpha-merged composite of the two.
//!
//! # Example
//!
//! ```no_run
//! use clipraster_offscreen::reconstruct_dir;
//!
//! // Reassemble every block file in a dump directory
//! let canvas = reconstruct_dir(512, 256, "dump/blocks")?;
//! canvas.save_to_dir("out")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod block;
mod canvas;
mod error;
mod locate;

pub use block::{swap_bgra_rgba, BlockPlanes};
pub use canvas::{reconstruct, reconstruct_dir, CanvasReconstructor, OffscreenImage};
pub use error::{Error, Result};
pub use locate::locate_blocks;

/// Edge length of one block in pixels.
pub const BLOCK_DIM: u32 = 256;

/// Size of the transparency plane in bytes (one byte per pixel).
pub const TRANSPARENCY_PLANE_SIZE: usize = 0x10000;

/// Byte offset of the color plane within a block file.
pub const COLOR_PLANE_OFFSET: usize = 0x10000;

/// Size of the color plane in bytes (four bytes per pixel).
pub const COLOR_PLANE_SIZE: usize = 0x40000;

/// Minimum size of a block file; trailing bytes beyond this are ignored.
pub const BLOCK_MIN_SIZE: usize = 0x50000;

/// File name prefix identifying block files in a dump directory.
pub const BLOCK_PREFIX: &str = "block";

//! Clipraster - offscreen block raster reconstruction.
//!
//! This crate provides a unified interface to the clipraster library
//! ecosystem for reassembling dumped offscreen block files into
//! full-resolution images.
//!
//! # Crates
//!
//! - [`clipraster_common`] - Common utilities (binary reading, errors)
//! - [`clipraster_offscreen`] - Block decoding and canvas reconstruction
//!
//! # Example
//!
//! ```no_run
//! use clipraster::prelude::*;
//!
//! // Reassemble a dumped 512x256 canvas and write the three images
//! let canvas = reconstruct_dir(512, 256, "dump/blocks")?;
//! canvas.save_to_dir("out")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use clipraster_common as common;
pub use clipraster_offscreen as offscreen;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use clipraster_common::BinaryReader;
    pub use clipraster_offscreen::{
        locate_blocks, reconstruct, reconstruct_dir, BlockPlanes, CanvasReconstructor,
        OffscreenImage,
    };
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

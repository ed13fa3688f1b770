//! Clipraster CLI - reassemble offscreen block dumps into images.
//!
//! This is the main entry point for the clipraster command-line application.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use clipraster::prelude::*;

/// Clipraster - offscreen block reconstruction tool
#[derive(Parser)]
#[command(name = "clipraster")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstruct block files into transparency, color and merged images
    Decode {
        /// Canvas width in pixels
        width: u32,

        /// Canvas height in pixels
        height: u32,

        /// Directory containing the block files
        input_dir: PathBuf,

        /// Directory to write the reconstructed images into
        output_dir: PathBuf,

        /// Treat block files as zlib streams and inflate them first
        #[arg(long)]
        compressed: bool,
    },

    /// List the block files of a dump in paste order
    Blocks {
        /// Directory containing the block files
        input_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Decode {
            width,
            height,
            input_dir,
            output_dir,
            compressed,
        } => {
            cmd_decode(width, height, &input_dir, &output_dir, compressed)?;
        }
        Commands::Blocks { input_dir } => {
            cmd_blocks(&input_dir)?;
        }
    }

    Ok(())
}

fn cmd_decode(
    width: u32,
    height: u32,
    input_dir: &Path,
    output_dir: &Path,
    compressed: bool,
) -> Result<()> {
    let paths = locate_blocks(input_dir).context("Failed to list block files")?;

    println!("Found {} block files in {}", paths.len(), input_dir.display());

    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    let start = Instant::now();
    let mut reconstructor = CanvasReconstructor::new(width, height);

    for path in &paths {
        if compressed {
            let data =
                fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
            let block = BlockPlanes::from_compressed_bytes(&data)
                .with_context(|| format!("Failed to inflate {}", path.display()))?;
            reconstructor.paste(&block)?;
        } else {
            reconstructor.paste_file(path)?;
        }

        pb.inc(1);
    }

    pb.finish_with_message("Done");

    let canvas = reconstructor.finish();
    canvas
        .save_to_dir(output_dir)
        .context("Failed to write output images")?;

    println!(
        "Reconstructed {}x{} canvas from {} blocks in {:?}",
        width,
        height,
        paths.len(),
        start.elapsed()
    );
    println!(
        "Wrote transparency.png, color.png, merged.png to {}",
        output_dir.display()
    );

    Ok(())
}

fn cmd_blocks(input_dir: &Path) -> Result<()> {
    let paths = locate_blocks(input_dir).context("Failed to list block files")?;

    for (i, path) in paths.iter().enumerate() {
        println!("{:>6} {}", i, path.display());
    }

    println!("\nTotal: {} blocks", paths.len());

    Ok(())
}

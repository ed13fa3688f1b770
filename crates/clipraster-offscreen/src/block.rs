//! Block file decoding.

use std::fs;
use std::io::Read;
use std::path::Path;

use clipraster_common::BinaryReader;
use flate2::read::ZlibDecoder;
use image::{GrayImage, RgbaImage};

use crate::{
    Error, Result, BLOCK_DIM, BLOCK_MIN_SIZE, COLOR_PLANE_OFFSET, COLOR_PLANE_SIZE,
    TRANSPARENCY_PLANE_SIZE,
};

/// The two rasters decoded from one block file.
///
/// Both planes are 256x256. The color plane has already been reordered
/// from the stored [B, G, R, A] layout to RGBA.
#[derive(Debug, Clone)]
pub struct BlockPlanes {
    /// Single-channel transparency plane.
    pub transparency: GrayImage,
    /// Four-channel color plane in RGBA order.
    pub color: RgbaImage,
}

impl BlockPlanes {
    /// Decode a block from raw bytes.
    ///
    /// The transparency plane is read from offset 0 and the color plane
    /// from [`COLOR_PLANE_OFFSET`]. Bytes past [`BLOCK_MIN_SIZE`] are
    /// ignored. Input shorter than a plane fails with the common
    /// buffer-underrun error.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut reader = BinaryReader::new(data);

        let transparency = reader.read_bytes(TRANSPARENCY_PLANE_SIZE)?.to_vec();

        reader.seek(COLOR_PLANE_OFFSET);
        let mut color = reader.read_bytes(COLOR_PLANE_SIZE)?.to_vec();
        swap_bgra_rgba(&mut color);

        // read_bytes guarantees the exact plane lengths
        let transparency = GrayImage::from_raw(BLOCK_DIM, BLOCK_DIM, transparency).unwrap();
        let color = RgbaImage::from_raw(BLOCK_DIM, BLOCK_DIM, color).unwrap();

        Ok(Self {
            transparency,
            color,
        })
    }

    /// Read and decode a block file from disk.
    ///
    /// Fails with [`Error::TruncatedBlock`] if the file is shorter than
    /// [`BLOCK_MIN_SIZE`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)?;

        if data.len() < BLOCK_MIN_SIZE {
            return Err(Error::TruncatedBlock {
                path: path.to_path_buf(),
                expected: BLOCK_MIN_SIZE,
                actual: data.len(),
            });
        }

        Self::parse(&data)
    }

    /// Decode a block from a zlib stream.
    ///
    /// Offscreen chunk bodies inside a `.clip` file are zlib streams that
    /// inflate to exactly one block; this decodes such a body directly
    /// without a separate inflate step.
    pub fn from_compressed_bytes(data: &[u8]) -> Result<Self> {
        let mut inflated = Vec::with_capacity(BLOCK_MIN_SIZE);
        ZlibDecoder::new(data)
            .read_to_end(&mut inflated)
            .map_err(|e| Error::Decompression(e.to_string()))?;

        Self::parse(&inflated)
    }
}

/// Swap the first and third byte of every 4-byte pixel.
///
/// Converts between the stored [B, G, R, A] layout and RGBA. Applying the
/// swap twice returns the original bytes; bytes 1 and 3 of each pixel are
/// never touched.
pub fn swap_bgra_rgba(pixels: &mut [u8]) {
    for px in pixels.chunks_exact_mut(4) {
        px.swap(0, 2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    fn make_block(alpha: u8, bgra: [u8; 4]) -> Vec<u8> {
        let mut data = vec![alpha; TRANSPARENCY_PLANE_SIZE];
        for _ in 0..(COLOR_PLANE_SIZE / 4) {
            data.extend_from_slice(&bgra);
        }
        data
    }

    #[test]
    fn test_parse_planes() {
        let block = BlockPlanes::parse(&make_block(7, [1, 2, 3, 4])).unwrap();

        assert_eq!(block.transparency.dimensions(), (256, 256));
        assert_eq!(block.color.dimensions(), (256, 256));
        assert_eq!(block.transparency.get_pixel(0, 0).0, [7]);
        assert_eq!(block.transparency.get_pixel(255, 255).0, [7]);
        // stored [B=1, G=2, R=3, A=4] decodes to RGBA [3, 2, 1, 4]
        assert_eq!(block.color.get_pixel(0, 0).0, [3, 2, 1, 4]);
        assert_eq!(block.color.get_pixel(255, 255).0, [3, 2, 1, 4]);
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let mut data = make_block(0, [0; 4]);
        data.extend_from_slice(&[0xAA; 64]);

        assert!(BlockPlanes::parse(&data).is_ok());
    }

    #[test]
    fn test_parse_short_input() {
        assert!(BlockPlanes::parse(&[0u8; 100]).is_err());
    }

    #[test]
    fn test_swap_is_involution() {
        let original: Vec<u8> = (0u8..=255).collect();
        let mut swapped = original.clone();

        swap_bgra_rgba(&mut swapped);
        assert_ne!(swapped, original);

        // bytes 1 and 3 of each pixel are fixed points
        for (i, (a, b)) in original.iter().zip(&swapped).enumerate() {
            if i % 4 == 1 || i % 4 == 3 {
                assert_eq!(a, b);
            }
        }

        swap_bgra_rgba(&mut swapped);
        assert_eq!(swapped, original);
    }

    #[test]
    fn test_compressed_round_trip() {
        let raw = make_block(9, [10, 20, 30, 40]);
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&raw).unwrap();
        let compressed = encoder.finish().unwrap();

        let block = BlockPlanes::from_compressed_bytes(&compressed).unwrap();
        assert_eq!(block.transparency.get_pixel(5, 5).0, [9]);
        assert_eq!(block.color.get_pixel(5, 5).0, [30, 20, 10, 40]);
    }

    #[test]
    fn test_compressed_garbage_fails() {
        assert!(matches!(
            BlockPlanes::from_compressed_bytes(&[0xFF; 16]),
            Err(Error::Decompression(_))
        ));
    }
}

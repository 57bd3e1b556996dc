//! Image mirroring operations.
//!
//! Flips are exact index remaps with no resampling, so applying the same
//! flip twice restores the original image bit-for-bit.

use crate::decode::RasterImage;

/// Mirror an image along either or both axes.
///
/// `horizontal` mirrors content along the vertical axis (left/right swap),
/// `vertical` mirrors along the horizontal axis (top/bottom swap). Both
/// together produce a 180-degree point reflection. With neither flag set
/// the result is an equivalent copy of the input.
///
/// # Arguments
///
/// * `image` - Source image to mirror
/// * `horizontal` - Swap left and right
/// * `vertical` - Swap top and bottom
///
/// # Returns
///
/// A new `RasterImage` with the same dimensions as the source.
pub fn apply_flip(image: &RasterImage, horizontal: bool, vertical: bool) -> RasterImage {
    if !horizontal && !vertical {
        return image.clone();
    }

    let w = image.width as usize;
    let h = image.height as usize;
    let row_bytes = w * 4;

    let mut output = vec![0u8; w * h * 4];

    for y in 0..h {
        let src_y = if vertical { h - 1 - y } else { y };
        let src_row = src_y * row_bytes;
        let dst_row = y * row_bytes;

        if horizontal {
            for x in 0..w {
                let src_idx = src_row + (w - 1 - x) * 4;
                let dst_idx = dst_row + x * 4;
                output[dst_idx..dst_idx + 4]
                    .copy_from_slice(&image.pixels[src_idx..src_idx + 4]);
            }
        } else {
            output[dst_row..dst_row + row_bytes]
                .copy_from_slice(&image.pixels[src_row..src_row + row_bytes]);
        }
    }

    RasterImage {
        width: image.width,
        height: image.height,
        pixels: output,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

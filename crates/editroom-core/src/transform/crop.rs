//! Image cropping operations.
//!
//! Crop regions are given in pixel coordinates with the origin at the
//! top-left corner, matching the coordinates host requests carry. The
//! pipeline's contract assumes in-bounds rectangles; out-of-bounds values
//! are clamped to the image rather than rejected, so a malformed request
//! can never panic the host.

use crate::decode::RasterImage;

/// Extract a sub-rectangle from an image.
///
/// Returns the region `[x, x+width) x [y, y+height)`. For an in-bounds
/// request the output dimensions are exactly `(width, height)` and every
/// pixel equals the corresponding source pixel.
///
/// # Arguments
///
/// * `image` - Source image to crop
/// * `x` - Left edge of the crop region in pixels
/// * `y` - Top edge of the crop region in pixels
/// * `width` - Width of the crop region in pixels
/// * `height` - Height of the crop region in pixels
///
/// # Behavior
///
/// - Coordinates extending beyond the image are clamped
/// - Minimum output dimension is 1x1 pixels
/// - A full-image rectangle returns an equivalent copy
pub fn apply_crop(image: &RasterImage, x: u32, y: u32, width: u32, height: u32) -> RasterImage {
    // Fast path: full-image crop
    if x == 0 && y == 0 && width >= image.width && height >= image.height {
        return image.clone();
    }

    // Clamp the rectangle to the image bounds
    let left = x.min(image.width.saturating_sub(1));
    let top = y.min(image.height.saturating_sub(1));
    let right = left.saturating_add(width).min(image.width);
    let bottom = top.saturating_add(height).min(image.height);

    // Ensure minimum dimensions
    let out_width = right.saturating_sub(left).max(1);
    let out_height = bottom.saturating_sub(top).max(1);

    let src_row_bytes = (image.width * 4) as usize;
    let out_row_bytes = (out_width * 4) as usize;

    let mut output = vec![0u8; (out_width * out_height * 4) as usize];

    // Copy the region row by row
    for row in 0..out_height as usize {
        let src_start = (top as usize + row) * src_row_bytes + (left * 4) as usize;
        let dst_start = row * out_row_bytes;

        output[dst_start..dst_start + out_row_bytes]
            .copy_from_slice(&image.pixels[src_start..src_start + out_row_bytes]);
    }

    RasterImage {
        width: out_width,
        height: out_height,
        pixels: output,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

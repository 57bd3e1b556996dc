//! Image rotation about the center, clockwise-positive.
//!
//! Multiples of 90 degrees are exact index shuffles with no resampling,
//! so quarter turns compose losslessly (90 + 90 == 180). Any other angle
//! uses inverse mapping with bilinear interpolation onto an expanded
//! canvas: for each output pixel the source position is found by rotating
//! back by the negated angle, and regions outside the source image fill
//! with fully transparent pixels.
//!
//! For rotation by angle θ (clockwise, y pointing down), the inverse
//! transform is:
//! ```text
//! src_x = (dst_x - cx) * cos(θ) + (dst_y - cy) * sin(θ) + src_cx
//! src_y = -(dst_x - cx) * sin(θ) + (dst_y - cy) * cos(θ) + src_cy
//! ```

use crate::decode::RasterImage;

/// Angles closer than this to a quarter turn take the exact path.
const QUARTER_TURN_EPSILON: f64 = 0.001;

/// Compute the dimensions of the bounding box for a rotated image.
///
/// When an image is rotated by a non-multiple of 90 degrees, the corners
/// extend beyond the original bounds. This function calculates the minimum
/// bounding box that contains the entire rotated image.
///
/// # Arguments
///
/// * `width` - Original image width
/// * `height` - Original image height
/// * `degree` - Rotation angle in degrees (positive = clockwise)
///
/// # Returns
///
/// Tuple of (new_width, new_height) for the rotated bounding box.
pub fn rotated_bounds(width: u32, height: u32, degree: f64) -> (u32, u32) {
    // Normalize so 360, 720, -90 and friends hit the fast paths
    let normalized = degree.rem_euclid(360.0);

    if normalized < QUARTER_TURN_EPSILON || (360.0 - normalized) < QUARTER_TURN_EPSILON {
        return (width, height);
    }
    if (normalized - 90.0).abs() < QUARTER_TURN_EPSILON
        || (normalized - 270.0).abs() < QUARTER_TURN_EPSILON
    {
        return (height, width);
    }
    if (normalized - 180.0).abs() < QUARTER_TURN_EPSILON {
        return (width, height);
    }

    let angle_rad = normalized.to_radians();
    let cos = angle_rad.cos().abs();
    let sin = angle_rad.sin().abs();

    let w = width as f64;
    let h = height as f64;

    // The bounding box of a rotated rectangle is:
    // new_w = |w*cos| + |h*sin|
    // new_h = |w*sin| + |h*cos|
    let new_w = (w * cos + h * sin).round() as u32;
    let new_h = (w * sin + h * cos).round() as u32;

    (new_w.max(1), new_h.max(1))
}

/// Rotate an image clockwise about its center.
///
/// The output canvas is expanded to fit the entire rotated image (no
/// clipping). Exact multiples of 90 degrees are lossless; arbitrary
/// angles are resampled bilinearly and fill exposed corners with
/// transparent pixels.
///
/// # Arguments
///
/// * `image` - Source image to rotate
/// * `degree` - Rotation angle in degrees (positive = clockwise, any real value)
///
/// # Returns
///
/// New `RasterImage` with the rotated content. The dimensions may differ
/// from the source due to canvas expansion.
pub fn apply_rotation(image: &RasterImage, degree: f64) -> RasterImage {
    let normalized = degree.rem_euclid(360.0);

    if normalized < QUARTER_TURN_EPSILON || (360.0 - normalized) < QUARTER_TURN_EPSILON {
        return image.clone();
    }
    if (normalized - 90.0).abs() < QUARTER_TURN_EPSILON {
        return rotate90_cw(image);
    }
    if (normalized - 180.0).abs() < QUARTER_TURN_EPSILON {
        return rotate180(image);
    }
    if (normalized - 270.0).abs() < QUARTER_TURN_EPSILON {
        return rotate270_cw(image);
    }

    rotate_arbitrary(image, normalized)
}

/// Exact 90-degree clockwise rotation; output is height x width.
fn rotate90_cw(image: &RasterImage) -> RasterImage {
    let (w, h) = (image.width as usize, image.height as usize);
    let mut output = vec![0u8; w * h * 4];

    for dst_y in 0..w {
        for dst_x in 0..h {
            let src_x = dst_y;
            let src_y = h - 1 - dst_x;
            let src_idx = (src_y * w + src_x) * 4;
            let dst_idx = (dst_y * h + dst_x) * 4;
            output[dst_idx..dst_idx + 4].copy_from_slice(&image.pixels[src_idx..src_idx + 4]);
        }
    }

    RasterImage {
        width: image.height,
        height: image.width,
        pixels: output,
    }
}

/// Exact 180-degree rotation; dimensions are preserved.
fn rotate180(image: &RasterImage) -> RasterImage {
    let (w, h) = (image.width as usize, image.height as usize);
    let mut output = vec![0u8; w * h * 4];

    for dst_y in 0..h {
        for dst_x in 0..w {
            let src_x = w - 1 - dst_x;
            let src_y = h - 1 - dst_y;
            let src_idx = (src_y * w + src_x) * 4;
            let dst_idx = (dst_y * w + dst_x) * 4;
            output[dst_idx..dst_idx + 4].copy_from_slice(&image.pixels[src_idx..src_idx + 4]);
        }
    }

    RasterImage {
        width: image.width,
        height: image.height,
        pixels: output,
    }
}

/// Exact 270-degree clockwise rotation; output is height x width.
fn rotate270_cw(image: &RasterImage) -> RasterImage {
    let (w, h) = (image.width as usize, image.height as usize);
    let mut output = vec![0u8; w * h * 4];

    for dst_y in 0..w {
        for dst_x in 0..h {
            let src_x = w - 1 - dst_y;
            let src_y = dst_x;
            let src_idx = (src_y * w + src_x) * 4;
            let dst_idx = (dst_y * h + dst_x) * 4;
            output[dst_idx..dst_idx + 4].copy_from_slice(&image.pixels[src_idx..src_idx + 4]);
        }
    }

    RasterImage {
        width: image.height,
        height: image.width,
        pixels: output,
    }
}

/// Rotate by an arbitrary angle with inverse-mapped bilinear sampling.
fn rotate_arbitrary(image: &RasterImage, degree: f64) -> RasterImage {
    let (src_w, src_h) = (image.width as f64, image.height as f64);
    let (dst_w, dst_h) = rotated_bounds(image.width, image.height, degree);

    let angle_rad = degree.to_radians();
    let cos = angle_rad.cos();
    let sin = angle_rad.sin();

    // Center of source and destination images
    let src_cx = src_w / 2.0;
    let src_cy = src_h / 2.0;
    let dst_cx = dst_w as f64 / 2.0;
    let dst_cy = dst_h as f64 / 2.0;

    let mut output = vec![0u8; (dst_w * dst_h * 4) as usize];

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            // Translate the destination point to origin at center
            let dx = dst_x as f64 - dst_cx;
            let dy = dst_y as f64 - dst_cy;

            // Apply the inverse rotation to find source coordinates
            let src_x = dx * cos + dy * sin + src_cx;
            let src_y = -dx * sin + dy * cos + src_cy;

            let pixel = sample_bilinear(image, src_x, src_y);

            let dst_idx = ((dst_y * dst_w + dst_x) * 4) as usize;
            output[dst_idx..dst_idx + 4].copy_from_slice(&pixel);
        }
    }

    RasterImage {
        width: dst_w,
        height: dst_h,
        pixels: output,
    }
}

/// Get a pixel as [f64; 4] from an image at the given coordinates.
#[inline]
fn get_pixel_f64(image: &RasterImage, px: usize, py: usize) -> [f64; 4] {
    let idx = (py * image.width as usize + px) * 4;
    [
        image.pixels[idx] as f64,
        image.pixels[idx + 1] as f64,
        image.pixels[idx + 2] as f64,
        image.pixels[idx + 3] as f64,
    ]
}

/// Sample a pixel using bilinear interpolation.
///
/// Considers the 4 nearest pixels and weights their contribution by
/// distance. Samples outside the source image are fully transparent.
fn sample_bilinear(image: &RasterImage, x: f64, y: f64) -> [u8; 4] {
    let (w, h) = (image.width as i64, image.height as i64);

    if x < 0.0 || x >= (w - 1) as f64 || y < 0.0 || y >= (h - 1) as f64 {
        return [0, 0, 0, 0];
    }

    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let x1 = x0 + 1;
    let y1 = y0 + 1;

    // Fractional distances
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = get_pixel_f64(image, x0, y0);
    let p10 = get_pixel_f64(image, x1, y0);
    let p01 = get_pixel_f64(image, x0, y1);
    let p11 = get_pixel_f64(image, x1, y1);

    // Bilinear interpolation formula
    let mut result = [0u8; 4];
    for i in 0..4 {
        let v = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }

    result
}


// ============================================================================
// Property-Based Tests
// ============================================================================

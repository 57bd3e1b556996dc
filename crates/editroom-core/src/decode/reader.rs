//! Source image decoding with EXIF orientation handling.
//!
//! Host requests hand the pipeline an encoded source image (PNG or JPEG).
//! Decoding guesses the format from the byte stream, applies the EXIF
//! orientation tag when one is present, and converts to RGBA8 so the edit
//! pipeline always starts from an upright image.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;
use image::ImageReader;

use super::{DecodeError, Orientation, RasterImage};

/// Decode an image from bytes, applying EXIF orientation correction.
///
/// # Arguments
///
/// * `bytes` - Raw encoded image bytes (PNG or JPEG)
///
/// # Returns
///
/// A `RasterImage` with RGBA pixel data and correct orientation applied.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format cannot be guessed.
/// Returns `DecodeError::CorruptedFile` if the data fails to decode.
pub fn decode_image(bytes: &[u8]) -> Result<RasterImage, DecodeError> {
    // Extract EXIF orientation before decoding; PNG sources simply have none
    let orientation = extract_orientation(bytes);

    let img = decode_bytes(bytes)?;
    let oriented_img = apply_orientation(img, orientation);

    Ok(RasterImage::from_rgba_image(oriented_img.into_rgba8()))
}

/// Decode an image from bytes without applying EXIF orientation.
///
/// Use this when the caller handles orientation itself or when the image
/// is already upright.
pub fn decode_image_no_orientation(bytes: &[u8]) -> Result<RasterImage, DecodeError> {
    let img = decode_bytes(bytes)?;
    Ok(RasterImage::from_rgba_image(img.into_rgba8()))
}

/// Extract the EXIF orientation value from encoded image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    extract_orientation(bytes)
}

fn decode_bytes(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    let cursor = Cursor::new(bytes);
    let reader = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))
}

fn extract_orientation(bytes: &[u8]) -> Orientation {
    let exif_reader = Reader::new();
    let mut cursor = Cursor::new(bytes);

    match exif_reader.read_from_container(&mut cursor) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Some(value) = field.value.get_uint(0) {
                    return Orientation::from(value);
                }
            }
            Orientation::Normal
        }
        Err(_) => Orientation::Normal,
    }
}

/// Apply an EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_png;

    // Minimal valid JPEG bytes (1x1 pixel) with no EXIF segment
    const MINIMAL_JPEG: &[u8] = &[
        0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x01, 0x00, 0x01, 0x00, 0x00, 0xFF, 0xDB, 0x00, 0x43, 0x00, 0x08, 0x06, 0x06, 0x07, 0x06,
        0x05, 0x08, 0x07, 0x07, 0x07, 0x09, 0x09, 0x08, 0x0A, 0x0C, 0x14, 0x0D, 0x0C, 0x0B, 0x0B,
        0x0C, 0x19, 0x12, 0x13, 0x0F, 0x14, 0x1D, 0x1A, 0x1F, 0x1E, 0x1D, 0x1A, 0x1C, 0x1C, 0x20,
        0x24, 0x2E, 0x27, 0x20, 0x22, 0x2C, 0x23, 0x1C, 0x1C, 0x28, 0x37, 0x29, 0x2C, 0x30, 0x31,
        0x34, 0x34, 0x34, 0x1F, 0x27, 0x39, 0x3D, 0x38, 0x32, 0x3C, 0x2E, 0x33, 0x34, 0x32, 0xFF,
        0xC0, 0x00, 0x0B, 0x08, 0x00, 0x01, 0x00, 0x01, 0x01, 0x01, 0x11, 0x00, 0xFF, 0xC4, 0x00,
        0x1F, 0x00, 0x00, 0x01, 0x05, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B,
        0xFF, 0xC4, 0x00, 0xB5, 0x10, 0x00, 0x02, 0x01, 0x03, 0x03, 0x02, 0x04, 0x03, 0x05, 0x05,
        0x04, 0x04, 0x00, 0x00, 0x01, 0x7D, 0x01, 0x02, 0x03, 0x00, 0x04, 0x11, 0x05, 0x12, 0x21,
        0x31, 0x41, 0x06, 0x13, 0x51, 0x61, 0x07, 0x22, 0x71, 0x14, 0x32, 0x81, 0x91, 0xA1, 0x08,
        0x23, 0x42, 0xB1, 0xC1, 0x15, 0x52, 0xD1, 0xF0, 0x24, 0x33, 0x62, 0x72, 0x82, 0x09, 0x0A,
        0x16, 0x17, 0x18, 0x19, 0x1A, 0x25, 0x26, 0x27, 0x28, 0x29, 0x2A, 0x34, 0x35, 0x36, 0x37,
        0x38, 0x39, 0x3A, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48, 0x49, 0x4A, 0x53, 0x54, 0x55, 0x56,
        0x57, 0x58, 0x59, 0x5A, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68, 0x69, 0x6A, 0x73, 0x74, 0x75,
        0x76, 0x77, 0x78, 0x79, 0x7A, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89, 0x8A, 0x92, 0x93,
        0x94, 0x95, 0x96, 0x97, 0x98, 0x99, 0x9A, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9,
        0xAA, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7, 0xB8, 0xB9, 0xBA, 0xC2, 0xC3, 0xC4, 0xC5, 0xC6,
        0xC7, 0xC8, 0xC9, 0xCA, 0xD2, 0xD3, 0xD4, 0xD5, 0xD6, 0xD7, 0xD8, 0xD9, 0xDA, 0xE1, 0xE2,
        0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7,
        0xF8, 0xF9, 0xFA, 0xFF, 0xDA, 0x00, 0x08, 0x01, 0x01, 0x00, 0x00, 0x3F, 0x00, 0xFB, 0xD5,
        0xDB, 0x20, 0xA8, 0xF1, 0x7E, 0xFF, 0xD9,
    ];

    /// PNG-encode a small RGBA test pattern for decode round-trips.
    fn png_fixture(width: u32, height: u32) -> Vec<u8> {
        let pixels: Vec<u8> = (0..(width * height * 4) as usize)
            .map(|i| (i % 251) as u8)
            .collect();
        encode_png(&pixels, width, height).unwrap()
    }

    #[test]
    fn test_decode_valid_jpeg() {
        let result = decode_image(MINIMAL_JPEG);
        assert!(result.is_ok(), "Failed to decode valid JPEG: {:?}", result);

        let img = result.unwrap();
        assert_eq!(img.width, 1);
        assert_eq!(img.height, 1);
        assert_eq!(img.pixels.len(), 4); // 1x1 RGBA = 4 bytes
        assert_eq!(img.pixels[3], 255); // JPEG has no alpha, decodes opaque
    }

    #[test]
    fn test_decode_png_round_trip() {
        let bytes = png_fixture(12, 7);
        let img = decode_image(&bytes).unwrap();

        assert_eq!(img.width, 12);
        assert_eq!(img.height, 7);

        let expected: Vec<u8> = (0..(12 * 7 * 4) as usize).map(|i| (i % 251) as u8).collect();
        assert_eq!(img.pixels, expected);
    }

    #[test]
    fn test_decode_png_preserves_alpha() {
        let pixels = vec![200u8, 100, 50, 7]; // single translucent pixel
        let bytes = encode_png(&pixels, 1, 1).unwrap();

        let img = decode_image(&bytes).unwrap();
        assert_eq!(img.pixels, pixels);
    }

    #[test]
    fn test_decode_no_orientation_matches_for_untagged_source() {
        let bytes = png_fixture(5, 5);
        let a = decode_image(&bytes).unwrap();
        let b = decode_image_no_orientation(&bytes).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_decode_invalid_bytes() {
        let invalid_bytes = &[0x00, 0x01, 0x02, 0x03];
        let result = decode_image(invalid_bytes);

        match result {
            Err(DecodeError::InvalidFormat) | Err(DecodeError::CorruptedFile(_)) => {}
            Err(e) => panic!("Expected a decode error, got: {:?}", e),
            Ok(_) => panic!("Expected error, got success"),
        }
    }

    #[test]
    fn test_decode_empty_bytes() {
        let result = decode_image(&[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_truncated_jpeg() {
        let truncated = &MINIMAL_JPEG[0..20];
        let result = decode_image(truncated);
        assert!(result.is_err());
    }

    #[test]
    fn test_orientation_extraction_no_exif() {
        assert_eq!(get_orientation(MINIMAL_JPEG), Orientation::Normal);
        assert_eq!(get_orientation(&png_fixture(2, 2)), Orientation::Normal);
    }

    #[test]
    fn test_orientation_extraction_invalid_data() {
        let orientation = get_orientation(&[0x00, 0x01, 0x02]);
        assert_eq!(orientation, Orientation::Normal);
    }

    #[test]
    fn test_apply_orientation_normal() {
        let pixels = vec![
            255, 0, 0, 255, // Red
            0, 255, 0, 255, // Green
            0, 0, 255, 255, // Blue
            255, 255, 0, 255, // Yellow
        ];
        let rgba_img = image::RgbaImage::from_raw(2, 2, pixels).unwrap();
        let img = DynamicImage::ImageRgba8(rgba_img);

        let result = apply_orientation(img, Orientation::Normal);
        let rgba_result = result.into_rgba8();

        assert_eq!(rgba_result.dimensions(), (2, 2));
        assert_eq!(rgba_result.get_pixel(0, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_apply_orientation_rotate90() {
        let pixels = vec![
            255, 0, 0, 255, // Red (left)
            0, 255, 0, 255, // Green (right)
        ];
        let rgba_img = image::RgbaImage::from_raw(2, 1, pixels).unwrap();
        let img = DynamicImage::ImageRgba8(rgba_img);

        // Rotate 90 CW should make it 1x2 (vertical)
        let result = apply_orientation(img, Orientation::Rotate90CW);
        let rgba_result = result.into_rgba8();

        assert_eq!(rgba_result.dimensions(), (1, 2));
    }

    #[test]
    fn test_apply_orientation_rotate180() {
        let pixels = vec![
            255, 0, 0, 255, // Red (left)
            0, 255, 0, 255, // Green (right)
        ];
        let rgba_img = image::RgbaImage::from_raw(2, 1, pixels).unwrap();
        let img = DynamicImage::ImageRgba8(rgba_img);

        let result = apply_orientation(img, Orientation::Rotate180);
        let rgba_result = result.into_rgba8();

        assert_eq!(rgba_result.dimensions(), (2, 1));
        assert_eq!(rgba_result.get_pixel(0, 0).0, [0, 255, 0, 255]); // Green
        assert_eq!(rgba_result.get_pixel(1, 0).0, [255, 0, 0, 255]); // Red
    }

    #[test]
    fn test_apply_orientation_flip_horizontal() {
        let pixels = vec![
            255, 0, 0, 255, // Red (left)
            0, 255, 0, 255, // Green (right)
        ];
        let rgba_img = image::RgbaImage::from_raw(2, 1, pixels).unwrap();
        let img = DynamicImage::ImageRgba8(rgba_img);

        let result = apply_orientation(img, Orientation::FlipHorizontal);
        let rgba_result = result.into_rgba8();

        assert_eq!(rgba_result.get_pixel(0, 0).0, [0, 255, 0, 255]); // Green
        assert_eq!(rgba_result.get_pixel(1, 0).0, [255, 0, 0, 255]); // Red
    }
}

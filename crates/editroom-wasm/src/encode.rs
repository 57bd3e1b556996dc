//! Image encoding WASM bindings.
//!
//! This module exposes the editroom-core PNG encoding functions to
//! JavaScript, enabling the host to serialize a pipeline result.
//!
//! # Functions
//!
//! - [`encode_png`] - Encode RGBA pixel data to PNG bytes
//! - [`encode_png_from_image`] - Encode a JsRasterImage to PNG bytes
//!
//! # Example
//!
//! ```typescript
//! import { encode_png, encode_png_from_image } from '@editroom/wasm';
//!
//! // Encode raw pixel data
//! const pngBytes = encode_png(pixels, width, height);
//!
//! // Encode a decoded image
//! const pngBytes = encode_png_from_image(image);
//! ```

use crate::types::JsRasterImage;
use editroom_core::encode;
use wasm_bindgen::prelude::*;

/// Encode RGBA pixel data to PNG bytes.
///
/// # Arguments
///
/// * `pixels` - RGBA pixel data as a `Uint8Array` (4 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Returns
///
/// A `Uint8Array` containing the PNG-encoded bytes, or an error if
/// encoding fails.
///
/// # Errors
///
/// Returns an error if:
/// - The pixel data length doesn't match width * height * 4
/// - Width or height is zero
/// - Encoding fails internally
#[wasm_bindgen]
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(pixels, width, height).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a JsRasterImage to PNG bytes.
///
/// This is a convenience function that extracts pixel data from a
/// `JsRasterImage` and encodes it to PNG. Use this when you have an
/// existing image from the pipeline.
///
/// # Arguments
///
/// * `image` - The image to encode
///
/// # Returns
///
/// A `Uint8Array` containing the PNG-encoded bytes, or an error if
/// encoding fails.
#[wasm_bindgen]
pub fn encode_png_from_image(image: &JsRasterImage) -> Result<Vec<u8>, JsValue> {
    let pixels = image.pixels();
    encode::encode_png(&pixels, image.width(), image.height())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

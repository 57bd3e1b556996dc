//! Image decoding WASM bindings.
//!
//! This module exposes the editroom-core decoding functions to JavaScript,
//! turning encoded source bytes (PNG or JPEG) into RGBA images the edit
//! pipeline can work on.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@editroom/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height}`);
//! ```

use crate::types::JsRasterImage;
use editroom_core::decode;
use wasm_bindgen::prelude::*;

/// Decode an image from bytes.
///
/// Accepts PNG or JPEG data, guesses the format from the byte stream, and
/// automatically applies EXIF orientation correction so the pipeline
/// starts from an upright image.
///
/// # Arguments
///
/// * `bytes` - The raw encoded image bytes as a `Uint8Array`
///
/// # Returns
///
/// A `JsRasterImage` containing the decoded RGBA pixel data, or an error
/// if decoding fails.
///
/// # Errors
///
/// Returns an error if:
/// - The bytes are not a recognized image format
/// - The data is corrupted or truncated
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRasterImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsRasterImage::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Decode an image from bytes without applying EXIF orientation.
///
/// Use this when the host handles orientation itself or the source is
/// already upright.
#[wasm_bindgen]
pub fn decode_image_no_orientation(bytes: &[u8]) -> Result<JsRasterImage, JsValue> {
    decode::decode_image_no_orientation(bytes)
        .map(JsRasterImage::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

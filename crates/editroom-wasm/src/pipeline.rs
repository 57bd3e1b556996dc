//! Edit pipeline WASM bindings.
//!
//! This module is the host-facing surface of the plugin: the host hands
//! over a decoded image (or raw source bytes) plus an ordered operation
//! list, and gets back the edited image (or PNG bytes). The operation
//! list crosses the boundary as a plain JavaScript array of tagged
//! objects and is deserialized with serde-wasm-bindgen.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, apply_operations, edit_to_png } from '@editroom/wasm';
//!
//! const ops = [
//!   { type: 'crop', x: 10, y: 10, width: 200, height: 100 },
//!   { type: 'rotate', degree: 90 },
//! ];
//!
//! // Step by step
//! const image = decode_image(bytes);
//! const edited = apply_operations(image, ops);
//!
//! // Or in one shot, returning PNG bytes for the response payload
//! const png = edit_to_png(bytes, ops);
//! ```

use crate::types::JsRasterImage;
use editroom_core::{decode, EditPipeline, Operation};
use wasm_bindgen::prelude::*;

fn parse_operations(ops: JsValue) -> Result<Vec<Operation>, JsValue> {
    serde_wasm_bindgen::from_value(ops).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Apply an ordered list of edit operations to an image.
///
/// Operations are applied in the order given. Unrecognized operation
/// kinds are skipped (with a console warning once the logger is
/// installed), so a newer host can send lists this build only partially
/// understands.
///
/// # Arguments
///
/// * `image` - Source image
/// * `ops` - Array of operation objects, e.g. `[{type: 'flip', horizontal: true, vertical: false}]`
///
/// # Returns
///
/// A new `JsRasterImage` with all recognized operations applied, or an
/// error if the operation list is malformed.
#[wasm_bindgen]
pub fn apply_operations(image: &JsRasterImage, ops: JsValue) -> Result<JsRasterImage, JsValue> {
    let ops = parse_operations(ops)?;

    let mut pipeline = EditPipeline::new(image.to_raster());
    pipeline.apply(&ops);

    Ok(JsRasterImage::from_raster(pipeline.into_image()))
}

/// Decode source bytes, apply edit operations, and return PNG bytes.
///
/// This is the one-shot memory path a host invokes to service an edit
/// request: decode, apply, encode, and hand the result back as the
/// response payload.
///
/// # Arguments
///
/// * `bytes` - Encoded source image (PNG or JPEG) as a `Uint8Array`
/// * `ops` - Array of operation objects
///
/// # Returns
///
/// PNG-encoded bytes of the edited image, or an error if the source
/// cannot be decoded, the operation list is malformed, or encoding fails.
#[wasm_bindgen]
pub fn edit_to_png(bytes: &[u8], ops: JsValue) -> Result<Vec<u8>, JsValue> {
    let ops = parse_operations(ops)?;

    let source = decode::decode_image(bytes).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let mut pipeline = EditPipeline::new(source);
    pipeline.apply(&ops);

    pipeline
        .output_memory()
        .ok_or_else(|| JsValue::from_str("PNG encoding failed"))
}

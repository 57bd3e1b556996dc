//! Editroom WASM - WebAssembly bindings for Editroom
//!
//! This crate exposes the editroom-core edit pipeline to a host
//! application: decode a source image, apply an ordered operation list
//! (flip, crop, rotate), and encode the result as PNG.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Image decoding bindings (PNG/JPEG with EXIF orientation)
//! - `pipeline` - Operation-list application and the one-shot edit path
//! - `encode` - PNG encoding bindings
//! - `logger` - Console-backed logger for core warnings
//!
//! # Usage
//!
//! ```typescript
//! import init, { edit_to_png } from '@editroom/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const png = edit_to_png(bytes, [
//!   { type: 'flip', horizontal: true, vertical: false },
//!   { type: 'rotate', degree: 90 },
//! ]);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod logger;
mod pipeline;
mod types;

// Re-export public types
pub use decode::{decode_image, decode_image_no_orientation};
pub use encode::{encode_png, encode_png_from_image};
pub use pipeline::{apply_operations, edit_to_png};
pub use types::JsRasterImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logger::install();
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

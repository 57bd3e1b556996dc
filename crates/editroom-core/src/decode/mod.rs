//! Image decoding pipeline for Editroom.
//!
//! This module provides functionality for:
//! - Decoding PNG and JPEG source images
//! - Applying the EXIF orientation tag so edits start from an upright image
//!
//! # Architecture
//!
//! The decoding pipeline is designed to be used from a host application via
//! WASM bindings. All operations are synchronous and single-threaded.
//!
//! # Examples
//!
//! ```ignore
//! use editroom_core::decode::{decode_image, RasterImage};
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod reader;
mod types;

pub use reader::{decode_image, decode_image_no_orientation, get_orientation};
pub use types::{DecodeError, Orientation, RasterImage};

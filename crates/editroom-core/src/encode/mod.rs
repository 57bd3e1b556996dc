//! Image encoding pipeline for Editroom.
//!
//! This module provides functionality for:
//! - Encoding RGBA images to PNG, the lossless alpha-preserving output format
//!
//! # Architecture
//!
//! The encoding pipeline is designed to be used from a host application via
//! WASM bindings. All operations are synchronous and single-threaded.
//!
//! # Examples
//!
//! ```ignore
//! use editroom_core::encode::encode_png;
//!
//! let pixels = vec![128u8; 100 * 100 * 4]; // Gray image
//! let png_bytes = encode_png(&pixels, 100, 100).unwrap();
//! println!("Encoded {} bytes", png_bytes.len());
//! ```

mod png;

pub use png::{encode_png, EncodeError};

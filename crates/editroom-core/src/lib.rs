//! Editroom Core - Image edit pipeline library
//!
//! This crate implements the native side of the Editroom plugin: decode a
//! source image, apply an ordered list of edit operations (flip, crop,
//! rotate), and emit the result as PNG to a file path or an in-memory
//! buffer for the host application.
//!
//! # Usage
//!
//! ```ignore
//! use editroom_core::{decode_image, EditPipeline, Operation};
//!
//! let source = std::fs::read("photo.jpg")?;
//! let mut pipeline = EditPipeline::new(decode_image(&source)?);
//!
//! pipeline.apply(&[
//!     Operation::Crop { x: 10, y: 10, width: 200, height: 100 },
//!     Operation::Rotate { degree: 90.0 },
//! ]);
//!
//! pipeline.output_file("edited.png")?;
//! ```

pub mod decode;
pub mod encode;
pub mod ops;
pub mod pipeline;
pub mod transform;

pub use decode::{decode_image, DecodeError, RasterImage};
pub use encode::{encode_png, EncodeError};
pub use ops::Operation;
pub use pipeline::{EditPipeline, OutputError};
pub use transform::{apply_crop, apply_flip, apply_rotation, rotated_bounds};

//! Image transformation operations: flipping, cropping, and rotation.
//!
//! These are the three edit operations the pipeline dispatches to. Each
//! transform takes the current image by reference and returns a new one;
//! the pipeline replaces its owned image with the result.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner
//! - Crop coordinates are in pixels
//! - Rotation angles are in degrees, positive = clockwise
//!
//! # Exactness
//!
//! Flips and quarter-turn rotations are pure index remaps and therefore
//! lossless; flips are self-inverse and quarter turns compose additively.
//! Rotation by any other angle resamples bilinearly.

mod crop;
mod flip;
mod rotation;

pub use crop::apply_crop;
pub use flip::apply_flip;
pub use rotation::{apply_rotation, rotated_bounds};

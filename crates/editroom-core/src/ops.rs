//! Edit operation model.
//!
//! Host requests carry an ordered list of operations, serialized with an
//! internal `type` tag, e.g.:
//!
//! ```json
//! [
//!   {"type": "flip", "horizontal": true, "vertical": false},
//!   {"type": "crop", "x": 10, "y": 10, "width": 200, "height": 100},
//!   {"type": "rotate", "degree": 90.0}
//! ]
//! ```
//!
//! The recognized set is closed: flip, crop, rotate. A tag outside that
//! set deserializes to [`Operation::Unknown`] instead of failing, and the
//! pipeline skips it with a warning. Host layers are versioned separately
//! from this crate, so a newer host may legitimately send operations this
//! build does not know.

use serde::{Deserialize, Serialize};

/// One edit instruction with its parameters.
///
/// Operations are applied strictly in the order they arrive; the pipeline
/// never reorders or deduplicates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Operation {
    /// Mirror the image along either or both axes.
    Flip {
        /// Swap left and right.
        horizontal: bool,
        /// Swap top and bottom.
        vertical: bool,
    },

    /// Extract a sub-rectangle, in pixel coordinates from the top-left.
    Crop {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Rotate clockwise about the center by any number of degrees.
    Rotate { degree: f64 },

    /// An operation kind this build does not recognize. Skipped by the
    /// pipeline, with a warning.
    #[serde(other)]
    Unknown,
}

impl Operation {
    /// Whether the pipeline has a transform for this operation.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Operation::Unknown)
    }
}

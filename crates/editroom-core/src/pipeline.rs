//! The image edit pipeline.
//!
//! An [`EditPipeline`] owns exactly one image for the duration of an edit
//! request. Operations are applied strictly in the order supplied, each
//! replacing the owned image with its result, and the final image can be
//! emitted as PNG to a file or to an in-memory buffer any number of
//! times - output is non-destructive.
//!
//! The pipeline is synchronous and single-threaded: one instance per edit
//! request, used by one caller, then discarded. Batch work parallelizes
//! across independent pipeline instances, not within one.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::decode::RasterImage;
use crate::encode::{encode_png, EncodeError};
use crate::ops::Operation;
use crate::transform::{apply_crop, apply_flip, apply_rotation};

/// Errors that can occur when emitting the pipeline result.
///
/// Output failures are reported to the caller, never fatal: a single
/// request's failed export must not take down the host process.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The image could not be serialized to PNG.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The target path could not be written.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Owner of the in-progress image and applier of the operation sequence.
pub struct EditPipeline {
    image: RasterImage,
}

impl EditPipeline {
    /// Create a pipeline over an already-decoded source image.
    ///
    /// No validation is performed; the caller is responsible for handing
    /// in a successfully decoded image.
    pub fn new(image: RasterImage) -> Self {
        Self { image }
    }

    /// The current image.
    pub fn image(&self) -> &RasterImage {
        &self.image
    }

    /// Consume the pipeline and return the final image.
    pub fn into_image(self) -> RasterImage {
        self.image
    }

    /// Apply an ordered sequence of operations.
    ///
    /// Elements are processed in the order given - never reordered,
    /// sorted, or deduplicated - and each recognized operation replaces
    /// the owned image with its result before the next one runs.
    /// Unrecognized kinds are skipped with a warning, leaving the image
    /// unchanged for that element.
    pub fn apply(&mut self, ops: &[Operation]) {
        for op in ops {
            let next = match *op {
                Operation::Flip {
                    horizontal,
                    vertical,
                } => apply_flip(&self.image, horizontal, vertical),
                Operation::Crop {
                    x,
                    y,
                    width,
                    height,
                } => apply_crop(&self.image, x, y, width, height),
                Operation::Rotate { degree } => apply_rotation(&self.image, degree),
                Operation::Unknown => {
                    log::warn!("skipping unrecognized edit operation");
                    continue;
                }
            };
            self.image = next;
        }
    }

    /// Encode the current image as PNG and write it to `target_path`,
    /// silently overwriting any existing file.
    ///
    /// Encoding completes in memory before the filesystem is touched, so
    /// an encode failure never creates or truncates the target. A write
    /// failure leaves whatever the OS managed to write; no cleanup is
    /// attempted.
    pub fn output_file(&self, target_path: impl AsRef<Path>) -> Result<(), OutputError> {
        let path = target_path.as_ref();
        let bytes = encode_png(&self.image.pixels, self.image.width, self.image.height)?;

        fs::write(path, bytes).map_err(|source| OutputError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Encode the current image as PNG into an in-memory buffer.
    ///
    /// Returns `None` if encoding fails, after logging the cause - the
    /// caller decides what to do next.
    pub fn output_memory(&self) -> Option<Vec<u8>> {
        match encode_png(&self.image.pixels, self.image.width, self.image.height) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                log::warn!("in-memory PNG encode failed: {e}");
                None
            }
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::decode::decode_image;
    use proptest::prelude::*;

    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (4u32..=40, 4u32..=40)
    }

    fn create_test_image(width: u32, height: u32) -> RasterImage {
        let pixels = (0..(width * height * 4) as usize)
            .map(|i| ((i * 41) % 256) as u8)
            .collect();
        RasterImage {
            width,
            height,
            pixels,
        }
    }

    /// Strategy over lossless operations (exact index remaps).
    fn lossless_op_strategy() -> impl Strategy<Value = Operation> {
        prop_oneof![
            (any::<bool>(), any::<bool>()).prop_map(|(h, v)| Operation::Flip {
                horizontal: h,
                vertical: v
            }),
            prop::sample::select(vec![90.0f64, 180.0, 270.0])
                .prop_map(|degree| Operation::Rotate { degree }),
            Just(Operation::Unknown),
        ]
    }

    proptest! {
        /// Property: The output always round-trips through PNG unchanged.
        #[test]
        fn prop_output_round_trips(
            (width, height) in dimensions_strategy(),
            ops in prop::collection::vec(lossless_op_strategy(), 0..6),
        ) {
            let mut pipeline = EditPipeline::new(create_test_image(width, height));
            pipeline.apply(&ops);

            let bytes = pipeline.output_memory().unwrap();
            let decoded = decode_image(&bytes).unwrap();

            prop_assert_eq!(&decoded, pipeline.image());
        }

        /// Property: Unknown operations never change the result, wherever
        /// they appear in the sequence.
        #[test]
        fn prop_unknown_ops_are_inert(
            (width, height) in dimensions_strategy(),
            ops in prop::collection::vec(lossless_op_strategy(), 0..6),
        ) {
            let img = create_test_image(width, height);

            let mut with_all = EditPipeline::new(img.clone());
            with_all.apply(&ops);

            let recognized: Vec<Operation> =
                ops.iter().filter(|op| op.is_recognized()).cloned().collect();
            let mut without_unknown = EditPipeline::new(img);
            without_unknown.apply(&recognized);

            prop_assert_eq!(with_all.image(), without_unknown.image());
        }

        /// Property: Applying one list equals applying its elements one at
        /// a time - the pipeline is a plain left fold.
        #[test]
        fn prop_apply_is_a_fold(
            (width, height) in dimensions_strategy(),
            ops in prop::collection::vec(lossless_op_strategy(), 0..6),
        ) {
            let img = create_test_image(width, height);

            let mut all_at_once = EditPipeline::new(img.clone());
            all_at_once.apply(&ops);

            let mut one_at_a_time = EditPipeline::new(img);
            for op in &ops {
                one_at_a_time.apply(std::slice::from_ref(op));
            }

            prop_assert_eq!(all_at_once.image(), one_at_a_time.image());
        }
    }
}

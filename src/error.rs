//! Error types for the ray caster.

use thiserror::Error;

/// Errors raised by the fixed-size buffer forms of [`crate::math::vec::Vec3`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VecError {
    /// The slice does not hold exactly one value per component.
    #[error("expected a buffer of {expected} components, got {found}")]
    Length {
        /// Number of components a vector has.
        expected: usize,
        /// Length of the offending buffer.
        found: usize,
    },
}

/// Errors raised while writing a rendered frame.
#[derive(Error, Debug)]
pub enum OutputError {
    /// I/O error opening or writing the sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding error from the `image` crate.
    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),

    /// The output path has an extension no writer handles.
    #[error("unsupported output format '{0}', expected .ppm or .png")]
    UnsupportedFormat(String),
}

//! Error types for tessella.

use thiserror::Error;

/// Errors produced while validating or running a generation pass.
///
/// Every variant except `Io` is an invalid-argument error: it is reported
/// before anything is drawn, so a failed call never leaves a half-painted
/// surface behind.
#[derive(Debug, Error)]
pub enum TilingError {
    /// A random iterator was built over an empty list.
    #[error("empty choices: a random iterator needs at least one item")]
    EmptyChoices,

    /// Cell side length was zero, negative, or not finite.
    #[error("invalid side length {0}: must be a positive finite number")]
    InvalidSide(f64),

    /// Gutter was negative or not finite.
    #[error("invalid gutter {0}: must be a non-negative finite number")]
    InvalidGutter(f64),

    /// Canvas width or height was zero.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A palette could not be constructed from the given colors.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// No built-in palette has the requested name.
    #[error("unknown palette: {0}")]
    UnknownPalette(String),

    /// No output format matches the requested name or extension.
    #[error("unknown output format: {0}")]
    UnknownFormat(String),

    /// Writing an output file failed.
    #[error("i/o error: {0}")]
    Io(String),
}

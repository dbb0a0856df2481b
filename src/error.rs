//! Error types for the geohash codec.

use crate::codec::{Axis, Encoding};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeohashError>;

/// Every failure is a caller contract violation and can be recovered from by
/// retrying with corrected input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeohashError {
    /// A symbol outside the selected encoding's alphabet.
    #[error("invalid character {character:?} at position {position} for {encoding} encoding")]
    InvalidCharacter {
        character: char,
        position: usize,
        encoding: Encoding,
    },

    /// Precision times encoding width does not fit in 64 bits.
    #[error(
        "precision {precision} is too large for {encoding} encoding (maximum {})",
        .encoding.max_precision()
    )]
    PrecisionOverflow { precision: usize, encoding: Encoding },

    #[error("precision must be at least 1")]
    ZeroPrecision,

    #[error("geohash string is empty")]
    EmptyHash,

    /// Latitude outside `[-90, 90]`, longitude outside `[-180, 180]`, or a
    /// non-finite value.
    #[error(
        "{axis} out of range [-{}, {}]: {value}",
        .axis.half_range(),
        .axis.half_range()
    )]
    CoordinateOutOfRange { axis: Axis, value: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

//! Fixed-point quantization of coordinate axes onto a 32-bit lattice.
//!
//! An axis with half-range `r` is divided into `2^32` equal buckets, so one
//! unit of the lattice integer is `2r / 2^32` degrees.

use serde::{Deserialize, Serialize};
use std::fmt;

const LATTICE_SIZE: f64 = 4_294_967_296.0; // 2^32

/// One of the two coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Half the axis range in degrees: 90 for latitude, 180 for longitude.
    #[inline]
    pub const fn half_range(self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }

    /// Full axis range in degrees.
    #[inline]
    pub const fn range(self) -> f64 {
        2.0 * self.half_range()
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

/// Map a value in `[-r, r]` to `floor((x + r) / 2r * 2^32)`.
///
/// The float to integer cast saturates, so the upper bound `r` itself lands
/// in the last bucket. Range checking is the caller's job, see
/// [`crate::validation`].
#[inline]
pub fn quantize(value: f64, axis: Axis) -> u32 {
    let r = axis.half_range();
    let p = (value + r) / (2.0 * r);
    (p * LATTICE_SIZE) as u32
}

/// Lower edge, in degrees, of the bucket a lattice integer names.
#[inline]
pub fn dequantize(value: u32, axis: Axis) -> f64 {
    axis.range() * (value as f64 / LATTICE_SIZE) - axis.half_range()
}

/// Keep the `bits` most significant bits of a lattice integer.
#[inline]
pub const fn mask(value: u32, bits: u32) -> u32 {
    if bits == 0 {
        0
    } else if bits >= 32 {
        value
    } else {
        value & (u32::MAX << (32 - bits))
    }
}

/// Width in degrees of one cell when `bits` bits of the axis are retained.
#[inline]
pub fn axis_span(axis: Axis, bits: u32) -> f64 {
    axis.range() / (1u64 << bits.min(32)) as f64
}

/// Lattice step between adjacent cells at `bits` retained bits.
///
/// A 0-bit axis has a single cell covering the whole range, so its step
/// is zero.
#[inline]
pub const fn cell_step(bits: u32) -> u32 {
    if bits == 0 || bits > 32 {
        0
    } else {
        (1u64 << (32 - bits)) as u32
    }
}

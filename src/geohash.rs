//! The geohash value type.
//!
//! A [`Geohash`] stores the quantized lattice pair of a coordinate together
//! with the precision and encoding used to render it. Text, region and
//! neighbors are all derived on demand, so changing the precision or the
//! encoding never leaves a stale value behind.

use crate::codec::lattice::{axis_span, mask};
use crate::codec::{
    Axis, Encoding, decode_bits, deinterleave, dequantize, encode_bits, interleave, quantize,
    split_bits,
};
use crate::config::DEFAULT_PRECISION;
use crate::error::{GeohashError, Result};
use crate::validation::validate_coordinate;
use flexgeohash_types::{Coordinate, LatLng, Region};
use std::fmt;
use std::str::FromStr;

/// A coordinate quantized onto the 32-bit lattice, rendered at a given
/// precision and encoding.
///
/// The lattice pair is fixed at construction. Precision and encoding can be
/// changed afterwards; the setters take `&mut self`, so a value shared
/// between threads needs the caller's own synchronization to be mutated.
///
/// # Examples
///
/// ```
/// use flexgeohash::{Coordinate, Encoding, Geohash};
///
/// let tokyo = Coordinate::new(35.681, 139.767);
/// let geohash = Geohash::new(&tokyo, 7, Encoding::Base32)?;
/// assert_eq!(geohash.hash(), "xn76urx");
/// assert!(geohash.region().contains(&tokyo));
/// # Ok::<(), flexgeohash::GeohashError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Geohash {
    lat: u32,
    lng: u32,
    precision: usize,
    encoding: Encoding,
    /// `precision * encoding.bits()`, recomputed by the setters
    bits: u32,
}

impl Geohash {
    /// Quantize a coordinate. Fails with `CoordinateOutOfRange` instead of
    /// clamping, and with `PrecisionOverflow` when the precision does not
    /// fit the encoding.
    pub fn new(coordinate: &impl LatLng, precision: usize, encoding: Encoding) -> Result<Self> {
        validate_coordinate(coordinate)?;
        let bits = encoding.total_bits(precision)?;
        Ok(Self {
            lat: quantize(coordinate.latitude(), Axis::Latitude),
            lng: quantize(coordinate.longitude(), Axis::Longitude),
            precision,
            encoding,
            bits,
        })
    }

    /// Quantize a coordinate at the default precision and encoding
    /// (12 characters of base32).
    pub fn from_coordinate(coordinate: &impl LatLng) -> Result<Self> {
        Self::new(coordinate, DEFAULT_PRECISION, Encoding::default())
    }

    /// Parse geohash text. The precision is the length of the text.
    ///
    /// ```
    /// use flexgeohash::{Encoding, Geohash};
    ///
    /// let geohash = Geohash::parse("0g", Encoding::Base16)?;
    /// assert_eq!(geohash.precision(), 2);
    /// assert!(Geohash::parse("0h", Encoding::Base16).is_err());
    /// # Ok::<(), flexgeohash::GeohashError>(())
    /// ```
    pub fn parse(text: &str, encoding: Encoding) -> Result<Self> {
        let (hash, precision) = decode_bits(text, encoding)?;
        Self::from_bits(hash, precision, encoding)
    }

    /// Build a geohash from a combined (interleaved) 64-bit hash.
    pub fn from_bits(hash: u64, precision: usize, encoding: Encoding) -> Result<Self> {
        let bits = encoding.total_bits(precision)?;
        let (lat, lng) = deinterleave(hash);
        Ok(Self {
            lat,
            lng,
            precision,
            encoding,
            bits,
        })
    }

    /// Same precision and encoding, different lattice pair.
    pub(crate) fn with_lattice(&self, lat: u32, lng: u32) -> Self {
        Self { lat, lng, ..*self }
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Total significant bits, `precision * encoding.bits()`.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    pub fn lat_bits(&self) -> u32 {
        split_bits(self.bits).0
    }

    pub fn lng_bits(&self) -> u32 {
        split_bits(self.bits).1
    }

    /// The full-resolution `(lat, lng)` lattice pair, including bits below
    /// the current precision.
    pub fn lattice(&self) -> (u32, u32) {
        (self.lat, self.lng)
    }

    /// The combined hash with every bit below the precision cleared.
    ///
    /// Values sort in the same order as their text form, which makes them
    /// usable as keys for range scans.
    pub fn to_bits(&self) -> u64 {
        let (lat_bits, lng_bits) = split_bits(self.bits);
        interleave(mask(self.lat, lat_bits), mask(self.lng, lng_bits))
    }

    pub fn set_precision(&mut self, precision: usize) -> Result<()> {
        self.bits = self.encoding.total_bits(precision)?;
        self.precision = precision;
        Ok(())
    }

    /// Change the encoding, keeping the precision. Fails without modifying
    /// `self` when the precision does not fit the new encoding.
    pub fn set_encoding(&mut self, encoding: Encoding) -> Result<()> {
        self.bits = encoding.total_bits(self.precision)?;
        self.encoding = encoding;
        Ok(())
    }

    pub fn with_precision(mut self, precision: usize) -> Result<Self> {
        self.set_precision(precision)?;
        Ok(self)
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Result<Self> {
        self.set_encoding(encoding)?;
        Ok(self)
    }

    /// Text form: `precision` characters of the selected encoding.
    pub fn hash(&self) -> String {
        encode_bits(interleave(self.lat, self.lng), self.precision, self.encoding)
    }

    /// The cell this geohash denotes at its current precision.
    pub fn region(&self) -> Region {
        let (lat_bits, lng_bits) = split_bits(self.bits);
        let lat_span = axis_span(Axis::Latitude, lat_bits);
        let lng_span = axis_span(Axis::Longitude, lng_bits);
        let south = dequantize(mask(self.lat, lat_bits), Axis::Latitude);
        let west = dequantize(mask(self.lng, lng_bits), Axis::Longitude);

        Region::new(
            Coordinate::new(south + lat_span / 2.0, west + lng_span / 2.0),
            Coordinate::new(lat_span, lng_span),
        )
    }

    pub fn contains(&self, coordinate: &impl LatLng) -> bool {
        self.region().contains(coordinate)
    }
}

impl fmt::Display for Geohash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hash())
    }
}

/// Parses base32 text.
impl FromStr for Geohash {
    type Err = GeohashError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, Encoding::Base32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng)
    }

    #[test]
    fn test_known_vectors() {
        let tokyo = Geohash::new(&coord(35.681, 139.767), 7, Encoding::Base32).unwrap();
        assert_eq!(tokyo.hash(), "xn76urx");

        let aalborg = Geohash::new(&coord(57.64911, 10.40744), 11, Encoding::Base32).unwrap();
        assert_eq!(aalborg.hash(), "u4pruydqqvj");

        let nyc = Geohash::new(&coord(40.7128, -74.0060), 9, Encoding::Base32).unwrap();
        assert_eq!(nyc.to_string(), "dr5regw3p");
    }

    #[test]
    fn test_default_precision_and_encoding() {
        let geohash = Geohash::from_coordinate(&coord(35.681, 139.767)).unwrap();
        assert_eq!(geohash.precision(), 12);
        assert_eq!(geohash.encoding(), Encoding::Base32);
        assert_eq!(geohash.hash(), "xn76urx0zhkz");
    }

    #[test]
    fn test_base16_rendering() {
        let geohash = Geohash::new(&coord(35.681, 139.767), 12, Encoding::Base16).unwrap();
        assert_eq!(geohash.hash(), "fe0f6e5gb0gd");
        assert_eq!(geohash.bits(), 48);
    }

    #[test]
    fn test_region_of_single_character() {
        let region = Geohash::parse("s", Encoding::Base32).unwrap().region();
        assert_eq!(region.center, coord(22.5, 22.5));
        assert_eq!(region.span, coord(45.0, 45.0));
    }

    #[test]
    fn test_bit_split_favours_longitude() {
        let geohash = Geohash::parse("s", Encoding::Base32).unwrap();
        assert_eq!((geohash.lat_bits(), geohash.lng_bits()), (2, 3));
        let geohash = Geohash::parse("1", Encoding::Base2).unwrap();
        assert_eq!((geohash.lat_bits(), geohash.lng_bits()), (0, 1));
        // One longitude bit: eastern hemisphere, full latitude range
        let region = geohash.region();
        assert_eq!(region.center, coord(0.0, 90.0));
        assert_eq!(region.span, coord(180.0, 180.0));
    }

    #[test]
    fn test_region_contains_source_coordinate() {
        let samples = [
            coord(35.681, 139.767),
            coord(-33.8688, 151.2093),
            coord(51.5074, -0.1278),
            coord(-89.999, -179.999),
            coord(90.0, 180.0),
            coord(-90.0, -180.0),
            coord(0.0, 0.0),
        ];
        for sample in samples {
            for encoding in Encoding::ALL {
                for precision in 1..=encoding.max_precision() {
                    let geohash = Geohash::new(&sample, precision, encoding).unwrap();
                    assert!(
                        geohash.contains(&sample),
                        "{sample:?} not in {} ({encoding}, {precision})",
                        geohash.hash()
                    );
                }
            }
        }
    }

    #[test]
    fn test_rehash_of_center_is_stable() {
        for text in ["xn76urx", "u4pruydqqvj", "s", "0", "zzzzzzzzzzzz", "9q8yy"] {
            let region = Geohash::parse(text, Encoding::Base32).unwrap().region();
            let again = Geohash::new(&region.center, text.len(), Encoding::Base32).unwrap();
            assert_eq!(again.hash(), text);
        }
    }

    #[test]
    fn test_precision_change_pads_with_zero_symbol() {
        let mut geohash = Geohash::parse("x", Encoding::Base32).unwrap();
        geohash.set_precision(12).unwrap();
        assert_eq!(geohash.hash(), "x00000000000");
        geohash.set_precision(1).unwrap();
        assert_eq!(geohash.hash(), "x");
    }

    #[test]
    fn test_precision_change_keeps_lattice() {
        let full = Geohash::from_coordinate(&coord(35.681, 139.767)).unwrap();
        let short = full.with_precision(3).unwrap();
        assert_eq!(short.hash(), "xn7");
        assert_eq!(short.lattice(), full.lattice());
        assert_eq!(short.with_precision(12).unwrap().hash(), full.hash());
    }

    #[test]
    fn test_setters_reject_overflow_without_mutation() {
        let mut geohash = Geohash::new(&coord(1.0, 2.0), 20, Encoding::Base8).unwrap();
        assert_eq!(
            geohash.set_encoding(Encoding::Base32),
            Err(GeohashError::PrecisionOverflow {
                precision: 20,
                encoding: Encoding::Base32
            })
        );
        assert_eq!(geohash.encoding(), Encoding::Base8);
        assert_eq!(geohash.bits(), 60);

        assert_eq!(geohash.set_precision(0), Err(GeohashError::ZeroPrecision));
        assert_eq!(geohash.precision(), 20);
    }

    #[test]
    fn test_encoding_change_recomputes_bits() {
        let mut geohash = Geohash::new(&coord(1.0, 2.0), 12, Encoding::Base32).unwrap();
        geohash.set_encoding(Encoding::Base2).unwrap();
        assert_eq!(geohash.bits(), 12);
        assert_eq!(geohash.hash().len(), 12);
        assert!(geohash.hash().chars().all(|c| c == '0' || c == '1'));
    }

    #[test]
    fn test_construction_errors() {
        assert!(matches!(
            Geohash::new(&coord(91.0, 0.0), 5, Encoding::Base32),
            Err(GeohashError::CoordinateOutOfRange {
                axis: Axis::Latitude,
                ..
            })
        ));
        assert!(matches!(
            Geohash::new(&coord(0.0, 0.0), 13, Encoding::Base32),
            Err(GeohashError::PrecisionOverflow { .. })
        ));
        assert!(matches!(
            Geohash::new(&coord(0.0, 0.0), 0, Encoding::Base32),
            Err(GeohashError::ZeroPrecision)
        ));
    }

    #[test]
    fn test_to_bits_clears_low_bits() {
        let geohash = Geohash::from_coordinate(&coord(35.681, 139.767)).unwrap();
        assert_eq!(geohash.to_bits() & ((1 << 4) - 1), 0);
        let reparsed = Geohash::parse(&geohash.hash(), Encoding::Base32).unwrap();
        assert_eq!(reparsed.to_bits(), geohash.to_bits());
        assert_eq!(reparsed.lattice().0, mask(geohash.lattice().0, geohash.lat_bits()));
    }

    #[test]
    fn test_from_str_uses_base32() {
        let geohash: Geohash = "xn76urx".parse().unwrap();
        assert_eq!(geohash.encoding(), Encoding::Base32);
        assert_eq!(geohash.precision(), 7);
        assert!("xn76urxa".parse::<Geohash>().is_err());
    }
}

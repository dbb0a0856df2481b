//! Base-N text form of the combined hash.
//!
//! Every encoding draws its symbols from the front of the standard geohash
//! alphabet, so base16 uses `0123456789bcdefg` and base2 uses `01`.

use crate::error::{GeohashError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The standard geohash alphabet (no `a`, `i`, `l`, `o`).
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

const INVALID_SYMBOL: u8 = u8::MAX;

/// Inverse of [`ALPHABET`] indexed by ASCII byte.
static SYMBOL_VALUES: Lazy<[u8; 128]> = Lazy::new(|| {
    let mut table = [INVALID_SYMBOL; 128];
    for (value, &symbol) in ALPHABET.iter().enumerate() {
        table[symbol as usize] = value as u8;
    }
    table
});

/// Symbol width of the text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// 1 bit per character
    Base2,
    /// 2 bits per character
    Base4,
    /// 3 bits per character
    Base8,
    /// 4 bits per character
    Base16,
    /// 5 bits per character, the standard geohash text form
    #[default]
    Base32,
}

impl Encoding {
    pub const ALL: [Encoding; 5] = [
        Encoding::Base2,
        Encoding::Base4,
        Encoding::Base8,
        Encoding::Base16,
        Encoding::Base32,
    ];

    /// Bits carried by one character.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Encoding::Base2 => 1,
            Encoding::Base4 => 2,
            Encoding::Base8 => 3,
            Encoding::Base16 => 4,
            Encoding::Base32 => 5,
        }
    }

    /// Number of distinct symbols.
    #[inline]
    pub const fn radix(self) -> u32 {
        1 << self.bits()
    }

    /// Longest text that fits in the 64-bit combined hash.
    #[inline]
    pub const fn max_precision(self) -> usize {
        (64 / self.bits()) as usize
    }

    /// The symbols used by this encoding, in value order.
    pub fn symbols(self) -> &'static str {
        let symbols = &ALPHABET[..self.radix() as usize];
        // ALPHABET is ASCII.
        std::str::from_utf8(symbols).unwrap_or_default()
    }

    /// Total significant bits for a precision, failing if it is zero or
    /// does not fit in 64 bits.
    pub fn total_bits(self, precision: usize) -> Result<u32> {
        if precision == 0 {
            return Err(GeohashError::ZeroPrecision);
        }
        if precision > self.max_precision() {
            return Err(GeohashError::PrecisionOverflow {
                precision,
                encoding: self,
            });
        }
        Ok(precision as u32 * self.bits())
    }

    #[inline]
    fn symbol_mask(self) -> u64 {
        (1u64 << self.bits()) - 1
    }

    /// Value of a symbol in this encoding, if it belongs to it.
    #[inline]
    pub fn symbol_value(self, symbol: char) -> Option<u8> {
        if !symbol.is_ascii() {
            return None;
        }
        let value = SYMBOL_VALUES[symbol as usize];
        (u32::from(value) < self.radix()).then_some(value)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "base{}", self.radix())
    }
}

/// Render the top `precision * width` bits of `hash`, most significant first.
///
/// `precision` must already be validated with [`Encoding::total_bits`].
pub fn encode_bits(hash: u64, precision: usize, encoding: Encoding) -> String {
    let width = encoding.bits();
    let mask = encoding.symbol_mask();
    (1..=precision as u32)
        .map(|i| {
            let shift = 64 - width * i;
            ALPHABET[((hash >> shift) & mask) as usize] as char
        })
        .collect()
}

/// Parse text into a left-aligned 64-bit hash, returning it with the
/// precision (character count) it carried. Unused low bits are zero.
pub fn decode_bits(text: &str, encoding: Encoding) -> Result<(u64, usize)> {
    if text.is_empty() {
        return Err(GeohashError::EmptyHash);
    }

    let precision = text.chars().count();
    let total = encoding.total_bits(precision)?;
    let width = encoding.bits();

    let mut hash = 0u64;
    for (position, character) in text.chars().enumerate() {
        let value = encoding
            .symbol_value(character)
            .ok_or(GeohashError::InvalidCharacter {
                character,
                position,
                encoding,
            })?;
        hash = (hash << width) | u64::from(value);
    }

    Ok((hash << (64 - total), precision))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_widths() {
        let widths: Vec<u32> = Encoding::ALL.iter().map(|e| e.bits()).collect();
        assert_eq!(widths, vec![1, 2, 3, 4, 5]);
        assert_eq!(Encoding::Base32.max_precision(), 12);
        assert_eq!(Encoding::Base16.max_precision(), 16);
        assert_eq!(Encoding::Base8.max_precision(), 21);
        assert_eq!(Encoding::Base2.max_precision(), 64);
        assert_eq!(Encoding::default(), Encoding::Base32);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Encoding::Base2.symbols(), "01");
        assert_eq!(Encoding::Base16.symbols(), "0123456789bcdefg");
        assert_eq!(Encoding::Base32.symbols(), "0123456789bcdefghjkmnpqrstuvwxyz");
    }

    #[test]
    fn test_total_bits_limits() {
        assert_eq!(Encoding::Base32.total_bits(12), Ok(60));
        assert_eq!(Encoding::Base2.total_bits(64), Ok(64));
        assert_eq!(
            Encoding::Base32.total_bits(13),
            Err(GeohashError::PrecisionOverflow {
                precision: 13,
                encoding: Encoding::Base32
            })
        );
        assert_eq!(Encoding::Base8.total_bits(0), Err(GeohashError::ZeroPrecision));
    }

    #[test]
    fn test_encode_reads_from_most_significant_bits() {
        assert_eq!(encode_bits(0, 12, Encoding::Base32), "000000000000");
        assert_eq!(encode_bits(u64::MAX, 12, Encoding::Base32), "zzzzzzzzzzzz");
        assert_eq!(encode_bits(u64::MAX, 16, Encoding::Base16), "gggggggggggggggg");
        assert_eq!(encode_bits(1 << 63, 4, Encoding::Base2), "1000");
        assert_eq!(encode_bits(0xc000_0000_0000_0000, 1, Encoding::Base32), "s");
    }

    #[test]
    fn test_decode_left_aligns() {
        assert_eq!(decode_bits("s", Encoding::Base32), Ok((0xc000_0000_0000_0000, 1)));
        assert_eq!(decode_bits("1", Encoding::Base2), Ok((1 << 63, 1)));
        let full = "1".repeat(64);
        assert_eq!(decode_bits(&full, Encoding::Base2), Ok((u64::MAX, 64)));
    }

    #[test]
    fn test_decode_rejects_foreign_symbols() {
        assert_eq!(
            decode_bits("xn7a", Encoding::Base32),
            Err(GeohashError::InvalidCharacter {
                character: 'a',
                position: 3,
                encoding: Encoding::Base32
            })
        );
        // 'h' is the 17th symbol, outside base16
        assert!(matches!(
            decode_bits("0h", Encoding::Base16),
            Err(GeohashError::InvalidCharacter { character: 'h', position: 1, .. })
        ));
        assert!(matches!(
            decode_bits("2", Encoding::Base2),
            Err(GeohashError::InvalidCharacter { .. })
        ));
        assert!(matches!(
            decode_bits("ü", Encoding::Base32),
            Err(GeohashError::InvalidCharacter { character: 'ü', .. })
        ));
        assert_eq!(decode_bits("", Encoding::Base32), Err(GeohashError::EmptyHash));
    }

    #[test]
    fn test_decode_rejects_overlong_text() {
        assert!(matches!(
            decode_bits("0000000000000", Encoding::Base32),
            Err(GeohashError::PrecisionOverflow { precision: 13, .. })
        ));
    }

    #[test]
    fn test_decode_then_encode_is_identity() {
        for encoding in Encoding::ALL {
            let text: String = encoding
                .symbols()
                .chars()
                .rev()
                .cycle()
                .take(encoding.max_precision())
                .collect();
            let (hash, precision) = decode_bits(&text, encoding).unwrap();
            assert_eq!(encode_bits(hash, precision, encoding), text);
        }
    }

    #[test]
    fn test_encoding_serde_names() {
        assert_eq!(serde_json::to_string(&Encoding::Base16).unwrap(), "\"base16\"");
        let parsed: Encoding = serde_json::from_str("\"base4\"").unwrap();
        assert_eq!(parsed, Encoding::Base4);
        assert_eq!(Encoding::Base8.to_string(), "base8");
    }
}

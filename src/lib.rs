//! Geohash codec with selectable symbol width and integer neighbor derivation.
//!
//! A coordinate is quantized onto two 32-bit lattices, interleaved into a
//! 64-bit hash and rendered with 1 to 5 bits per character. Neighboring
//! cells are computed on the lattice directly, without re-encoding.
//!
//! ```rust
//! use flexgeohash::{Coordinate, Direction, Encoding};
//!
//! let tokyo = Coordinate::new(35.681, 139.767);
//! let hash = flexgeohash::encode(&tokyo, 7, Encoding::Base32)?;
//! assert_eq!(hash, "xn76urx");
//!
//! let region = flexgeohash::decode(&hash, Encoding::Base32)?;
//! assert!(region.contains(&tokyo));
//!
//! let geohash: flexgeohash::Geohash = hash.parse()?;
//! assert_eq!(flexgeohash::neighbor(&geohash, Direction::North).hash(), "xn76urz");
//! # Ok::<(), flexgeohash::GeohashError>(())
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod geohash;
pub mod neighbor;
pub mod validation;

pub use codec::{ALPHABET, Axis, Encoding};
pub use config::{CodecConfig, DEFAULT_PRECISION};
pub use error::{GeohashError, Result};
pub use geohash::Geohash;
pub use neighbor::{Direction, Neighbors};

pub use flexgeohash_types::{Coordinate, LatLng, Region};

pub use geo::{Point, Rect};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Encode a coordinate as `precision` characters of `encoding`.
pub fn encode(coordinate: &impl LatLng, precision: usize, encoding: Encoding) -> Result<String> {
    Geohash::new(coordinate, precision, encoding).map(|g| g.hash())
}

/// Decode geohash text into the region it denotes.
pub fn decode(text: &str, encoding: Encoding) -> Result<Region> {
    Geohash::parse(text, encoding).map(|g| g.region())
}

pub fn neighbor(geohash: &Geohash, direction: Direction) -> Geohash {
    geohash.neighbor(direction)
}

pub fn neighbors(geohash: &Geohash) -> Neighbors {
    geohash.neighbors()
}

pub fn region(geohash: &Geohash) -> Region {
    geohash.region()
}

pub fn text(geohash: &Geohash) -> String {
    geohash.hash()
}

/// Common imports
pub mod prelude {

    pub use crate::{CodecConfig, Coordinate, Geohash, GeohashError, LatLng, Region, Result};

    pub use crate::{Direction, Encoding, Neighbors};

    pub use crate::{decode, encode};

    pub use geo::Point;
}

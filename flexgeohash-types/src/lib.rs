//! # flexgeohash-types
//!
//! Plain value types shared by the flexgeohash codec and its consumers:
//!
//! - **Coordinates**: `Coordinate` and the `LatLng` capability trait
//! - **Regions**: `Region`, the rectangular cell a geohash denotes
//!
//! All types are serializable with Serde and convert to and from the `geo`
//! crate's geometric primitives.
//!
//! ## Examples
//!
//! ```rust
//! use flexgeohash_types::coordinate::{Coordinate, LatLng};
//! use geo::Point;
//!
//! let tokyo = Coordinate::new(35.681, 139.767);
//! let point = Point::new(139.767, 35.681); // geo uses (x = lng, y = lat)
//! assert_eq!(tokyo.latitude(), point.latitude());
//! ```

pub mod coordinate;
pub mod region;

pub use coordinate::{Coordinate, LatLng};
pub use region::Region;

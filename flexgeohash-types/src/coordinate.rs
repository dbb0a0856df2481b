use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

/// Anything that carries a latitude and a longitude in degrees.
///
/// The codec only ever reads these two values, so map-framework or
/// database point types can be passed in directly once they implement it.
pub trait LatLng {
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;
}

/// A geographic coordinate in degrees.
///
/// Unlike `geo::Point`, fields are ordered latitude first, the order
/// geohash literature uses.
///
/// # Examples
///
/// ```
/// use flexgeohash_types::coordinate::{Coordinate, LatLng};
///
/// let tokyo_station = Coordinate::new(35.681, 139.767);
/// assert_eq!(tokyo_station.latitude(), 35.681);
/// assert_eq!(tokyo_station.longitude(), 139.767);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, `[-90, 90]`
    pub latitude: f64,
    /// Longitude in degrees, `[-180, 180]`
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Copy any `LatLng` implementor into a plain coordinate.
    pub fn from_lat_lng(value: &impl LatLng) -> Self {
        Self::new(value.latitude(), value.longitude())
    }

    /// Convert to a `geo::Point` (x = longitude, y = latitude).
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

impl LatLng for Coordinate {
    #[inline]
    fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl LatLng for Point<f64> {
    #[inline]
    fn latitude(&self) -> f64 {
        self.y()
    }

    #[inline]
    fn longitude(&self) -> f64 {
        self.x()
    }
}

impl LatLng for Coord<f64> {
    #[inline]
    fn latitude(&self) -> f64 {
        self.y
    }

    #[inline]
    fn longitude(&self) -> f64 {
        self.x
    }
}

/// `(latitude, longitude)` tuples.
impl LatLng for (f64, f64) {
    #[inline]
    fn latitude(&self) -> f64 {
        self.0
    }

    #[inline]
    fn longitude(&self) -> f64 {
        self.1
    }
}

impl<T: LatLng + ?Sized> LatLng for &T {
    #[inline]
    fn latitude(&self) -> f64 {
        (**self).latitude()
    }

    #[inline]
    fn longitude(&self) -> f64 {
        (**self).longitude()
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(point: Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(coordinate: Coordinate) -> Self {
        coordinate.to_point()
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(coordinate: Coordinate) -> Self {
        Coord {
            x: coordinate.longitude,
            y: coordinate.latitude,
        }
    }
}

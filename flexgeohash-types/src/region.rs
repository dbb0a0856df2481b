use crate::coordinate::{Coordinate, LatLng};
use geo::Rect;
use serde::{Deserialize, Serialize};

/// The rectangular area a geohash denotes.
///
/// `center` is the middle of the cell and `span` its full width on each
/// axis, both in degrees. Half of `span` is the error bound of a decoded
/// coordinate.
///
/// # Examples
///
/// ```
/// use flexgeohash_types::{Coordinate, Region};
///
/// let region = Region::new(Coordinate::new(22.5, 22.5), Coordinate::new(45.0, 45.0));
/// assert_eq!(region.south(), 0.0);
/// assert_eq!(region.east(), 45.0);
/// assert!(region.contains(&Coordinate::new(10.0, 40.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Center of the cell
    pub center: Coordinate,
    /// Full latitude/longitude extent of the cell
    pub span: Coordinate,
}

impl Region {
    pub const fn new(center: Coordinate, span: Coordinate) -> Self {
        Self { center, span }
    }

    /// Build a region from its south-west and north-east corners.
    pub fn from_bounds(south_west: Coordinate, north_east: Coordinate) -> Self {
        let span = Coordinate::new(
            north_east.latitude - south_west.latitude,
            north_east.longitude - south_west.longitude,
        );
        let center = Coordinate::new(
            south_west.latitude + span.latitude / 2.0,
            south_west.longitude + span.longitude / 2.0,
        );
        Self { center, span }
    }

    pub fn south(&self) -> f64 {
        self.center.latitude - self.span.latitude / 2.0
    }

    pub fn north(&self) -> f64 {
        self.center.latitude + self.span.latitude / 2.0
    }

    pub fn west(&self) -> f64 {
        self.center.longitude - self.span.longitude / 2.0
    }

    pub fn east(&self) -> f64 {
        self.center.longitude + self.span.longitude / 2.0
    }

    /// Half the span on each axis: the maximum distance, in degrees, between
    /// the center and any coordinate inside the region.
    pub fn half_span(&self) -> Coordinate {
        Coordinate::new(self.span.latitude / 2.0, self.span.longitude / 2.0)
    }

    /// Check whether a coordinate lies inside the region, edges included.
    pub fn contains(&self, coordinate: &impl LatLng) -> bool {
        let (lat, lng) = (coordinate.latitude(), coordinate.longitude());
        lat >= self.south() && lat <= self.north() && lng >= self.west() && lng <= self.east()
    }

    /// Convert to a `geo::Rect` (x = longitude, y = latitude).
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            geo::coord! { x: self.west(), y: self.south() },
            geo::coord! { x: self.east(), y: self.north() },
        )
    }
}

impl From<Region> for Rect<f64> {
    fn from(region: Region) -> Self {
        region.to_rect()
    }
}

impl From<Rect<f64>> for Region {
    fn from(rect: Rect<f64>) -> Self {
        Self::from_bounds(
            Coordinate::new(rect.min().y, rect.min().x),
            Coordinate::new(rect.max().y, rect.max().x),
        )
    }
}

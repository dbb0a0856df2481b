//! Validation for geographic coordinates.

use crate::codec::Axis;
use crate::error::{GeohashError, Result};
use flexgeohash_types::LatLng;

fn validate_axis(value: f64, axis: Axis) -> Result<()> {
    let r = axis.half_range();
    if !value.is_finite() || !(-r..=r).contains(&value) {
        return Err(GeohashError::CoordinateOutOfRange { axis, value });
    }
    Ok(())
}

/// Validates that a coordinate has a finite latitude in `[-90, 90]` and a
/// finite longitude in `[-180, 180]`.
///
/// # Examples
///
/// ```
/// use flexgeohash::validation::validate_coordinate;
/// use flexgeohash::Coordinate;
///
/// assert!(validate_coordinate(&Coordinate::new(35.681, 139.767)).is_ok());
/// assert!(validate_coordinate(&Coordinate::new(95.0, 0.0)).is_err());
/// assert!(validate_coordinate(&Coordinate::new(0.0, f64::NAN)).is_err());
/// ```
pub fn validate_coordinate(coordinate: &impl LatLng) -> Result<()> {
    validate_axis(coordinate.latitude(), Axis::Latitude)?;
    validate_axis(coordinate.longitude(), Axis::Longitude)
}

/// Validates multiple coordinates, returning the index of the first bad one
/// with its error.
pub fn validate_coordinates<C: LatLng>(
    coordinates: &[C],
) -> std::result::Result<(), (usize, GeohashError)> {
    for (idx, coordinate) in coordinates.iter().enumerate() {
        validate_coordinate(coordinate).map_err(|e| (idx, e))?;
    }
    Ok(())
}

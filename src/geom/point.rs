use geo::Coord;

use crate::error::InvalidCoordinate;

/// A validated geographic coordinate in double-precision degrees.
///
/// Latitude must lie in [-90, 90] and longitude in [-180, 180]; anything
/// else (including NaN and infinities) is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    latitude: f64,
    longitude: f64,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        if !latitude.is_finite()
            || !longitude.is_finite()
            || !(-90.0..=90.0).contains(&latitude)
            || !(-180.0..=180.0).contains(&longitude)
        {
            return Err(InvalidCoordinate { latitude, longitude });
        }
        Ok(Self { latitude, longitude })
    }

    #[inline] pub fn latitude(&self) -> f64 { self.latitude }

    #[inline] pub fn longitude(&self) -> f64 { self.longitude }

    /// Planar coordinate used by the geometry kernel: x = longitude,
    /// y = latitude.
    #[inline]
    pub(crate) fn coord(&self) -> Coord<f64> {
        Coord { x: self.longitude, y: self.latitude }
    }
}

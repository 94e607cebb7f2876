use thiserror::Error;

use crate::atlas::CountryCode;

/// A query coordinate outside the valid latitude/longitude range.
///
/// Out-of-range input is rejected, never silently normalized or wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("coordinate out of range: latitude {latitude}, longitude {longitude}")]
pub struct InvalidCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Structural defects detected while constructing boundary geometry.
///
/// Raised at model construction time; there is no silent repair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedGeometry {
    /// A ring needs at least four points, counting the closing point.
    #[error("ring has {count} points, need at least 4")]
    TooFewPoints { count: usize },

    /// The first and last points of a ring must be equal.
    #[error("ring is not closed")]
    OpenRing,

    /// A ring coordinate is NaN or infinite.
    #[error("ring contains a non-finite coordinate")]
    NonFiniteCoordinate,

    /// A country must own at least one boundary polygon.
    #[error("country has no boundary polygons")]
    NoBoundaries,
}

/// Defects detected while assembling the spatial index from a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Country codes must be unique across the dataset.
    #[error("duplicate country code {0}")]
    DuplicateCode(CountryCode),
}

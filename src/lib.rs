#![doc = "GeoResolve public API"]
mod atlas;
mod error;
mod geom;
mod index;

pub mod io;

#[doc(inline)]
pub use atlas::{Boundary, Country, CountryCode};

#[doc(inline)]
pub use error::{BuildError, InvalidCoordinate, MalformedGeometry};

#[doc(inline)]
pub use geom::{
    is_counter_clockwise, polygon_position, ring_bounds, ring_position, signed_area, Point,
    Position,
};

#[doc(inline)]
pub use index::{SharedIndex, SpatialIndex};

/// Build an immutable spatial index over a finalized set of countries.
pub fn build_index(countries: Vec<Country>) -> Result<SpatialIndex, BuildError> {
    SpatialIndex::build(countries)
}

/// Resolve a coordinate to the country containing it, if any.
pub fn locate(
    index: &SpatialIndex,
    latitude: f64,
    longitude: f64,
) -> Result<Option<&Country>, InvalidCoordinate> {
    index.locate(latitude, longitude)
}

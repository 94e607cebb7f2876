mod entry;
mod query;
mod shared;

use ahash::AHashMap;
use rstar::{RTree, AABB};

use crate::atlas::{Boundary, Country, CountryCode};
use crate::error::{BuildError, InvalidCoordinate};
use crate::geom::Point;
use entry::BoundsEntry;

pub use shared::SharedIndex;

/// An immutable spatial index over a finalized set of countries.
///
/// Candidate retrieval goes through an R-tree of polygon bounding boxes;
/// exact containment is decided by the geometry kernel. The index is never
/// mutated after [`build`](Self::build), so any number of threads may query
/// it concurrently without locking. Rebuilds construct a new index and swap
/// it in through [`SharedIndex`].
#[derive(Debug)]
pub struct SpatialIndex {
    countries: Vec<Country>,
    by_code: AHashMap<CountryCode, u32>,
    rtree: RTree<BoundsEntry>,
}

impl SpatialIndex {
    /// Build the index from a finalized dataset. Fails fast on a duplicate
    /// country code; geometry is already validated by the model constructors.
    pub fn build(countries: Vec<Country>) -> Result<Self, BuildError> {
        let mut by_code = AHashMap::with_capacity(countries.len());
        for (i, country) in countries.iter().enumerate() {
            if by_code.insert(country.code().clone(), i as u32).is_some() {
                return Err(BuildError::DuplicateCode(country.code().clone()));
            }
        }

        let entries = countries
            .iter()
            .enumerate()
            .flat_map(|(ci, country)| {
                country.boundaries().iter().enumerate().map(move |(pi, boundary)| {
                    BoundsEntry::new(ci as u32, pi as u32, *boundary.bounds())
                })
            })
            .collect();

        Ok(Self { by_code, rtree: RTree::bulk_load(entries), countries })
    }

    /// Get the number of countries in the index.
    #[inline] pub fn len(&self) -> usize { self.countries.len() }

    /// Check whether the index holds no countries.
    #[inline] pub fn is_empty(&self) -> bool { self.countries.is_empty() }

    /// Get the indexed countries, in dataset order.
    #[inline] pub fn countries(&self) -> &[Country] { &self.countries }

    /// Look up a country by its code.
    pub fn country(&self, code: &str) -> Option<&Country> {
        let code = code.trim().to_ascii_uppercase();
        self.by_code.get(code.as_str()).map(|&i| &self.countries[i as usize])
    }

    /// Candidate (country, polygon) pairs whose bounding box covers the
    /// point. A superset of true containment: false positives are expected
    /// and resolved by exact tests, false negatives are a correctness bug.
    pub fn candidates_for(&self, point: Point) -> impl Iterator<Item = (&Country, &Boundary)> {
        let coord = point.coord();
        let envelope = AABB::from_corners([coord.x, coord.y], [coord.x, coord.y]);
        self.rtree.locate_in_envelope_intersecting(&envelope).map(move |entry| {
            let country = &self.countries[entry.country()];
            (country, &country.boundaries()[entry.polygon()])
        })
    }

    /// Resolve a coordinate to the country containing it. `Ok(None)` means
    /// no country contains the point (open ocean, unmapped territory); that
    /// is a first-class outcome, not an error.
    pub fn locate(&self, latitude: f64, longitude: f64) -> Result<Option<&Country>, InvalidCoordinate> {
        let point = Point::new(latitude, longitude)?;
        Ok(query::resolve(self, point))
    }
}

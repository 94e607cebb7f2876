use geo::Rect;
use rstar::{RTreeObject, AABB};

/// A bounding box in the R-tree, tied to one polygon of one country.
#[derive(Debug, Clone)]
pub(super) struct BoundsEntry {
    country: u32, // Index into SpatialIndex::countries
    polygon: u32, // Index into that country's boundaries
    bounds: Rect<f64>,
}

impl BoundsEntry {
    pub(super) fn new(country: u32, polygon: u32, bounds: Rect<f64>) -> Self {
        Self { country, polygon, bounds }
    }

    /// Get the index of the owning country.
    #[inline] pub(super) fn country(&self) -> usize { self.country as usize }

    /// Get the index of the polygon within the owning country.
    #[inline] pub(super) fn polygon(&self) -> usize { self.polygon as usize }
}

impl RTreeObject for BoundsEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.bounds.min().into(), self.bounds.max().into())
    }
}

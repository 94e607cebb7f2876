use smallvec::SmallVec;

use crate::atlas::Country;
use crate::geom::{Point, Position};
use crate::index::SpatialIndex;

/// Resolve a validated point to the country containing it, if any.
///
/// Candidates come pre-filtered by bounding box; each is classified exactly.
/// When more than one polygon claims the point (duplicate data, or a point
/// exactly on a shared border), a strictly interior claim beats a boundary
/// claim, and remaining ties go to the smaller country code.
pub(super) fn resolve(index: &SpatialIndex, point: Point) -> Option<&Country> {
    let coord = point.coord();

    let mut claims: SmallVec<[(&Country, Position); 4]> = SmallVec::new();
    for (country, boundary) in index.candidates_for(point) {
        let position = boundary.position(coord);
        if position != Position::Exterior {
            claims.push((country, position));
        }
    }

    claims
        .into_iter()
        .min_by(|a, b| rank(a.1).cmp(&rank(b.1)).then_with(|| a.0.code().cmp(b.0.code())))
        .map(|(country, _)| country)
}

fn rank(position: Position) -> u8 {
    match position {
        Position::Interior => 0,
        Position::Boundary => 1,
        Position::Exterior => 2,
    }
}

use geo::{Coord, LineString, Polygon, Rect};

use crate::error::MalformedGeometry;
use crate::geom::{self, Position};

/// One validated polygon of a country's boundary, with its bounding box
/// cached at construction.
///
/// The box is computed from the exterior ring alone; holes can never extend
/// it. Rebuilding the polygon means constructing a new `Boundary`.
#[derive(Debug, Clone)]
pub struct Boundary {
    polygon: Polygon<f64>,
    bounds: Rect<f64>,
}

impl Boundary {
    /// Validate every ring (closure, minimum vertex count, finite
    /// coordinates) and cache the exterior-ring bounding box.
    pub fn new(polygon: Polygon<f64>) -> Result<Self, MalformedGeometry> {
        geom::validate_ring(polygon.exterior())?;
        for hole in polygon.interiors() {
            geom::validate_ring(hole)?;
        }
        let bounds = geom::ring_bounds(polygon.exterior())
            .expect("validated ring has at least four points");
        Ok(Self { polygon, bounds })
    }

    /// Build a boundary from (longitude, latitude) tuples, exterior ring
    /// first. Rings must arrive closed; nothing is repaired here.
    pub fn from_rings(
        exterior: &[(f64, f64)],
        holes: &[Vec<(f64, f64)>],
    ) -> Result<Self, MalformedGeometry> {
        fn line(points: &[(f64, f64)]) -> LineString<f64> {
            LineString::from(points.iter().map(|&(x, y)| Coord { x, y }).collect::<Vec<_>>())
        }
        Self::new(Polygon::new(line(exterior), holes.iter().map(|h| line(h)).collect()))
    }

    #[inline] pub fn polygon(&self) -> &Polygon<f64> { &self.polygon }

    /// Get the cached axis-aligned bounding box.
    #[inline] pub fn bounds(&self) -> &Rect<f64> { &self.bounds }

    /// Three-way classification of a planar coordinate against this polygon.
    #[inline]
    pub fn position(&self, coord: Coord<f64>) -> Position {
        geom::polygon_position(coord, &self.polygon)
    }

    /// Boundary-inclusive containment: on-edge points count as inside.
    #[inline]
    pub fn contains(&self, coord: Coord<f64>) -> bool {
        self.position(coord) != Position::Exterior
    }
}

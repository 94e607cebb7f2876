use geo::{Coord, LineString, Polygon, Rect};

use crate::error::MalformedGeometry;

/// Tolerance, in degrees, for classifying a point as on a ring boundary.
/// Absorbs floating-point jitter at shared borders.
pub(crate) const EPSILON: f64 = 1e-9;

/// Three-way classification of a point against a ring or polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Strictly inside.
    Interior,
    /// Within `EPSILON` degrees of an edge or vertex; counts as contained.
    Boundary,
    /// Strictly outside.
    Exterior,
}

/// Classify `point` against a closed ring by ray casting: count edge
/// crossings of a horizontal ray from the point toward +infinity longitude;
/// an odd count means inside. Any edge within `EPSILON` of the point
/// short-circuits to `Boundary`, so vertices and edge interiors classify
/// identically. The result does not depend on which vertex the ring starts at.
pub fn ring_position(point: Coord<f64>, ring: &LineString<f64>) -> Position {
    let mut inside = false;
    for edge in ring.0.windows(2) {
        let (a, b) = (edge[0], edge[1]);
        if distance_sq_to_segment(point, a, b) <= EPSILON * EPSILON {
            return Position::Boundary;
        }
        // Half-open straddle test, so a vertex on the ray is counted once.
        if (a.y > point.y) != (b.y > point.y) {
            let cross_x = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if cross_x > point.x {
                inside = !inside;
            }
        }
    }
    if inside { Position::Interior } else { Position::Exterior }
}

/// Classify `point` against a polygon: inside the exterior ring and not
/// strictly inside any hole. A point on a hole's boundary still counts as
/// contained.
pub fn polygon_position(point: Coord<f64>, polygon: &Polygon<f64>) -> Position {
    match ring_position(point, polygon.exterior()) {
        Position::Exterior => Position::Exterior,
        Position::Boundary => Position::Boundary,
        Position::Interior => {
            for hole in polygon.interiors() {
                match ring_position(point, hole) {
                    Position::Interior => return Position::Exterior,
                    Position::Boundary => return Position::Boundary,
                    Position::Exterior => {}
                }
            }
            Position::Interior
        }
    }
}

/// Get the signed area of a closed ring (shoelace), positive for
/// counter-clockwise winding.
pub fn signed_area(ring: &LineString<f64>) -> f64 {
    let mut area = 0.0;
    for edge in ring.0.windows(2) {
        area += edge[0].x * edge[1].y - edge[1].x * edge[0].y;
    }
    area / 2.0
}

/// Ring orientation, derived from the signed area.
pub fn is_counter_clockwise(ring: &LineString<f64>) -> bool {
    signed_area(ring) > 0.0
}

/// Get the axis-aligned bounding box of a ring, or `None` for an empty ring.
pub fn ring_bounds(ring: &LineString<f64>) -> Option<Rect<f64>> {
    let mut coords = ring.0.iter();
    let first = *coords.next()?;
    let (min, max) = coords.fold((first, first), |(mut lo, mut hi), c| {
        lo.x = lo.x.min(c.x);
        lo.y = lo.y.min(c.y);
        hi.x = hi.x.max(c.x);
        hi.y = hi.y.max(c.y);
        (lo, hi)
    });
    Some(Rect::new(min, max))
}

/// Structural validation: at least four points, closed, all coordinates
/// finite. Self-intersection is a documented precondition, not checked here.
pub(crate) fn validate_ring(ring: &LineString<f64>) -> Result<(), MalformedGeometry> {
    let coords = &ring.0;
    if coords.len() < 4 {
        return Err(MalformedGeometry::TooFewPoints { count: coords.len() });
    }
    if coords.iter().any(|c| !c.x.is_finite() || !c.y.is_finite()) {
        return Err(MalformedGeometry::NonFiniteCoordinate);
    }
    if coords[0] != coords[coords.len() - 1] {
        return Err(MalformedGeometry::OpenRing);
    }
    Ok(())
}

/// Squared distance from `point` to the segment `a`-`b`.
fn distance_sq_to_segment(point: Coord<f64>, a: Coord<f64>, b: Coord<f64>) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((point.x - a.x) * dx + (point.y - a.y) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let (ex, ey) = (a.x + t * dx - point.x, a.y + t * dy - point.y);
    ex * ex + ey * ey
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(points: &[(f64, f64)]) -> LineString<f64> {
        LineString::from(points.iter().map(|&(x, y)| Coord { x, y }).collect::<Vec<_>>())
    }

    fn unit_square() -> LineString<f64> {
        ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)])
    }

    #[test]
    fn ray_cast_inside_and_outside() {
        let square = unit_square();
        assert_eq!(ring_position(Coord { x: 0.5, y: 0.5 }, &square), Position::Interior);
        assert_eq!(ring_position(Coord { x: 2.0, y: 2.0 }, &square), Position::Exterior);
        assert_eq!(ring_position(Coord { x: -0.5, y: 0.5 }, &square), Position::Exterior);
        // Outside but level with the square: the ray crosses two edges.
        assert_eq!(ring_position(Coord { x: -1.0, y: 0.5 }, &square), Position::Exterior);
    }

    #[test]
    fn vertex_and_edge_classify_as_boundary() {
        let square = unit_square();
        assert_eq!(ring_position(Coord { x: 0.0, y: 0.0 }, &square), Position::Boundary);
        assert_eq!(ring_position(Coord { x: 0.5, y: 0.0 }, &square), Position::Boundary);
        assert_eq!(ring_position(Coord { x: 1.0, y: 0.5 }, &square), Position::Boundary);
    }

    #[test]
    fn near_edge_within_epsilon_is_boundary() {
        let square = unit_square();
        assert_eq!(
            ring_position(Coord { x: 0.5, y: EPSILON / 2.0 }, &square),
            Position::Boundary
        );
        assert_eq!(
            ring_position(Coord { x: 0.5, y: EPSILON * 10.0 }, &square),
            Position::Interior
        );
    }

    #[test]
    fn position_invariant_under_ring_rotation() {
        let points = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        let probes = [
            Coord { x: 0.5, y: 0.5 },
            Coord { x: 2.0, y: 0.5 },
            Coord { x: 1.0, y: 1.0 },
            Coord { x: 0.5, y: 0.0 },
        ];
        for start in 0..points.len() {
            let mut rotated: Vec<(f64, f64)> = (0..points.len())
                .map(|i| points[(start + i) % points.len()])
                .collect();
            rotated.push(rotated[0]);
            let rotated = ring(&rotated);
            for probe in probes {
                assert_eq!(
                    ring_position(probe, &rotated),
                    ring_position(probe, &unit_square()),
                    "probe {probe:?} diverged for rotation {start}"
                );
            }
        }
    }

    #[test]
    fn hole_excludes_interior_but_not_its_boundary() {
        let outer = ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]);
        let hole = ring(&[(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0), (4.0, 4.0)]);
        let polygon = Polygon::new(outer, vec![hole]);

        assert_eq!(polygon_position(Coord { x: 5.0, y: 5.0 }, &polygon), Position::Exterior);
        assert_eq!(polygon_position(Coord { x: 1.0, y: 1.0 }, &polygon), Position::Interior);
        assert_eq!(polygon_position(Coord { x: 5.0, y: 4.0 }, &polygon), Position::Boundary);
        assert_eq!(polygon_position(Coord { x: 0.0, y: 5.0 }, &polygon), Position::Boundary);
    }

    #[test]
    fn signed_area_tracks_winding() {
        let ccw = unit_square();
        assert!((signed_area(&ccw) - 1.0).abs() < 1e-12);
        assert!(is_counter_clockwise(&ccw));

        let cw = ring(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)]);
        assert!((signed_area(&cw) + 1.0).abs() < 1e-12);
        assert!(!is_counter_clockwise(&cw));
    }

    #[test]
    fn bounds_cover_all_vertices() {
        let triangle = ring(&[(-3.0, 1.0), (2.0, -5.0), (0.0, 4.0), (-3.0, 1.0)]);
        let bounds = ring_bounds(&triangle).unwrap();
        assert_eq!(bounds.min(), Coord { x: -3.0, y: -5.0 });
        assert_eq!(bounds.max(), Coord { x: 2.0, y: 4.0 });
        assert!(ring_bounds(&ring(&[])).is_none());
    }

    #[test]
    fn validation_rejects_degenerate_rings() {
        let open = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert_eq!(validate_ring(&open), Err(MalformedGeometry::OpenRing));

        let short = ring(&[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)]);
        assert_eq!(validate_ring(&short), Err(MalformedGeometry::TooFewPoints { count: 3 }));

        let nan = ring(&[(0.0, 0.0), (1.0, f64::NAN), (1.0, 1.0), (0.0, 0.0)]);
        assert_eq!(validate_ring(&nan), Err(MalformedGeometry::NonFiniteCoordinate));

        assert_eq!(validate_ring(&unit_square()), Ok(()));
    }
}

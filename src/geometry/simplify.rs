use geo::{LineString, Simplify};

use super::point::LngLat;
use super::ring::Ring;

/// Simplify a border ring with Douglas-Peucker.
///
/// Country borders ship with thousands of vertices; the guard re-checks
/// containment on every map move event, so a coarse ring keeps that cheap.
/// Epsilon is in degrees. Falls back to the original ring if simplification
/// would leave fewer than 4 vertices.
pub fn simplify_ring(ring: &Ring, epsilon: f64) -> Ring {
    if ring.len() < 5 {
        return ring.clone();
    }

    let line: LineString<f64> = ring
        .vertices()
        .iter()
        .map(|p| geo::coord! { x: p.lng, y: p.lat })
        .collect();

    let simplified = line.simplify(&epsilon);

    if simplified.0.len() < 4 {
        return ring.clone();
    }

    Ring::new(
        simplified
            .0
            .into_iter()
            .map(|c| LngLat::new(c.x, c.y))
            .collect(),
    )
}

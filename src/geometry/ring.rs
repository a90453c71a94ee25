use serde::{Deserialize, Serialize};

use super::point::{Bounds, LngLat};

/// A closed polygon boundary as an ordered vertex list.
///
/// The first and last vertex may coincide (GeoJSON closes rings explicitly);
/// containment treats the list as implicitly closed either way, so a
/// duplicated closing vertex only adds one degenerate edge that never
/// crosses the test ray.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ring(pub Vec<LngLat>);

impl Ring {
    pub fn new(vertices: Vec<LngLat>) -> Self {
        Self(vertices)
    }

    pub fn vertices(&self) -> &[LngLat] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.0)
    }

    /// Even-odd point-in-polygon test (ray casting).
    ///
    /// Casts a horizontal ray from `p` toward +infinity along the longitude
    /// axis and counts edge crossings; an odd count means inside. An edge
    /// qualifies only when exactly one endpoint lies above the ray's
    /// latitude, which also rules out horizontal edges before the
    /// x-intercept division.
    ///
    /// Points exactly on an edge or vertex get an unspecified
    /// classification; callers must not depend on boundary-exact behavior.
    /// Rings with fewer than 3 vertices classify every point as outside.
    pub fn contains(&self, p: LngLat) -> bool {
        let v = &self.0;
        if v.len() < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = v.len() - 1;
        for i in 0..v.len() {
            let (xi, yi) = (v[i].lng, v[i].lat);
            let (xj, yj) = (v[j].lng, v[j].lat);

            if (yi > p.lat) != (yj > p.lat) {
                let x_intercept = (xj - xi) * (p.lat - yi) / (yj - yi) + xi;
                if p.lng < x_intercept {
                    inside = !inside;
                }
            }
            j = i;
        }

        inside
    }
}

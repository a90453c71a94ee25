use serde::Deserialize;
use thiserror::Error;

use crate::geometry::{Bounds, LngLat, Ring, simplify_ring};

/// Embedded default region: a simplified national border of Uzbekistan.
const UZBEKISTAN_GEOJSON: &str = include_str!("../../data/uzbekistan.json");

#[derive(Debug, Error)]
pub enum RegionError {
    #[error("failed to parse border GeoJSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported geometry type: {0} (expected Polygon)")]
    UnsupportedGeometry(String),
    #[error("polygon has no rings")]
    EmptyPolygon,
    #[error("position has fewer than 2 coordinates")]
    InvalidPosition,
    #[error("border ring needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
}

/// The allowed map region: a validated border ring plus its bounding box.
///
/// Immutable reference data, loaded once at startup. The bounding box is a
/// fast-reject wrapper around the ray-casting test so per-move checks stay
/// cheap even against a detailed border.
#[derive(Debug, Clone)]
pub struct Region {
    ring: Ring,
    bounds: Bounds,
}

impl Region {
    /// Validate a ring as a usable region boundary
    pub fn new(ring: Ring) -> Result<Self, RegionError> {
        if ring.len() < 3 {
            return Err(RegionError::TooFewVertices(ring.len()));
        }
        // len >= 3 guarantees bounds exist
        let bounds = ring.bounds().ok_or(RegionError::EmptyPolygon)?;
        Ok(Self { ring, bounds })
    }

    /// Load a region from a GeoJSON `Polygon`, or a `Feature` wrapping one.
    ///
    /// Only the outer ring is used; holes in the border polygon are not
    /// meaningful for viewport fencing.
    pub fn from_geojson(input: &str) -> Result<Self, RegionError> {
        let doc: GeoJson = serde_json::from_str(input)?;
        let geometry = match doc {
            GeoJson::Feature { geometry } => geometry,
            GeoJson::Geometry(g) => g,
        };

        if geometry.type_ != "Polygon" {
            return Err(RegionError::UnsupportedGeometry(geometry.type_));
        }
        let mut rings: Vec<Vec<Vec<f64>>> = serde_json::from_value(geometry.coordinates)?;

        if rings.is_empty() {
            return Err(RegionError::EmptyPolygon);
        }
        let outer = rings.swap_remove(0);

        let mut vertices = Vec::with_capacity(outer.len());
        for position in outer {
            if position.len() < 2 {
                return Err(RegionError::InvalidPosition);
            }
            vertices.push(LngLat::new(position[0], position[1]));
        }

        Self::new(Ring::new(vertices))
    }

    /// The default region shipped with the app
    pub fn uzbekistan() -> Self {
        Self::from_geojson(UZBEKISTAN_GEOJSON).expect("embedded border data is valid")
    }

    /// Classify a point against the border
    pub fn contains(&self, p: LngLat) -> bool {
        self.bounds.contains(p) && self.ring.contains(p)
    }

    /// A coarser copy of this region for cheaper per-move checks
    pub fn simplified(&self, epsilon: f64) -> Self {
        let ring = simplify_ring(&self.ring, epsilon);
        // Simplification keeps >= 4 vertices, so re-validation cannot fail
        Self::new(ring).expect("simplified ring keeps enough vertices")
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GeoJson {
    Feature { geometry: Geometry },
    Geometry(Geometry),
}

#[derive(Debug, Deserialize)]
struct Geometry {
    #[serde(rename = "type")]
    type_: String,
    #[serde(default)]
    coordinates: serde_json::Value,
}

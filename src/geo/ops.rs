//! Geometry capability trait and its production implementation.

use super::AlbersEqualArea;
use crate::error::Result;
use geo::{Area, BooleanOps, MapCoords};
use geo_types::MultiPolygon;

/// The three geometry capabilities the area filter depends on.
///
/// Kept deliberately narrow: the filter's group-then-threshold logic does
/// not care how projection, dissolve, or area measurement actually work,
/// and tests substitute an implementation over fake geometries.
pub trait GeometryOps {
    /// Reprojects a geometry into the equal-area measurement frame.
    fn project(&self, geometry: &MultiPolygon<f64>) -> Result<MultiPolygon<f64>>;

    /// Unions two (projected) geometries into one.
    fn union(&self, a: &MultiPolygon<f64>, b: &MultiPolygon<f64>) -> Result<MultiPolygon<f64>>;

    /// Planar area of a (projected) geometry, in square meters.
    fn area(&self, geometry: &MultiPolygon<f64>) -> f64;
}

/// Production implementation: Albers equal-area projection plus the `geo`
/// crate's boolean union and shoelace area.
#[derive(Debug, Default)]
pub struct AlbersOps {
    projection: AlbersEqualArea,
}

impl AlbersOps {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GeometryOps for AlbersOps {
    fn project(&self, geometry: &MultiPolygon<f64>) -> Result<MultiPolygon<f64>> {
        geometry.try_map_coords(|coord| self.projection.project(coord))
    }

    fn union(&self, a: &MultiPolygon<f64>, b: &MultiPolygon<f64>) -> Result<MultiPolygon<f64>> {
        Ok(a.union(b))
    }

    fn area(&self, geometry: &MultiPolygon<f64>) -> f64 {
        geometry.unsigned_area()
    }
}

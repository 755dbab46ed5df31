//! Equal-area map projection for area measurement.
//!
//! Area comparisons are only meaningful after projecting out of geographic
//! (lon/lat) coordinates, so the filter reprojects every geometry into a
//! single canonical Albers equal-area conic frame before measuring.

use crate::error::{Error, Result};
use geo_types::Coord;

/// Mean authalic Earth radius in meters (GRS80).
const EARTH_RADIUS_M: f64 = 6_371_007.181;

/// Albers equal-area conic projection (spherical form).
///
/// On the sphere, Albers is exactly equal-area: a polygon's planar area in
/// the projected frame equals its area on the globe in square meters, which
/// is what the small-zone threshold compares against.
#[derive(Debug, Clone)]
pub struct AlbersEqualArea {
    /// First standard parallel, degrees.
    pub lat_1: f64,
    /// Second standard parallel, degrees.
    pub lat_2: f64,
    /// Latitude of origin, degrees.
    pub lat_0: f64,
    /// Central meridian, degrees.
    pub lon_0: f64,
}

impl Default for AlbersEqualArea {
    fn default() -> Self {
        Self::conus()
    }
}

impl AlbersEqualArea {
    /// The canonical projection used for zone filtering: standard parallels
    /// 29.5 and 45.5, origin 37.5N 96W (the usual CONUS Albers setup).
    pub fn conus() -> Self {
        Self {
            lat_1: 29.5,
            lat_2: 45.5,
            lat_0: 37.5,
            lon_0: -96.0,
        }
    }

    /// Projects a geographic (lon, lat) coordinate to planar meters.
    ///
    /// Fails with a geometry error if the coordinate is outside the lon/lat
    /// range, which means the source data is not in a geographic reference
    /// frame this projection can accept.
    pub fn project(&self, coord: Coord<f64>) -> Result<Coord<f64>> {
        let lon = coord.x;
        let lat = coord.y;

        if !(-180.0..=180.0).contains(&lon) || !(-90.0..=90.0).contains(&lat) {
            return Err(Error::Geometry(format!(
                "coordinate ({lon}, {lat}) is not geographic lon/lat; \
                 cannot reproject to equal-area frame"
            )));
        }

        let phi_1 = self.lat_1.to_radians();
        let phi_2 = self.lat_2.to_radians();
        let phi_0 = self.lat_0.to_radians();
        let phi = lat.to_radians();
        let lambda = (lon - self.lon_0).to_radians();

        // Snyder, Map Projections: A Working Manual, eqs. 14-3..14-6.
        let n = (phi_1.sin() + phi_2.sin()) / 2.0;
        let c = phi_1.cos().powi(2) + 2.0 * n * phi_1.sin();
        let rho = EARTH_RADIUS_M / n * (c - 2.0 * n * phi.sin()).sqrt();
        let rho_0 = EARTH_RADIUS_M / n * (c - 2.0 * n * phi_0.sin()).sqrt();
        let theta = n * lambda;

        Ok(Coord {
            x: rho * theta.sin(),
            y: rho_0 - rho * theta.cos(),
        })
    }
}

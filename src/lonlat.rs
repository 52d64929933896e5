//! Spherical coordinate pair.

use crate::angle::Angle;
use crate::vector::UnitVector3d;
use serde::{Deserialize, Serialize};
use std::fmt;

const TWO_PI: f64 = 2.0 * std::f64::consts::PI;
const HALF_PI: f64 = std::f64::consts::FRAC_PI_2;

/// A longitude/latitude pair on the unit sphere.
///
/// Longitude is normalized to `[0, 2π)`; latitude is clamped to
/// `[-π/2, π/2]`.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LonLat {
    lon: f64,
    lat: f64,
}

impl LonLat {
    /// Construct from radians, normalizing longitude and clamping latitude.
    pub fn from_radians(lon: f64, lat: f64) -> Self {
        LonLat {
            lon: normalize_lon(lon),
            lat: lat.clamp(-HALF_PI, HALF_PI),
        }
    }

    /// Construct from degrees.
    pub fn from_degrees(lon: f64, lat: f64) -> Self {
        LonLat::from_radians(lon.to_radians(), lat.to_radians())
    }

    /// Longitude in `[0, 2π)`.
    pub fn lon(&self) -> Angle {
        Angle::from_radians(self.lon)
    }

    /// Latitude in `[-π/2, π/2]`.
    pub fn lat(&self) -> Angle {
        Angle::from_radians(self.lat)
    }
}

/// Normalize a longitude in radians to `[0, 2π)`.
pub(crate) fn normalize_lon(lon: f64) -> f64 {
    let n = lon.rem_euclid(TWO_PI);
    // rem_euclid can return 2π itself when the input is a tiny negative.
    if n >= TWO_PI {
        0.0
    } else {
        n
    }
}

impl From<&UnitVector3d> for LonLat {
    fn from(v: &UnitVector3d) -> Self {
        let lon = v.y().atan2(v.x());
        let lat = v.z().clamp(-1.0, 1.0).asin();
        LonLat::from_radians(lon, lat)
    }
}

impl fmt::Debug for LonLat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LonLat({:?}, {:?})", self.lon, self.lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        let p = LonLat::from_degrees(-90.0, 95.0);
        assert!((p.lon().as_degrees() - 270.0).abs() < 1e-12);
        assert_eq!(p.lat().as_degrees(), 90.0);
    }

    #[test]
    fn test_vector_round_trip() {
        let p = LonLat::from_degrees(45.0, 45.0);
        let v = UnitVector3d::from(&p);
        let back = LonLat::from(&v);
        assert!((back.lon().as_degrees() - 45.0).abs() < 1e-9);
        assert!((back.lat().as_degrees() - 45.0).abs() < 1e-9);
    }
}

//! Unit vector on the sphere.

use crate::angle::Angle;
use crate::lonlat::LonLat;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 3-vector of unit length.
///
/// Points on the unit sphere are represented as unit vectors rather than
/// lon/lat pairs so that containment tests avoid trigonometry and behave
/// well near the poles.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitVector3d {
    x: f64,
    y: f64,
    z: f64,
}

impl UnitVector3d {
    /// Construct from components, normalizing to unit length.
    ///
    /// The zero vector normalizes to the x axis rather than NaN; callers
    /// constructing from real coordinates never hit that case.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        let n2 = x * x + y * y + z * z;
        if n2 == 0.0 {
            UnitVector3d { x: 1.0, y: 0.0, z: 0.0 }
        } else if (n2 - 1.0).abs() > 1e-14 {
            let norm = n2.sqrt();
            UnitVector3d {
                x: x / norm,
                y: y / norm,
                z: z / norm,
            }
        } else {
            // Already unit length to within rounding; leave the components
            // untouched so decoded vectors compare equal bit-for-bit.
            UnitVector3d { x, y, z }
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    /// Dot product.
    pub fn dot(&self, other: &UnitVector3d) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Angular separation between two unit vectors.
    ///
    /// Computed from the chord length (`2 asin(|a - b| / 2)`), which stays
    /// accurate for small separations where `acos(dot)` loses precision.
    pub fn separation(&self, other: &UnitVector3d) -> Angle {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        let chord = (dx * dx + dy * dy + dz * dz).sqrt();
        Angle::from_radians(2.0 * (chord / 2.0).clamp(0.0, 1.0).asin())
    }
}

impl From<&LonLat> for UnitVector3d {
    fn from(p: &LonLat) -> Self {
        let lon = p.lon().as_radians();
        let lat = p.lat().as_radians();
        UnitVector3d {
            x: lat.cos() * lon.cos(),
            y: lat.cos() * lon.sin(),
            z: lat.sin(),
        }
    }
}

impl fmt::Debug for UnitVector3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnitVector3d({:?}, {:?}, {:?})", self.x, self.y, self.z)
    }
}

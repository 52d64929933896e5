//! Plane angle type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// An angle, stored in radians.
///
/// `Angle` is a thin newtype over `f64` so that degree/radian conversions
/// happen at construction and accessor boundaries only.
#[derive(Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Angle(f64);

impl Angle {
    /// The zero angle.
    pub const ZERO: Angle = Angle(0.0);

    /// Construct from radians.
    pub fn from_radians(radians: f64) -> Self {
        Angle(radians)
    }

    /// Construct from degrees.
    pub fn from_degrees(degrees: f64) -> Self {
        Angle(degrees.to_radians())
    }

    /// The angle in radians.
    pub fn as_radians(self) -> f64 {
        self.0
    }

    /// The angle in degrees.
    pub fn as_degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// Absolute value.
    pub fn abs(self) -> Angle {
        Angle(self.0.abs())
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;

    fn mul(self, rhs: f64) -> Angle {
        Angle(self.0 * rhs)
    }
}

impl fmt::Debug for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Angle({:?})", self.0)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Angle({:?})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_radian_conversion() {
        let a = Angle::from_degrees(180.0);
        assert_eq!(a.as_radians(), std::f64::consts::PI);
        assert_eq!(a.as_degrees(), 180.0);
    }

    #[test]
    fn test_ordering() {
        assert!(Angle::from_degrees(1.0) < Angle::from_degrees(2.0));
        assert!(Angle::from_degrees(1.0) <= Angle::from_radians(1.0f64.to_radians()));
    }

    #[test]
    fn test_arithmetic() {
        let sum = Angle::from_degrees(30.0) + Angle::from_degrees(15.0);
        assert!((sum.as_degrees() - 45.0).abs() < 1e-12);
        let diff = Angle::from_degrees(30.0) - Angle::from_degrees(45.0);
        assert!((diff.as_degrees() + 15.0).abs() < 1e-12);
    }
}

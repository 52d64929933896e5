//! 1-D angular intervals.
//!
//! A [`LonLatBox`](crate::lonlat_box::LonLatBox) is the product of a
//! longitude interval and a latitude interval, so box-box relations reduce
//! to the two exact 1-D relations implemented here.
//!
//! Longitude intervals are stored as `(start, extent)` with the start
//! normalized to `[0, 2π)` and the extent in `[0, 2π]`, which represents
//! wrap-around intervals (e.g. `[350°, 10°]`) and the full circle uniformly.
//! Latitude intervals are plain closed intervals in `[-π/2, π/2]`.

use crate::angle::Angle;
use crate::lonlat::normalize_lon;
use crate::relationship::{Relationship, CONTAINS, DISJOINT, INTERSECTS, WITHIN};
use serde::{Deserialize, Serialize};
use std::fmt;

const TWO_PI: f64 = 2.0 * std::f64::consts::PI;
const HALF_PI: f64 = std::f64::consts::FRAC_PI_2;

/// A closed latitude interval `[a, b]`, empty when `a > b`.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatInterval {
    a: f64,
    b: f64,
}

impl LatInterval {
    /// Construct from radians, clamping both endpoints to `[-π/2, π/2]`.
    pub fn from_radians(a: f64, b: f64) -> Self {
        LatInterval {
            a: a.clamp(-HALF_PI, HALF_PI),
            b: b.clamp(-HALF_PI, HALF_PI),
        }
    }

    /// Construct from degrees.
    pub fn from_degrees(a: f64, b: f64) -> Self {
        LatInterval::from_radians(a.to_radians(), b.to_radians())
    }

    /// The full latitude range.
    pub fn full() -> Self {
        LatInterval {
            a: -HALF_PI,
            b: HALF_PI,
        }
    }

    pub fn lower(&self) -> Angle {
        Angle::from_radians(self.a)
    }

    pub fn upper(&self) -> Angle {
        Angle::from_radians(self.b)
    }

    pub fn is_empty(&self) -> bool {
        self.a > self.b
    }

    /// True if `lat` (radians) lies in the interval.
    pub fn contains(&self, lat: f64) -> bool {
        self.a <= lat && lat <= self.b
    }

    /// True if `other` is a subset of `self`.
    pub fn contains_interval(&self, other: &LatInterval) -> bool {
        other.is_empty() || (self.a <= other.a && other.b <= self.b)
    }

    /// Exact 1-D relation between two latitude intervals.
    pub fn relate(&self, other: &LatInterval) -> Relationship {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => return CONTAINS | WITHIN | DISJOINT,
            (true, false) => return WITHIN | DISJOINT,
            (false, true) => return CONTAINS | DISJOINT,
            (false, false) => {}
        }
        if self.b < other.a || other.b < self.a {
            return DISJOINT;
        }
        let contains = self.contains_interval(other);
        let within = other.contains_interval(self);
        match (contains, within) {
            (true, true) => CONTAINS | WITHIN,
            (true, false) => CONTAINS,
            (false, true) => WITHIN,
            (false, false) => INTERSECTS,
        }
    }
}

impl fmt::Debug for LatInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LatInterval({:?}, {:?})", self.a, self.b)
    }
}

/// A longitude interval, possibly wrapping through 0, as `(start, extent)`.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LonInterval {
    start: f64,
    extent: f64,
}

impl LonInterval {
    /// Construct from start and end longitudes in radians.
    ///
    /// The interval runs eastward from `a` to `b`; `a > b` (after
    /// normalization) wraps through longitude 0. `a == b` is the degenerate
    /// single-point interval; use [`LonInterval::full`] for the full circle.
    pub fn from_radians(a: f64, b: f64) -> Self {
        let start = normalize_lon(a);
        let extent = normalize_lon(b - a);
        LonInterval { start, extent }
    }

    /// Construct from degrees.
    pub fn from_degrees(a: f64, b: f64) -> Self {
        LonInterval::from_radians(a.to_radians(), b.to_radians())
    }

    /// Construct from a normalized start and an extent in `[0, 2π]`.
    pub fn from_start_extent(start: f64, extent: f64) -> Self {
        LonInterval {
            start: normalize_lon(start),
            extent: extent.clamp(0.0, TWO_PI),
        }
    }

    /// The full longitude circle.
    pub fn full() -> Self {
        LonInterval {
            start: 0.0,
            extent: TWO_PI,
        }
    }

    pub fn start(&self) -> Angle {
        Angle::from_radians(self.start)
    }

    pub fn extent(&self) -> Angle {
        Angle::from_radians(self.extent)
    }

    /// End longitude, normalized to `[0, 2π)`.
    pub fn end(&self) -> Angle {
        Angle::from_radians(normalize_lon(self.start + self.extent))
    }

    pub fn is_full(&self) -> bool {
        self.extent >= TWO_PI
    }

    /// True if `lon` (radians) lies in the interval.
    pub fn contains(&self, lon: f64) -> bool {
        self.is_full() || normalize_lon(lon - self.start) <= self.extent
    }

    /// True if `other` is a subset of `self`.
    pub fn contains_interval(&self, other: &LonInterval) -> bool {
        if self.is_full() {
            return true;
        }
        if other.is_full() {
            return false;
        }
        let offset = normalize_lon(other.start - self.start);
        offset <= self.extent && offset + other.extent <= self.extent
    }

    /// True if the two intervals share at least one longitude.
    pub fn overlaps(&self, other: &LonInterval) -> bool {
        self.is_full()
            || other.is_full()
            || normalize_lon(other.start - self.start) <= self.extent
            || normalize_lon(self.start - other.start) <= other.extent
    }

    /// Exact 1-D relation between two longitude intervals.
    pub fn relate(&self, other: &LonInterval) -> Relationship {
        let contains = self.contains_interval(other);
        let within = other.contains_interval(self);
        match (contains, within) {
            (true, true) => CONTAINS | WITHIN,
            (true, false) => CONTAINS,
            (false, true) => WITHIN,
            (false, false) => {
                if self.overlaps(other) {
                    INTERSECTS
                } else {
                    DISJOINT
                }
            }
        }
    }
}

impl fmt::Debug for LonInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LonInterval({:?}, {:?})", self.start, self.extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_relate() {
        let a = LatInterval::from_degrees(0.0, 30.0);
        let b = LatInterval::from_degrees(10.0, 20.0);
        let c = LatInterval::from_degrees(40.0, 50.0);
        let d = LatInterval::from_degrees(20.0, 40.0);
        assert_eq!(a.relate(&b), CONTAINS);
        assert_eq!(b.relate(&a), WITHIN);
        assert_eq!(a.relate(&c), DISJOINT);
        assert_eq!(a.relate(&d), INTERSECTS);
        assert_eq!(a.relate(&a), CONTAINS | WITHIN);
    }

    #[test]
    fn test_lon_wraparound() {
        let wrapped = LonInterval::from_degrees(350.0, 10.0);
        assert!(wrapped.contains(0.0));
        assert!(wrapped.contains(355.0f64.to_radians()));
        assert!(wrapped.contains(5.0f64.to_radians()));
        assert!(!wrapped.contains(180.0f64.to_radians()));

        let inner = LonInterval::from_degrees(355.0, 5.0);
        assert_eq!(wrapped.relate(&inner), CONTAINS);
        assert_eq!(inner.relate(&wrapped), WITHIN);

        let crossing = LonInterval::from_degrees(5.0, 20.0);
        assert_eq!(wrapped.relate(&crossing), INTERSECTS);

        let far = LonInterval::from_degrees(90.0, 180.0);
        assert_eq!(wrapped.relate(&far), DISJOINT);
    }

    #[test]
    fn test_lon_full() {
        let full = LonInterval::full();
        let some = LonInterval::from_degrees(10.0, 20.0);
        assert!(full.is_full());
        assert!(full.contains(3.0));
        assert_eq!(full.relate(&some), CONTAINS);
        assert_eq!(some.relate(&full), WITHIN);
        assert_eq!(full.relate(&LonInterval::full()), CONTAINS | WITHIN);
    }
}

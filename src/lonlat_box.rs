//! Longitude/latitude box region.

use crate::angle::Angle;
use crate::interval::{LatInterval, LonInterval};
use crate::lonlat::LonLat;
use crate::relationship::{Relationship, CONTAINS, DISJOINT, INTERSECTS, WITHIN};
use crate::vector::UnitVector3d;
use serde::{Deserialize, Serialize};

/// A region bounded by two meridians and two parallels.
///
/// The box is the product of a longitude interval (eastward from `lon_a` to
/// `lon_b`, wrapping through 0 when `lon_a > lon_b`) and a latitude
/// interval. Box-box relations are exact: they reduce to the two 1-D
/// interval relations.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LonLatBox {
    lon: LonInterval,
    lat: LatInterval,
}

impl LonLatBox {
    /// Construct from explicit intervals.
    pub fn new(lon: LonInterval, lat: LatInterval) -> Self {
        LonLatBox { lon, lat }
    }

    /// Construct from corner coordinates in degrees, in
    /// `(lon_a, lat_a, lon_b, lat_b)` order.
    pub fn from_degrees(lon_a: f64, lat_a: f64, lon_b: f64, lat_b: f64) -> Self {
        LonLatBox {
            lon: LonInterval::from_degrees(lon_a, lon_b),
            lat: LatInterval::from_degrees(lat_a, lat_b),
        }
    }

    /// Construct from corner coordinates in radians.
    pub fn from_radians(lon_a: f64, lat_a: f64, lon_b: f64, lat_b: f64) -> Self {
        LonLatBox {
            lon: LonInterval::from_radians(lon_a, lon_b),
            lat: LatInterval::from_radians(lat_a, lat_b),
        }
    }

    pub fn lon(&self) -> &LonInterval {
        &self.lon
    }

    pub fn lat(&self) -> &LatInterval {
        &self.lat
    }

    /// True if the box contains no points (inverted latitude interval).
    pub fn is_empty(&self) -> bool {
        self.lat.is_empty()
    }

    /// Exact point membership test.
    pub fn contains(&self, v: &UnitVector3d) -> bool {
        let p = LonLat::from(v);
        self.lat.contains(p.lat().as_radians()) && self.lon.contains(p.lon().as_radians())
    }

    /// True if `other` is a subset of this box.
    pub fn contains_box(&self, other: &LonLatBox) -> bool {
        other.is_empty()
            || (self.lon.contains_interval(&other.lon) && self.lat.contains_interval(&other.lat))
    }

    /// Exact box-box relation.
    pub fn relate_box(&self, other: &LonLatBox) -> Relationship {
        let lon_r = self.lon.relate(&other.lon);
        let lat_r = self.lat.relate(&other.lat);
        if lon_r.is_set(DISJOINT) || lat_r.is_set(DISJOINT) {
            return DISJOINT;
        }
        let mut out = Relationship::UNKNOWN;
        if lon_r.is_set(CONTAINS) && lat_r.is_set(CONTAINS) {
            out |= CONTAINS;
        }
        if lon_r.is_set(WITHIN) && lat_r.is_set(WITHIN) {
            out |= WITHIN;
        }
        if out.is_empty() {
            out = INTERSECTS;
        }
        out
    }

    /// Minimum angular separation between `v` and any point of the box.
    ///
    /// Zero when the box contains `v`. The minimum over the boundary is
    /// attained at a corner, on a latitude edge at the point's longitude, or
    /// at the perpendicular foot on a meridian edge; all candidates are
    /// evaluated exactly.
    pub fn min_separation(&self, v: &UnitVector3d) -> Angle {
        if self.is_empty() {
            return Angle::from_radians(std::f64::consts::PI);
        }
        if self.contains(v) {
            return Angle::ZERO;
        }
        let p = LonLat::from(v);
        let lon_p = p.lon().as_radians();
        let mut best = f64::INFINITY;
        self.for_min_candidates(v, lon_p, |sep| best = best.min(sep));
        Angle::from_radians(best)
    }

    /// Maximum angular separation between `v` and any point of the box.
    ///
    /// The maximum is attained at the antipode of `v` when the box contains
    /// it, and otherwise on the boundary: at a corner, on a latitude edge at
    /// the longitude antipodal to the point, or at a meridian-edge critical
    /// point.
    pub fn max_separation(&self, v: &UnitVector3d) -> Angle {
        if self.is_empty() {
            return Angle::ZERO;
        }
        let antipode = UnitVector3d::new(-v.x(), -v.y(), -v.z());
        if self.contains(&antipode) {
            return Angle::from_radians(std::f64::consts::PI);
        }
        let p = LonLat::from(v);
        let lon_p = p.lon().as_radians();
        let mut best: f64 = 0.0;
        self.for_max_candidates(v, lon_p, |sep| best = best.max(sep));
        Angle::from_radians(best)
    }

    fn separation_to(&self, v: &UnitVector3d, lon: f64, lat: f64) -> f64 {
        let q = UnitVector3d::from(&LonLat::from_radians(lon, lat));
        v.separation(&q).as_radians()
    }

    fn for_min_candidates(&self, v: &UnitVector3d, lon_p: f64, mut f: impl FnMut(f64)) {
        let lat_p = LonLat::from(v).lat().as_radians();
        let edges = self.corner_lons();
        let lats = [self.lat.lower().as_radians(), self.lat.upper().as_radians()];
        for &lon in &edges {
            for &lat in &lats {
                f(self.separation_to(v, lon, lat));
            }
        }
        if self.lon.contains(lon_p) {
            for &lat in &lats {
                f(self.separation_to(v, lon_p, lat));
            }
        }
        if !self.lon.is_full() {
            for &lon in &edges {
                let dlon = lon_p - lon;
                let foot = lat_p.sin().atan2(lat_p.cos() * dlon.cos());
                if self.lat.contains(foot) {
                    f(self.separation_to(v, lon, foot));
                }
            }
        }
    }

    fn for_max_candidates(&self, v: &UnitVector3d, lon_p: f64, mut f: impl FnMut(f64)) {
        let lat_p = LonLat::from(v).lat().as_radians();
        let edges = self.corner_lons();
        let lats = [self.lat.lower().as_radians(), self.lat.upper().as_radians()];
        for &lon in &edges {
            for &lat in &lats {
                f(self.separation_to(v, lon, lat));
            }
        }
        let antipode = lon_p + std::f64::consts::PI;
        if self.lon.contains(antipode) {
            for &lat in &lats {
                f(self.separation_to(v, antipode, lat));
            }
        }
        if !self.lon.is_full() {
            for &lon in &edges {
                let dlon = lon_p - lon;
                let foot = lat_p.sin().atan2(lat_p.cos() * dlon.cos());
                for crit in [foot + std::f64::consts::PI, foot - std::f64::consts::PI] {
                    if self.lat.contains(crit) {
                        f(self.separation_to(v, lon, crit));
                    }
                }
            }
        }
    }

    fn corner_lons(&self) -> [f64; 2] {
        [self.lon.start().as_radians(), self.lon.end().as_radians()]
    }
}

impl std::fmt::Debug for LonLatBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Box({:?}, {:?})", self.lon, self.lat)
    }
}

impl std::fmt::Display for LonLatBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lon: f64, lat: f64) -> UnitVector3d {
        UnitVector3d::from(&LonLat::from_degrees(lon, lat))
    }

    #[test]
    fn test_contains() {
        let b = LonLatBox::from_degrees(44.5, 43.5, 47.5, 46.5);
        assert!(b.contains(&point(46.0, 45.0)));
        assert!(b.contains(&point(45.0, 45.0)));
        assert!(!b.contains(&point(44.0, 45.0)));
        assert!(!b.contains(&point(45.0, 48.0)));
    }

    #[test]
    fn test_relate_box() {
        let b = LonLatBox::from_degrees(44.5, 43.5, 47.5, 46.5);
        let inner = LonLatBox::from_degrees(45.0, 44.0, 46.0, 45.0);
        let far = LonLatBox::from_degrees(90.0, 0.0, 100.0, 10.0);
        let crossing = LonLatBox::from_degrees(46.0, 46.0, 50.0, 50.0);
        assert_eq!(b.relate_box(&b), CONTAINS | WITHIN);
        assert_eq!(b.relate_box(&inner), CONTAINS);
        assert_eq!(inner.relate_box(&b), WITHIN);
        assert_eq!(b.relate_box(&far), DISJOINT);
        assert_eq!(b.relate_box(&crossing), INTERSECTS);
    }

    #[test]
    fn test_wraparound_contains() {
        let b = LonLatBox::from_degrees(350.0, -10.0, 10.0, 10.0);
        assert!(b.contains(&point(0.0, 0.0)));
        assert!(b.contains(&point(355.0, 5.0)));
        assert!(!b.contains(&point(180.0, 0.0)));
    }

    #[test]
    fn test_min_separation() {
        let b = LonLatBox::from_degrees(44.5, 43.5, 47.5, 46.5);
        // Inside: zero.
        assert_eq!(b.min_separation(&point(45.0, 45.0)).as_radians(), 0.0);
        // Due west of the box: distance to the lon=44.5 meridian edge.
        let d = b.min_separation(&point(44.0, 45.0)).as_degrees();
        let expected = (45f64.to_radians().cos() * 0.5f64.to_radians().sin())
            .asin()
            .to_degrees();
        assert!((d - expected).abs() < 1e-9, "got {d}, expected {expected}");
        // Due north: distance to the top lat edge.
        let d = b.min_separation(&point(46.0, 48.0)).as_degrees();
        assert!((d - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_max_separation() {
        let b = LonLatBox::from_degrees(44.5, 43.5, 47.5, 46.5);
        // From the box's own corner, the max is the far corner.
        let corner = point(44.5, 43.5);
        let far = point(47.5, 46.5);
        let d = b.max_separation(&corner).as_radians();
        assert!((d - corner.separation(&far).as_radians()).abs() < 1e-12);
        // Max from anywhere is at least the min.
        let p = point(10.0, -20.0);
        assert!(b.max_separation(&p) >= b.min_separation(&p));
    }

    #[test]
    fn test_max_separation_antipode_inside() {
        // The box straddles the antipode of (0°, 0°), so the interior
        // maximum is a full half-turn, not a boundary candidate.
        let b = LonLatBox::from_degrees(170.0, -10.0, 190.0, 10.0);
        let p = point(0.0, 0.0);
        assert_eq!(
            b.max_separation(&p).as_radians(),
            std::f64::consts::PI
        );
        // A point whose antipode falls outside still maxes on the boundary.
        let q = point(90.0, 0.0);
        assert!(b.max_separation(&q).as_radians() < std::f64::consts::PI);
    }
}

//! Spherical cap region.

use crate::angle::Angle;
use crate::interval::{LatInterval, LonInterval};
use crate::lonlat::LonLat;
use crate::lonlat_box::LonLatBox;
use crate::relationship::{Relationship, CONTAINS, DISJOINT, INTERSECTS, WITHIN};
use crate::vector::UnitVector3d;
use serde::{Deserialize, Serialize};

const HALF_PI: f64 = std::f64::consts::FRAC_PI_2;

/// A circle (spherical cap): all points within an opening angle of a center.
///
/// The radius is clamped to `[0, π]` at construction; a zero radius is the
/// degenerate single-point circle and a radius of π covers the whole sphere.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    center: UnitVector3d,
    radius: Angle,
}

impl Circle {
    /// Construct from a center and opening angle.
    pub fn new(center: UnitVector3d, radius: Angle) -> Self {
        Circle {
            center,
            radius: Angle::from_radians(radius.as_radians().clamp(0.0, std::f64::consts::PI)),
        }
    }

    pub fn center(&self) -> &UnitVector3d {
        &self.center
    }

    pub fn radius(&self) -> Angle {
        self.radius
    }

    /// Exact point membership test.
    pub fn contains(&self, v: &UnitVector3d) -> bool {
        self.center.separation(v) <= self.radius
    }

    /// Exact circle-circle relation, by center separation against the radii.
    pub fn relate_circle(&self, other: &Circle) -> Relationship {
        let d = self.center.separation(&other.center).as_radians();
        let r1 = self.radius.as_radians();
        let r2 = other.radius.as_radians();
        // A radius of π is the whole sphere, which contains everything
        // regardless of center separation; the triangle-inequality tests
        // below are too weak to see that when d + r exceeds π.
        if r1 >= std::f64::consts::PI || r2 >= std::f64::consts::PI {
            let mut out = Relationship::UNKNOWN;
            if r1 >= std::f64::consts::PI {
                out |= CONTAINS;
            }
            if r2 >= std::f64::consts::PI {
                out |= WITHIN;
            }
            return out;
        }
        if d > r1 + r2 {
            return DISJOINT;
        }
        let mut out = Relationship::UNKNOWN;
        if r1 >= d + r2 {
            out |= CONTAINS;
        }
        if r2 >= d + r1 {
            out |= WITHIN;
        }
        if out.is_empty() {
            out = INTERSECTS;
        }
        out
    }

    /// Circle-box relation, via the min/max separation between the circle
    /// center and the box plus the circle's exact bounding box.
    ///
    /// `DISJOINT`, `CONTAINS`, and `INTERSECTS` follow directly from the
    /// separation extrema; `WITHIN` holds exactly when the box covers the
    /// circle's bounding box, which is tight in all four cardinal
    /// directions.
    pub fn relate_box(&self, other: &LonLatBox) -> Relationship {
        if other.is_empty() {
            return DISJOINT;
        }
        let r = self.radius.as_radians();
        if other.min_separation(&self.center).as_radians() > r {
            return DISJOINT;
        }
        let mut out = Relationship::UNKNOWN;
        if other.max_separation(&self.center).as_radians() <= r {
            out |= CONTAINS;
        }
        if other.contains_box(&self.bounding_box()) {
            out |= WITHIN;
        }
        if out.is_empty() {
            out = INTERSECTS;
        }
        out
    }

    /// The tightest lon/lat box enclosing this circle.
    pub fn bounding_box(&self) -> LonLatBox {
        let c = LonLat::from(&self.center);
        let lon_c = c.lon().as_radians();
        let lat_c = c.lat().as_radians();
        let r = self.radius.as_radians();
        let lat = LatInterval::from_radians(lat_c - r, lat_c + r);
        // A circle enclosing a pole spans all longitudes.
        if lat_c + r >= HALF_PI || lat_c - r <= -HALF_PI {
            LonLatBox::new(LonInterval::full(), lat)
        } else {
            let alpha = (r.sin() / lat_c.cos()).clamp(-1.0, 1.0).asin();
            LonLatBox::new(LonInterval::from_radians(lon_c - alpha, lon_c + alpha), lat)
        }
    }
}

impl std::fmt::Debug for Circle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Circle({:?}, {:?})", self.center, self.radius)
    }
}

impl std::fmt::Display for Circle {
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

    fn circle(lon: f64, lat: f64, radius_deg: f64) -> Circle {
        Circle::new(point(lon, lat), Angle::from_degrees(radius_deg))
    }

    #[test]
    fn test_contains() {
        let c = circle(44.0, 45.0, 1.0);
        assert!(c.contains(&point(44.0, 45.0)));
        assert!(c.contains(&point(45.0, 45.0)));
        assert!(!c.contains(&point(46.0, 45.0)));
        assert!(!c.contains(&point(45.0, 48.0)));
    }

    #[test]
    fn test_relate_circle() {
        let c = circle(44.0, 45.0, 1.0);
        let inner = circle(44.0, 45.0, 0.5);
        let far = circle(45.0, 48.0, 0.1);
        let overlapping = circle(44.8, 45.0, 1.0);
        assert_eq!(c.relate_circle(&c), CONTAINS | WITHIN);
        assert_eq!(c.relate_circle(&inner), CONTAINS);
        assert_eq!(inner.relate_circle(&c), WITHIN);
        assert_eq!(c.relate_circle(&far), DISJOINT);
        assert_eq!(c.relate_circle(&overlapping), INTERSECTS);
    }

    #[test]
    fn test_full_sphere_circle() {
        // A half-turn radius covers the whole sphere, so it contains any
        // other circle even when center separation plus radius exceeds π.
        let full = circle(0.0, 0.0, 180.0);
        let distant = circle(179.0, 0.0, 5.0);
        assert_eq!(full.relate_circle(&distant), CONTAINS);
        assert_eq!(distant.relate_circle(&full), WITHIN);
        assert_eq!(full.relate_circle(&full), CONTAINS | WITHIN);
        assert_eq!(
            full.relate_circle(&circle(90.0, 45.0, 180.0)),
            CONTAINS | WITHIN
        );
    }

    #[test]
    fn test_relate_box_across_antipode() {
        // The box straddles the antipode of the circle's center, so part of
        // it lies a full half-turn away and outside even a 175° circle.
        let wide = circle(0.0, 0.0, 175.0);
        let straddling = LonLatBox::from_degrees(170.0, -10.0, 190.0, 10.0);
        assert!(!wide.contains(&point(180.0, 0.0)));
        assert_eq!(wide.relate_box(&straddling), INTERSECTS);
        // The full sphere does contain it.
        let full = circle(0.0, 0.0, 180.0);
        assert_eq!(
            full.relate_box(&straddling) & CONTAINS,
            CONTAINS
        );
    }

    #[test]
    fn test_relate_box() {
        let c = circle(44.0, 45.0, 1.0);
        let overlapping = LonLatBox::from_degrees(44.5, 43.5, 47.5, 46.5);
        let covering = LonLatBox::from_degrees(40.0, 40.0, 50.0, 50.0);
        let far = LonLatBox::from_degrees(90.0, 0.0, 100.0, 10.0);
        assert_eq!(c.relate_box(&overlapping), INTERSECTS);
        assert_eq!(c.relate_box(&covering), WITHIN);
        assert_eq!(c.relate_box(&far), DISJOINT);

        // A tiny box at the circle's center is contained.
        let tiny = LonLatBox::from_degrees(43.9, 44.9, 44.1, 45.1);
        assert_eq!(c.relate_box(&tiny), CONTAINS);
    }

    #[test]
    fn test_bounding_box() {
        let c = circle(44.0, 45.0, 1.0);
        let bb = c.bounding_box();
        assert!((bb.lat().lower().as_degrees() - 44.0).abs() < 1e-9);
        assert!((bb.lat().upper().as_degrees() - 46.0).abs() < 1e-9);
        // Lon half-width exceeds the radius at non-zero latitude.
        let half_extent = bb.lon().extent().as_degrees() / 2.0;
        assert!(half_extent > 1.0 && half_extent < 2.0);
        assert!(bb.contains(&point(44.0, 46.0)));

        // Pole-enclosing circle spans all longitudes.
        let polar = circle(0.0, 89.5, 1.0);
        assert!(polar.bounding_box().lon().is_full());
    }
}

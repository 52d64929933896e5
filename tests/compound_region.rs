//! Compound region behavior tests.
//!
//! Exercises union/intersection regions over the fixed scenario: a circle
//! centered at (44°, 45°) with a 1° radius and a box spanning
//! lon ∈ [44.5°, 47.5°], lat ∈ [43.5°, 46.5°]. The point (45°, 45°) lies in
//! both shapes, (44°, 45°) only in the circle, (46°, 45°) only in the box,
//! and (45°, 48°) in neither.

use sphere_region::{
    Angle, Circle, CompoundRegion, IntersectionRegion, LonLat, LonLatBox, Region, RegionError,
    UnionRegion, UnitVector3d, CONTAINS, DISJOINT, INTERSECTS, WITHIN,
};

fn point(lon: f64, lat: f64) -> UnitVector3d {
    UnitVector3d::from(&LonLat::from_degrees(lon, lat))
}

fn point_in_circle() -> UnitVector3d {
    point(44.0, 45.0)
}

fn point_in_box() -> UnitVector3d {
    point(46.0, 45.0)
}

fn point_in_both() -> UnitVector3d {
    point(45.0, 45.0)
}

fn point_in_neither() -> UnitVector3d {
    point(45.0, 48.0)
}

fn circle() -> Region {
    Region::Circle(Circle::new(point_in_circle(), Angle::from_degrees(1.0)))
}

fn lon_lat_box() -> Region {
    Region::Box(LonLatBox::from_degrees(44.5, 43.5, 47.5, 46.5))
}

fn faraway() -> Region {
    Region::Circle(Circle::new(point_in_neither(), Angle::from_degrees(0.1)))
}

fn union() -> Region {
    Region::Union(UnionRegion::new(vec![circle(), lon_lat_box()]))
}

fn intersection() -> Region {
    Region::Intersection(IntersectionRegion::new(vec![circle(), lon_lat_box()]))
}

/// The fixture's points and operand regions relate as the other tests
/// assume.
#[test]
fn test_fixture_relationships() {
    let c = circle();
    let b = lon_lat_box();
    let f = faraway();

    assert!(c.contains(&point_in_circle()));
    assert!(c.contains(&point_in_both()));
    assert!(!c.contains(&point_in_box()));
    assert!(!c.contains(&point_in_neither()));
    assert!(b.contains(&point_in_box()));
    assert!(b.contains(&point_in_both()));
    assert!(!b.contains(&point_in_circle()));
    assert!(!b.contains(&point_in_neither()));

    assert_eq!(c.relate(&c), CONTAINS | WITHIN);
    assert_eq!(c.relate(&b), INTERSECTS);
    assert_eq!(c.relate(&f), DISJOINT);
    assert_eq!(b.relate(&c), INTERSECTS);
    assert_eq!(b.relate(&b), CONTAINS | WITHIN);
    assert_eq!(b.relate(&f), DISJOINT);
}

#[test]
fn test_union_contains() {
    let u = union();
    assert!(u.contains(&point_in_both()));
    assert!(u.contains(&point_in_circle()));
    assert!(u.contains(&point_in_box()));
    assert!(!u.contains(&point_in_neither()));
}

#[test]
fn test_intersection_contains() {
    let i = intersection();
    assert!(i.contains(&point_in_both()));
    assert!(!i.contains(&point_in_circle()));
    assert!(!i.contains(&point_in_box()));
    assert!(!i.contains(&point_in_neither()));
}

#[test]
fn test_union_relate() {
    let u = union();
    assert_eq!(u.relate(&circle()), CONTAINS);
    assert_eq!(u.relate(&lon_lat_box()), CONTAINS);
    assert_eq!(u.relate(&faraway()), DISJOINT);
    assert_eq!(circle().relate(&u), WITHIN);
    assert_eq!(lon_lat_box().relate(&u), WITHIN);
    assert_eq!(faraway().relate(&u), DISJOINT);
}

#[test]
fn test_intersection_relate() {
    let i = intersection();
    assert_eq!(i.relate(&lon_lat_box()), WITHIN);
    assert_eq!(i.relate(&circle()), WITHIN);
    assert_eq!(i.relate(&faraway()), DISJOINT);
    assert_eq!(circle().relate(&i), CONTAINS);
    assert_eq!(lon_lat_box().relate(&i), CONTAINS);
    assert_eq!(faraway().relate(&i), DISJOINT);
}

/// A zero-operand union is the empty region.
#[test]
fn test_empty_union() {
    let empty = Region::Union(UnionRegion::new(vec![]));

    assert!(!empty.contains(&point_in_both()));
    assert!(!empty.contains(&point_in_circle()));
    assert!(!empty.contains(&point_in_box()));
    assert!(!empty.contains(&point_in_neither()));

    for other in [circle(), lon_lat_box(), faraway(), union()] {
        assert_eq!(empty.relate(&other), DISJOINT);
        assert_eq!(other.relate(&empty), DISJOINT);
    }
    assert_eq!(
        empty.relate(&Region::Union(UnionRegion::new(vec![]))),
        DISJOINT
    );

    assert_eq!(empty.regions(), vec![]);
}

/// A zero-operand intersection is the full sphere.
#[test]
fn test_empty_intersection() {
    let empty = Region::Intersection(IntersectionRegion::new(vec![]));

    assert!(empty.contains(&point_in_both()));
    assert!(empty.contains(&point_in_circle()));
    assert!(empty.contains(&point_in_box()));
    assert!(empty.contains(&point_in_neither()));

    for other in [circle(), lon_lat_box(), faraway()] {
        assert_eq!(empty.relate(&other), CONTAINS);
        assert_eq!(other.relate(&empty), WITHIN);
    }
    // Overlap between two intersections stays conservative: only the
    // subset claim is provable.
    assert_eq!(empty.relate(&intersection()), CONTAINS);
    assert_eq!(intersection().relate(&empty), WITHIN);
    // Two universal regions are equal.
    assert_eq!(
        empty.relate(&Region::Intersection(IntersectionRegion::new(vec![]))),
        CONTAINS | WITHIN
    );

    assert_eq!(empty.regions(), vec![]);
}

#[test]
fn test_symmetry_law() {
    let regions = [
        circle(),
        lon_lat_box(),
        faraway(),
        union(),
        intersection(),
        Region::Union(UnionRegion::new(vec![])),
    ];
    for a in &regions {
        for b in &regions {
            assert_eq!(
                a.relate(b),
                b.relate(a).invert(),
                "symmetry violated for {a} vs {b}"
            );
        }
    }
}

#[test]
fn test_operand_access() {
    for region in [union(), intersection()] {
        let compound = match CompoundRegion::decode(&region.encode()) {
            Ok(c) => c,
            Err(e) => panic!("decode failed: {e}"),
        };
        assert_eq!(compound.n_operands(), 2);
        assert_eq!(compound.clone_operand(0).unwrap(), circle());
        assert_eq!(compound.clone_operand(1).unwrap(), lon_lat_box());
        assert!(matches!(
            compound.clone_operand(2),
            Err(RegionError::IndexOutOfRange {
                index: 2,
                n_operands: 2
            })
        ));
    }
    let empty = UnionRegion::new(vec![]);
    assert!(matches!(
        empty.clone_operand(0),
        Err(RegionError::IndexOutOfRange { .. })
    ));
}

/// All three decode entry points reproduce the encoded compound.
#[test]
fn test_codec_entry_points() {
    let u = UnionRegion::new(vec![circle(), lon_lat_box()]);
    let bytes = u.encode();
    assert_eq!(UnionRegion::decode(&bytes).unwrap(), u);
    assert_eq!(
        CompoundRegion::decode(&bytes).unwrap(),
        CompoundRegion::Union(u.clone())
    );
    assert_eq!(Region::decode(&bytes).unwrap(), Region::Union(u));

    let i = IntersectionRegion::new(vec![circle(), lon_lat_box()]);
    let bytes = i.encode();
    assert_eq!(IntersectionRegion::decode(&bytes).unwrap(), i);
    assert_eq!(
        CompoundRegion::decode(&bytes).unwrap(),
        CompoundRegion::Intersection(i.clone())
    );
    assert_eq!(Region::decode(&bytes).unwrap(), Region::Intersection(i));
}

/// Cloning is behaviorally identical to an encode/decode round trip.
#[test]
fn test_duplication() {
    for region in [circle(), lon_lat_box(), union(), intersection()] {
        let copy = region.clone();
        assert_eq!(copy, region);
        assert_eq!(Region::decode(&region.encode()).unwrap(), copy);
    }
}

/// Regions round-trip through a generic serde format.
#[test]
fn test_serde_round_trip() {
    for region in [
        circle(),
        lon_lat_box(),
        union(),
        intersection(),
        Region::Union(UnionRegion::new(vec![])),
    ] {
        let json = serde_json::to_string(&region).unwrap();
        let back: Region = serde_json::from_str(&json).unwrap();
        assert_eq!(back, region);
    }
}

/// The textual rendering re-parses to an equal region.
#[test]
fn test_textual_round_trip() {
    for region in [circle(), lon_lat_box(), union(), intersection()] {
        let text = region.to_string();
        let back: Region = text.parse().unwrap();
        assert_eq!(back, region, "textual round trip failed for {text}");
    }
}

/// `regions()` flattens exactly one level per application.
#[test]
fn test_nested_flattening() {
    let c1 = Region::Circle(Circle::new(
        UnitVector3d::new(0.0, 0.0, 1.0),
        Angle::from_radians(1.0),
    ));
    let c2 = Region::Circle(Circle::new(
        UnitVector3d::new(1.0, 0.0, 1.0),
        Angle::from_radians(2.0),
    ));
    let b1 = Region::Box(LonLatBox::from_degrees(90.0, 0.0, 180.0, 45.0));
    let b2 = Region::Box(LonLatBox::from_degrees(135.0, 15.0, 135.0, 30.0));

    let u1 = Region::Union(UnionRegion::new(vec![c1.clone(), b1.clone()]));
    let u2 = Region::Union(UnionRegion::new(vec![c2.clone(), b2.clone()]));
    let i1 = Region::Intersection(IntersectionRegion::new(vec![c1.clone(), b1.clone()]));
    let i2 = Region::Intersection(IntersectionRegion::new(vec![c2.clone(), b2.clone()]));
    let ur = Region::Union(UnionRegion::new(vec![u1.clone(), u2.clone()]));
    let ir = Region::Intersection(IntersectionRegion::new(vec![i1.clone(), i2.clone()]));

    assert_eq!(c1.regions(), vec![c1.clone()]);

    let ur_level1 = ur.regions();
    assert_eq!(ur_level1, vec![u1, u2]);
    assert_eq!(ur_level1[0].regions(), vec![c1.clone(), b1.clone()]);
    assert_eq!(ur_level1[1].regions(), vec![c2.clone(), b2.clone()]);

    let ir_level1 = ir.regions();
    assert_eq!(ir_level1, vec![i1, i2]);
    assert_eq!(ir_level1[0].regions(), vec![c1, b1]);
    assert_eq!(ir_level1[1].regions(), vec![c2, b2]);
}

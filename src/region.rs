//! The region sum type and its relation dispatch.

use crate::circle::Circle;
use crate::compound::{relate_intersection, relate_union, IntersectionRegion, UnionRegion};
use crate::lonlat_box::LonLatBox;
use crate::relationship::{Relationship, CONTAINS, DISJOINT, WITHIN};
use crate::vector::UnitVector3d;
use std::fmt;

/// A region on the unit sphere.
///
/// Leaf variants ([`Circle`], [`LonLatBox`]) have exact geometry; the
/// compound variants combine operands through union or intersection and
/// answer relation queries conservatively (see [`crate::compound`]).
///
/// Regions are immutable values: all operations are pure, allocation-only,
/// and safe to run concurrently without synchronization. Operands are never
/// shared between trees; [`Region::regions`] and
/// [`UnionRegion::clone_operand`] hand out deep copies.
#[derive(Clone, PartialEq)]
pub enum Region {
    Circle(Circle),
    Box(LonLatBox),
    Union(UnionRegion),
    Intersection(IntersectionRegion),
}

impl Region {
    /// Exact point membership test.
    ///
    /// A zero-operand union contains nothing; a zero-operand intersection
    /// contains everything.
    pub fn contains(&self, v: &UnitVector3d) -> bool {
        match self {
            Region::Circle(c) => c.contains(v),
            Region::Box(b) => b.contains(v),
            Region::Union(u) => u.contains(v),
            Region::Intersection(i) => i.contains(v),
        }
    }

    /// Relate this region to another.
    ///
    /// Exact for leaf-leaf pairs; sound but possibly incomplete when either
    /// side is compound. Satisfies the symmetry law
    /// `a.relate(b) == b.relate(a).invert()` wherever both sides are
    /// resolved.
    pub fn relate(&self, other: &Region) -> Relationship {
        // Structurally equal regions relate as CONTAINS|WITHIN, except the
        // zero-operand union, which is empty and disjoint from everything
        // including itself.
        if self == other {
            return if matches!(self, Region::Union(u) if u.n_operands() == 0) {
                DISJOINT
            } else {
                CONTAINS | WITHIN
            };
        }
        match (self, other) {
            (Region::Circle(a), Region::Circle(b)) => a.relate_circle(b),
            (Region::Circle(a), Region::Box(b)) => a.relate_box(b),
            (Region::Box(a), Region::Circle(b)) => b.relate_box(a).invert(),
            (Region::Box(a), Region::Box(b)) => a.relate_box(b),
            (Region::Union(u), _) => relate_union(u.operands(), other),
            (Region::Intersection(i), _) => relate_intersection(i.operands(), other),
            (_, Region::Union(u)) => relate_union(u.operands(), self).invert(),
            (_, Region::Intersection(i)) => relate_intersection(i.operands(), self).invert(),
        }
    }

    /// One level of operand flattening.
    ///
    /// For a compound region, returns owned clones of the direct operands,
    /// in order, without recursing into nested compounds. For a leaf region,
    /// returns a single-element list containing a clone of the leaf.
    /// Repeated application walks the tree level by level.
    pub fn regions(&self) -> Vec<Region> {
        match self {
            Region::Union(u) => u.operands().to_vec(),
            Region::Intersection(i) => i.operands().to_vec(),
            leaf => vec![leaf.clone()],
        }
    }

    /// Variant name, as used in textual renderings and error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Region::Circle(_) => "Circle",
            Region::Box(_) => "Box",
            Region::Union(_) => "UnionRegion",
            Region::Intersection(_) => "IntersectionRegion",
        }
    }
}

impl From<Circle> for Region {
    fn from(c: Circle) -> Region {
        Region::Circle(c)
    }
}

impl From<LonLatBox> for Region {
    fn from(b: LonLatBox) -> Region {
        Region::Box(b)
    }
}

impl fmt::Debug for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Circle(c) => write!(f, "{c:?}"),
            Region::Box(b) => write!(f, "{b:?}"),
            Region::Union(u) => write!(f, "{u:?}"),
            Region::Intersection(i) => write!(f, "{i:?}"),
        }
    }
}

/// The evaluable textual rendering; identical to `Debug`. Re-parse it with
/// [`Region::from_str`](std::str::FromStr).
impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

//! Compound (union/intersection) regions.
//!
//! A compound region owns an ordered list of operand regions, each possibly
//! itself compound. Operand order is preserved for indexed access but has no
//! semantic weight; the set algebra is commutative.
//!
//! # Conservative relations
//!
//! Exact pairwise relation formulas exist only for leaf-leaf pairs. Any
//! comparison involving a compound is answered by algebraic reduction over
//! the operand relations, centralized in [`relate_union`] and
//! [`relate_intersection`]. The reduction is sound but may be incomplete:
//! every asserted bit is true, and an unset bit means *unknown*, never a
//! negative assertion. In particular, relating two nonempty intersections
//! can yield the empty mask when nothing is provable from operand relations
//! alone.

use crate::error::{RegionError, Result};
use crate::region::Region;
use crate::relationship::{Relationship, CONTAINS, DISJOINT, INTERSECTS, WITHIN};
use crate::vector::UnitVector3d;
use std::fmt;

/// The union of zero or more regions.
///
/// Zero operands make the empty region: `contains` is always false and every
/// relation is `DISJOINT`.
#[derive(Clone, PartialEq)]
pub struct UnionRegion {
    operands: Vec<Region>,
}

impl UnionRegion {
    /// Construct from an operand list, taking ownership of the operands.
    pub fn new(operands: Vec<Region>) -> Self {
        UnionRegion { operands }
    }

    /// Number of direct operands.
    pub fn n_operands(&self) -> usize {
        self.operands.len()
    }

    /// An independent deep copy of operand `i`.
    pub fn clone_operand(&self, i: usize) -> Result<Region> {
        clone_operand(&self.operands, i)
    }

    pub fn operands(&self) -> &[Region] {
        &self.operands
    }

    /// True if some operand contains `v`.
    pub fn contains(&self, v: &UnitVector3d) -> bool {
        self.operands.iter().any(|r| r.contains(v))
    }

    /// Relate this union to any other region.
    ///
    /// Agrees with [`Region::relate`] on the wrapped value, including the
    /// equal-region short-circuit.
    pub fn relate(&self, other: &Region) -> Relationship {
        if matches!(other, Region::Union(u) if u == self) {
            return if self.operands.is_empty() {
                DISJOINT
            } else {
                CONTAINS | WITHIN
            };
        }
        relate_union(&self.operands, other)
    }
}

impl fmt::Debug for UnionRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_operands(f, "UnionRegion", &self.operands)
    }
}

impl fmt::Display for UnionRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// The intersection of zero or more regions.
///
/// Zero operands make the universal region (the whole sphere): `contains` is
/// always true and every relation asserts `CONTAINS`.
#[derive(Clone, PartialEq)]
pub struct IntersectionRegion {
    operands: Vec<Region>,
}

impl IntersectionRegion {
    /// Construct from an operand list, taking ownership of the operands.
    pub fn new(operands: Vec<Region>) -> Self {
        IntersectionRegion { operands }
    }

    /// Number of direct operands.
    pub fn n_operands(&self) -> usize {
        self.operands.len()
    }

    /// An independent deep copy of operand `i`.
    pub fn clone_operand(&self, i: usize) -> Result<Region> {
        clone_operand(&self.operands, i)
    }

    pub fn operands(&self) -> &[Region] {
        &self.operands
    }

    /// True if every operand contains `v`.
    pub fn contains(&self, v: &UnitVector3d) -> bool {
        self.operands.iter().all(|r| r.contains(v))
    }

    /// Relate this intersection to any other region.
    ///
    /// Agrees with [`Region::relate`] on the wrapped value, including the
    /// equal-region short-circuit.
    pub fn relate(&self, other: &Region) -> Relationship {
        if matches!(other, Region::Intersection(i) if i == self) {
            return CONTAINS | WITHIN;
        }
        relate_intersection(&self.operands, other)
    }
}

impl fmt::Debug for IntersectionRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_operands(f, "IntersectionRegion", &self.operands)
    }
}

impl fmt::Display for IntersectionRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Either compound variant, as a single type.
///
/// This is the surface for callers that know they hold a compound but not
/// which operator; its decoder accepts either compound tag and nothing else.
#[derive(Clone, PartialEq, Debug)]
pub enum CompoundRegion {
    Union(UnionRegion),
    Intersection(IntersectionRegion),
}

impl CompoundRegion {
    /// Number of direct operands.
    pub fn n_operands(&self) -> usize {
        match self {
            CompoundRegion::Union(u) => u.n_operands(),
            CompoundRegion::Intersection(i) => i.n_operands(),
        }
    }

    /// An independent deep copy of operand `i`.
    pub fn clone_operand(&self, i: usize) -> Result<Region> {
        match self {
            CompoundRegion::Union(u) => u.clone_operand(i),
            CompoundRegion::Intersection(x) => x.clone_operand(i),
        }
    }
}

impl From<CompoundRegion> for Region {
    fn from(c: CompoundRegion) -> Region {
        match c {
            CompoundRegion::Union(u) => Region::Union(u),
            CompoundRegion::Intersection(i) => Region::Intersection(i),
        }
    }
}

impl From<UnionRegion> for Region {
    fn from(u: UnionRegion) -> Region {
        Region::Union(u)
    }
}

impl From<IntersectionRegion> for Region {
    fn from(i: IntersectionRegion) -> Region {
        Region::Intersection(i)
    }
}

fn clone_operand(operands: &[Region], i: usize) -> Result<Region> {
    operands
        .get(i)
        .cloned()
        .ok_or(RegionError::IndexOutOfRange {
            index: i,
            n_operands: operands.len(),
        })
}

fn fmt_operands(f: &mut fmt::Formatter<'_>, name: &str, operands: &[Region]) -> fmt::Result {
    write!(f, "{name}(")?;
    for (i, op) in operands.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{op}")?;
    }
    write!(f, ")")
}

/// Reduce operand relations to a sound union relation.
///
/// - zero operands: the empty set, `DISJOINT` from everything.
/// - `DISJOINT` iff every operand is disjoint from `b`.
/// - `CONTAINS` iff some operand contains `b` (that operand alone covers it).
/// - `WITHIN` iff every operand is within `b`.
/// - `INTERSECTS` when nothing stronger holds but some operand provably
///   meets `b`.
pub(crate) fn relate_union(operands: &[Region], b: &Region) -> Relationship {
    if operands.is_empty() {
        return DISJOINT;
    }
    let rels: Vec<Relationship> = operands.iter().map(|op| op.relate(b)).collect();
    if rels.iter().all(|r| r.is_set(DISJOINT)) {
        return DISJOINT;
    }
    let mut out = Relationship::UNKNOWN;
    if rels.iter().any(|r| r.is_set(CONTAINS)) {
        out |= CONTAINS;
    }
    if rels.iter().all(|r| r.is_set(WITHIN)) {
        out |= WITHIN;
    }
    if out.is_empty() && rels.iter().any(|r| r.is_set(INTERSECTS) || r.is_set(WITHIN)) {
        out = INTERSECTS;
    }
    out
}

/// Reduce operand relations to a sound intersection relation.
///
/// - zero operands: the universal set; `CONTAINS` everything, and also
///   `WITHIN` when `b` is itself the universal set.
/// - `DISJOINT` iff some operand is disjoint from `b` (the intersection is a
///   subset of every operand).
/// - `CONTAINS` iff every operand contains `b`.
/// - `WITHIN` iff some operand is within `b`.
/// - `INTERSECTS` is never inferable from pairwise operand relations alone
///   and is left unset.
pub(crate) fn relate_intersection(operands: &[Region], b: &Region) -> Relationship {
    if operands.is_empty() {
        let mut out = CONTAINS;
        if matches!(b, Region::Intersection(i) if i.n_operands() == 0) {
            out |= WITHIN;
        }
        return out;
    }
    let rels: Vec<Relationship> = operands.iter().map(|op| op.relate(b)).collect();
    if rels.iter().any(|r| r.is_set(DISJOINT)) {
        return DISJOINT;
    }
    let mut out = Relationship::UNKNOWN;
    if rels.iter().all(|r| r.is_set(CONTAINS)) {
        out |= CONTAINS;
    }
    if rels.iter().any(|r| r.is_set(WITHIN)) {
        out |= WITHIN;
    }
    out
}

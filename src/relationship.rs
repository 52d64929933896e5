//! Spatial relationship between two regions.
//!
//! A [`Relationship`] is a 4-bit mask over `CONTAINS`, `WITHIN`,
//! `INTERSECTS`, and `DISJOINT`. For comparisons involving compound regions
//! the mask is conservative: a set bit is always a true statement, while an
//! unset bit means *unknown*, never a negative assertion.
//!
//! Conventions:
//! - `DISJOINT`, when asserted, is the entire mask.
//! - A containment claim subsumes overlap, so `CONTAINS`/`WITHIN` masks do
//!   not additionally set `INTERSECTS`.
//! - A region relating to an equal region asserts `CONTAINS | WITHIN`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// A 4-bit mask describing the provable spatial relationship between two
/// regions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relationship(u8);

/// `A` is a superset of `B`.
pub const CONTAINS: Relationship = Relationship(0b0001);

/// `A` is a subset of `B`.
pub const WITHIN: Relationship = Relationship(0b0010);

/// `A` and `B` overlap without a proven containment either way.
pub const INTERSECTS: Relationship = Relationship(0b0100);

/// `A` and `B` have no point in common.
pub const DISJOINT: Relationship = Relationship(0b1000);

impl Relationship {
    /// The all-unknown mask.
    pub const UNKNOWN: Relationship = Relationship(0);

    /// True if every bit of `bits` is set in `self`.
    pub fn is_set(self, bits: Relationship) -> bool {
        self.0 & bits.0 == bits.0
    }

    /// True if no bit is set (nothing was provable).
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Swap the `CONTAINS` and `WITHIN` bits, preserving the rest.
    ///
    /// `A.relate(B)` and `B.relate(A)` are related by exactly this swap:
    /// `CONTAINS` in one direction is `WITHIN` in the other, and the
    /// `INTERSECTS`/`DISJOINT` bits are symmetric.
    pub fn invert(self) -> Relationship {
        let fixed = self.0 & !(CONTAINS.0 | WITHIN.0);
        let mut swapped = fixed;
        if self.is_set(CONTAINS) {
            swapped |= WITHIN.0;
        }
        if self.is_set(WITHIN) {
            swapped |= CONTAINS.0;
        }
        Relationship(swapped)
    }
}

impl BitOr for Relationship {
    type Output = Relationship;

    fn bitor(self, rhs: Relationship) -> Relationship {
        Relationship(self.0 | rhs.0)
    }
}

impl BitOrAssign for Relationship {
    fn bitor_assign(&mut self, rhs: Relationship) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Relationship {
    type Output = Relationship;

    fn bitand(self, rhs: Relationship) -> Relationship {
        Relationship(self.0 & rhs.0)
    }
}

impl fmt::Debug for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "UNKNOWN");
        }
        let mut first = true;
        for (bit, name) in [
            (CONTAINS, "CONTAINS"),
            (WITHIN, "WITHIN"),
            (INTERSECTS, "INTERSECTS"),
            (DISJOINT, "DISJOINT"),
        ] {
            if self.is_set(bit) {
                if !first {
                    write!(f, "|")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }
        Ok(())
    }
}

//! Spherical region algebra.
//!
//! This crate models regions on the unit sphere — circles (spherical caps)
//! and longitude/latitude boxes — composed through boolean union and
//! intersection into region trees, with point-membership tests, pairwise
//! spatial-relation classification, and a self-describing binary codec.
//! It is the region layer that spatial indexing and range-query support
//! for point catalogs (e.g. astronomical surveys) is built on.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                           Region                            │
//! │   Circle │ Box │ UnionRegion │ IntersectionRegion (nested)  │
//! ├─────────────────────────────────────────────────────────────┤
//! │ contains(point)     exact at every node                     │
//! │ relate(region)      exact leaf-leaf,                        │
//! │                     conservative when a compound is involved│
//! │ encode()/decode()   tagged recursive binary codec           │
//! │ regions()           one-level operand flattening            │
//! │ Display/FromStr     evaluable textual rendering             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Relations are reported as a 4-bit [`Relationship`] mask over
//! [`CONTAINS`], [`WITHIN`], [`INTERSECTS`], and [`DISJOINT`]. For any
//! comparison involving a compound region the mask is a conservative
//! approximation: a set bit is always true, an unset bit is unknown. See
//! [`compound`] for the reduction rules.
//!
//! All types are immutable values; every operation is pure, synchronous,
//! and safe to share across threads without locking.
//!
//! # Example
//!
//! ```
//! use sphere_region::{Angle, Circle, LonLat, LonLatBox, Region, UnionRegion, UnitVector3d};
//!
//! let circle = Circle::new(
//!     UnitVector3d::from(&LonLat::from_degrees(44.0, 45.0)),
//!     Angle::from_degrees(1.0),
//! );
//! let lon_lat_box = LonLatBox::from_degrees(44.5, 43.5, 47.5, 46.5);
//! let union = Region::Union(UnionRegion::new(vec![circle.into(), lon_lat_box.into()]));
//!
//! let p = UnitVector3d::from(&LonLat::from_degrees(45.0, 45.0));
//! assert!(union.contains(&p));
//!
//! let bytes = union.encode();
//! assert_eq!(Region::decode(&bytes).unwrap(), union);
//! ```
//!
//! # Modules
//!
//! - [`angle`], [`lonlat`], [`vector`]: coordinate primitives
//! - [`interval`]: 1-D angular intervals backing [`LonLatBox`]
//! - [`circle`], [`lonlat_box`]: leaf regions with exact geometry
//! - [`compound`]: union/intersection regions and the conservative
//!   relation reduction
//! - [`region`]: the [`Region`] sum type and relation dispatch
//! - [`relationship`]: the relation bit mask
//! - [`codec`]: the self-describing binary encoding
//! - [`text`]: the evaluable textual rendering parser
//! - [`error`]: error types

pub mod angle;
pub mod circle;
pub mod codec;
pub mod compound;
pub mod error;
pub mod interval;
pub mod lonlat;
pub mod lonlat_box;
pub mod region;
pub mod relationship;
pub mod text;
pub mod vector;

pub use angle::Angle;
pub use circle::Circle;
pub use compound::{CompoundRegion, IntersectionRegion, UnionRegion};
pub use error::{RegionError, Result};
pub use interval::{LatInterval, LonInterval};
pub use lonlat::LonLat;
pub use lonlat_box::LonLatBox;
pub use region::Region;
pub use relationship::{Relationship, CONTAINS, DISJOINT, INTERSECTS, WITHIN};
pub use vector::UnitVector3d;

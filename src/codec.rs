//! Self-describing binary region codec.
//!
//! Every region encodes to a one-byte type tag followed by a
//! variant-specific payload; compound payloads embed each operand's full
//! encoding recursively, so any buffer is decodable without out-of-band
//! type information.
//!
//! # Format
//!
//! All multi-byte values are little-endian.
//!
//! ```text
//! region:        tag (1B) + payload
//!
//! Circle ('c'):  center x, y, z (3 x f64) + radius radians (f64)
//! Box ('b'):     lon start (f64) + lon extent (f64)
//!                + lat start (f64) + lat end (f64)
//! Union ('u'):   operand count (u64) + operand encodings, in order
//! Intersection ('i'): same layout as Union
//! ```
//!
//! The payload layout of each leaf variant is part of the persisted wire
//! contract and must stay stable across versions.
//!
//! # Entry points
//!
//! [`Region::decode`] accepts any known tag. [`CompoundRegion::decode`]
//! accepts either compound tag. The per-variant decoders
//! ([`Circle::decode`], [`LonLatBox::decode`], [`UnionRegion::decode`],
//! [`IntersectionRegion::decode`]) accept exactly one tag and report
//! `TypeMismatch` for any other known tag. All entry points are thin tag
//! checks around one recursive core and reject truncated buffers, unknown
//! tags, and unconsumed trailing bytes with `Format` errors.

use crate::angle::Angle;
use crate::circle::Circle;
use crate::compound::{CompoundRegion, IntersectionRegion, UnionRegion};
use crate::error::{RegionError, Result};
use crate::interval::{LatInterval, LonInterval};
use crate::lonlat_box::LonLatBox;
use crate::region::Region;
use crate::vector::UnitVector3d;

/// Type tag for [`Circle`].
pub const TAG_CIRCLE: u8 = b'c';

/// Type tag for [`LonLatBox`].
pub const TAG_BOX: u8 = b'b';

/// Type tag for [`UnionRegion`].
pub const TAG_UNION: u8 = b'u';

/// Type tag for [`IntersectionRegion`].
pub const TAG_INTERSECTION: u8 = b'i';

fn tag_name(tag: u8) -> Option<&'static str> {
    match tag {
        TAG_CIRCLE => Some("Circle"),
        TAG_BOX => Some("Box"),
        TAG_UNION => Some("UnionRegion"),
        TAG_INTERSECTION => Some("IntersectionRegion"),
        _ => None,
    }
}

struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Reader { buf, pos: 0 }
    }

    fn read_u8(&mut self) -> Result<u8> {
        let b = *self
            .buf
            .get(self.pos)
            .ok_or_else(|| RegionError::Format("truncated region encoding".into()))?;
        self.pos += 1;
        Ok(b)
    }

    fn read_u64(&mut self) -> Result<u64> {
        let bytes = self.read_exact(8)?;
        Ok(u64::from_le_bytes(bytes.try_into().unwrap()))
    }

    fn read_f64(&mut self) -> Result<f64> {
        let bytes = self.read_exact(8)?;
        Ok(f64::from_le_bytes(bytes.try_into().unwrap()))
    }

    fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.pos + n > self.buf.len() {
            return Err(RegionError::Format("truncated region encoding".into()));
        }
        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }
}

/// Recursive encode core.
fn encode_region(region: &Region, out: &mut Vec<u8>) {
    match region {
        Region::Circle(c) => {
            out.push(TAG_CIRCLE);
            let v = c.center();
            out.extend_from_slice(&v.x().to_le_bytes());
            out.extend_from_slice(&v.y().to_le_bytes());
            out.extend_from_slice(&v.z().to_le_bytes());
            out.extend_from_slice(&c.radius().as_radians().to_le_bytes());
        }
        Region::Box(b) => {
            out.push(TAG_BOX);
            out.extend_from_slice(&b.lon().start().as_radians().to_le_bytes());
            out.extend_from_slice(&b.lon().extent().as_radians().to_le_bytes());
            out.extend_from_slice(&b.lat().lower().as_radians().to_le_bytes());
            out.extend_from_slice(&b.lat().upper().as_radians().to_le_bytes());
        }
        Region::Union(u) => encode_operands(TAG_UNION, u.operands(), out),
        Region::Intersection(i) => encode_operands(TAG_INTERSECTION, i.operands(), out),
    }
}

fn encode_operands(tag: u8, operands: &[Region], out: &mut Vec<u8>) {
    out.push(tag);
    out.extend_from_slice(&(operands.len() as u64).to_le_bytes());
    for op in operands {
        encode_region(op, out);
    }
}

/// Recursive decode core.
fn decode_region(r: &mut Reader<'_>) -> Result<Region> {
    let tag = r.read_u8()?;
    match tag {
        TAG_CIRCLE => {
            let x = r.read_f64()?;
            let y = r.read_f64()?;
            let z = r.read_f64()?;
            let radius = r.read_f64()?;
            Ok(Region::Circle(Circle::new(
                UnitVector3d::new(x, y, z),
                Angle::from_radians(radius),
            )))
        }
        TAG_BOX => {
            let lon_start = r.read_f64()?;
            let lon_extent = r.read_f64()?;
            let lat_start = r.read_f64()?;
            let lat_end = r.read_f64()?;
            Ok(Region::Box(LonLatBox::new(
                LonInterval::from_start_extent(lon_start, lon_extent),
                LatInterval::from_radians(lat_start, lat_end),
            )))
        }
        TAG_UNION => Ok(Region::Union(UnionRegion::new(decode_operands(r)?))),
        TAG_INTERSECTION => Ok(Region::Intersection(IntersectionRegion::new(
            decode_operands(r)?,
        ))),
        other => Err(RegionError::Format(format!(
            "unknown region type tag 0x{other:02x}"
        ))),
    }
}

fn decode_operands(r: &mut Reader<'_>) -> Result<Vec<Region>> {
    let count = r.read_u64()?;
    // Every operand takes at least a tag byte, so the count can never
    // exceed the remaining buffer length in a well-formed encoding.
    if count > r.remaining() as u64 {
        return Err(RegionError::Format(format!(
            "operand count {count} exceeds remaining buffer"
        )));
    }
    let mut operands = Vec::with_capacity(count as usize);
    for _ in 0..count {
        operands.push(decode_region(r)?);
    }
    Ok(operands)
}

fn decode_full(buf: &[u8]) -> Result<Region> {
    let mut r = Reader::new(buf);
    let region = decode_region(&mut r)?;
    if r.remaining() != 0 {
        return Err(RegionError::Format(format!(
            "{} trailing bytes after region encoding",
            r.remaining()
        )));
    }
    Ok(region)
}

fn expect_tag(buf: &[u8], accepted: &[u8], expected: &'static str) -> Result<()> {
    let tag = *buf
        .first()
        .ok_or_else(|| RegionError::Format("empty region encoding".into()))?;
    if accepted.contains(&tag) {
        return Ok(());
    }
    match tag_name(tag) {
        Some(found) => Err(RegionError::TypeMismatch { expected, found }),
        None => Err(RegionError::Format(format!(
            "unknown region type tag 0x{tag:02x}"
        ))),
    }
}

impl Region {
    /// Encode to the canonical self-describing byte form.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        encode_region(self, &mut out);
        out
    }

    /// Decode any region from its canonical byte form.
    pub fn decode(buf: &[u8]) -> Result<Region> {
        tracing::trace!(len = buf.len(), "decoding region");
        decode_full(buf)
    }
}

impl CompoundRegion {
    /// Decode a region whose tag is one of the compound variants.
    pub fn decode(buf: &[u8]) -> Result<CompoundRegion> {
        expect_tag(buf, &[TAG_UNION, TAG_INTERSECTION], "CompoundRegion")?;
        match decode_full(buf)? {
            Region::Union(u) => Ok(CompoundRegion::Union(u)),
            Region::Intersection(i) => Ok(CompoundRegion::Intersection(i)),
            other => Err(RegionError::Format(format!(
                "compound tag decoded to {}",
                other.type_name()
            ))),
        }
    }
}

impl UnionRegion {
    /// Encode to the canonical self-describing byte form.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        encode_operands(TAG_UNION, self.operands(), &mut out);
        out
    }

    /// Decode, requiring the union tag.
    pub fn decode(buf: &[u8]) -> Result<UnionRegion> {
        expect_tag(buf, &[TAG_UNION], "UnionRegion")?;
        match decode_full(buf)? {
            Region::Union(u) => Ok(u),
            other => Err(RegionError::Format(format!(
                "union tag decoded to {}",
                other.type_name()
            ))),
        }
    }
}

impl IntersectionRegion {
    /// Encode to the canonical self-describing byte form.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        encode_operands(TAG_INTERSECTION, self.operands(), &mut out);
        out
    }

    /// Decode, requiring the intersection tag.
    pub fn decode(buf: &[u8]) -> Result<IntersectionRegion> {
        expect_tag(buf, &[TAG_INTERSECTION], "IntersectionRegion")?;
        match decode_full(buf)? {
            Region::Intersection(i) => Ok(i),
            other => Err(RegionError::Format(format!(
                "intersection tag decoded to {}",
                other.type_name()
            ))),
        }
    }
}

impl Circle {
    /// Encode to the canonical self-describing byte form.
    pub fn encode(&self) -> Vec<u8> {
        Region::Circle(*self).encode()
    }

    /// Decode, requiring the circle tag.
    pub fn decode(buf: &[u8]) -> Result<Circle> {
        expect_tag(buf, &[TAG_CIRCLE], "Circle")?;
        match decode_full(buf)? {
            Region::Circle(c) => Ok(c),
            other => Err(RegionError::Format(format!(
                "circle tag decoded to {}",
                other.type_name()
            ))),
        }
    }
}

impl LonLatBox {
    /// Encode to the canonical self-describing byte form.
    pub fn encode(&self) -> Vec<u8> {
        Region::Box(*self).encode()
    }

    /// Decode, requiring the box tag.
    pub fn decode(buf: &[u8]) -> Result<LonLatBox> {
        expect_tag(buf, &[TAG_BOX], "Box")?;
        match decode_full(buf)? {
            Region::Box(b) => Ok(b),
            other => Err(RegionError::Format(format!(
                "box tag decoded to {}",
                other.type_name()
            ))),
        }
    }
}

// Regions participate in generic serde protocols through their canonical
// byte encoding, so any serde format round-trips a region tree the same way
// the binary codec does.

impl serde::Serialize for Region {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bytes(&self.encode())
    }
}

impl<'de> serde::Deserialize<'de> for Region {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Region, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct BytesVisitor;

        impl<'de> serde::de::Visitor<'de> for BytesVisitor {
            type Value = Vec<u8>;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a region encoding as bytes")
            }

            fn visit_bytes<E: serde::de::Error>(
                self,
                v: &[u8],
            ) -> std::result::Result<Vec<u8>, E> {
                Ok(v.to_vec())
            }

            fn visit_byte_buf<E: serde::de::Error>(
                self,
                v: Vec<u8>,
            ) -> std::result::Result<Vec<u8>, E> {
                Ok(v)
            }

            fn visit_seq<A: serde::de::SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> std::result::Result<Vec<u8>, A::Error> {
                let mut out = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(b) = seq.next_element::<u8>()? {
                    out.push(b);
                }
                Ok(out)
            }
        }

        let bytes = deserializer.deserialize_byte_buf(BytesVisitor)?;
        Region::decode(&bytes).map_err(serde::de::Error::custom)
    }
}

//! Evaluable textual rendering.
//!
//! `Display`/`Debug` render every region as constructor-call syntax, e.g.
//!
//! ```text
//! UnionRegion(Circle(UnitVector3d(0.5, 0.5, 0.7071067811865476), Angle(0.017453292519943295)), Box(LonInterval(0.7766715171374766, 0.05235987755982988), LatInterval(0.7592182246175333, 0.8115781021773633)))
//! ```
//!
//! This module re-parses that syntax against a fixed table of constructor
//! names, so `text.parse::<Region>()` reproduces a structurally equal
//! region. Constructors:
//!
//! | name                 | arguments                              |
//! |----------------------|----------------------------------------|
//! | `Circle`             | `UnitVector3d`, `Angle`                |
//! | `Box`                | `LonInterval`, `LatInterval`           |
//! | `UnionRegion`        | zero or more regions                   |
//! | `IntersectionRegion` | zero or more regions                   |
//! | `UnitVector3d`       | x, y, z                                |
//! | `Angle`              | radians                                |
//! | `LonInterval`        | start radians, extent radians          |
//! | `LatInterval`        | lower radians, upper radians           |

use crate::angle::Angle;
use crate::circle::Circle;
use crate::compound::{IntersectionRegion, UnionRegion};
use crate::error::{RegionError, Result};
use crate::interval::{LatInterval, LonInterval};
use crate::lonlat_box::LonLatBox;
use crate::region::Region;
use crate::vector::UnitVector3d;
use std::str::FromStr;

impl FromStr for Region {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Region> {
        let mut parser = Parser::new(s);
        let node = parser.parse_call()?;
        parser.expect_end()?;
        eval_region(&node)
    }
}

/// One parsed constructor call: a name and its argument list, where each
/// argument is either a nested call or a number.
struct Call {
    name: String,
    args: Vec<Arg>,
}

enum Arg {
    Call(Call),
    Number(f64),
}

struct Parser<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Parser {
            src,
            bytes: src.as_bytes(),
            pos: 0,
        }
    }

    fn skip_ws(&mut self) {
        while self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn peek(&mut self) -> Option<u8> {
        self.skip_ws();
        self.bytes.get(self.pos).copied()
    }

    fn expect_byte(&mut self, b: u8) -> Result<()> {
        match self.peek() {
            Some(found) if found == b => {
                self.pos += 1;
                Ok(())
            }
            Some(found) => Err(RegionError::Parse(format!(
                "expected '{}' at offset {}, found '{}'",
                b as char, self.pos, found as char
            ))),
            None => Err(RegionError::Parse(format!(
                "expected '{}' at end of input",
                b as char
            ))),
        }
    }

    fn expect_end(&mut self) -> Result<()> {
        if self.peek().is_some() {
            return Err(RegionError::Parse(format!(
                "trailing input at offset {}",
                self.pos
            )));
        }
        Ok(())
    }

    fn parse_ident(&mut self) -> Result<String> {
        self.skip_ws();
        let start = self.pos;
        while self
            .bytes
            .get(self.pos)
            .is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'_')
        {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(RegionError::Parse(format!(
                "expected constructor name at offset {start}"
            )));
        }
        Ok(self.src[start..self.pos].to_string())
    }

    fn parse_call(&mut self) -> Result<Call> {
        let name = self.parse_ident()?;
        self.expect_byte(b'(')?;
        let mut args = Vec::new();
        if self.peek() == Some(b')') {
            self.pos += 1;
            return Ok(Call { name, args });
        }
        loop {
            args.push(self.parse_arg()?);
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b')') => {
                    self.pos += 1;
                    return Ok(Call { name, args });
                }
                Some(found) => {
                    return Err(RegionError::Parse(format!(
                        "expected ',' or ')' at offset {}, found '{}'",
                        self.pos, found as char
                    )))
                }
                None => {
                    return Err(RegionError::Parse(
                        "unterminated argument list".to_string(),
                    ))
                }
            }
        }
    }

    fn parse_arg(&mut self) -> Result<Arg> {
        match self.peek() {
            Some(b) if b.is_ascii_alphabetic() || b == b'_' => {
                Ok(Arg::Call(self.parse_call()?))
            }
            Some(_) => Ok(Arg::Number(self.parse_number()?)),
            None => Err(RegionError::Parse("expected argument".to_string())),
        }
    }

    fn parse_number(&mut self) -> Result<f64> {
        self.skip_ws();
        let start = self.pos;
        while self.bytes.get(self.pos).is_some_and(|b| {
            b.is_ascii_digit() || matches!(*b, b'.' | b'-' | b'+' | b'e' | b'E')
        }) {
            self.pos += 1;
        }
        self.src[start..self.pos].parse::<f64>().map_err(|_| {
            RegionError::Parse(format!("invalid number at offset {start}"))
        })
    }
}

fn eval_region(call: &Call) -> Result<Region> {
    match call.name.as_str() {
        "Circle" => {
            let [center, radius] = expect_args::<2>(call)?;
            Ok(Region::Circle(Circle::new(
                eval_vector(expect_call(center)?)?,
                eval_angle(expect_call(radius)?)?,
            )))
        }
        "Box" => {
            let [lon, lat] = expect_args::<2>(call)?;
            Ok(Region::Box(LonLatBox::new(
                eval_lon_interval(expect_call(lon)?)?,
                eval_lat_interval(expect_call(lat)?)?,
            )))
        }
        "UnionRegion" => Ok(Region::Union(UnionRegion::new(eval_operands(call)?))),
        "IntersectionRegion" => Ok(Region::Intersection(IntersectionRegion::new(
            eval_operands(call)?,
        ))),
        other => Err(RegionError::Parse(format!(
            "unknown region constructor '{other}'"
        ))),
    }
}

fn eval_operands(call: &Call) -> Result<Vec<Region>> {
    call.args
        .iter()
        .map(|arg| eval_region(expect_call(arg)?))
        .collect()
}

fn eval_vector(call: &Call) -> Result<UnitVector3d> {
    check_name(call, "UnitVector3d")?;
    let [x, y, z] = expect_args::<3>(call)?;
    Ok(UnitVector3d::new(
        expect_number(x)?,
        expect_number(y)?,
        expect_number(z)?,
    ))
}

fn eval_angle(call: &Call) -> Result<Angle> {
    check_name(call, "Angle")?;
    let [radians] = expect_args::<1>(call)?;
    Ok(Angle::from_radians(expect_number(radians)?))
}

fn eval_lon_interval(call: &Call) -> Result<LonInterval> {
    check_name(call, "LonInterval")?;
    let [start, extent] = expect_args::<2>(call)?;
    Ok(LonInterval::from_start_extent(
        expect_number(start)?,
        expect_number(extent)?,
    ))
}

fn eval_lat_interval(call: &Call) -> Result<LatInterval> {
    check_name(call, "LatInterval")?;
    let [lower, upper] = expect_args::<2>(call)?;
    Ok(LatInterval::from_radians(
        expect_number(lower)?,
        expect_number(upper)?,
    ))
}

fn check_name(call: &Call, expected: &str) -> Result<()> {
    if call.name != expected {
        return Err(RegionError::Parse(format!(
            "expected {expected}, found '{}'",
            call.name
        )));
    }
    Ok(())
}

fn expect_args<const N: usize>(call: &Call) -> Result<[&Arg; N]> {
    if call.args.len() != N {
        return Err(RegionError::Parse(format!(
            "{} takes {N} arguments, found {}",
            call.name,
            call.args.len()
        )));
    }
    let mut out = [&call.args[0]; N];
    for (slot, arg) in out.iter_mut().zip(call.args.iter()) {
        *slot = arg;
    }
    Ok(out)
}

fn expect_call(arg: &Arg) -> Result<&Call> {
    match arg {
        Arg::Call(c) => Ok(c),
        Arg::Number(n) => Err(RegionError::Parse(format!(
            "expected constructor call, found number {n}"
        ))),
    }
}

fn expect_number(arg: &Arg) -> Result<f64> {
    match arg {
        Arg::Number(n) => Ok(*n),
        Arg::Call(c) => Err(RegionError::Parse(format!(
            "expected number, found '{}'", c.name
        ))),
    }
}

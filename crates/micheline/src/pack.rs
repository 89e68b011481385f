//! Binary encoding of Micheline, as produced by the Michelson `PACK`
//! instruction.
//!
//! Packed data starts with the `0x05` watermark followed by the node:
//! - int: tag `0x00`, then a signed zarith (6 bits in the first byte with
//!   a sign bit, 7 bits per following byte, high bit as continuation).
//! - string, bytes, sequence: tags `0x01`, `0x0a`, `0x02`, then a big-endian
//!   `u32` length and the payload.
//! - primitive application without annotations: tag `0x03`, `0x05` or `0x07`
//!   for 0, 1 or 2 arguments, then the primitive code and the arguments.
//!
//! `pack` is schema-directed: values are first normalised against a [`Ty`]
//! (an `address` string becomes its 22 bytes binary form) then encoded.
//! `encode` skips the normalisation.
use num_bigint::{BigInt, BigUint, Sign};

use crate::node::{left, pair, right, seq, some};
use crate::{Address, Error, Micheline, Result, Ty};

pub const PACK_WATERMARK: u8 = 0x05;

const TAG_INT: u8 = 0x00;
const TAG_STRING: u8 = 0x01;
const TAG_SEQ: u8 = 0x02;
const TAG_PRIM_0: u8 = 0x03;
const TAG_PRIM_1: u8 = 0x05;
const TAG_PRIM_2: u8 = 0x07;
const TAG_BYTES: u8 = 0x0a;

/// Nesting limit of `unpack`, same as serde_json's.
const MAX_DEPTH: usize = 128;

const D_FALSE: u8 = 0x03;
const D_LEFT: u8 = 0x05;
const D_NONE: u8 = 0x06;
const D_PAIR: u8 = 0x07;
const D_RIGHT: u8 = 0x08;
const D_SOME: u8 = 0x09;
const D_TRUE: u8 = 0x0a;
const D_UNIT: u8 = 0x0b;

/// Packs the value as the given type.
pub fn pack(value: &Micheline, ty: &Ty) -> Result<Vec<u8>> {
    let normalized = normalize(value, ty)?;
    Ok(encode(&normalized))
}

/// Packs the value without type normalisation.
pub fn encode(value: &Micheline) -> Vec<u8> {
    let mut out = vec![PACK_WATERMARK];
    write_node(value, &mut out);
    out
}

/// Decodes packed bytes into an untyped Micheline value.
///
/// Addresses come back as their binary `Bytes` form, since the type is not
/// known here.
pub fn unpack(packed: &[u8]) -> Result<Micheline> {
    let mut reader = Reader::new(packed);

    let watermark = reader.byte()?;
    if watermark != PACK_WATERMARK {
        return Err(Error::Unpack(format!(
            "expected watermark {:#04x}, found {:#04x}",
            PACK_WATERMARK, watermark
        )));
    }

    let value = reader.node(0)?;

    if !reader.is_empty() {
        return Err(Error::Unpack(format!(
            "{} trailing bytes after the packed value",
            reader.remaining()
        )));
    }

    Ok(value)
}

fn normalize(value: &Micheline, ty: &Ty) -> Result<Micheline> {
    match (ty, value) {
        (Ty::Unit, Micheline::Unit)
        | (Ty::Bool, Micheline::True | Micheline::False)
        | (Ty::Int | Ty::Timestamp, Micheline::Int(_))
        | (Ty::String, Micheline::String(_))
        | (Ty::Bytes | Ty::Address, Micheline::Bytes(_))
        | (Ty::Option(_), Micheline::None) => Ok(value.clone()),
        (Ty::Nat | Ty::Mutez, Micheline::Int(v)) => {
            if v.sign() == Sign::Minus {
                Err(Error::NegativeNat(v.clone()))
            } else {
                Ok(value.clone())
            }
        }
        (Ty::Address, Micheline::String(s)) => {
            Ok(Micheline::Bytes(Address::new(s.as_str()).to_bytes()?))
        }
        (Ty::Pair(lt, rt), Micheline::Pair(l, r)) => {
            Ok(pair(normalize(l, lt)?, normalize(r, rt)?))
        }
        (Ty::Or(lt, _), Micheline::Left(v)) => Ok(left(normalize(v, lt)?)),
        (Ty::Or(_, rt), Micheline::Right(v)) => Ok(right(normalize(v, rt)?)),
        (Ty::Option(t), Micheline::Some(v)) => Ok(some(normalize(v, t)?)),
        (Ty::List(t), Micheline::Seq(items)) => {
            let items = items
                .iter()
                .map(|item| normalize(item, t))
                .collect::<Result<Vec<_>>>()?;
            Ok(seq(items))
        }
        (ty, value) => Err(Error::TypeMismatch {
            expected: ty.to_string(),
            found: value.to_string(),
        }),
    }
}

fn write_node(value: &Micheline, out: &mut Vec<u8>) {
    match value {
        Micheline::Int(v) => {
            out.push(TAG_INT);
            write_zarith(v, out);
        }
        Micheline::String(s) => {
            out.push(TAG_STRING);
            write_len_prefixed(s.as_bytes(), out);
        }
        Micheline::Bytes(b) => {
            out.push(TAG_BYTES);
            write_len_prefixed(b, out);
        }
        Micheline::Seq(items) => {
            let mut inner = vec![];
            for item in items {
                write_node(item, &mut inner);
            }
            out.push(TAG_SEQ);
            write_len_prefixed(&inner, out);
        }
        Micheline::Pair(l, r) => {
            out.extend([TAG_PRIM_2, D_PAIR]);
            write_node(l, out);
            write_node(r, out);
        }
        Micheline::Left(v) => write_prim_1(D_LEFT, v, out),
        Micheline::Right(v) => write_prim_1(D_RIGHT, v, out),
        Micheline::Some(v) => write_prim_1(D_SOME, v, out),
        Micheline::None => out.extend([TAG_PRIM_0, D_NONE]),
        Micheline::Unit => out.extend([TAG_PRIM_0, D_UNIT]),
        Micheline::True => out.extend([TAG_PRIM_0, D_TRUE]),
        Micheline::False => out.extend([TAG_PRIM_0, D_FALSE]),
    }
}

fn write_prim_1(code: u8, arg: &Micheline, out: &mut Vec<u8>) {
    out.extend([TAG_PRIM_1, code]);
    write_node(arg, out);
}

fn write_len_prefixed(payload: &[u8], out: &mut Vec<u8>) {
    out.extend((payload.len() as u32).to_be_bytes());
    out.extend_from_slice(payload);
}

fn write_zarith(value: &BigInt, out: &mut Vec<u8>) {
    let magnitude = value.magnitude();
    let low = magnitude.iter_u32_digits().next().unwrap_or(0);

    let mut first = (low & 0x3f) as u8;
    if value.sign() == Sign::Minus {
        first |= 0x40;
    }

    let mut rest: BigUint = magnitude >> 6u32;
    if rest.bits() == 0 {
        out.push(first);
        return;
    }
    out.push(first | 0x80);

    loop {
        let byte = (rest.iter_u32_digits().next().unwrap_or(0) & 0x7f) as u8;
        rest >>= 7u32;
        if rest.bits() == 0 {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}

struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    fn is_empty(&self) -> bool {
        self.offset >= self.bytes.len()
    }

    fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.offset)
    }

    fn byte(&mut self) -> Result<u8> {
        let b = self
            .bytes
            .get(self.offset)
            .copied()
            .ok_or_else(|| Error::Unpack(format!("buffer too short: offset ({})", self.offset)))?;
        self.offset += 1;
        Ok(b)
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(Error::Unpack(format!(
                "buffer too short: {} bytes requested at offset ({}), {} left",
                len,
                self.offset,
                self.remaining()
            )));
        }

        let slice = &self.bytes[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }

    fn len_prefixed(&mut self) -> Result<&'a [u8]> {
        let raw = self.take(4)?;
        let len = u32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]) as usize;
        self.take(len)
    }

    fn node(&mut self, depth: usize) -> Result<Micheline> {
        if depth > MAX_DEPTH {
            return Err(Error::Unpack(format!(
                "nesting too deep: more than {} levels",
                MAX_DEPTH
            )));
        }

        let tag = self.byte()?;

        match tag {
            TAG_INT => Ok(Micheline::Int(self.zarith()?)),
            TAG_STRING => {
                let raw = self.len_prefixed()?;
                String::from_utf8(raw.to_vec())
                    .map(Micheline::String)
                    .map_err(|e| Error::Unpack(format!("invalid string: {}", e)))
            }
            TAG_BYTES => Ok(Micheline::Bytes(self.len_prefixed()?.to_vec())),
            TAG_SEQ => {
                let mut inner = Reader::new(self.len_prefixed()?);
                let mut items = vec![];
                while !inner.is_empty() {
                    items.push(inner.node(depth + 1)?);
                }
                Ok(Micheline::Seq(items))
            }
            TAG_PRIM_0 => match self.byte()? {
                D_NONE => Ok(Micheline::None),
                D_UNIT => Ok(Micheline::Unit),
                D_TRUE => Ok(Micheline::True),
                D_FALSE => Ok(Micheline::False),
                code => Err(unknown_prim(code, 0)),
            },
            TAG_PRIM_1 => {
                let code = self.byte()?;
                let arg = Box::new(self.node(depth + 1)?);
                match code {
                    D_LEFT => Ok(Micheline::Left(arg)),
                    D_RIGHT => Ok(Micheline::Right(arg)),
                    D_SOME => Ok(Micheline::Some(arg)),
                    code => Err(unknown_prim(code, 1)),
                }
            }
            TAG_PRIM_2 => {
                let code = self.byte()?;
                if code != D_PAIR {
                    return Err(unknown_prim(code, 2));
                }
                let l = self.node(depth + 1)?;
                let r = self.node(depth + 1)?;
                Ok(pair(l, r))
            }
            tag => Err(Error::Unpack(format!("unsupported node tag {:#04x}", tag))),
        }
    }

    fn zarith(&mut self) -> Result<BigInt> {
        let first = self.byte()?;
        let negative = first & 0x40 != 0;

        let mut magnitude = BigUint::from(first & 0x3f);
        let mut shift = 6u32;
        let mut more = first & 0x80 != 0;

        while more {
            let b = self.byte()?;
            magnitude |= BigUint::from(b & 0x7f) << shift;
            shift += 7;
            more = b & 0x80 != 0;
        }

        let sign = if negative { Sign::Minus } else { Sign::Plus };
        Ok(BigInt::from_biguint(sign, magnitude))
    }
}

fn unknown_prim(code: u8, arity: usize) -> Error {
    Error::Unpack(format!(
        "unsupported primitive code {:#04x} with {} arguments",
        code, arity
    ))
}

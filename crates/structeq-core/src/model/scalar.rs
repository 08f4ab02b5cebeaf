//! Scalar payloads and mapping keys.
//!
//! A [`Scalar`] carries strict type identity: two scalars are only
//! comparable when their concrete variant matches, even if the numeric
//! values coincide (`Int(1)` vs `Int32(1)` is a type mismatch, not a
//! value mismatch). Equality is full value identity; floats compare
//! bit-for-bit, so `NaN == NaN` within the same width and `0.0 != -0.0`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A primitive comparison unit with a fixed concrete type.
///
/// The roster covers what the YAML boundary can produce (`Int`, `UInt`,
/// `Float64`, `Bool`, `Str`, `Null`) plus the narrower numeric widths
/// (`Int32`, `UInt32`, `Float32`) so API consumers building values
/// directly can exercise the strict width contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Int32(i32),
    UInt32(u32),
    Float32(f32),
    Float64(f64),
    Str(String),
}

impl Scalar {
    /// The concrete type name used in type-mismatch reporting.
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "bool",
            Scalar::Int(_) => "i64",
            Scalar::UInt(_) => "u64",
            Scalar::Int32(_) => "i32",
            Scalar::UInt32(_) => "u32",
            Scalar::Float32(_) => "f32",
            Scalar::Float64(_) => "f64",
            Scalar::Str(_) => "string",
        }
    }

    /// True when both scalars have the same concrete type.
    pub fn same_type(&self, other: &Scalar) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::Null, Scalar::Null) => true,
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (Scalar::UInt(a), Scalar::UInt(b)) => a == b,
            (Scalar::Int32(a), Scalar::Int32(b)) => a == b,
            (Scalar::UInt32(a), Scalar::UInt32(b)) => a == b,
            // Bit-for-bit identity keeps reflexivity for NaN payloads
            (Scalar::Float32(a), Scalar::Float32(b)) => a.to_bits() == b.to_bits(),
            (Scalar::Float64(a), Scalar::Float64(b)) => a.to_bits() == b.to_bits(),
            (Scalar::Str(a), Scalar::Str(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Scalar {}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::UInt(u) => write!(f, "{}", u),
            Scalar::Int32(i) => write!(f, "{}", i),
            Scalar::UInt32(u) => write!(f, "{}", u),
            Scalar::Float32(x) => write!(f, "{}", x),
            Scalar::Float64(x) => write!(f, "{}", x),
            Scalar::Str(s) => write!(f, "{}", s),
        }
    }
}

/// A mapping key: the hashable, totally ordered subset of scalars.
///
/// Keys are ordered (`Ord`) so mappings have a deterministic iteration
/// order, which makes extra/missing-key reporting deterministic too.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Key {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Str(String),
}

impl Key {
    pub fn type_name(&self) -> &'static str {
        match self {
            Key::Bool(_) => "bool",
            Key::Int(_) => "i64",
            Key::UInt(_) => "u64",
            Key::Str(_) => "string",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Bool(b) => write!(f, "{}", b),
            Key::Int(i) => write!(f, "{}", i),
            Key::UInt(u) => write!(f, "{}", u),
            // String keys render quoted everywhere they appear in messages
            Key::Str(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

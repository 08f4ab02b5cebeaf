//! YAML codec with model validation
//!
//! Converts between YAML text and the generic `Value` model, rejecting
//! documents the comparable model cannot represent.

use crate::errors::{DocumentError, DocumentSide, Result};
use structeq_core::model::{Key, Mapping, Scalar, Value};

/// Decode a YAML document into the generic value model.
///
/// YAML numbers map to `Int` when they fit `i64`, to `UInt` for larger
/// non-negative values, and to `Float64` otherwise, following the codec's
/// own number model. `side` names the document in any error.
pub fn decode(text: &str, side: DocumentSide) -> Result<Value> {
    let raw: serde_yaml::Value =
        serde_yaml::from_str(text).map_err(|source| DocumentError::Decode { side, source })?;
    from_yaml(raw, side)
}

/// Re-serialize a decoded value as canonical YAML text.
pub fn encode(value: &Value, side: DocumentSide) -> Result<String> {
    let raw = to_yaml(value);
    serde_yaml::to_string(&raw).map_err(|source| DocumentError::Serialize { side, source })
}

/// Canonicalize a document: decode followed by re-serialization.
///
/// The canonical form normalizes formatting artifacts (indentation, flow
/// vs block style, quoting) and mapping key order without touching
/// document semantics.
pub fn canonical(text: &str, side: DocumentSide) -> Result<String> {
    let value = decode(text, side)?;
    encode(&value, side)
}

fn from_yaml(raw: serde_yaml::Value, side: DocumentSide) -> Result<Value> {
    match raw {
        serde_yaml::Value::Null => Ok(Value::Scalar(Scalar::Null)),
        serde_yaml::Value::Bool(b) => Ok(Value::Scalar(Scalar::Bool(b))),
        serde_yaml::Value::Number(number) => Ok(Value::Scalar(scalar_from_number(&number, side)?)),
        serde_yaml::Value::String(s) => Ok(Value::Scalar(Scalar::Str(s))),
        serde_yaml::Value::Sequence(items) => {
            let mut converted = Vec::with_capacity(items.len());
            for item in items {
                converted.push(from_yaml(item, side)?);
            }
            Ok(Value::Sequence(converted))
        }
        serde_yaml::Value::Mapping(entries) => {
            let mut converted = Mapping::new();
            for (raw_key, raw_value) in entries {
                let key = key_from_yaml(raw_key, side)?;
                let value = from_yaml(raw_value, side)?;
                if converted.insert(key.clone(), value).is_some() {
                    return Err(DocumentError::Unsupported {
                        side,
                        reason: format!("duplicate mapping key {}", key),
                    });
                }
            }
            Ok(Value::Mapping(converted))
        }
        serde_yaml::Value::Tagged(tagged) => Err(DocumentError::Unsupported {
            side,
            reason: format!("unsupported YAML tag {}", tagged.tag),
        }),
    }
}

fn scalar_from_number(number: &serde_yaml::Number, side: DocumentSide) -> Result<Scalar> {
    if let Some(i) = number.as_i64() {
        Ok(Scalar::Int(i))
    } else if let Some(u) = number.as_u64() {
        Ok(Scalar::UInt(u))
    } else if let Some(f) = number.as_f64() {
        Ok(Scalar::Float64(f))
    } else {
        Err(DocumentError::Unsupported {
            side,
            reason: format!("unrepresentable number {}", number),
        })
    }
}

fn key_from_yaml(raw: serde_yaml::Value, side: DocumentSide) -> Result<Key> {
    match raw {
        serde_yaml::Value::Bool(b) => Ok(Key::Bool(b)),
        serde_yaml::Value::String(s) => Ok(Key::Str(s)),
        serde_yaml::Value::Number(number) => match scalar_from_number(&number, side)? {
            Scalar::Int(i) => Ok(Key::Int(i)),
            Scalar::UInt(u) => Ok(Key::UInt(u)),
            other => Err(DocumentError::Unsupported {
                side,
                reason: format!("unsupported mapping key type <{}>", other.type_name()),
            }),
        },
        other => Err(DocumentError::Unsupported {
            side,
            reason: format!("unsupported mapping key type <{}>", type_label(&other)),
        }),
    }
}

fn type_label(raw: &serde_yaml::Value) -> &'static str {
    match raw {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "bool",
        serde_yaml::Value::Number(_) => "number",
        serde_yaml::Value::String(_) => "string",
        serde_yaml::Value::Sequence(_) => "sequence",
        serde_yaml::Value::Mapping(_) => "mapping",
        serde_yaml::Value::Tagged(_) => "tagged",
    }
}

fn to_yaml(value: &Value) -> serde_yaml::Value {
    match value {
        Value::Scalar(scalar) => scalar_to_yaml(scalar),
        Value::Sequence(items) => {
            serde_yaml::Value::Sequence(items.iter().map(to_yaml).collect())
        }
        Value::Mapping(entries) => {
            let mut mapping = serde_yaml::Mapping::new();
            for (key, value) in entries {
                mapping.insert(key_to_yaml(key), to_yaml(value));
            }
            serde_yaml::Value::Mapping(mapping)
        }
    }
}

fn scalar_to_yaml(scalar: &Scalar) -> serde_yaml::Value {
    match scalar {
        Scalar::Null => serde_yaml::Value::Null,
        Scalar::Bool(b) => serde_yaml::Value::Bool(*b),
        Scalar::Int(i) => serde_yaml::Value::Number((*i).into()),
        Scalar::UInt(u) => serde_yaml::Value::Number((*u).into()),
        // Narrow widths widen on the way out; decode never produces them
        Scalar::Int32(i) => serde_yaml::Value::Number(i64::from(*i).into()),
        Scalar::UInt32(u) => serde_yaml::Value::Number(u64::from(*u).into()),
        Scalar::Float32(f) => serde_yaml::Value::Number(f64::from(*f).into()),
        Scalar::Float64(f) => serde_yaml::Value::Number((*f).into()),
        Scalar::Str(s) => serde_yaml::Value::String(s.clone()),
    }
}

fn key_to_yaml(key: &Key) -> serde_yaml::Value {
    match key {
        Key::Bool(b) => serde_yaml::Value::Bool(*b),
        Key::Int(i) => serde_yaml::Value::Number((*i).into()),
        Key::UInt(u) => serde_yaml::Value::Number((*u).into()),
        Key::Str(s) => serde_yaml::Value::String(s.clone()),
    }
}

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Record instance <-> ordered mapping conversion.
//!
//! The mapping is the canonical intermediate representation shared by both
//! JSON codecs: an insertion-ordered, string-keyed container whose entries
//! follow field declaration order. Nested records expand to nested mappings,
//! lists to ordered sequences, and scalars are carried natively (bytes as
//! base64 strings, since JSON has no binary scalar).

use crate::codec::Mapping;
use crate::error::{Error, Result};
use crate::record::Record;
use crate::schema::{describe, RecordType, ScalarKind, TypeRef};
use crate::value::Value;
use base64::{engine::general_purpose, Engine as _};
use serde_json::Value as Json;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Instance -> mapping
// ---------------------------------------------------------------------------

/// Convert a record instance to an ordered mapping.
///
/// Fields appear in declaration order under their output names. Record
/// values recurse; homogeneous lists of records map element-wise; map values
/// expand entry-wise. Lists mixing record and non-record elements are
/// unsupported.
pub fn to_mapping(record: &Record) -> Result<Mapping> {
    build_mapping(record, None)
}

/// Like [`to_mapping`], restricted to the named top-level fields.
///
/// The allow-list is non-recursive: nested records inside an included field
/// are fully expanded regardless of the list. Names not present in the type
/// are ignored.
pub fn to_mapping_filtered(record: &Record, field_names: &[&str]) -> Result<Mapping> {
    build_mapping(record, Some(field_names))
}

fn build_mapping(record: &Record, allow: Option<&[&str]>) -> Result<Mapping> {
    let descriptors = describe(record.record_type())?;
    let mut out = Mapping::new();
    for (descriptor, value) in descriptors.iter().zip(record.values()) {
        if let Some(names) = allow {
            if !names.contains(&descriptor.name.as_str()) {
                continue;
            }
        }
        out.insert(descriptor.output_name().to_string(), encode_value(value)?);
    }
    Ok(out)
}

fn encode_value(value: &Value) -> Result<Json> {
    match value {
        Value::Null => Ok(Json::Null),
        Value::Bool(b) => Ok(Json::Bool(*b)),
        Value::Int(i) => Ok(Json::Number((*i).into())),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(Json::Number)
            .ok_or_else(|| {
                Error::UnsupportedType("non-finite float has no JSON representation".into())
            }),
        Value::Str(s) => Ok(Json::String(s.clone())),
        Value::Bytes(b) => Ok(Json::String(general_purpose::STANDARD.encode(b))),
        Value::List(items) => {
            let records = items.iter().filter(|i| i.as_record().is_some()).count();
            if records > 0 && records < items.len() {
                return Err(Error::UnsupportedType(
                    "list mixes record and non-record elements".into(),
                ));
            }
            items.iter().map(encode_value).collect::<Result<Vec<_>>>().map(Json::Array)
        }
        Value::Map(entries) => {
            let mut out = Mapping::new();
            for (key, entry) in entries {
                out.insert(key.clone(), encode_value(entry)?);
            }
            Ok(Json::Object(out))
        }
        Value::Record(nested) => Ok(Json::Object(to_mapping(nested)?)),
    }
}

// ---------------------------------------------------------------------------
// Mapping -> instance
// ---------------------------------------------------------------------------

/// Reconstruct a record instance from a mapping.
///
/// For each field of `ty`, looked up by output name (falling back to the
/// field name): record-typed values reconstruct recursively, lists of
/// records element-wise, map entries value-wise; everything else is assigned
/// raw with no coercion. Absent fields take their declared default or fail
/// with [`Error::MissingField`]. Keys that match no field are ignored.
///
/// All registered validators run in declaration order before the instance is
/// returned; the first rejection aborts the whole construction.
pub fn from_mapping(mapping: &Mapping, ty: &Arc<RecordType>) -> Result<Record> {
    let descriptors = describe(ty)?;
    let mut values = Vec::with_capacity(descriptors.len());
    for descriptor in descriptors.iter() {
        let raw = mapping
            .get(descriptor.output_name())
            .or_else(|| mapping.get(&descriptor.name));
        let value = match raw {
            Some(raw) => decode_value(raw, &descriptor.ty)?,
            None => match &descriptor.default {
                Some(default) => default.clone(),
                None => return Err(Error::MissingField(descriptor.name.clone())),
            },
        };
        values.push(value);
    }

    let record = Record::from_parts(ty.clone(), values);
    record.validate()?;
    Ok(record)
}

fn decode_value(raw: &Json, ty: &TypeRef) -> Result<Value> {
    // Optional wrappers recurse into the inner type, so an
    // optional-list-of-record still reconstructs element-wise.
    if let TypeRef::Optional(inner) = ty {
        return if raw.is_null() {
            Ok(Value::Null)
        } else {
            decode_value(raw, inner)
        };
    }

    match (ty, raw) {
        (TypeRef::Record(nested), Json::Object(map)) => {
            Ok(Value::Record(Box::new(from_mapping(map, nested)?)))
        }
        (TypeRef::List(element), Json::Array(items)) => items
            .iter()
            .map(|item| decode_value(item, element))
            .collect::<Result<Vec<_>>>()
            .map(Value::List),
        (TypeRef::Map(_, value_ty), Json::Object(map)) => {
            let mut entries = Vec::with_capacity(map.len());
            for (key, entry) in map {
                entries.push((key.clone(), decode_value(entry, value_ty)?));
            }
            Ok(Value::Map(entries))
        }
        (TypeRef::Scalar(ScalarKind::Bytes), Json::String(text)) => general_purpose::STANDARD
            .decode(text)
            .map(Value::Bytes)
            .map_err(|e| Error::MalformedJson(format!("invalid base64 in bytes field: {}", e))),
        _ => Ok(raw_value(raw)),
    }
}

/// Shape-preserving conversion with no type guidance and no coercion.
fn raw_value(raw: &Json) -> Value {
    match raw {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::MAX)),
        },
        Json::String(s) => Value::Str(s.clone()),
        Json::Array(items) => Value::List(items.iter().map(raw_value).collect()),
        Json::Object(map) => {
            Value::Map(map.iter().map(|(k, v)| (k.clone(), raw_value(v))).collect())
        }
    }
}

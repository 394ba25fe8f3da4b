// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Record introspection: derives the canonical field-descriptor table.

use crate::error::{Error, Result};
use crate::schema::{RecordType, TypeRef};
use crate::value::Value;
use std::sync::Arc;

/// A field's derived, immutable description.
///
/// Derived once per record type from its declarations; `tag` is the 1-based
/// declaration index and fixes field numbering across all emitters.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Field name.
    pub name: String,
    /// Declared type.
    pub ty: TypeRef,
    /// Declared default value (if any).
    pub default: Option<Value>,
    /// Output name override (if any).
    pub alias: Option<String>,
    /// 1-based declaration-order tag.
    pub tag: u32,
}

impl FieldDescriptor {
    /// Whether a default value was declared.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Name used in every output representation: alias if declared, else the
    /// field name.
    pub fn output_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

/// Enumerate a record type's ordered field descriptors.
///
/// Deterministic and idempotent: a pure function of the static declaration.
/// Fails with [`Error::UnsupportedType`] if a declared field type cannot be
/// resolved (a map key that is not a scalar). The result is memoized on the
/// type itself; concurrent first accesses may redundantly recompute and
/// publish, which is harmless since every computation yields the same table.
/// Errors are never cached.
pub fn describe(ty: &Arc<RecordType>) -> Result<Arc<Vec<FieldDescriptor>>> {
    if let Some(cached) = ty.descriptor_cache().load_full() {
        return Ok(cached);
    }

    let mut table = Vec::with_capacity(ty.fields().len());
    for (index, decl) in ty.fields().iter().enumerate() {
        check_resolvable(&decl.ty).map_err(|detail| {
            Error::UnsupportedType(format!("field {}.{}: {}", ty.name(), decl.name, detail))
        })?;
        table.push(FieldDescriptor {
            name: decl.name.clone(),
            ty: decl.ty.clone(),
            default: decl.default.clone(),
            alias: decl.alias.clone(),
            tag: index as u32 + 1,
        });
    }

    let table = Arc::new(table);
    ty.descriptor_cache().store(Some(table.clone()));
    log::debug!("derived {} field descriptors for {}", table.len(), ty.name());
    Ok(table)
}

/// Walk a declared type and reject shapes the schema language cannot express.
fn check_resolvable(ty: &TypeRef) -> std::result::Result<(), String> {
    match ty {
        TypeRef::Scalar(_) | TypeRef::Record(_) | TypeRef::Enum(_) => Ok(()),
        TypeRef::List(inner) | TypeRef::Optional(inner) => check_resolvable(inner),
        TypeRef::Map(key, value) => {
            if !key.is_scalar() {
                return Err("map key must resolve to a scalar type".into());
            }
            check_resolvable(value)
        }
    }
}

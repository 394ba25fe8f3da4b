// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Declared type -> schema-language type tag.

use crate::schema::TypeRef;

/// Map a declared field type to its schema-language tag.
///
/// Pure and total over the type language: scalars map to their fixed names,
/// record/enum references to the referenced type's name, lists prepend
/// `repeated`, optionals are transparent (presence is the schema language's
/// own concern), maps render `map<key,value>`.
pub fn schema_type(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Scalar(kind) => kind.schema_name().to_string(),
        TypeRef::Record(nested) => nested.name().to_string(),
        TypeRef::Enum(nested) => nested.name().to_string(),
        TypeRef::List(inner) => format!("repeated {}", schema_type(inner)),
        TypeRef::Optional(inner) => schema_type(inner),
        TypeRef::Map(key, value) => format!("map<{},{}>", schema_type(key), schema_type(value)),
    }
}

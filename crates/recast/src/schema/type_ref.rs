// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type references for declared record fields.

use crate::schema::{EnumType, RecordType};
use std::sync::Arc;

/// Scalar kinds of the schema language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    Int32,
    Float,
    Str,
    Bytes,
}

impl ScalarKind {
    /// Fixed schema-language name for this scalar.
    pub fn schema_name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int32 => "int32",
            Self::Float => "float",
            Self::Str => "string",
            Self::Bytes => "bytes",
        }
    }
}

/// A declared field type.
///
/// The type language is recursive: lists, optionals, and maps wrap inner
/// type references; record and enum references share the referenced
/// declaration via `Arc`. The type graph is acyclic.
#[derive(Debug, Clone)]
pub enum TypeRef {
    /// Scalar type.
    Scalar(ScalarKind),
    /// Reference to a nested record type.
    Record(Arc<RecordType>),
    /// Reference to an enumeration.
    Enum(Arc<EnumType>),
    /// Homogeneous list of the inner type.
    List(Box<TypeRef>),
    /// Optional wrapper; presence is the schema language's own concern.
    Optional(Box<TypeRef>),
    /// Map from a scalar key type to a value type.
    Map(Box<TypeRef>, Box<TypeRef>),
}

impl TypeRef {
    /// Scalar shorthand.
    pub fn scalar(kind: ScalarKind) -> Self {
        Self::Scalar(kind)
    }

    /// Reference a record type.
    pub fn record(ty: &Arc<RecordType>) -> Self {
        Self::Record(ty.clone())
    }

    /// Reference an enum type.
    pub fn enumeration(ty: &Arc<EnumType>) -> Self {
        Self::Enum(ty.clone())
    }

    /// List of the inner type.
    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    /// Optional wrapper around the inner type.
    pub fn optional(inner: TypeRef) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Map from key type to value type.
    pub fn map(key: TypeRef, value: TypeRef) -> Self {
        Self::Map(Box::new(key), Box::new(value))
    }

    /// Check if this is a scalar type.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Get the referenced record type, if any.
    pub fn as_record(&self) -> Option<&Arc<RecordType>> {
        match self {
            Self::Record(ty) => Some(ty),
            _ => None,
        }
    }

    /// Strip `Optional` wrappers down to the underlying type.
    pub fn unwrap_optional(&self) -> &TypeRef {
        match self {
            Self::Optional(inner) => inner.unwrap_optional(),
            other => other,
        }
    }
}

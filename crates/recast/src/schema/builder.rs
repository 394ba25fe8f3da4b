// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fluent builders for record and enum type declarations.

use crate::schema::{EnumMember, EnumType, FieldDecl, RecordType, ScalarKind, TypeRef, Validator};
use crate::value::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Builder for [`RecordType`] declarations.
///
/// Fields are registered in declaration order; that order is canonical for
/// every emitter. Validators are registered explicitly per field, resolved
/// once here rather than discovered by name convention at call time.
pub struct RecordTypeBuilder {
    name: String,
    fields: Vec<FieldDecl>,
    validators: HashMap<String, Validator>,
}

impl RecordTypeBuilder {
    /// Create a new builder for a record type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            validators: HashMap::new(),
        }
    }

    /// Add a field with an explicit type reference.
    pub fn field(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.fields.push(FieldDecl::new(name, ty));
        self
    }

    /// Add a fully specified field declaration.
    pub fn field_decl(mut self, decl: FieldDecl) -> Self {
        self.fields.push(decl);
        self
    }

    /// Add a field with a declared default value.
    pub fn field_with_default(
        mut self,
        name: impl Into<String>,
        ty: TypeRef,
        default: impl Into<Value>,
    ) -> Self {
        self.fields.push(FieldDecl::new(name, ty).with_default(default));
        self
    }

    /// Add a field emitted under a different output name.
    pub fn field_aliased(
        mut self,
        name: impl Into<String>,
        ty: TypeRef,
        alias: impl Into<String>,
    ) -> Self {
        self.fields.push(FieldDecl::new(name, ty).with_alias(alias));
        self
    }

    /// Add a string field.
    pub fn string_field(self, name: impl Into<String>) -> Self {
        self.field(name, TypeRef::Scalar(ScalarKind::Str))
    }

    /// Add an int32 field.
    pub fn int32_field(self, name: impl Into<String>) -> Self {
        self.field(name, TypeRef::Scalar(ScalarKind::Int32))
    }

    /// Add a float field.
    pub fn float_field(self, name: impl Into<String>) -> Self {
        self.field(name, TypeRef::Scalar(ScalarKind::Float))
    }

    /// Add a bool field.
    pub fn bool_field(self, name: impl Into<String>) -> Self {
        self.field(name, TypeRef::Scalar(ScalarKind::Bool))
    }

    /// Add a bytes field.
    pub fn bytes_field(self, name: impl Into<String>) -> Self {
        self.field(name, TypeRef::Scalar(ScalarKind::Bytes))
    }

    /// Add a list field.
    pub fn list_field(self, name: impl Into<String>, element: TypeRef) -> Self {
        self.field(name, TypeRef::list(element))
    }

    /// Add an optional field. Optional fields default to null, so absence
    /// in a mapping reconstructs as null rather than failing.
    pub fn optional_field(self, name: impl Into<String>, inner: TypeRef) -> Self {
        self.field_decl(FieldDecl::new(name, TypeRef::optional(inner)).with_default(Value::Null))
    }

    /// Add a map field.
    pub fn map_field(self, name: impl Into<String>, key: TypeRef, value: TypeRef) -> Self {
        self.field(name, TypeRef::map(key, value))
    }

    /// Add a nested record field.
    pub fn record_field(self, name: impl Into<String>, ty: &Arc<RecordType>) -> Self {
        self.field(name, TypeRef::record(ty))
    }

    /// Add an enum field.
    pub fn enum_field(self, name: impl Into<String>, ty: &Arc<EnumType>) -> Self {
        self.field(name, TypeRef::enumeration(ty))
    }

    /// Register a validation hook for a field.
    pub fn validator<F>(mut self, field: impl Into<String>, hook: F) -> Self
    where
        F: Fn(&Value) -> std::result::Result<(), String> + Send + Sync + 'static,
    {
        self.validators.insert(field.into(), Arc::new(hook));
        self
    }

    /// Build the shared, read-only record type.
    pub fn build(self) -> Arc<RecordType> {
        Arc::new(RecordType::from_parts(
            self.name,
            self.fields,
            self.validators,
        ))
    }
}

/// Builder for [`EnumType`] declarations.
pub struct EnumTypeBuilder {
    name: String,
    members: Vec<EnumMember>,
    next_value: i32,
}

impl EnumTypeBuilder {
    /// Create a new enum builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
            next_value: 0,
        }
    }

    /// Add a member with auto-incrementing value.
    pub fn member(mut self, name: impl Into<String>) -> Self {
        self.members.push(EnumMember::new(name, self.next_value));
        self.next_value += 1;
        self
    }

    /// Add a member with explicit value.
    pub fn member_value(mut self, name: impl Into<String>, value: i32) -> Self {
        self.members.push(EnumMember::new(name, value));
        self.next_value = value + 1;
        self
    }

    /// Build the shared, read-only enum type.
    pub fn build(self) -> Arc<EnumType> {
        Arc::new(EnumType::from_parts(self.name, self.members))
    }
}

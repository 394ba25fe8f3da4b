// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Record and enum type declarations.

use crate::schema::{FieldDescriptor, TypeRef};
use crate::value::Value;
use arc_swap::ArcSwapOption;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Per-field validation hook, invoked with the field's value at
/// construction time. Returns a rejection message on failure.
pub type Validator = Arc<dyn Fn(&Value) -> std::result::Result<(), String> + Send + Sync>;

// ---------------------------------------------------------------------------
// FieldDecl
// ---------------------------------------------------------------------------

/// A single field declaration as registered on the builder.
#[derive(Debug, Clone)]
pub struct FieldDecl {
    /// Field name.
    pub name: String,
    /// Declared type.
    pub ty: TypeRef,
    /// Default value (if any).
    pub default: Option<Value>,
    /// Output name override used by all emitters (if any).
    pub alias: Option<String>,
}

impl FieldDecl {
    /// Create a field declaration.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            default: None,
            alias: None,
        }
    }

    /// Set default value.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Set output name override.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

// ---------------------------------------------------------------------------
// RecordType
// ---------------------------------------------------------------------------

/// A named, fixed, ordered set of typed fields.
///
/// Declared once (via [`RecordTypeBuilder`](crate::schema::RecordTypeBuilder))
/// and read-only thereafter; shared as `Arc<RecordType>` across instances and
/// codec calls. Declaration order is canonical and fixes field-tag assignment
/// across all emitters.
pub struct RecordType {
    name: String,
    fields: Vec<FieldDecl>,
    validators: HashMap<String, Validator>,
    /// Derived descriptor table, published once on first introspection.
    /// Concurrent first access may redundantly recompute; last store wins
    /// and all results are identical.
    descriptors: ArcSwapOption<Vec<FieldDescriptor>>,
}

impl RecordType {
    pub(crate) fn from_parts(
        name: String,
        fields: Vec<FieldDecl>,
        validators: HashMap<String, Validator>,
    ) -> Self {
        Self {
            name,
            fields,
            validators,
            descriptors: ArcSwapOption::from(None),
        }
    }

    /// Type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordered field declarations.
    pub fn fields(&self) -> &[FieldDecl] {
        &self.fields
    }

    /// Get field declaration by name.
    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get field index by name.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Get the registered validator for a field, if any.
    pub fn validator(&self, name: &str) -> Option<&Validator> {
        self.validators.get(name)
    }

    pub(crate) fn descriptor_cache(&self) -> &ArcSwapOption<Vec<FieldDescriptor>> {
        &self.descriptors
    }
}

impl fmt::Debug for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordType")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .field("validators", &self.validators.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// EnumType
// ---------------------------------------------------------------------------

/// Enum member.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EnumMember {
    /// Member name.
    pub name: String,
    /// Member value; values need not be contiguous.
    pub value: i32,
}

impl EnumMember {
    /// Create an enum member.
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A named ordered enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    name: String,
    members: Vec<EnumMember>,
}

impl EnumType {
    pub(crate) fn from_parts(name: String, members: Vec<EnumMember>) -> Self {
        Self { name, members }
    }

    /// Type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordered members.
    pub fn members(&self) -> &[EnumMember] {
        &self.members
    }

    /// Get member by name.
    pub fn member(&self, name: &str) -> Option<&EnumMember> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Get member by value.
    pub fn member_by_value(&self, value: i32) -> Option<&EnumMember> {
        self.members.iter().find(|m| m.value == value)
    }
}

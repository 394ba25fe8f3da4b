// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Record instance container.

use crate::error::{Error, Result};
use crate::schema::{RecordType, TypeRef};
use crate::value::Value;
use std::sync::Arc;

/// Values bound to a [`RecordType`]'s fields, in declaration order.
///
/// Instances are owned exclusively by the caller; codecs read but never
/// mutate an existing instance. Reconstruction (`from_mapping`/`from_text`)
/// builds brand-new instances.
#[derive(Debug, Clone)]
pub struct Record {
    ty: Arc<RecordType>,
    values: Vec<Value>,
}

impl Record {
    /// Create a new instance with every field set to its declared default,
    /// or the kind default when none was declared.
    pub fn new(ty: &Arc<RecordType>) -> Self {
        let values = ty
            .fields()
            .iter()
            .map(|f| match &f.default {
                Some(v) => v.clone(),
                None => kind_default(&f.ty),
            })
            .collect();
        Self {
            ty: ty.clone(),
            values,
        }
    }

    pub(crate) fn from_parts(ty: Arc<RecordType>, values: Vec<Value>) -> Self {
        debug_assert_eq!(ty.fields().len(), values.len());
        Self { ty, values }
    }

    /// The instance's record type.
    pub fn record_type(&self) -> &Arc<RecordType> {
        &self.ty
    }

    /// The record type's name.
    pub fn type_name(&self) -> &str {
        self.ty.name()
    }

    /// Get a field value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.ty.field_index(name).map(|i| &self.values[i])
    }

    /// Set a field value by name.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let index = self
            .ty
            .field_index(name)
            .ok_or_else(|| Error::MissingField(name.to_string()))?;
        self.values[index] = value.into();
        Ok(())
    }

    /// Iterate over `(field name, value)` pairs in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.ty
            .fields()
            .iter()
            .zip(self.values.iter())
            .map(|(decl, value)| (decl.name.as_str(), value))
    }

    /// Field values in declaration order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Run all registered validation hooks in declaration order.
    ///
    /// The first rejection aborts with [`Error::ValidationFailed`].
    pub fn validate(&self) -> Result<()> {
        for (decl, value) in self.ty.fields().iter().zip(self.values.iter()) {
            if let Some(hook) = self.ty.validator(&decl.name) {
                hook(value).map_err(|message| Error::ValidationFailed {
                    field: decl.name.clone(),
                    message,
                })?;
            }
        }
        Ok(())
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.ty.name() == other.ty.name() && self.values == other.values
    }
}

/// Default value for a declared type when the declaration carries none.
fn kind_default(ty: &TypeRef) -> Value {
    match ty {
        TypeRef::Scalar(kind) => {
            use crate::schema::ScalarKind;
            match kind {
                ScalarKind::Bool => Value::Bool(false),
                ScalarKind::Int32 => Value::Int(0),
                ScalarKind::Float => Value::Float(0.0),
                ScalarKind::Str => Value::Str(String::new()),
                ScalarKind::Bytes => Value::Bytes(Vec::new()),
            }
        }
        TypeRef::Record(inner) => Value::Record(Box::new(Record::new(inner))),
        TypeRef::Enum(inner) => Value::Int(
            inner
                .members()
                .first()
                .map(|m| i64::from(m.value))
                .unwrap_or(0),
        ),
        TypeRef::List(_) => Value::List(Vec::new()),
        TypeRef::Optional(_) => Value::Null,
        TypeRef::Map(_, _) => Value::Map(Vec::new()),
    }
}

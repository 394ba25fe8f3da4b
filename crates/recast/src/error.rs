// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Crate-wide error type.

use std::fmt;

/// Errors produced by codecs, introspection, and schema generation.
///
/// All errors are synchronous and surfaced to the immediate caller; nothing
/// is retried or suppressed. Reconstruction is all-or-nothing: a failing
/// `from_mapping`/`from_text` call never leaks a partially built instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A field required by the record type is absent and has no default.
    MissingField(String),
    /// JSON text could not be parsed (or was not a JSON object).
    MalformedJson(String),
    /// A declared field type cannot be resolved to a usable type reference.
    UnsupportedType(String),
    /// A registered validation hook rejected a field value.
    ValidationFailed { field: String, message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingField(name) => write!(f, "missing field: {}", name),
            Error::MalformedJson(msg) => write!(f, "malformed JSON: {}", msg),
            Error::UnsupportedType(msg) => write!(f, "unsupported type: {}", msg),
            Error::ValidationFailed { field, message } => {
                write!(f, "validation failed for field {}: {}", field, message)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

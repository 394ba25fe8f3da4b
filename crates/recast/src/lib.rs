// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # recast - Type-reflection codec engine
//!
//! Converts declared record types into multiple machine representations: an
//! ordered key-value mapping, indented and compact JSON text, and a
//! proto3-style schema description for cross-language RPC tooling. Types are
//! declared once through explicit builders; every codec and generator is
//! derived automatically from the same ordered field declarations.
//!
//! ## Quick Start
//!
//! ```rust
//! use recast::{codec, proto, Record, RecordTypeBuilder, ScalarKind, TypeRef};
//!
//! let person_ty = RecordTypeBuilder::new("Person")
//!     .string_field("name")
//!     .int32_field("age")
//!     .list_field("phone_numbers", TypeRef::Scalar(ScalarKind::Str))
//!     .validator("age", |v| match v.as_i64() {
//!         Some(age) if (0..=120).contains(&age) => Ok(()),
//!         _ => Err("age must be between 0 and 120".into()),
//!     })
//!     .build();
//!
//! let mut person = Record::new(&person_ty);
//! person.set("name", "Alice")?;
//! person.set("age", 30i64)?;
//! person.set("phone_numbers", vec!["123-456-7890"])?;
//!
//! // Same declarations, four representations.
//! let mapping = codec::dict::to_mapping(&person)?;
//! let pretty = codec::json::to_text(&person)?;
//! let compact = codec::json::to_text_compact(&person)?;
//! let schema = proto::generate(&person_ty)?;
//!
//! // Reconstruction runs the registered validators and round-trips exactly.
//! let rebuilt = codec::json::from_text(&pretty, &person_ty)?;
//! assert_eq!(rebuilt, person);
//! # Ok::<(), recast::Error>(())
//! ```
//!
//! ## Modules Overview
//!
//! - [`schema`] - Registration-time type declarations and introspection
//! - [`codec`] - Instance codecs: ordered mapping, JSON text
//! - [`proto`] - Schema text emission: messages, enums, services
//!
//! ## Consistency
//!
//! Field declaration order is canonical everywhere: mapping entries, JSON
//! keys, and schema field tags (1-based) all follow it, so the four
//! representations stay mutually round-trippable. All operations are
//! synchronous pure functions of their inputs and the immutable, Arc-shared
//! type declarations; the only cache (the derived descriptor table) is
//! published once per type and tolerates concurrent first-access races.

pub mod codec;
pub mod error;
pub mod proto;
pub mod record;
pub mod schema;
pub mod value;

pub use codec::Mapping;
pub use error::{Error, Result};
pub use proto::{MethodSpec, ProtoFile, RpcKind, ServiceSpec};
pub use record::Record;
pub use schema::{
    describe, EnumMember, EnumType, EnumTypeBuilder, FieldDecl, FieldDescriptor, RecordType,
    RecordTypeBuilder, ScalarKind, TypeRef, Validator,
};
pub use value::Value;

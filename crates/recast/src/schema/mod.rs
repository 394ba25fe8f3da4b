// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Registration-time schema description.
//!
//! Record and enum types are declared once through the fluent builders and
//! are read-only afterwards, shared as `Arc` across instances and codec
//! calls. There is no runtime probing of instance attributes: every emitter
//! works from the explicit, ordered declarations registered here.
//!
//! # Example
//!
//! ```rust
//! use recast::schema::{RecordTypeBuilder, ScalarKind, TypeRef, describe};
//!
//! let person = RecordTypeBuilder::new("Person")
//!     .string_field("name")
//!     .int32_field("age")
//!     .list_field("phone_numbers", TypeRef::Scalar(ScalarKind::Str))
//!     .build();
//!
//! let fields = describe(&person).unwrap();
//! assert_eq!(fields[1].tag, 2);
//! ```

mod builder;
mod introspect;
mod record_type;
mod type_ref;

pub use builder::{EnumTypeBuilder, RecordTypeBuilder};
pub use introspect::{describe, FieldDescriptor};
pub use record_type::{EnumMember, EnumType, FieldDecl, RecordType, Validator};
pub use type_ref::{ScalarKind, TypeRef};

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Proto3-style schema text emission.
//!
//! Message generation and service assembly share the field-descriptor table
//! and type mapping, so schema output stays consistent with the instance
//! codecs: same field order, same tags, same output names.

pub mod message;
pub mod service;
pub mod type_map;

pub use message::{generate, generate_file, ProtoFile};
pub use service::{assemble, assemble_with, MethodSpec, RpcKind, ServiceSpec};
pub use type_map::schema_type;

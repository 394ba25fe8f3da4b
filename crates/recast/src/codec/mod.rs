// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Instance codecs: ordered mapping and JSON text.
//!
//! Data flow: record instance -> [`dict::to_mapping`] -> [`Mapping`] ->
//! [`json::to_text`] / [`json::to_text_compact`]; reconstruction runs the
//! same pipeline in reverse, with [`json::from_text`] delegating to
//! [`dict::from_mapping`].

pub mod dict;
pub mod json;

/// Ordered string-keyed container used as the canonical intermediate
/// representation (`serde_json` map with insertion order preserved).
pub type Mapping = serde_json::Map<String, serde_json::Value>;

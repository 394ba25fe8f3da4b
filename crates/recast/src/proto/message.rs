// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Schema message generation.
//!
//! Emits one proto3-style message block per record type, recursively
//! inlining message/enum blocks for nested record and enum references.
//! Field tags are the 1-based declaration indices; the same table drives
//! the mapping and JSON codecs, so all representations stay consistent.

use crate::error::Result;
use crate::schema::{describe, EnumType, RecordType, TypeRef};
use crate::value::Value;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// ProtoFile
// ---------------------------------------------------------------------------

/// File-level schema options: package name and custom imports.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProtoFile {
    /// Package name emitted in the file header.
    pub package: String,
    /// Import paths emitted in the file header.
    pub imports: Vec<String>,
}

impl Default for ProtoFile {
    fn default() -> Self {
        Self {
            package: "default_package".to_string(),
            imports: Vec::new(),
        }
    }
}

impl ProtoFile {
    /// Create options with the given package name.
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            imports: Vec::new(),
        }
    }

    /// Append an import path.
    pub fn with_import(mut self, path: impl Into<String>) -> Self {
        self.imports.push(path.into());
        self
    }

    /// Render the file header: syntax line, package, imports.
    ///
    /// Emitted once per top-level generation call, never per nested block.
    pub(crate) fn render_header(&self) -> String {
        let mut out = format!("syntax = \"proto3\";\n\npackage {};\n", self.package);
        for import in &self.imports {
            out.push_str(&format!("import \"{}\";\n", import));
        }
        out.push('\n');
        out
    }
}

// ---------------------------------------------------------------------------
// Message generation
// ---------------------------------------------------------------------------

/// Generate the message block for a record type.
///
/// Nested record/enum references (including through list, optional, and map
/// wrappers) are inlined as indented blocks ahead of the field lines, each
/// distinct type once per message. Read-only and idempotent; on error no
/// partial text is returned.
pub fn generate(ty: &Arc<RecordType>) -> Result<String> {
    let mut out = String::new();
    render_message(ty, 0, &mut out)?;
    log::debug!("generated message block for {}", ty.name());
    Ok(out)
}

/// Generate a complete schema document: file header plus the message block.
pub fn generate_file(ty: &Arc<RecordType>, file: &ProtoFile) -> Result<String> {
    let block = generate(ty)?;
    let mut out = file.render_header();
    out.push_str(&block);
    Ok(out)
}

fn render_message(ty: &Arc<RecordType>, depth: usize, out: &mut String) -> Result<()> {
    let descriptors = describe(ty)?;
    let pad = "  ".repeat(depth);

    out.push_str(&pad);
    out.push_str(&format!("message {} {{\n", ty.name()));

    // Nested blocks first, in field order, each distinct type once.
    let mut inlined: Vec<String> = Vec::new();
    for descriptor in descriptors.iter() {
        match referenced_type(&descriptor.ty) {
            Some(Referenced::Record(nested)) => {
                if !inlined.iter().any(|n| n == nested.name()) {
                    inlined.push(nested.name().to_string());
                    render_message(&nested, depth + 1, out)?;
                }
            }
            Some(Referenced::Enum(nested)) => {
                if !inlined.iter().any(|n| n == nested.name()) {
                    inlined.push(nested.name().to_string());
                    render_enum(&nested, depth + 1, out);
                }
            }
            None => {}
        }
    }

    for descriptor in descriptors.iter() {
        out.push_str(&pad);
        out.push_str(&format!(
            "  {} {} = {}",
            super::type_map::schema_type(&descriptor.ty),
            descriptor.output_name(),
            descriptor.tag
        ));
        if let Some(literal) = descriptor.default.as_ref().and_then(default_literal) {
            out.push_str(&format!(" [default = {}]", literal));
        }
        out.push_str(";\n");
    }

    out.push_str(&pad);
    out.push_str("}\n");
    Ok(())
}

fn render_enum(ty: &Arc<EnumType>, depth: usize, out: &mut String) {
    let pad = "  ".repeat(depth);
    out.push_str(&pad);
    out.push_str(&format!("enum {} {{\n", ty.name()));
    for member in ty.members() {
        out.push_str(&pad);
        out.push_str(&format!("  {} = {};\n", member.name, member.value));
    }
    out.push_str(&pad);
    out.push_str("}\n");
}

enum Referenced {
    Record(Arc<RecordType>),
    Enum(Arc<EnumType>),
}

/// Find the record/enum type a field references, looking through list,
/// optional, and map-value wrappers.
fn referenced_type(ty: &TypeRef) -> Option<Referenced> {
    match ty {
        TypeRef::Record(nested) => Some(Referenced::Record(nested.clone())),
        TypeRef::Enum(nested) => Some(Referenced::Enum(nested.clone())),
        TypeRef::List(inner) | TypeRef::Optional(inner) => referenced_type(inner),
        TypeRef::Map(_, value) => referenced_type(value),
        TypeRef::Scalar(_) => None,
    }
}

/// Schema literal for a declared default, if the value kind supports the
/// annotation. String defaults are quoted, numeric and bool defaults bare.
fn default_literal(value: &Value) -> Option<String> {
    match value {
        Value::Str(s) => Some(format!("\"{}\"", s)),
        Value::Int(i) => Some(i.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{EnumTypeBuilder, RecordTypeBuilder, ScalarKind};

    #[test]
    fn test_person_golden_text() {
        let ty = RecordTypeBuilder::new("Person")
            .string_field("name")
            .int32_field("age")
            .string_field("email")
            .list_field("phone_numbers", TypeRef::Scalar(ScalarKind::Str))
            .build();

        let text = generate(&ty).expect("generate");
        assert_eq!(
            text,
            "message Person {\n  string name = 1;\n  int32 age = 2;\n  string email = 3;\n  repeated string phone_numbers = 4;\n}\n"
        );
    }

    #[test]
    fn test_nested_record_and_enum_inlined() {
        let address = RecordTypeBuilder::new("Address")
            .string_field("street")
            .string_field("city")
            .build();
        let gender = EnumTypeBuilder::new("Gender")
            .member("MALE")
            .member("FEMALE")
            .member("OTHER")
            .build();

        let ty = RecordTypeBuilder::new("Person")
            .string_field("name")
            .enum_field("gender", &gender)
            .record_field("address", &address)
            .build();

        let text = generate(&ty).expect("generate");
        assert_eq!(
            text,
            "message Person {\n\
             \x20 enum Gender {\n\
             \x20   MALE = 0;\n\
             \x20   FEMALE = 1;\n\
             \x20   OTHER = 2;\n\
             \x20 }\n\
             \x20 message Address {\n\
             \x20   string street = 1;\n\
             \x20   string city = 2;\n\
             \x20 }\n\
             \x20 string name = 1;\n\
             \x20 Gender gender = 2;\n\
             \x20 Address address = 3;\n\
             }\n"
        );
    }

    #[test]
    fn test_shared_nested_type_inlined_once() {
        let point = RecordTypeBuilder::new("Point")
            .float_field("x")
            .float_field("y")
            .build();
        let ty = RecordTypeBuilder::new("Rectangle")
            .record_field("top_left", &point)
            .record_field("bottom_right", &point)
            .build();

        let text = generate(&ty).expect("generate");
        assert_eq!(text.matches("message Point {").count(), 1);
        assert!(text.contains("Point top_left = 1;"));
        assert!(text.contains("Point bottom_right = 2;"));
    }

    #[test]
    fn test_nested_through_list_wrapper() {
        let address = RecordTypeBuilder::new("Address")
            .string_field("street")
            .build();
        let ty = RecordTypeBuilder::new("Person")
            .list_field("addresses", TypeRef::record(&address))
            .build();

        let text = generate(&ty).expect("generate");
        assert!(text.contains("  message Address {"));
        assert!(text.contains("repeated Address addresses = 1;"));
    }

    #[test]
    fn test_default_annotations() {
        let ty = RecordTypeBuilder::new("Config")
            .field_with_default("host", TypeRef::Scalar(ScalarKind::Str), "localhost")
            .field_with_default("retries", TypeRef::Scalar(ScalarKind::Int32), 3i64)
            .field_with_default("verbose", TypeRef::Scalar(ScalarKind::Bool), false)
            .string_field("comment")
            .build();

        let text = generate(&ty).expect("generate");
        assert!(text.contains("string host = 1 [default = \"localhost\"];"));
        assert!(text.contains("int32 retries = 2 [default = 3];"));
        assert!(text.contains("bool verbose = 3 [default = false];"));
        // No annotation without a declared default.
        assert!(text.contains("string comment = 4;"));
    }

    #[test]
    fn test_alias_used_in_field_line() {
        let ty = RecordTypeBuilder::new("Msg")
            .field_aliased("payload", TypeRef::Scalar(ScalarKind::Bytes), "data")
            .build();

        let text = generate(&ty).expect("generate");
        assert!(text.contains("bytes data = 1;"));
    }

    #[test]
    fn test_file_header_once_per_call() {
        let address = RecordTypeBuilder::new("Address")
            .string_field("street")
            .build();
        let ty = RecordTypeBuilder::new("Person")
            .record_field("address", &address)
            .build();

        let file = ProtoFile::new("demo").with_import("common.proto");
        let text = generate_file(&ty, &file).expect("generate_file");
        assert!(text.starts_with(
            "syntax = \"proto3\";\n\npackage demo;\nimport \"common.proto\";\n\nmessage Person {"
        ));
        assert_eq!(text.matches("syntax = \"proto3\";").count(), 1);
    }

    #[test]
    fn test_generation_is_idempotent() {
        let ty = RecordTypeBuilder::new("Point")
            .float_field("x")
            .float_field("y")
            .build();

        let first = generate(&ty).expect("generate");
        let second = generate(&ty).expect("generate");
        assert_eq!(first, second);
    }
}

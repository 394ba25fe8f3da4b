// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Service definition assembly.
//!
//! Composes an ordered method list into one service block plus the message
//! blocks it references, deduplicated by type name: a type shared by several
//! methods is emitted exactly once. Methods without a request or response
//! type reference the `Empty` message, whose stub is appended on demand.

use crate::error::Result;
use crate::proto::message::{self, ProtoFile};
use crate::schema::RecordType;
use std::sync::Arc;

/// RPC call kind; decides stream keyword placement on the rpc line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RpcKind {
    Unary,
    ServerStreaming,
    ClientStreaming,
    Bidirectional,
}

impl RpcKind {
    fn request_streamed(&self) -> bool {
        matches!(self, Self::ClientStreaming | Self::Bidirectional)
    }

    fn response_streamed(&self) -> bool {
        matches!(self, Self::ServerStreaming | Self::Bidirectional)
    }
}

/// A single RPC method signature.
#[derive(Debug, Clone)]
pub struct MethodSpec {
    /// Method name.
    pub name: String,
    /// Call kind.
    pub kind: RpcKind,
    /// Request type; `None` renders `Empty`.
    pub request: Option<Arc<RecordType>>,
    /// Response type; `None` renders `Empty`.
    pub response: Option<Arc<RecordType>>,
}

impl MethodSpec {
    /// Create a method signature.
    pub fn new(name: impl Into<String>, kind: RpcKind) -> Self {
        Self {
            name: name.into(),
            kind,
            request: None,
            response: None,
        }
    }

    /// Set the request type.
    pub fn request(mut self, ty: &Arc<RecordType>) -> Self {
        self.request = Some(ty.clone());
        self
    }

    /// Set the response type.
    pub fn response(mut self, ty: &Arc<RecordType>) -> Self {
        self.response = Some(ty.clone());
        self
    }
}

/// An ordered service definition, assembled per generation request.
#[derive(Debug, Clone)]
pub struct ServiceSpec {
    /// Service name.
    pub name: String,
    /// Methods in definition order.
    pub methods: Vec<MethodSpec>,
}

impl ServiceSpec {
    /// Create an empty service definition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    /// Append a method.
    pub fn method(mut self, method: MethodSpec) -> Self {
        self.methods.push(method);
        self
    }
}

/// Assemble a complete schema document for a service.
///
/// The package name defaults to the lowercased service name; use
/// [`assemble_with`] to control the header.
pub fn assemble(service: &ServiceSpec) -> Result<String> {
    assemble_with(service, &ProtoFile::new(service.name.to_lowercase()))
}

/// Assemble a complete schema document with explicit file options.
///
/// Layout: file header, service block (one rpc line per method in given
/// order), then each distinct referenced message exactly once across all
/// methods, in first-reference order.
pub fn assemble_with(service: &ServiceSpec, file: &ProtoFile) -> Result<String> {
    let mut out = file.render_header();

    out.push_str(&format!("// {} service definition\n\n", service.name));
    out.push_str(&format!("service {} {{\n", service.name));
    for method in &service.methods {
        out.push_str(&format!(
            "  rpc {} ({}) returns ({});\n",
            method.name,
            rpc_side(method.request.as_deref(), method.kind.request_streamed()),
            rpc_side(method.response.as_deref(), method.kind.response_streamed()),
        ));
    }
    out.push_str("}\n");

    out.push_str("\n// Request and response messages\n");
    let mut emitted: Vec<String> = Vec::new();
    let mut needs_empty = false;
    for method in &service.methods {
        for ty in [&method.request, &method.response] {
            match ty {
                Some(ty) => {
                    if !emitted.iter().any(|name| name == ty.name()) {
                        emitted.push(ty.name().to_string());
                        out.push('\n');
                        out.push_str(&message::generate(ty)?);
                    }
                }
                None => needs_empty = true,
            }
        }
    }
    if needs_empty {
        out.push_str("\nmessage Empty {}\n");
    }

    log::debug!(
        "assembled service {} with {} methods, {} messages",
        service.name,
        service.methods.len(),
        emitted.len()
    );
    Ok(out)
}

fn rpc_side(ty: Option<&RecordType>, streamed: bool) -> String {
    let name = ty.map(RecordType::name).unwrap_or("Empty");
    if streamed {
        format!("stream {}", name)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{RecordTypeBuilder, ScalarKind, TypeRef};

    fn request_type() -> Arc<RecordType> {
        RecordTypeBuilder::new("TestMessage")
            .string_field("name")
            .int32_field("age")
            .string_field("email")
            .list_field("phone_numbers", TypeRef::Scalar(ScalarKind::Str))
            .build()
    }

    fn response_type() -> Arc<RecordType> {
        RecordTypeBuilder::new("AnotherMessage")
            .string_field("status")
            .string_field("message")
            .build()
    }

    #[test]
    fn test_assembled_document_layout() {
        let request = request_type();
        let response = response_type();
        let service = ServiceSpec::new("TestService")
            .method(
                MethodSpec::new("GetInfo", RpcKind::Unary)
                    .request(&request)
                    .response(&response),
            )
            .method(
                MethodSpec::new("StreamInfo", RpcKind::ServerStreaming)
                    .request(&request)
                    .response(&response),
            );

        let text = assemble(&service).expect("assemble");
        assert_eq!(
            text,
            "syntax = \"proto3\";\n\
             \n\
             package testservice;\n\
             \n\
             // TestService service definition\n\
             \n\
             service TestService {\n\
             \x20 rpc GetInfo (TestMessage) returns (AnotherMessage);\n\
             \x20 rpc StreamInfo (TestMessage) returns (stream AnotherMessage);\n\
             }\n\
             \n\
             // Request and response messages\n\
             \n\
             message TestMessage {\n\
             \x20 string name = 1;\n\
             \x20 int32 age = 2;\n\
             \x20 string email = 3;\n\
             \x20 repeated string phone_numbers = 4;\n\
             }\n\
             \n\
             message AnotherMessage {\n\
             \x20 string status = 1;\n\
             \x20 string message = 2;\n\
             }\n"
        );
    }

    #[test]
    fn test_stream_keyword_placement() {
        let request = request_type();
        let response = response_type();
        let service = ServiceSpec::new("Streams")
            .method(
                MethodSpec::new("Unary", RpcKind::Unary)
                    .request(&request)
                    .response(&response),
            )
            .method(
                MethodSpec::new("Down", RpcKind::ServerStreaming)
                    .request(&request)
                    .response(&response),
            )
            .method(
                MethodSpec::new("Up", RpcKind::ClientStreaming)
                    .request(&request)
                    .response(&response),
            )
            .method(
                MethodSpec::new("Both", RpcKind::Bidirectional)
                    .request(&request)
                    .response(&response),
            );

        let text = assemble(&service).expect("assemble");
        assert!(text.contains("  rpc Unary (TestMessage) returns (AnotherMessage);\n"));
        assert!(text.contains("  rpc Down (TestMessage) returns (stream AnotherMessage);\n"));
        assert!(text.contains("  rpc Up (stream TestMessage) returns (AnotherMessage);\n"));
        assert!(text.contains("  rpc Both (stream TestMessage) returns (stream AnotherMessage);\n"));
    }

    #[test]
    fn test_shared_types_emitted_once() {
        let shared = request_type();
        let service = ServiceSpec::new("Echo")
            .method(
                MethodSpec::new("EchoOnce", RpcKind::Unary)
                    .request(&shared)
                    .response(&shared),
            )
            .method(
                MethodSpec::new("EchoMany", RpcKind::Bidirectional)
                    .request(&shared)
                    .response(&shared),
            );

        let text = assemble(&service).expect("assemble");
        assert_eq!(text.matches("message TestMessage {").count(), 1);
    }

    #[test]
    fn test_missing_types_render_empty() {
        let service = ServiceSpec::new("Health")
            .method(MethodSpec::new("Ping", RpcKind::Unary));

        let text = assemble(&service).expect("assemble");
        assert!(text.contains("  rpc Ping (Empty) returns (Empty);\n"));
        assert_eq!(text.matches("message Empty {}").count(), 1);
    }

    #[test]
    fn test_custom_file_options() {
        let service = ServiceSpec::new("Health")
            .method(MethodSpec::new("Ping", RpcKind::Unary));

        let file = ProtoFile::new("infra.health").with_import("base.proto");
        let text = assemble_with(&service, &file).expect("assemble_with");
        assert!(text.starts_with(
            "syntax = \"proto3\";\n\npackage infra.health;\nimport \"base.proto\";\n"
        ));
    }
}

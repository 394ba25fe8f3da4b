// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! JSON text codecs over the ordered mapping.
//!
//! Two renderings of the same mapping: [`to_text`] indents with two spaces
//! and one key per line, [`to_text_compact`] emits no inter-token whitespace
//! (`{"k1":"v1","k2":2}` style). Parsing is shared: both renderings feed
//! [`from_text`], which parses into a generic mapping and delegates
//! reconstruction to [`dict::from_mapping`](crate::codec::dict::from_mapping).

use crate::codec::dict;
use crate::error::{Error, Result};
use crate::record::Record;
use crate::schema::RecordType;
use std::sync::Arc;

/// Render a record instance as indented JSON text.
pub fn to_text(record: &Record) -> Result<String> {
    let mapping = dict::to_mapping(record)?;
    serde_json::to_string_pretty(&mapping).map_err(|e| Error::MalformedJson(e.to_string()))
}

/// Render a record instance as compact JSON text.
pub fn to_text_compact(record: &Record) -> Result<String> {
    let mapping = dict::to_mapping(record)?;
    serde_json::to_string(&mapping).map_err(|e| Error::MalformedJson(e.to_string()))
}

/// Parse JSON text and reconstruct a record instance of `ty`.
///
/// Accepts both renderings (and any other standard JSON spelling of the same
/// document). Fails with [`Error::MalformedJson`] if the text does not parse
/// or the top-level value is not an object; reconstruction failures
/// propagate from [`dict::from_mapping`](crate::codec::dict::from_mapping).
pub fn from_text(text: &str, ty: &Arc<RecordType>) -> Result<Record> {
    let parsed: serde_json::Value =
        serde_json::from_str(text).map_err(|e| Error::MalformedJson(e.to_string()))?;
    match parsed {
        serde_json::Value::Object(mapping) => dict::from_mapping(&mapping, ty),
        other => Err(Error::MalformedJson(format!(
            "expected a JSON object at top level, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::RecordTypeBuilder;
    use crate::value::Value;

    fn name_age_type() -> Arc<RecordType> {
        RecordTypeBuilder::new("Person")
            .string_field("name")
            .int32_field("age")
            .build()
    }

    fn john() -> Record {
        let ty = name_age_type();
        let mut person = Record::new(&ty);
        person.set("name", "John Doe").expect("set");
        person.set("age", 30i64).expect("set");
        person
    }

    #[test]
    fn test_compact_text_has_no_whitespace() {
        let text = to_text_compact(&john()).expect("to_text_compact");
        assert_eq!(text, r#"{"name":"John Doe","age":30}"#);
    }

    #[test]
    fn test_pretty_text_one_key_per_line() {
        let text = to_text(&john()).expect("to_text");
        assert_eq!(text, "{\n  \"name\": \"John Doe\",\n  \"age\": 30\n}");
    }

    #[test]
    fn test_round_trip_both_renderings() {
        let person = john();
        let ty = person.record_type().clone();

        let pretty = to_text(&person).expect("to_text");
        assert_eq!(from_text(&pretty, &ty).expect("from_text"), person);

        let compact = to_text_compact(&person).expect("to_text_compact");
        assert_eq!(from_text(&compact, &ty).expect("from_text"), person);
    }

    #[test]
    fn test_parse_failure_is_malformed_json() {
        let ty = name_age_type();
        match from_text("{not json", &ty) {
            Err(Error::MalformedJson(_)) => {}
            other => panic!("expected MalformedJson, got {:?}", other),
        }
    }

    #[test]
    fn test_non_object_top_level_rejected() {
        let ty = name_age_type();
        match from_text("[1,2,3]", &ty) {
            Err(Error::MalformedJson(msg)) => assert!(msg.contains("array"), "got: {}", msg),
            other => panic!("expected MalformedJson, got {:?}", other),
        }
    }

    #[test]
    fn test_reconstruction_errors_propagate() {
        let ty = name_age_type();
        match from_text(r#"{"name":"John Doe"}"#, &ty) {
            Err(Error::MissingField(field)) => assert_eq!(field, "age"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_null_survives_round_trip() {
        let ty = RecordTypeBuilder::new("Person")
            .string_field("name")
            .optional_field("email", crate::schema::TypeRef::Scalar(crate::schema::ScalarKind::Str))
            .build();

        let mut person = Record::new(&ty);
        person.set("name", "Alice").expect("set");

        let text = to_text(&person).expect("to_text");
        assert!(text.contains("\"email\": null"));
        let rebuilt = from_text(&text, &ty).expect("from_text");
        assert_eq!(rebuilt.get("email"), Some(&Value::Null));
        assert_eq!(rebuilt, person);
    }
}

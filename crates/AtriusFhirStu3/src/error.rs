//! Error types for decoding FHIR STU3 JSON.
//!
//! Decoding is all-or-nothing: the first problem aborts the whole decode and
//! comes back as a [`DecodeError`] carrying the dotted path of the offending
//! element, relative to the decoded root (`component[1].valueQuantity.value`).

use serde_json::Value;
use thiserror::Error;

/// Result type alias for codec operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Structural decoding failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A mandatory attribute is absent from the input.
    #[error("missing required field `{path}`")]
    MissingRequiredField { path: String },

    /// More than one member of a choice group is present.
    #[error("choice `{path}[x]` has more than one value: {}", .found.join(", "))]
    AmbiguousChoiceValue { path: String, found: Vec<String> },

    /// A mandatory choice group has no member present.
    #[error("missing required choice `{path}[x]`")]
    MissingRequiredChoiceValue { path: String },

    /// The `resourceType` discriminator names no registered resource.
    #[error("unknown resourceType `{resource_type}` at `{path}`")]
    UnknownResourceType { path: String, resource_type: String },

    /// A JSON value does not have the declared primitive type or shape.
    #[error("type mismatch at {}: expected {expected}, found {found}", display_path(.path))]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: String,
    },

    /// A key matches no declared field; only raised in strict mode.
    #[error("unknown field `{path}`")]
    UnknownField { path: String },
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "the document root".to_string()
    } else {
        format!("`{path}`")
    }
}

impl DecodeError {
    pub fn missing_field(name: &str) -> Self {
        DecodeError::MissingRequiredField {
            path: name.to_string(),
        }
    }

    pub fn missing_choice(base_name: &str) -> Self {
        DecodeError::MissingRequiredChoiceValue {
            path: base_name.to_string(),
        }
    }

    pub fn ambiguous_choice(base_name: &str, found: Vec<String>) -> Self {
        DecodeError::AmbiguousChoiceValue {
            path: base_name.to_string(),
            found,
        }
    }

    pub fn unknown_resource_type(resource_type: &str) -> Self {
        DecodeError::UnknownResourceType {
            path: "resourceType".to_string(),
            resource_type: resource_type.to_string(),
        }
    }

    pub fn unknown_field(key: &str) -> Self {
        DecodeError::UnknownField {
            path: key.to_string(),
        }
    }

    /// A mismatch reported against the element being decoded; the caller
    /// attaches the field path with [`DecodeError::within`].
    pub fn type_mismatch(expected: &'static str, found: &Value) -> Self {
        DecodeError::TypeMismatch {
            path: String::new(),
            expected,
            found: describe(found),
        }
    }

    /// Like [`DecodeError::type_mismatch`] for values that are not JSON, such
    /// as a missing value part.
    pub fn type_mismatch_text(expected: &'static str, found: impl Into<String>) -> Self {
        DecodeError::TypeMismatch {
            path: String::new(),
            expected,
            found: found.into(),
        }
    }

    /// Path of the offending element, relative to the decoded root.
    pub fn path(&self) -> &str {
        match self {
            DecodeError::MissingRequiredField { path }
            | DecodeError::AmbiguousChoiceValue { path, .. }
            | DecodeError::MissingRequiredChoiceValue { path }
            | DecodeError::UnknownResourceType { path, .. }
            | DecodeError::TypeMismatch { path, .. }
            | DecodeError::UnknownField { path } => path,
        }
    }

    fn path_mut(&mut self) -> &mut String {
        match self {
            DecodeError::MissingRequiredField { path }
            | DecodeError::AmbiguousChoiceValue { path, .. }
            | DecodeError::MissingRequiredChoiceValue { path }
            | DecodeError::UnknownResourceType { path, .. }
            | DecodeError::TypeMismatch { path, .. }
            | DecodeError::UnknownField { path } => path,
        }
    }

    /// Prefixes the path with the segment of the enclosing element.
    pub fn within(mut self, segment: &str) -> Self {
        let path = self.path_mut();
        *path = if path.is_empty() {
            segment.to_string()
        } else {
            format!("{segment}.{path}")
        };
        self
    }
}

/// Short human readable description of a JSON value for error messages.
pub(crate) fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean `{b}`"),
        Value::Number(n) => format!("number `{n}`"),
        Value::String(s) if s.chars().count() > 40 => {
            let head: String = s.chars().take(40).collect();
            format!("string \"{head}...\"")
        }
        Value::String(s) => format!("string \"{s}\""),
        Value::Array(items) => format!("array of {} item(s)", items.len()),
        Value::Object(_) => "object".to_string(),
    }
}

/// Top-level error for the text based entry points.
#[derive(Debug, Error)]
pub enum FhirError {
    /// The input is not well-formed JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON is well-formed but does not decode into the requested type.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_within_builds_dotted_paths() {
        let err = DecodeError::missing_field("system")
            .within("coding[0]")
            .within("code");
        assert_eq!(err.path(), "code.coding[0].system");
        assert_eq!(
            err.to_string(),
            "missing required field `code.coding[0].system`"
        );
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = DecodeError::type_mismatch("boolean", &json!("yes")).within("active");
        assert_eq!(
            err.to_string(),
            "type mismatch at `active`: expected boolean, found string \"yes\""
        );

        let root = DecodeError::type_mismatch("object", &json!([1, 2]));
        assert_eq!(
            root.to_string(),
            "type mismatch at the document root: expected object, found array of 2 item(s)"
        );
    }

    #[test]
    fn test_ambiguous_choice_lists_keys() {
        let err = DecodeError::ambiguous_choice(
            "value",
            vec!["valueString".to_string(), "valueBoolean".to_string()],
        )
        .within("component[0]");
        assert_eq!(err.path(), "component[0].value");
        assert_eq!(
            err.to_string(),
            "choice `component[0].value[x]` has more than one value: valueString, valueBoolean"
        );
    }

    #[test]
    fn test_fhir_error_wraps_json_errors() {
        let json_err = serde_json::from_str::<Value>("{").unwrap_err();
        let err = FhirError::from(json_err);
        assert!(err.to_string().starts_with("invalid JSON:"));
    }
}

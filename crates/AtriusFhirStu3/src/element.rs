//! The primitive wrapper shared by every FHIR primitive type.

use serde_json::Value;

use crate::codec::{
    decode_field, decode_list, encode_field, encode_list, DecodeOptions, FhirField, JsonObject,
    PrimitiveValue,
};
use crate::error::{DecodeError, DecodeResult};

/// Generic element container supporting FHIR's extension mechanism.
///
/// A FHIR primitive is a value plus an optional element id and extensions.
/// In JSON the value sits under the field's key and the id/extensions in a
/// sibling object under `_key`:
///
/// ```json
/// {
///   "birthDate": "1974-12",
///   "_birthDate": { "id": "bd", "extension": [ ... ] }
/// }
/// ```
///
/// Either half may be absent, so an element can be value-only,
/// extension-only, or both.
///
/// # Type Parameters
///
/// * `V` - The value type (e.g., `String`, `i32`, `PreciseDecimal`)
/// * `E` - The extension type (the model's `Extension` struct)
///
/// # Examples
///
/// ```rust
/// use atrius_fhir_stu3::stu3::{Extension, String as FhirString};
///
/// let given: FhirString = "Peter".into();
/// assert_eq!(given.value.as_deref(), Some("Peter"));
///
/// let extension_only: FhirString = FhirString {
///     id: Some("given-2".to_string()),
///     extension: Some(Vec::<Extension>::new()),
///     value: None,
/// };
/// assert!(extension_only.value.is_none());
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Element<V, E> {
    /// Optional element identifier for referencing within the resource
    pub id: Option<String>,
    /// Optional extensions providing additional metadata
    pub extension: Option<Vec<E>>,
    /// The actual primitive value
    pub value: Option<V>,
}

impl<V, E> Default for Element<V, E> {
    fn default() -> Self {
        Element {
            id: None,
            extension: None,
            value: None,
        }
    }
}

impl<V, E> Element<V, E> {
    pub fn new(value: V) -> Self {
        Element {
            id: None,
            extension: None,
            value: Some(value),
        }
    }

    /// Returns `true` if no value, id, or extensions are present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.id.is_none() && !self.has_extensions()
    }

    fn has_extensions(&self) -> bool {
        self.extension.as_ref().is_some_and(|ext| !ext.is_empty())
    }
}

impl<V, E> From<V> for Element<V, E> {
    fn from(value: V) -> Self {
        Element::new(value)
    }
}

impl<E> From<&str> for Element<String, E> {
    fn from(value: &str) -> Self {
        Element::new(value.to_string())
    }
}

impl<V: PrimitiveValue, E: FhirField> FhirField for Element<V, E> {
    fn decode_parts(
        value: Option<&Value>,
        sibling: Option<&Value>,
        options: &DecodeOptions,
    ) -> DecodeResult<Self> {
        let value = value.map(V::from_json).transpose()?;
        let (id, extension) = match sibling {
            None => (None, None),
            Some(Value::Object(obj)) => (
                decode_field::<String>(obj, "id", "_id", options)?,
                decode_list::<E>(obj, "extension", "_extension", options)?,
            ),
            Some(other) => return Err(DecodeError::type_mismatch("object", other)),
        };
        Ok(Element {
            id,
            extension,
            value,
        })
    }

    fn encode_parts(&self) -> (Option<Value>, Option<Value>) {
        let value = self.value.as_ref().map(V::to_json);
        let sibling = if self.id.is_some() || self.has_extensions() {
            let mut obj = JsonObject::new();
            encode_field(&mut obj, "id", "_id", self.id.as_ref());
            encode_list(&mut obj, "extension", "_extension", self.extension.as_deref());
            Some(Value::Object(obj))
        } else {
            None
        };
        (value, sibling)
    }
}

impl PrimitiveValue for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_json(value: &Value) -> DecodeResult<Self> {
        value
            .as_bool()
            .ok_or_else(|| DecodeError::type_mismatch(Self::EXPECTED, value))
    }

    fn to_json(&self) -> Value {
        Value::Bool(*self)
    }
}

impl PrimitiveValue for i32 {
    const EXPECTED: &'static str = "integer";

    fn from_json(value: &Value) -> DecodeResult<Self> {
        value
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| DecodeError::type_mismatch(Self::EXPECTED, value))
    }

    fn to_json(&self) -> Value {
        Value::from(*self)
    }
}

/// Backs both `positiveInt` and `unsignedInt`; the zero check for
/// `positiveInt` is left to validation.
impl PrimitiveValue for u32 {
    const EXPECTED: &'static str = "unsigned integer";

    fn from_json(value: &Value) -> DecodeResult<Self> {
        value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| DecodeError::type_mismatch(Self::EXPECTED, value))
    }

    fn to_json(&self) -> Value {
        Value::from(*self)
    }
}

impl PrimitiveValue for String {
    const EXPECTED: &'static str = "string";

    fn from_json(value: &Value) -> DecodeResult<Self> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| DecodeError::type_mismatch(Self::EXPECTED, value))
    }

    fn to_json(&self) -> Value {
        Value::String(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stu3::{Boolean, Extension, ExtensionValue, Integer};
    use serde_json::json;

    #[test]
    fn test_value_only() {
        let flag = Boolean::decode_parts(Some(&json!(true)), None, &DecodeOptions::default()).unwrap();
        assert_eq!(flag, Boolean::new(true));
        assert_eq!(flag.encode_parts(), (Some(json!(true)), None));
    }

    #[test]
    fn test_sibling_only() {
        let sibling = json!({
            "id": "a1",
            "extension": [{"url": "http://example.org/flag", "valueCode": "masked"}]
        });
        let flag = Boolean::decode_parts(None, Some(&sibling), &DecodeOptions::default()).unwrap();
        assert_eq!(flag.value, None);
        assert_eq!(flag.id.as_deref(), Some("a1"));

        let extension = &flag.extension.as_ref().unwrap()[0];
        assert_eq!(extension.url, "http://example.org/flag");
        assert!(matches!(extension.value, Some(ExtensionValue::Code(_))));

        assert_eq!(flag.encode_parts(), (None, Some(sibling)));
    }

    #[test]
    fn test_wrong_json_type() {
        let err = Integer::decode_parts(Some(&json!("12")), None, &DecodeOptions::default())
            .unwrap_err();
        assert_eq!(
            err,
            DecodeError::type_mismatch("integer", &json!("12"))
        );

        let err = Integer::decode_parts(Some(&json!(1.5)), None, &DecodeOptions::default())
            .unwrap_err();
        assert!(matches!(err, DecodeError::TypeMismatch { expected: "integer", .. }));

        let err = Boolean::decode_parts(Some(&json!(true)), Some(&json!("x")), &DecodeOptions::default())
            .unwrap_err();
        assert!(matches!(err, DecodeError::TypeMismatch { expected: "object", .. }));
    }

    #[test]
    fn test_integer_range() {
        let too_big = json!(i64::from(i32::MAX) + 1);
        assert!(i32::from_json(&too_big).is_err());
        assert!(u32::from_json(&json!(-1)).is_err());
        assert_eq!(u32::from_json(&json!(0)).unwrap(), 0);
    }

    #[test]
    fn test_empty_extension_list_is_not_written() {
        let element: Element<bool, Extension> = Element {
            id: None,
            extension: Some(Vec::new()),
            value: Some(false),
        };
        assert_eq!(element.encode_parts(), (Some(json!(false)), None));
    }
}

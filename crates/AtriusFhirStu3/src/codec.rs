//! JSON codec runtime shared by every generated type.
//!
//! `#[derive(FhirSerde)]` expands into calls to the helpers in this module.
//! The model types never see `serde_json::Value` directly: each field is read
//! as a pair of (value, `_sibling`) JSON nodes and handed to its [`FhirField`]
//! implementation, which knows whether it is a primitive wrapper, a complex
//! type or a contained resource.
//!
//! Decoding never panics on malformed input. Every failure is a
//! [`DecodeError`] whose path is built up with [`DecodeError::within`] as the
//! error travels back to the root.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{DecodeError, DecodeResult};

/// A JSON object as produced by `serde_json` with `preserve_order`.
pub type JsonObject = Map<String, Value>;

/// What to do with object keys that match no declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownFieldPolicy {
    /// Skip the key and log it at `debug` level.
    #[default]
    Ignore,
    /// Fail with [`DecodeError::UnknownField`].
    Reject,
}

/// Decoder configuration.
///
/// The defaults match what most FHIR servers emit in practice: unknown keys
/// are tolerated so that content written against a later version still loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    pub unknown_fields: UnknownFieldPolicy,
}

impl DecodeOptions {
    /// Options that reject any key the model does not declare.
    pub const fn strict() -> Self {
        DecodeOptions {
            unknown_fields: UnknownFieldPolicy::Reject,
        }
    }

    pub const fn is_strict(&self) -> bool {
        matches!(self.unknown_fields, UnknownFieldPolicy::Reject)
    }
}

/// A Rust value that maps onto one JSON scalar of a FHIR primitive type.
///
/// Implementations are strict about the JSON type: a boolean must be a JSON
/// boolean, a decimal a JSON number and so on. Lexical checks (date formats,
/// code values) also happen here.
pub trait PrimitiveValue: Sized {
    /// FHIR name of the primitive, used in error messages.
    const EXPECTED: &'static str;

    fn from_json(value: &Value) -> DecodeResult<Self>;

    fn to_json(&self) -> Value;
}

/// Anything that can sit in a field of a FHIR object.
///
/// `value` is the node stored under the field's own key and `sibling` the
/// node under `_key`. Only primitive wrappers make use of the sibling; every
/// other implementation encodes it as `None`.
pub trait FhirField: Sized {
    fn decode_parts(
        value: Option<&Value>,
        sibling: Option<&Value>,
        options: &DecodeOptions,
    ) -> DecodeResult<Self>;

    fn encode_parts(&self) -> (Option<Value>, Option<Value>);
}

/// A type encoded as a JSON object: complex datatypes, backbone elements and
/// resources.
pub trait FhirObject: Sized {
    /// FHIR name of the type, used for logging.
    const TYPE_NAME: &'static str;

    /// Returns `true` when `key` belongs to a declared field, including the
    /// `_key` siblings and every key of a choice group.
    fn is_known_field(key: &str) -> bool;

    fn decode_object(obj: &JsonObject, options: &DecodeOptions) -> DecodeResult<Self>;

    /// Appends this value's keys to `obj`, in declaration order.
    fn encode_object(&self, obj: &mut JsonObject);
}

/// A `name[x]` choice group, flattened into the enclosing object.
pub trait FhirChoice: Sized {
    /// Base name without the `[x]`, e.g. `value`.
    const BASE_NAME: &'static str;

    /// Every concrete key of the group, e.g. `valueString`, `valueQuantity`.
    const KEYS: &'static [&'static str];

    /// Returns `Ok(None)` when no key of the group is present and
    /// [`DecodeError::AmbiguousChoiceValue`] when more than one is.
    fn decode_choice(obj: &JsonObject, options: &DecodeOptions) -> DecodeResult<Option<Self>>;

    fn encode_choice(&self, obj: &mut JsonObject);

    /// JSON key of the active variant.
    fn key(&self) -> &'static str;

    /// Type suffix of the active variant, e.g. `Quantity`.
    fn type_suffix(&self) -> &'static str;

    fn accepts_key(key: &str) -> bool {
        let bare = key.strip_prefix('_').unwrap_or(key);
        Self::KEYS.contains(&bare)
    }
}

impl<T: FhirField> FhirField for Box<T> {
    fn decode_parts(
        value: Option<&Value>,
        sibling: Option<&Value>,
        options: &DecodeOptions,
    ) -> DecodeResult<Self> {
        T::decode_parts(value, sibling, options).map(Box::new)
    }

    fn encode_parts(&self) -> (Option<Value>, Option<Value>) {
        self.as_ref().encode_parts()
    }
}

/// Plain strings are used for `Element.id` and `Extension.url`, which cannot
/// carry extensions of their own.
impl FhirField for String {
    fn decode_parts(
        value: Option<&Value>,
        _sibling: Option<&Value>,
        _options: &DecodeOptions,
    ) -> DecodeResult<Self> {
        match value {
            Some(value) => <String as PrimitiveValue>::from_json(value),
            None => Err(DecodeError::type_mismatch_text(
                "string",
                "an extension without a value",
            )),
        }
    }

    fn encode_parts(&self) -> (Option<Value>, Option<Value>) {
        (Some(Value::String(self.clone())), None)
    }
}

//=============================================================================
// Field decoding
//=============================================================================

/// Reads a single-valued field from its `key` and `_key` entries.
///
/// Returns `Ok(None)` when neither entry is present.
pub fn decode_field<T: FhirField>(
    obj: &JsonObject,
    key: &str,
    sibling_key: &str,
    options: &DecodeOptions,
) -> DecodeResult<Option<T>> {
    let value = obj.get(key);
    let sibling = obj.get(sibling_key);
    if value.is_none() && sibling.is_none() {
        return Ok(None);
    }
    T::decode_parts(value, sibling, options)
        .map(Some)
        .map_err(|err| err.within(key))
}

/// Reads a repeating field. The `key` and `_key` arrays are parallel: item
/// `i` is built from position `i` of both, with `null` standing in for a
/// missing half.
///
/// An empty array reads as absent.
pub fn decode_list<T: FhirField>(
    obj: &JsonObject,
    key: &str,
    sibling_key: &str,
    options: &DecodeOptions,
) -> DecodeResult<Option<Vec<T>>> {
    let values = array_at(obj, key)?;
    let siblings = array_at(obj, sibling_key)?;

    let len = match (values, siblings) {
        (None, None) => return Ok(None),
        (Some(values), None) => values.len(),
        (None, Some(siblings)) => siblings.len(),
        (Some(values), Some(siblings)) if values.len() == siblings.len() => values.len(),
        (Some(values), Some(siblings)) => {
            return Err(DecodeError::type_mismatch_text(
                "an array as long as its value array",
                format!("{} item(s) against {}", siblings.len(), values.len()),
            )
            .within(sibling_key));
        }
    };
    if len == 0 {
        return Ok(None);
    }

    let mut items = Vec::with_capacity(len);
    for index in 0..len {
        let value = values.and_then(|v| v.get(index)).filter(|v| !v.is_null());
        let sibling = siblings.and_then(|s| s.get(index)).filter(|s| !s.is_null());
        let segment = format!("{key}[{index}]");
        if value.is_none() && sibling.is_none() {
            return Err(
                DecodeError::type_mismatch_text("a value or an extension", "null").within(&segment),
            );
        }
        let item = T::decode_parts(value, sibling, options).map_err(|err| err.within(&segment))?;
        items.push(item);
    }
    Ok(Some(items))
}

fn array_at<'a>(obj: &'a JsonObject, key: &str) -> DecodeResult<Option<&'a Vec<Value>>> {
    match obj.get(key) {
        None => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items)),
        Some(other) => Err(DecodeError::type_mismatch("array", other).within(key)),
    }
}

pub fn require<T>(value: Option<T>, key: &str) -> DecodeResult<T> {
    value.ok_or_else(|| DecodeError::missing_field(key))
}

pub fn require_choice<C: FhirChoice>(value: Option<C>) -> DecodeResult<C> {
    value.ok_or_else(|| DecodeError::missing_choice(C::BASE_NAME))
}

/// Finds the one key of a choice group present in `obj`, counting a bare
/// `_key` sibling as presence.
pub fn select_choice(
    obj: &JsonObject,
    base_name: &str,
    keys: &'static [&'static str],
) -> DecodeResult<Option<&'static str>> {
    let mut found: Vec<&'static str> = Vec::new();
    for present in obj.keys() {
        let bare = present.strip_prefix('_').unwrap_or(present);
        if let Some(key) = keys.iter().copied().find(|key| *key == bare)
            && !found.contains(&key)
        {
            found.push(key);
        }
    }

    match found.len() {
        0 | 1 => Ok(found.first().copied()),
        _ => Err(DecodeError::ambiguous_choice(
            base_name,
            found.into_iter().map(str::to_string).collect(),
        )),
    }
}

/// Reads the `resourceType` discriminator.
pub fn resource_type_of(obj: &JsonObject) -> DecodeResult<&str> {
    match obj.get("resourceType") {
        None => Err(DecodeError::missing_field("resourceType")),
        Some(Value::String(resource_type)) => Ok(resource_type),
        Some(other) => Err(DecodeError::type_mismatch("string", other).within("resourceType")),
    }
}

/// Checks that `obj` declares itself as `expected`.
pub fn check_resource_type(obj: &JsonObject, expected: &'static str) -> DecodeResult<()> {
    let found = resource_type_of(obj)?;
    if found == expected {
        Ok(())
    } else {
        Err(DecodeError::TypeMismatch {
            path: "resourceType".to_string(),
            expected,
            found: format!("\"{found}\""),
        })
    }
}

/// Applies the unknown-field policy to every key of `obj`.
pub fn check_unknown_fields<T: FhirObject>(
    obj: &JsonObject,
    options: &DecodeOptions,
) -> DecodeResult<()> {
    for key in obj.keys() {
        if T::is_known_field(key) {
            continue;
        }
        match options.unknown_fields {
            UnknownFieldPolicy::Ignore => {
                debug!(type_name = T::TYPE_NAME, field = %key, "ignoring unknown field");
            }
            UnknownFieldPolicy::Reject => return Err(DecodeError::unknown_field(key)),
        }
    }
    Ok(())
}

/// `FhirField::decode_parts` for object-shaped types. Only primitives carry
/// a `_key` sibling, so one next to an object is a type mismatch.
pub fn decode_object_parts<T: FhirObject>(
    value: Option<&Value>,
    sibling: Option<&Value>,
    options: &DecodeOptions,
) -> DecodeResult<T> {
    if let Some(sibling) = sibling {
        return Err(DecodeError::type_mismatch(
            "no `_` sibling on an object-valued element",
            sibling,
        ));
    }
    match value {
        Some(Value::Object(obj)) => T::decode_object(obj, options),
        Some(other) => Err(DecodeError::type_mismatch("object", other)),
        None => Err(DecodeError::type_mismatch_text(
            "object",
            "an extension without a value",
        )),
    }
}

pub fn object_to_value<T: FhirObject>(item: &T) -> Value {
    let mut obj = JsonObject::new();
    item.encode_object(&mut obj);
    Value::Object(obj)
}

//=============================================================================
// Field encoding
//=============================================================================

pub fn encode_field<T: FhirField>(
    obj: &mut JsonObject,
    key: &str,
    sibling_key: &str,
    item: Option<&T>,
) {
    let Some(item) = item else {
        return;
    };
    let (value, sibling) = item.encode_parts();
    if let Some(value) = value {
        obj.insert(key.to_owned(), value);
    }
    if let Some(sibling) = sibling {
        obj.insert(sibling_key.to_owned(), sibling);
    }
}

/// Writes a repeating field. The `_key` array is only written when at least
/// one item has an id or extensions, padded with `null` elsewhere.
pub fn encode_list<T: FhirField>(
    obj: &mut JsonObject,
    key: &str,
    sibling_key: &str,
    items: Option<&[T]>,
) {
    let Some(items) = items.filter(|items| !items.is_empty()) else {
        return;
    };

    let mut values = Vec::with_capacity(items.len());
    let mut siblings = Vec::with_capacity(items.len());
    let mut any_value = false;
    let mut any_sibling = false;
    for item in items {
        let (value, sibling) = item.encode_parts();
        any_value |= value.is_some();
        any_sibling |= sibling.is_some();
        values.push(value.unwrap_or(Value::Null));
        siblings.push(sibling.unwrap_or(Value::Null));
    }

    if any_value {
        obj.insert(key.to_owned(), Value::Array(values));
    }
    if any_sibling {
        obj.insert(sibling_key.to_owned(), Value::Array(siblings));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stu3::{Coding, HumanName, Quantity};
    use serde_json::json;

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(obj) => obj,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn test_decode_list_zips_parallel_arrays() {
        let obj = object(json!({
            "given": ["Peter", null, "James"],
            "_given": [null, {"id": "g2", "extension": [{"url": "http://example.org/x", "valueBoolean": true}]}, null]
        }));
        let given: Vec<crate::stu3::String> =
            decode_list(&obj, "given", "_given", &DecodeOptions::default())
                .unwrap()
                .unwrap();

        assert_eq!(given.len(), 3);
        assert_eq!(given[0].value.as_deref(), Some("Peter"));
        assert_eq!(given[1].value, None);
        assert_eq!(given[1].id.as_deref(), Some("g2"));
        assert_eq!(given[1].extension.as_ref().map(Vec::len), Some(1));
        assert_eq!(given[2].value.as_deref(), Some("James"));
    }

    #[test]
    fn test_decode_list_rejects_mismatched_lengths() {
        let obj = object(json!({
            "given": ["Peter", "James"],
            "_given": [null]
        }));
        let err = decode_list::<crate::stu3::String>(&obj, "given", "_given", &DecodeOptions::default())
            .unwrap_err();
        assert!(matches!(err, DecodeError::TypeMismatch { .. }));
        assert_eq!(err.path(), "_given");
    }

    #[test]
    fn test_decode_list_rejects_double_null() {
        let obj = object(json!({
            "given": ["Peter", null],
            "_given": [null, null]
        }));
        let err = decode_list::<crate::stu3::String>(&obj, "given", "_given", &DecodeOptions::default())
            .unwrap_err();
        assert_eq!(err.path(), "given[1]");
    }

    #[test]
    fn test_empty_array_reads_as_absent() {
        let obj = object(json!({ "given": [] }));
        let given = decode_list::<crate::stu3::String>(&obj, "given", "_given", &DecodeOptions::default())
            .unwrap();
        assert_eq!(given, None);
    }

    #[test]
    fn test_encode_list_writes_siblings_only_when_needed() {
        let mut plain = JsonObject::new();
        let names = vec![crate::stu3::String::from("a"), crate::stu3::String::from("b")];
        encode_list(&mut plain, "given", "_given", Some(names.as_slice()));
        assert_eq!(Value::Object(plain), json!({"given": ["a", "b"]}));

        let mut extended = JsonObject::new();
        let names = vec![
            crate::stu3::String::from("a"),
            crate::stu3::String {
                id: Some("n2".to_string()),
                extension: None,
                value: None,
            },
        ];
        encode_list(&mut extended, "given", "_given", Some(names.as_slice()));
        assert_eq!(
            Value::Object(extended),
            json!({"given": ["a", null], "_given": [null, {"id": "n2"}]})
        );
    }

    #[test]
    fn test_select_choice() {
        const KEYS: &[&str] = &["valueString", "valueBoolean"];

        let none = object(json!({"status": "final"}));
        assert_eq!(select_choice(&none, "value", KEYS).unwrap(), None);

        let sibling_only = object(json!({"_valueString": {"id": "v"}}));
        assert_eq!(
            select_choice(&sibling_only, "value", KEYS).unwrap(),
            Some("valueString")
        );

        let both = object(json!({"valueString": "x", "valueBoolean": true}));
        match select_choice(&both, "value", KEYS).unwrap_err() {
            DecodeError::AmbiguousChoiceValue { path, found } => {
                assert_eq!(path, "value");
                assert_eq!(found, vec!["valueString", "valueBoolean"]);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_unknown_fields_follow_policy() {
        let obj = object(json!({"system": "http://loinc.org", "colour": "blue"}));

        let lenient = Coding::decode_object(&obj, &DecodeOptions::default()).unwrap();
        assert_eq!(lenient.system.and_then(|s| s.value).as_deref(), Some("http://loinc.org"));

        let err = Coding::decode_object(&obj, &DecodeOptions::strict()).unwrap_err();
        assert_eq!(err, DecodeError::unknown_field("colour"));
    }

    #[test]
    fn test_strict_mode_accepts_sibling_keys() {
        let obj = object(json!({"family": "Chalmers", "_family": {"id": "f"}}));
        let name = HumanName::decode_object(&obj, &DecodeOptions::strict()).unwrap();
        assert_eq!(name.family.and_then(|f| f.id).as_deref(), Some("f"));
    }

    #[test]
    fn test_object_field_rejects_scalars() {
        let obj = object(json!({"value": "10 mg"}));
        let err = decode_field::<Quantity>(&obj, "value", "_value", &DecodeOptions::default())
            .unwrap_err();
        assert_eq!(err.path(), "value");
        assert!(matches!(err, DecodeError::TypeMismatch { expected: "object", .. }));
    }

    #[test]
    fn test_object_field_rejects_a_sibling() {
        let obj = object(json!({
            "valueQuantity": {"value": 10},
            "_valueQuantity": {"extension": [{"url": "http://example.org/x", "valueBoolean": true}]}
        }));
        for options in [DecodeOptions::default(), DecodeOptions::strict()] {
            let err = decode_field::<Quantity>(&obj, "valueQuantity", "_valueQuantity", &options)
                .unwrap_err();
            assert_eq!(err.path(), "valueQuantity");
            assert!(matches!(err, DecodeError::TypeMismatch { .. }));
        }

        let sibling_only = object(json!({"_coding": {"id": "c"}}));
        let err = decode_field::<Coding>(&sibling_only, "coding", "_coding", &DecodeOptions::default())
            .unwrap_err();
        assert_eq!(err.path(), "coding");
    }

    #[test]
    fn test_resource_type_checks() {
        let obj = object(json!({"resourceType": "Patient"}));
        assert_eq!(resource_type_of(&obj).unwrap(), "Patient");
        assert!(check_resource_type(&obj, "Patient").is_ok());
        assert_eq!(check_resource_type(&obj, "Observation").unwrap_err().path(), "resourceType");

        let missing = JsonObject::new();
        assert_eq!(
            resource_type_of(&missing).unwrap_err(),
            DecodeError::missing_field("resourceType")
        );
    }
}

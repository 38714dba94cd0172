//! # FHIR STU3 model and JSON codec
//!
//! Typed Rust structures for FHIR STU3 (3.0.x) resources and datatypes, with
//! a codec for the FHIR JSON representation.
//!
//! The codec follows the JSON rules of the FHIR specification:
//!
//! - A choice element `value[x]` appears under exactly one key built from the
//!   base name and the type suffix (`valueQuantity`, `effectivePeriod`). It is
//!   a Rust enum here, so at most one alternative can ever be set.
//! - A primitive may carry an element id and extensions in a sibling object
//!   keyed `_name`; repeating primitives use parallel arrays with `null`
//!   placeholders.
//! - `resourceType` selects the concrete type when decoding a [`stu3::Resource`].
//! - Dates, times and decimals keep the text they were read from, so
//!   `"2014-03"` and `1.50` come back unchanged.
//!
//! ```rust
//! use atrius_fhir_stu3::stu3::{Observation, ObservationStatus};
//!
//! let json = r#"{"resourceType":"Observation","status":"final","code":{"text":"BP"}}"#;
//! let observation: Observation = atrius_fhir_stu3::from_str(json).unwrap();
//! assert_eq!(observation.status.value, Some(ObservationStatus::Final));
//! assert_eq!(atrius_fhir_stu3::to_string(&observation), json);
//! ```
//!
//! Every model type also implements `serde::Serialize` and
//! `serde::Deserialize` through the same codec.

pub mod codec;
pub mod date_time;
pub mod element;
pub mod error;
pub mod precise_decimal;
pub mod stu3;

#[cfg(feature = "cli")]
pub mod cli;

use serde_json::Value;

pub use codec::{DecodeOptions, FhirObject, UnknownFieldPolicy};
pub use date_time::{
    DatePrecision, DateTimePrecision, PrecisionDate, PrecisionDateTime, PrecisionInstant,
    PrecisionTime, TimePrecision,
};
pub use element::Element;
pub use error::{DecodeError, DecodeResult, FhirError};
pub use precise_decimal::PreciseDecimal;

/// Decodes a FHIR JSON document into `T` with the default, lenient options.
pub fn from_str<T: FhirObject>(json: &str) -> Result<T, FhirError> {
    from_str_with(json, &DecodeOptions::default())
}

/// Decodes a FHIR JSON document into `T`.
///
/// Numbers are read with their original text, so decimals keep their
/// precision.
pub fn from_str_with<T: FhirObject>(json: &str, options: &DecodeOptions) -> Result<T, FhirError> {
    let value: Value = serde_json::from_str(json)?;
    Ok(from_value_with(&value, options)?)
}

/// Decodes an already parsed JSON value into `T` with the default options.
pub fn from_value<T: FhirObject>(value: &Value) -> DecodeResult<T> {
    from_value_with(value, &DecodeOptions::default())
}

pub fn from_value_with<T: FhirObject>(value: &Value, options: &DecodeOptions) -> DecodeResult<T> {
    let _span = tracing::debug_span!("decode", type_name = T::TYPE_NAME).entered();
    tracing::trace!(type_name = T::TYPE_NAME, ?options, "decoding");
    let Value::Object(obj) = value else {
        return Err(DecodeError::type_mismatch("object", value));
    };
    T::decode_object(obj, options).inspect_err(|err| {
        tracing::debug!(path = err.path(), "decode failed: {err}");
    })
}

/// Encodes `item` as a JSON object. Absent fields are omitted and key
/// order follows field declaration order.
pub fn to_value<T: FhirObject>(item: &T) -> Value {
    tracing::trace!(type_name = T::TYPE_NAME, "encoding");
    codec::object_to_value(item)
}

/// Encodes `item` as compact JSON text.
pub fn to_string<T: FhirObject>(item: &T) -> String {
    to_value(item).to_string()
}

pub fn to_string_pretty<T: FhirObject>(item: &T) -> Result<String, FhirError> {
    Ok(serde_json::to_string_pretty(&to_value(item))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stu3::{Observation, ObservationStatus, Resource};

    const OBSERVATION: &str =
        r#"{"resourceType":"Observation","status":"final","code":{"text":"BP"}}"#;

    #[test]
    fn test_from_str_and_to_string() {
        let observation: Observation = from_str(OBSERVATION).unwrap();
        assert_eq!(observation.status.value, Some(ObservationStatus::Final));
        assert_eq!(observation.code.text.as_ref().and_then(|t| t.value.as_deref()), Some("BP"));
        assert_eq!(to_string(&observation), OBSERVATION);
    }

    #[test]
    fn test_from_str_reports_malformed_json() {
        let err = from_str::<Observation>("{\"resourceType\":").unwrap_err();
        assert!(matches!(err, FhirError::Json(_)));
    }

    #[test]
    fn test_from_value_requires_an_object() {
        let err = from_value::<Resource>(&serde_json::json!(["Observation"])).unwrap_err();
        assert!(matches!(err, DecodeError::TypeMismatch { expected: "object", .. }));
    }

    #[test]
    fn test_serde_bridge_matches_codec() {
        let resource: Resource = serde_json::from_str(OBSERVATION).unwrap();
        assert_eq!(resource.resource_type(), "Observation");
        assert_eq!(serde_json::to_string(&resource).unwrap(), OBSERVATION);
    }

    #[test]
    fn test_to_string_pretty_is_indented() {
        let observation: Observation = from_str(OBSERVATION).unwrap();
        let pretty = to_string_pretty(&observation).unwrap();
        assert!(pretty.contains("\n  \"status\": \"final\""));
    }
}

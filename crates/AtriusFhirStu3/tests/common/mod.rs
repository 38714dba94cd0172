#![allow(dead_code)]

use std::fmt::Debug;

use atrius_fhir_stu3::{DecodeError, DecodeOptions, FhirObject, from_value, from_value_with, to_value};
use serde_json::Value;

/// Parses JSON text without going through f64, so numbers keep their
/// original digits.
pub fn parse(text: &str) -> Value {
    serde_json::from_str(text).expect("test fixture must be valid JSON")
}

/// Decodes `text` as `T`, re-encodes it and checks that nothing changed.
pub fn assert_round_trip<T: FhirObject + Debug>(text: &str) -> T {
    let input = parse(text);
    let decoded: T = from_value(&input).unwrap_or_else(|err| panic!("decode failed: {err}"));
    assert_eq!(to_value(&decoded), input, "round trip changed the document");
    decoded
}

/// Encodes a constructed `item`, decodes the result and checks that the
/// decoded value equals the original. Returns the encoded JSON.
pub fn assert_encode_decode<T: FhirObject + Debug + PartialEq>(item: &T) -> Value {
    let encoded = to_value(item);
    let decoded: T = from_value(&encoded)
        .unwrap_or_else(|err| panic!("encoded {} does not decode: {err}", T::TYPE_NAME));
    assert_eq!(&decoded, item, "decode(encode(x)) differs from x");
    encoded
}

pub fn decode_err<T: FhirObject + Debug>(text: &str) -> DecodeError {
    from_value::<T>(&parse(text)).expect_err("decode should fail")
}

pub fn decode_strict_err<T: FhirObject + Debug>(text: &str) -> DecodeError {
    from_value_with::<T>(&parse(text), &DecodeOptions::strict()).expect_err("decode should fail")
}

mod common;

use atrius_fhir_stu3::stu3::*;
use atrius_fhir_stu3::{DatePrecision, DateTimePrecision, DecodeError, to_string};
use common::{assert_round_trip, decode_err};
use rust_decimal_macros::dec;

#[test]
fn test_partial_date_is_not_widened() {
    let patient: Patient =
        assert_round_trip(r#"{"resourceType":"Patient","birthDate":"2014-03"}"#);
    let birth_date = patient.birth_date.as_ref().and_then(|d| d.value.as_ref()).unwrap();
    assert_eq!(birth_date.precision(), DatePrecision::YearMonth);
    assert_eq!(birth_date.month(), Some(3));
    assert_eq!(birth_date.day(), None);
    assert_eq!(to_string(&patient), r#"{"resourceType":"Patient","birthDate":"2014-03"}"#);
}

#[test]
fn test_date_times_keep_their_precision_in_choices() {
    let condition: Condition = assert_round_trip(
        r#"{
            "resourceType": "Condition",
            "subject": {"reference": "Patient/p1"},
            "onsetDateTime": "2014",
            "abatementDateTime": "2015-06-12T09:30:00.250+02:00",
            "assertedDate": "2014-03"
        }"#,
    );
    let Some(ConditionOnset::DateTime(onset)) = &condition.onset else {
        panic!("expected onsetDateTime");
    };
    assert_eq!(onset.value.as_ref().map(|d| d.precision()), Some(DateTimePrecision::Year));

    let Some(ConditionAbatement::DateTime(abatement)) = &condition.abatement else {
        panic!("expected abatementDateTime");
    };
    let abatement = abatement.value.as_ref().unwrap();
    assert_eq!(abatement.precision(), DateTimePrecision::Fraction);
    assert_eq!(abatement.timezone_offset(), Some(120));
}

#[test]
fn test_invalid_dates_are_type_mismatches() {
    let err = decode_err::<Patient>(r#"{"resourceType":"Patient","birthDate":"2014-13"}"#);
    assert!(matches!(err, DecodeError::TypeMismatch { expected: "date", .. }));
    assert_eq!(err.path(), "birthDate");

    let err = decode_err::<Patient>(r#"{"resourceType":"Patient","birthDate":"2015-02-29"}"#);
    assert!(matches!(err, DecodeError::TypeMismatch { expected: "date", .. }));

    // A time of day needs a timezone.
    let err = decode_err::<Observation>(
        r#"{"resourceType":"Observation","status":"final","code":{"text":"x"},
            "effectiveDateTime":"2015-02-07T13:28:17"}"#,
    );
    assert!(matches!(err, DecodeError::TypeMismatch { expected: "dateTime", .. }));
    assert_eq!(err.path(), "effectiveDateTime");
}

#[test]
fn test_instant_requires_full_precision() {
    let observation: Observation = assert_round_trip(
        r#"{"resourceType":"Observation","status":"final","code":{"text":"x"},
            "issued":"2013-04-03T15:30:10.01+01:00"}"#,
    );
    assert_eq!(
        observation.issued.as_ref().and_then(|i| i.value.as_ref()).map(|i| i.original_string()),
        Some("2013-04-03T15:30:10.01+01:00")
    );

    let err = decode_err::<Observation>(
        r#"{"resourceType":"Observation","status":"final","code":{"text":"x"},"issued":"2013-04-03"}"#,
    );
    assert!(matches!(err, DecodeError::TypeMismatch { expected: "instant", .. }));
}

#[test]
fn test_decimal_text_is_preserved() {
    let observation: Observation = assert_round_trip(
        r#"{"resourceType":"Observation","status":"final","code":{"text":"x"},
            "valueQuantity":{"value":1.50,"unit":"mmol/L"},
            "referenceRange":[{"low":{"value":0.100},"high":{"value":3.14159265358979323846}}]}"#,
    );
    let Some(ObservationValue::Quantity(quantity)) = &observation.value else {
        panic!("expected valueQuantity");
    };
    let value = quantity.value.as_ref().and_then(|v| v.value.as_ref()).unwrap();
    assert_eq!(value.original_string(), "1.50");
    assert_eq!(value.value(), Some(dec!(1.5)));
    assert!(to_string(&observation).contains(r#""value":1.50"#));

    let range = &observation.reference_range.as_deref().unwrap_or_default()[0];
    let low = range.low.as_ref().and_then(|q| q.value.as_ref()).and_then(|v| v.value.as_ref());
    assert_eq!(low.map(|d| d.original_string()), Some("0.100".to_string()));
}

#[test]
fn test_decimal_must_be_a_json_number() {
    let err = decode_err::<Observation>(
        r#"{"resourceType":"Observation","status":"final","code":{"text":"x"},
            "valueQuantity":{"value":"1.5"}}"#,
    );
    assert!(matches!(err, DecodeError::TypeMismatch { expected: "decimal", .. }));
    assert_eq!(err.path(), "valueQuantity.value");
}

#[test]
fn test_integer_range_is_enforced() {
    let err = decode_err::<Bundle>(r#"{"resourceType":"Bundle","type":"searchset","total":-1}"#);
    assert_eq!(err.path(), "total");

    let err = decode_err::<Patient>(
        r#"{"resourceType":"Patient","multipleBirthInteger":2.5}"#,
    );
    assert!(matches!(err, DecodeError::TypeMismatch { expected: "integer", .. }));
}

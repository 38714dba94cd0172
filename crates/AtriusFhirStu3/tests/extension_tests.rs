mod common;

use atrius_fhir_stu3::stu3::*;
use atrius_fhir_stu3::{DecodeError, to_value};
use common::{assert_round_trip, decode_err, decode_strict_err, parse};

const BIRTH_TIME: &str = "http://hl7.org/fhir/StructureDefinition/patient-birthTime";

#[test]
fn test_primitive_extension_survives_a_round_trip() {
    let patient: Patient = assert_round_trip(
        r#"{
            "resourceType": "Patient",
            "id": "example",
            "birthDate": "1974-12-25",
            "_birthDate": {
                "extension": [{"url": "http://hl7.org/fhir/StructureDefinition/patient-birthTime",
                               "valueDateTime": "1974-12-25T14:35:45-05:00"}]
            }
        }"#,
    );

    let birth_date = patient.birth_date.as_ref().unwrap();
    assert_eq!(birth_date.value.as_ref().map(|d| d.original_string()), Some("1974-12-25"));
    let extensions = birth_date.extension.as_deref().unwrap_or_default();
    assert_eq!(extensions.len(), 1);
    assert_eq!(extensions[0].url, BIRTH_TIME);
    assert!(matches!(extensions[0].value, Some(ExtensionValue::DateTime(_))));
}

#[test]
fn test_extension_without_value_keeps_element_id() {
    // A primitive may be absent while its sibling carries an id and extensions.
    let patient: Patient = assert_round_trip(
        r#"{
            "resourceType": "Patient",
            "_gender": {
                "id": "g1",
                "extension": [{"url": "http://example.org/data-absent-reason", "valueCode": "asked-declined"}]
            }
        }"#,
    );
    let gender = patient.gender.as_ref().unwrap();
    assert_eq!(gender.value, None);
    assert_eq!(gender.id.as_deref(), Some("g1"));
}

#[test]
fn test_repeating_primitive_uses_parallel_arrays() {
    let patient: Patient = assert_round_trip(
        r#"{
            "resourceType": "Patient",
            "name": [{
                "family": "van Hamburg",
                "given": ["Pieter", "Jan", null],
                "_given": [null, {"id": "middle"}, {"extension": [{"url": "http://example.org/nickname", "valueString": "PJ"}]}]
            }]
        }"#,
    );

    let name = &patient.name.as_deref().unwrap_or_default()[0];
    let given = name.given.as_deref().unwrap_or_default();
    assert_eq!(given.len(), 3);
    assert_eq!(given[0].value.as_deref(), Some("Pieter"));
    assert_eq!(given[0].id, None);
    assert_eq!(given[1].id.as_deref(), Some("middle"));
    assert_eq!(given[2].value, None);
    assert_eq!(given[2].extension.as_deref().map(<[Extension]>::len), Some(1));
}

#[test]
fn test_built_elements_write_only_needed_siblings() {
    let mut family = String::from("Chalmers");
    family.extension = Some(vec![Extension::new(
        "http://example.org/own-prefix",
        ExtensionValue::String("van".into()),
    )]);
    let patient = Patient {
        name: Some(vec![HumanName {
            family: Some(family),
            given: Some(vec!["Peter".into(), "James".into()]),
            ..Default::default()
        }]),
        ..Default::default()
    };

    assert_eq!(
        to_value(&patient),
        parse(
            r#"{
                "resourceType": "Patient",
                "name": [{
                    "family": "Chalmers",
                    "_family": {"extension": [{"url": "http://example.org/own-prefix", "valueString": "van"}]},
                    "given": ["Peter", "James"]
                }]
            }"#
        )
    );
}

#[test]
fn test_extensions_nest_and_keep_their_order() {
    let patient: Patient = assert_round_trip(
        r#"{
            "resourceType": "Patient",
            "extension": [
                {
                    "url": "http://hl7.org/fhir/us/core/StructureDefinition/us-core-race",
                    "extension": [
                        {"url": "ombCategory", "valueCoding": {"system": "urn:oid:2.16.840.1.113883.6.238", "code": "2106-3"}},
                        {"url": "text", "valueString": "White"}
                    ]
                },
                {"url": "http://example.org/score", "valueDecimal": 2.50},
                {"url": "http://example.org/flag", "valueBoolean": false}
            ],
            "modifierExtension": [{"url": "http://example.org/is-test", "valueBoolean": true}]
        }"#,
    );

    let extensions = patient.extension.as_deref().unwrap_or_default();
    let urls: Vec<&str> = extensions.iter().map(|e| e.url.as_str()).collect();
    assert_eq!(
        urls,
        [
            "http://hl7.org/fhir/us/core/StructureDefinition/us-core-race",
            "http://example.org/score",
            "http://example.org/flag"
        ]
    );
    let nested = extensions[0].extension.as_deref().unwrap_or_default();
    assert_eq!(nested.len(), 2);
    assert!(extensions[0].value.is_none());
    assert!(matches!(nested[0].value, Some(ExtensionValue::Coding(_))));
    assert_eq!(patient.modifier_extension.as_deref().map(<[Extension]>::len), Some(1));
}

#[test]
fn test_extension_value_is_a_choice() {
    let err = decode_err::<Patient>(
        r#"{"resourceType":"Patient","extension":[
            {"url":"http://example.org/x","valueString":"a","valueCode":"b"}
        ]}"#,
    );
    assert!(matches!(err, DecodeError::AmbiguousChoiceValue { .. }));
    assert_eq!(err.path(), "extension[0].value");
}

#[test]
fn test_extension_requires_url() {
    let err = decode_err::<Patient>(
        r#"{"resourceType":"Patient","extension":[{"valueString":"no url"}]}"#,
    );
    assert_eq!(err, DecodeError::missing_field("url").within("extension[0]"));
}

#[test]
fn test_mismatched_parallel_arrays_are_rejected() {
    let err = decode_err::<Patient>(
        r#"{"resourceType":"Patient","name":[{"given":["a","b"],"_given":[null]}]}"#,
    );
    assert_eq!(err.path(), "name[0]._given");

    let err = decode_err::<Patient>(
        r#"{"resourceType":"Patient","name":[{"given":["a",null],"_given":[null,null]}]}"#,
    );
    assert_eq!(err.path(), "name[0].given[1]");
}

#[test]
fn test_sibling_next_to_a_complex_element_is_rejected() {
    // Only primitives have `_name` siblings; extensions on a CodeableConcept
    // belong inside it.
    let json = r#"{"resourceType":"Observation","status":"final","code":{"text":"BP"},
        "_code":{"extension":[{"url":"http://example.org/x","valueBoolean":true}]}}"#;

    let err = decode_err::<Observation>(json);
    assert!(matches!(err, DecodeError::TypeMismatch { .. }));
    assert_eq!(err.path(), "code");

    let err = decode_strict_err::<Observation>(json);
    assert_eq!(err.path(), "code");

    let err = decode_err::<Patient>(
        r#"{"resourceType":"Patient","name":[{"family":"Chalmers"}],"_name":[{"id":"n"}]}"#,
    );
    assert_eq!(err.path(), "name[0]");
}

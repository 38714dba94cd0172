mod common;

use atrius_fhir_stu3::codec::FhirChoice;
use atrius_fhir_stu3::stu3::*;
use atrius_fhir_stu3::{DecodeError, from_str, to_string, to_value};
use common::{assert_encode_decode, assert_round_trip, decode_err, parse};

#[test]
fn test_minimal_observation_decodes_and_reencodes_unchanged() {
    let json = r#"{"resourceType":"Observation","status":"final","code":{"text":"BP"}}"#;
    let observation: Observation = from_str(json).unwrap();

    assert_eq!(observation.status.value, Some(ObservationStatus::Final));
    assert_eq!(observation.code, CodeableConcept::from_text("BP"));
    assert_eq!(observation.subject, None);
    assert_eq!(observation.value, None);
    assert_eq!(observation.component, None);

    // Only the keys that were read come back out.
    assert_eq!(to_string(&observation), json);
}

#[test]
fn test_built_observation_encodes_minimal_keys() {
    let observation = Observation::new(ObservationStatus::Final, CodeableConcept::from_text("BP"));
    assert_eq!(
        to_value(&observation),
        parse(r#"{"resourceType":"Observation","status":"final","code":{"text":"BP"}}"#)
    );
}

#[test]
fn test_value_quantity_selects_the_quantity_variant() {
    let observation: Observation = assert_round_trip(
        r#"{
            "resourceType": "Observation",
            "id": "heart-rate",
            "status": "final",
            "code": {
                "coding": [{"system": "http://loinc.org", "code": "8867-4", "display": "Heart rate"}]
            },
            "subject": {"reference": "Patient/example"},
            "effectiveDateTime": "1999-07-02",
            "valueQuantity": {
                "value": 44.0,
                "unit": "beats/minute",
                "system": "http://unitsofmeasure.org",
                "code": "/min"
            }
        }"#,
    );

    let Some(ObservationValue::Quantity(quantity)) = &observation.value else {
        panic!("expected valueQuantity, got {:?}", observation.value);
    };
    assert_eq!(quantity.unit.as_ref().and_then(|u| u.value.as_deref()), Some("beats/minute"));
    assert_eq!(
        quantity.value.as_ref().and_then(|v| v.value.as_ref()).map(|d| d.original_string()),
        Some("44.0".to_string())
    );

    let value = observation.value.as_ref().unwrap();
    assert_eq!(value.key(), "valueQuantity");
    assert_eq!(value.type_suffix(), "Quantity");
    assert!(matches!(observation.effective, Some(ObservationEffective::DateTime(_))));
}

#[test]
fn test_components_keep_their_order() {
    let observation: Observation = assert_round_trip(
        r#"{
            "resourceType": "Observation",
            "status": "final",
            "code": {"text": "Blood pressure panel"},
            "component": [
                {"code": {"text": "Systolic"}, "valueQuantity": {"value": 107, "unit": "mmHg"}},
                {"code": {"text": "Diastolic"}, "valueQuantity": {"value": 60, "unit": "mmHg"}},
                {"code": {"text": "Position"}, "valueString": "sitting"}
            ]
        }"#,
    );

    let names: Vec<&str> = observation
        .component
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(|c| c.code.text.as_ref()?.value.as_deref())
        .collect();
    assert_eq!(names, ["Systolic", "Diastolic", "Position"]);
}

#[test]
fn test_two_value_keys_are_ambiguous() {
    let err = decode_err::<Observation>(
        r#"{"resourceType":"Observation","status":"final","code":{"text":"x"},
            "valueString":"high","valueBoolean":true}"#,
    );
    assert_eq!(
        err,
        DecodeError::AmbiguousChoiceValue {
            path: "value".to_string(),
            found: vec!["valueString".to_string(), "valueBoolean".to_string()],
        }
    );
}

#[test]
fn test_sibling_of_another_choice_key_is_ambiguous() {
    let err = decode_err::<Observation>(
        r#"{"resourceType":"Observation","status":"final","code":{"text":"x"},
            "valueBoolean":true,"_valueString":{"id":"s1"}}"#,
    );
    assert!(matches!(err, DecodeError::AmbiguousChoiceValue { ref path, .. } if path == "value"));
}

#[test]
fn test_ambiguity_inside_a_component_carries_its_path() {
    let err = decode_err::<Observation>(
        r#"{"resourceType":"Observation","status":"final","code":{"text":"x"},
            "component":[{"code":{"text":"a"}},{"code":{"text":"b"},"valueString":"b","valueRatio":{}}]}"#,
    );
    assert_eq!(err.path(), "component[1].value");
}

#[test]
fn test_missing_status_is_reported() {
    let err = decode_err::<Observation>(r#"{"resourceType":"Observation","code":{"text":"BP"}}"#);
    assert_eq!(
        err,
        DecodeError::MissingRequiredField {
            path: "status".to_string()
        }
    );
}

#[test]
fn test_missing_code_is_reported() {
    let err = decode_err::<Observation>(r#"{"resourceType":"Observation","status":"final"}"#);
    assert_eq!(err, DecodeError::missing_field("code"));
}

#[test]
fn test_missing_component_code_carries_the_index() {
    let err = decode_err::<Observation>(
        r#"{"resourceType":"Observation","status":"final","code":{"text":"x"},
            "component":[{"code":{"text":"ok"}},{"valueString":"no code"}]}"#,
    );
    assert_eq!(err, DecodeError::missing_field("code").within("component[1]"));
    assert_eq!(err.path(), "component[1].code");
}

#[test]
fn test_unknown_status_code_is_a_type_mismatch() {
    let err = decode_err::<Observation>(
        r#"{"resourceType":"Observation","status":"done","code":{"text":"x"}}"#,
    );
    match err {
        DecodeError::TypeMismatch { path, found, .. } => {
            assert_eq!(path, "status");
            assert_eq!(found, "string \"done\"");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_wrong_json_type_is_a_type_mismatch() {
    let err = decode_err::<Observation>(
        r#"{"resourceType":"Observation","status":"final","code":{"text":"x"},"valueBoolean":"yes"}"#,
    );
    assert!(matches!(
        err,
        DecodeError::TypeMismatch { ref path, expected: "boolean", .. } if path == "valueBoolean"
    ));

    let err = decode_err::<Observation>(
        r#"{"resourceType":"Observation","status":"final","code":"BP"}"#,
    );
    assert!(matches!(
        err,
        DecodeError::TypeMismatch { ref path, expected: "object", .. } if path == "code"
    ));
}

#[test]
fn test_decoding_as_the_wrong_resource_fails() {
    let err = decode_err::<Observation>(r#"{"resourceType":"Patient"}"#);
    assert!(matches!(
        err,
        DecodeError::TypeMismatch { ref path, expected: "Observation", .. } if path == "resourceType"
    ));
}

#[test]
fn test_constructed_observation_survives_encode_and_decode() {
    let mut observation = Observation::new(ObservationStatus::Amended, CodeableConcept::from_text("BP"));
    observation.subject = Some(Reference::to("Patient/p1"));
    observation.value = Some(ObservationValue::String("120/80".into()));
    observation.component = Some(vec![
        ObservationComponent::new(CodeableConcept::from_text("Systolic")),
        ObservationComponent::new(CodeableConcept::from_text("Diastolic")),
    ]);

    let encoded = assert_encode_decode(&observation);
    assert_eq!(encoded["status"], "amended");
    assert_eq!(encoded["component"][1]["code"]["text"], "Diastolic");
}

#[test]
fn test_constructed_outcome_supplies_its_issue() {
    let outcome = OperationOutcome::new(vec![OperationOutcomeIssue::new(
        IssueSeverity::Error,
        IssueType::Required,
    )]);
    assert_eq!(
        assert_encode_decode(&outcome),
        parse(r#"{"resourceType":"OperationOutcome","issue":[{"severity":"error","code":"required"}]}"#)
    );
}

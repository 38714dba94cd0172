mod common;

use atrius_fhir_stu3::codec::FhirChoice;
use atrius_fhir_stu3::stu3::*;
use atrius_fhir_stu3::{DecodeError, from_value, to_value};
use common::{assert_encode_decode, assert_round_trip, decode_err, parse};

// Minimal MedicationStatement without its medication[x]
const STATEMENT_WITHOUT_MEDICATION: &str = r#"{
    "resourceType": "MedicationStatement",
    "status": "active",
    "subject": {"reference": "Patient/p1"},
    "taken": "y"
}"#;

#[test]
fn test_required_choice_must_be_present() {
    let err = decode_err::<MedicationStatement>(STATEMENT_WITHOUT_MEDICATION);
    assert_eq!(
        err,
        DecodeError::MissingRequiredChoiceValue {
            path: "medication".to_string()
        }
    );
}

#[test]
fn test_required_choice_accepts_either_alternative() {
    let statement: MedicationStatement = assert_round_trip(
        r#"{"resourceType":"MedicationStatement","status":"active",
            "medicationCodeableConcept":{"coding":[{"system":"http://snomed.info/sct","code":"27658006"}]},
            "effectivePeriod":{"start":"2015-01-23"},
            "subject":{"reference":"Patient/p1"},"taken":"n"}"#,
    );
    assert_eq!(statement.medication.key(), "medicationCodeableConcept");
    assert!(matches!(statement.effective, Some(MedicationStatementEffective::Period(_))));
    assert_eq!(statement.taken.value, Some(MedicationStatementTaken::No));
}

#[test]
fn test_required_choice_in_a_backbone_element() {
    let err = decode_err::<Medication>(
        r#"{"resourceType":"Medication","ingredient":[{"isActive":true}]}"#,
    );
    assert_eq!(err, DecodeError::missing_choice("item").within("ingredient[0]"));

    let err = decode_err::<Task>(
        r#"{"resourceType":"Task","status":"draft","intent":"order",
            "input":[{"type":{"text":"dose"},"valueString":"1","valueInteger":1}]}"#,
    );
    assert_eq!(err.path(), "input[0].value");
}

#[test]
fn test_open_choice_supports_complex_types() {
    let task: Task = assert_round_trip(
        r#"{"resourceType":"Task","status":"requested","intent":"order",
            "for":{"reference":"Patient/p1"},
            "input":[
                {"type":{"text":"window"},"valuePeriod":{"start":"2017-01-01T09:00:00Z"}},
                {"type":{"text":"dose"},"valueQuantity":{"value":2,"unit":"mg"}},
                {"type":{"text":"note"},"valueMarkdown":"*urgent*"}
            ],
            "output":[{"type":{"text":"result"},"valueReference":{"reference":"DiagnosticReport/r1"}}]}"#,
    );
    let inputs = task.input.as_deref().unwrap_or_default();
    let keys: Vec<&str> = inputs.iter().map(|input| input.value.key()).collect();
    assert_eq!(keys, ["valuePeriod", "valueQuantity", "valueMarkdown"]);
    assert_eq!(
        task.r#for.as_ref().and_then(|r| r.reference.as_ref()).and_then(|r| r.value.as_deref()),
        Some("Patient/p1")
    );
}

#[test]
fn test_choice_keys_are_listed_per_group() {
    assert!(ObservationValue::KEYS.contains(&"valueSampledData"));
    assert!(!ObservationValue::KEYS.contains(&"valueInteger"));
    assert!(ObservationComponentValue::accepts_key("_valueString"));
    assert!(!ObservationComponentValue::accepts_key("valueBoolean"));
    assert_eq!(PatientDeceased::BASE_NAME, "deceased");
}

#[test]
fn test_choice_alternative_with_only_an_extension() {
    let patient: Patient = assert_round_trip(
        r#"{"resourceType":"Patient",
            "_deceasedBoolean":{"extension":[{"url":"http://example.org/reason","valueString":"unknown"}]}}"#,
    );
    match &patient.deceased {
        Some(PatientDeceased::Boolean(deceased)) => {
            assert_eq!(deceased.value, None);
            assert!(!deceased.is_empty());
        }
        other => panic!("expected deceasedBoolean, got {other:?}"),
    }
}

#[test]
fn test_setting_a_choice_replaces_the_previous_alternative() {
    let mut patient = Patient::default();
    patient.deceased = Some(PatientDeceased::Boolean(true.into()));
    patient.deceased = Some(PatientDeceased::DateTime(Element::new(
        "2015-02-14T13:42:00+10:00".parse().unwrap(),
    )));
    assert_eq!(
        to_value(&patient),
        parse(r#"{"resourceType":"Patient","deceasedDateTime":"2015-02-14T13:42:00+10:00"}"#)
    );
}

#[test]
fn test_nested_choices_in_recursive_items() {
    let response: QuestionnaireResponse = assert_round_trip(
        r#"{"resourceType":"QuestionnaireResponse","status":"completed",
            "item":[{"linkId":"1","item":[
                {"linkId":"1.1","answer":[{"valueBoolean":true,"item":[
                    {"linkId":"1.1.1","answer":[{"valueDate":"2014-03"}]}
                ]}]}
            ]}]}"#,
    );
    let items = response.item.as_deref().unwrap_or_default();
    let child = &items[0].item.as_deref().unwrap_or_default()[0];
    let answer = &child.answer.as_deref().unwrap_or_default()[0];
    assert!(matches!(answer.value, Some(QuestionnaireResponseItemAnswerValue::Boolean(_))));
    let grandchild = &answer.item.as_deref().unwrap_or_default()[0];
    assert_eq!(grandchild.link_id.value.as_deref(), Some("1.1.1"));
}

#[test]
fn test_element_definition_open_choices() {
    let element: ElementDefinition = assert_round_trip(
        r#"{
            "id": "Observation.code",
            "path": "Observation.code",
            "short": "Type of observation",
            "min": 1,
            "max": "1",
            "base": {"path": "Observation.code", "min": 1, "max": "1"},
            "type": [{"code": "CodeableConcept"}],
            "patternCodeableConcept": {"coding": [{"system": "http://loinc.org", "code": "85354-9"}]},
            "example": [{"label": "General", "valueString": "blood pressure"}],
            "constraint": [{
                "key": "ele-1",
                "severity": "error",
                "human": "All FHIR elements must have a @value or children",
                "expression": "hasValue() | (children().count() > id.count())"
            }],
            "isSummary": true,
            "binding": {"strength": "example", "valueSetReference": {"reference": "http://hl7.org/fhir/ValueSet/observation-codes"}},
            "mapping": [{"identity": "rim", "map": "code"}]
        }"#,
    );
    assert!(matches!(element.pattern, Some(ElementDefinitionPattern::CodeableConcept(_))));
    assert!(element.fixed.is_none());
    let example = &element.example.as_deref().unwrap()[0];
    assert_eq!(example.value.key(), "valueString");
    let binding = element.binding.as_ref().unwrap();
    assert_eq!(binding.strength.value, Some(BindingStrength::Example));
    assert!(matches!(binding.value_set, Some(ElementDefinitionBindingValueSet::Reference(_))));
    let constraint = &element.constraint.as_deref().unwrap()[0];
    assert_eq!(constraint.severity.value, Some(ConstraintSeverity::Error));
}

#[test]
fn test_element_definition_slicing_and_limits() {
    let element: ElementDefinition = assert_round_trip(
        r#"{
            "path": "Observation.component",
            "slicing": {
                "discriminator": [{"type": "pattern", "path": "code"}],
                "ordered": false,
                "rules": "open"
            },
            "fixedString": "mmHg",
            "minValueInteger": 0,
            "maxValueQuantity": {"value": 300, "unit": "mm[Hg]"},
            "maxLength": 10
        }"#,
    );
    let slicing = element.slicing.as_ref().unwrap();
    assert_eq!(slicing.rules.value, Some(SlicingRules::Open));
    assert_eq!(
        slicing.discriminator.as_deref().unwrap()[0].r#type.value,
        Some(DiscriminatorType::Pattern)
    );
    assert_eq!(element.fixed.as_ref().map(FhirChoice::key), Some("fixedString"));
    assert!(matches!(element.min_value, Some(ElementDefinitionMinValue::Integer(_))));
    assert!(matches!(element.max_value, Some(ElementDefinitionMaxValue::Quantity(_))));

    let err = decode_err::<ElementDefinition>(
        r#"{"path":"Observation.value[x]","fixedString":"a","fixedCode":"b"}"#,
    );
    assert!(matches!(err, DecodeError::AmbiguousChoiceValue { .. }));
    assert_eq!(err.path(), "fixed");

    let err = decode_err::<ElementDefinition>(r#"{"path":"Observation.component","slicing":{"ordered":true}}"#);
    assert_eq!(err, DecodeError::missing_field("rules").within("slicing"));
}

#[test]
fn test_constructed_element_definition_survives_encode_and_decode() {
    let mut element = ElementDefinition::new("Patient.name");
    element.min = Some(1u32.into());
    element.max = Some("*".into());
    element.base = Some(ElementDefinitionBase::new("Patient.name", 0u32, "*"));
    element.r#type = Some(vec![ElementDefinitionType::new("HumanName")]);
    element.fixed = Some(ElementDefinitionFixed::Boolean(true.into()));
    element.binding = Some(ElementDefinitionBinding::new(BindingStrength::Required));

    let encoded = assert_encode_decode(&element);
    assert_eq!(encoded["fixedBoolean"], true);
    assert_eq!(encoded["base"]["max"], "*");
    assert_eq!(encoded["binding"]["strength"], "required");
}

#[test]
fn test_empty_choice_alternative_is_not_written() {
    // An empty primitive alternative has nothing to write, so its key is
    // omitted and decoding reads the group as absent.
    let mut observation = Observation::new(ObservationStatus::Final, CodeableConcept::from_text("BP"));
    observation.value = Some(ObservationValue::String(Element::default()));

    let encoded = to_value(&observation);
    assert_eq!(
        encoded,
        parse(r#"{"resourceType":"Observation","status":"final","code":{"text":"BP"}}"#)
    );
    let decoded: Observation = from_value(&encoded).unwrap();
    assert_eq!(decoded.value, None);

    // An alternative that carries only an extension still selects itself.
    let mut tagged = Element::default();
    tagged.extension = Some(vec![Extension::new(
        "http://example.org/reason",
        ExtensionValue::Code("masked".into()),
    )]);
    observation.value = Some(ObservationValue::String(tagged));
    let encoded = assert_encode_decode(&observation);
    assert!(encoded.get("valueString").is_none());
    assert!(encoded.get("_valueString").is_some());
}

mod common;

use atrius_fhir_stu3::stu3::*;
use atrius_fhir_stu3::{DecodeError, from_value, to_value};
use common::{assert_encode_decode, assert_round_trip, decode_err, parse};

fn search_bundle() -> &'static str {
    r#"{
        "resourceType": "Bundle",
        "id": "search-1",
        "type": "searchset",
        "total": 2,
        "link": [{"relation": "self", "url": "http://example.org/fhir/Observation?code=8867-4"}],
        "entry": [
            {
                "fullUrl": "http://example.org/fhir/Patient/p1",
                "resource": {
                    "resourceType": "Patient",
                    "id": "p1",
                    "name": [{"family": "Chalmers", "given": ["Peter", "James"]}],
                    "gender": "male",
                    "birthDate": "1974-12-25"
                },
                "search": {"mode": "include"}
            },
            {
                "fullUrl": "http://example.org/fhir/Observation/o1",
                "resource": {
                    "resourceType": "Observation",
                    "id": "o1",
                    "status": "final",
                    "code": {"text": "Heart rate"},
                    "subject": {"reference": "Patient/p1"},
                    "valueQuantity": {"value": 44, "unit": "beats/minute"}
                },
                "search": {"mode": "match", "score": 1.0}
            }
        ]
    }"#
}

#[test]
fn test_bundle_entries_dispatch_on_resource_type() {
    let bundle: Bundle = assert_round_trip(search_bundle());
    assert_eq!(bundle.r#type.value, Some(BundleType::Searchset));

    let entries = bundle.entry.as_deref().unwrap_or_default();
    let types: Vec<&str> = entries
        .iter()
        .filter_map(|entry| entry.resource.as_ref())
        .map(Resource::resource_type)
        .collect();
    assert_eq!(types, ["Patient", "Observation"]);

    match entries[0].resource.as_ref() {
        Some(Resource::Patient(patient)) => {
            assert_eq!(patient.gender.as_ref().and_then(|g| g.value), Some(AdministrativeGender::Male));
        }
        other => panic!("expected a Patient, got {other:?}"),
    }
    match entries[1].resource.as_ref() {
        Some(Resource::Observation(observation)) => {
            assert_eq!(observation.status.value, Some(ObservationStatus::Final));
        }
        other => panic!("expected an Observation, got {other:?}"),
    }
}

#[test]
fn test_resource_enum_decodes_any_registered_type() {
    let resource: Resource = from_value(&parse(search_bundle())).unwrap();
    assert_eq!(resource.resource_type(), "Bundle");
    assert_eq!(resource.id().and_then(|id| id.value.as_deref()), Some("search-1"));
    assert_eq!(to_value(&resource), parse(search_bundle()));
}

#[test]
fn test_unknown_resource_type_is_rejected() {
    let err = decode_err::<Resource>(r#"{"resourceType":"Spaceship","id":"x"}"#);
    assert_eq!(
        err,
        DecodeError::UnknownResourceType {
            path: "resourceType".to_string(),
            resource_type: "Spaceship".to_string(),
        }
    );
}

#[test]
fn test_unknown_resource_type_inside_a_bundle_carries_its_path() {
    let err = decode_err::<Bundle>(
        r#"{"resourceType":"Bundle","type":"collection","entry":[
            {"resource":{"resourceType":"Basic","code":{"text":"thing"}}},
            {"resource":{"resourceType":"Starship"}}
        ]}"#,
    );
    assert!(matches!(err, DecodeError::UnknownResourceType { ref resource_type, .. } if resource_type == "Starship"));
    assert_eq!(err.path(), "entry[1].resource.resourceType");
}

#[test]
fn test_missing_resource_type_is_a_missing_field() {
    let err = decode_err::<Resource>(r#"{"id":"x"}"#);
    assert_eq!(err, DecodeError::missing_field("resourceType"));
}

#[test]
fn test_registry_lists_every_variant() {
    assert!(Resource::is_known_resource_type("Observation"));
    assert!(Resource::is_known_resource_type("QuestionnaireResponse"));
    assert!(!Resource::is_known_resource_type("Spaceship"));
    // resourceType is case sensitive
    assert!(!Resource::is_known_resource_type("observation"));
    assert_eq!(Resource::RESOURCE_TYPES.len(), 34);
}

#[test]
fn test_contained_resources_are_polymorphic() {
    let json = r##"{
        "resourceType": "MedicationStatement",
        "contained": [
            {"resourceType": "Medication", "id": "med1", "code": {"text": "Aspirin 100mg"}},
            {"resourceType": "Practitioner", "id": "doc", "name": [{"family": "Careful"}]}
        ],
        "status": "active",
        "medicationReference": {"reference": "#med1"},
        "informationSource": {"reference": "#doc"},
        "subject": {"reference": "Patient/p1"},
        "taken": "y"
    }"##;
    let statement: MedicationStatement = assert_round_trip(json);

    let MedicationStatementMedication::Reference(reference) = &statement.medication else {
        panic!("expected medicationReference");
    };
    let id = reference.contained_id().unwrap();
    assert_eq!(id, "med1");

    let resource = Resource::from(statement.clone());
    match resource.find_contained(id) {
        Some(Resource::Medication(medication)) => {
            let text = medication.code.as_ref().and_then(|c| c.text.as_ref());
            assert_eq!(text.and_then(|t| t.value.as_deref()), Some("Aspirin 100mg"));
        }
        other => panic!("expected the contained Medication, got {other:?}"),
    }
    assert!(resource.find_contained("missing").is_none());
    assert_eq!(resource.contained().len(), 2);
}

#[test]
fn test_resources_without_contained_report_none() {
    let binary: Binary = assert_round_trip(
        r#"{"resourceType":"Binary","id":"b1","contentType":"text/plain","content":"aGVsbG8="}"#,
    );
    let resource = Resource::from(binary);
    assert!(resource.contained().is_empty());
    assert!(resource.text().is_none());
}

#[test]
fn test_parameters_carry_resources_and_open_values() {
    let parameters: Parameters = assert_round_trip(
        r#"{
            "resourceType": "Parameters",
            "parameter": [
                {"name": "count", "valueInteger": 3},
                {"name": "when", "valuePeriod": {"start": "2017-01-01", "end": "2017-12-31"}},
                {"name": "patient", "resource": {"resourceType": "Patient", "id": "p1"}},
                {"name": "match", "part": [
                    {"name": "score", "valueDecimal": 0.95},
                    {"name": "code", "valueCode": "certain"}
                ]}
            ]
        }"#,
    );

    let params = parameters.parameter.as_deref().unwrap_or_default();
    assert!(matches!(params[0].value, Some(ParametersParameterValue::Integer(ref i)) if i.value == Some(3)));
    assert!(matches!(params[1].value, Some(ParametersParameterValue::Period(_))));
    assert!(matches!(params[2].resource, Some(Resource::Patient(_))));
    let parts = params[3].part.as_deref().unwrap_or_default();
    assert_eq!(parts.len(), 2);
    assert!(matches!(parts[1].value, Some(ParametersParameterValue::Code(_))));
}

#[test]
fn test_missing_bundle_type_is_reported() {
    let err = decode_err::<Bundle>(r#"{"resourceType":"Bundle","entry":[]}"#);
    assert_eq!(err, DecodeError::missing_field("type"));
}

#[test]
fn test_operation_outcome_requires_an_issue() {
    let err = decode_err::<OperationOutcome>(r#"{"resourceType":"OperationOutcome"}"#);
    assert_eq!(err, DecodeError::missing_field("issue"));

    // An empty list is the same as no list.
    let err = decode_err::<OperationOutcome>(r#"{"resourceType":"OperationOutcome","issue":[]}"#);
    assert_eq!(err, DecodeError::missing_field("issue"));

    let outcome: OperationOutcome = assert_round_trip(
        r#"{"resourceType":"OperationOutcome","issue":[
            {"severity":"error","code":"required","diagnostics":"status is missing","expression":["Observation.status"]}
        ]}"#,
    );
    assert_eq!(outcome.issue[0].code.value, Some(IssueType::Required));
}

#[test]
fn test_allergy_intolerance_with_reaction() {
    let allergy: AllergyIntolerance = assert_round_trip(
        r#"{
            "resourceType": "AllergyIntolerance",
            "id": "peanut",
            "clinicalStatus": "active",
            "verificationStatus": "confirmed",
            "type": "allergy",
            "category": ["food"],
            "criticality": "high",
            "code": {"coding": [{"system": "http://snomed.info/sct", "code": "227493005", "display": "Cashew nuts"}]},
            "patient": {"reference": "Patient/example"},
            "onsetDateTime": "2004",
            "assertedDate": "2014-10-09T14:58:00+11:00",
            "reaction": [
                {
                    "substance": {"text": "cashew nut"},
                    "manifestation": [{"text": "Anaphylactic reaction"}, {"text": "Hives"}],
                    "severity": "severe",
                    "exposureRoute": {"text": "Subcutaneous route"}
                }
            ]
        }"#,
    );
    assert_eq!(
        allergy.verification_status.value,
        Some(AllergyIntoleranceVerificationStatus::Confirmed)
    );
    assert!(matches!(allergy.onset, Some(AllergyIntoleranceOnset::DateTime(_))));
    let reactions = allergy.reaction.as_deref().unwrap_or_default();
    let manifestations: Vec<_> = reactions[0]
        .manifestation
        .iter()
        .filter_map(|m| m.text.as_ref()?.value.as_deref())
        .collect();
    assert_eq!(manifestations, ["Anaphylactic reaction", "Hives"]);

    let err = decode_err::<AllergyIntolerance>(
        r#"{"resourceType":"AllergyIntolerance","verificationStatus":"confirmed",
            "patient":{"reference":"Patient/example"},"reaction":[{"severity":"mild"}]}"#,
    );
    assert_eq!(err, DecodeError::missing_field("manifestation").within("reaction[0]"));
}

#[test]
fn test_care_plan_activity_detail() {
    let plan: CarePlan = assert_round_trip(
        r#"{
            "resourceType": "CarePlan",
            "status": "active",
            "intent": "plan",
            "subject": {"reference": "Patient/example"},
            "period": {"start": "2011-06-26"},
            "activity": [
                {
                    "detail": {
                        "code": {"text": "Weight check"},
                        "status": "scheduled",
                        "prohibited": false,
                        "scheduledTiming": {"repeat": {"frequency": 1, "period": 1, "periodUnit": "d"}},
                        "productCodeableConcept": {"text": "scale"},
                        "description": "Daily weight"
                    }
                },
                {"reference": {"reference": "Appointment/a1"}}
            ]
        }"#,
    );
    assert_eq!(plan.intent.value, Some(CarePlanIntent::Plan));
    let activity = plan.activity.as_deref().unwrap_or_default();
    let detail = activity[0].detail.as_ref().unwrap();
    assert_eq!(detail.status.value, Some(CarePlanActivityStatus::Scheduled));
    assert!(matches!(detail.scheduled, Some(CarePlanActivityDetailScheduled::Timing(_))));
    assert!(matches!(detail.product, Some(CarePlanActivityDetailProduct::CodeableConcept(_))));
    assert!(activity[1].detail.is_none());
}

#[test]
fn test_code_system_keeps_nested_concepts_in_order() {
    let code_system: CodeSystem = assert_round_trip(
        r#"{
            "resourceType": "CodeSystem",
            "url": "http://example.org/fhir/CodeSystem/body-parts",
            "status": "draft",
            "caseSensitive": true,
            "hierarchyMeaning": "is-a",
            "content": "complete",
            "property": [{"code": "laterality", "type": "code"}],
            "concept": [
                {
                    "code": "limb",
                    "display": "Limb",
                    "concept": [
                        {
                            "code": "arm",
                            "concept": [
                                {"code": "left-arm", "property": [{"code": "laterality", "valueCode": "left"}]},
                                {"code": "right-arm", "property": [{"code": "laterality", "valueCode": "right"}]}
                            ]
                        },
                        {"code": "leg"}
                    ]
                },
                {"code": "head", "designation": [{"language": "de", "value": "Kopf"}]}
            ]
        }"#,
    );
    assert_eq!(code_system.content.value, Some(CodeSystemContentMode::Complete));

    fn walk(concepts: &[CodeSystemConcept], depth: usize, out: &mut Vec<(usize, std::string::String)>) {
        for concept in concepts {
            out.push((depth, concept.code.value.clone().unwrap_or_default()));
            walk(concept.concept.as_deref().unwrap_or_default(), depth + 1, out);
        }
    }
    let mut visited = Vec::new();
    walk(code_system.concept.as_deref().unwrap_or_default(), 0, &mut visited);
    let expected = [
        (0, "limb"),
        (1, "arm"),
        (2, "left-arm"),
        (2, "right-arm"),
        (1, "leg"),
        (0, "head"),
    ];
    let visited: Vec<(usize, &str)> = visited.iter().map(|(d, c)| (*d, c.as_str())).collect();
    assert_eq!(visited, expected);

    let arm = &code_system.concept.as_deref().unwrap()[0].concept.as_deref().unwrap()[0];
    let left = &arm.concept.as_deref().unwrap()[0];
    let property = &left.property.as_deref().unwrap()[0];
    assert!(matches!(property.value, CodeSystemConceptPropertyValue::Code(_)));
}

#[test]
fn test_composition_sections_nest() {
    let composition: Composition = assert_round_trip(
        r#"{
            "resourceType": "Composition",
            "status": "final",
            "type": {"coding": [{"system": "http://loinc.org", "code": "11488-4"}]},
            "subject": {"reference": "Patient/xcda"},
            "date": "2012-01-04T09:10:14Z",
            "author": [{"reference": "Practitioner/xcda-author"}],
            "title": "Consultation Note",
            "confidentiality": "N",
            "attester": [{"mode": ["legal"], "time": "2012-01-04T09:10:14Z", "party": {"reference": "Practitioner/xcda-author"}}],
            "relatesTo": [{"code": "replaces", "targetReference": {"reference": "Composition/old"}}],
            "section": [
                {
                    "title": "History of present illness",
                    "mode": "snapshot",
                    "section": [{"title": "Onset"}, {"title": "Course"}]
                },
                {"title": "Allergies", "emptyReason": {"text": "nil known"}}
            ]
        }"#,
    );
    assert_eq!(composition.status.value, Some(CompositionStatus::Final));
    assert_eq!(
        composition.attester.as_deref().unwrap()[0].mode[0].value,
        Some(CompositionAttestationMode::Legal)
    );
    let sections = composition.section.as_deref().unwrap_or_default();
    let nested: Vec<_> = sections[0]
        .section
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(|s| s.title.as_ref()?.value.as_deref())
        .collect();
    assert_eq!(nested, ["Onset", "Course"]);

    let err = decode_err::<Composition>(
        r#"{"resourceType":"Composition","status":"final","type":{"text":"note"},
            "subject":{"reference":"Patient/xcda"},"date":"2012-01-04","title":"Note"}"#,
    );
    assert_eq!(err, DecodeError::missing_field("author"));
}

#[test]
fn test_concept_map_groups() {
    let map: ConceptMap = assert_round_trip(
        r#"{
            "resourceType": "ConceptMap",
            "status": "draft",
            "sourceUri": "http://hl7.org/fhir/ValueSet/address-use",
            "targetReference": {"reference": "ValueSet/v3-AddressUse"},
            "group": [
                {
                    "source": "http://hl7.org/fhir/address-use",
                    "target": "http://hl7.org/fhir/v3/AddressUse",
                    "element": [
                        {"code": "home", "target": [{"code": "H", "equivalence": "equivalent"}]},
                        {
                            "code": "work",
                            "target": [{
                                "code": "WP",
                                "equivalence": "wider",
                                "dependsOn": [{"property": "http://example.org/use", "code": "business"}]
                            }]
                        }
                    ],
                    "unmapped": {"mode": "fixed", "code": "temp"}
                }
            ]
        }"#,
    );
    assert!(matches!(map.source, Some(ConceptMapSource::Uri(_))));
    assert!(matches!(map.target, Some(ConceptMapTarget::Reference(_))));
    let group = &map.group.as_deref().unwrap()[0];
    let equivalences: Vec<_> = group
        .element
        .iter()
        .flat_map(|e| e.target.as_deref().unwrap_or_default())
        .filter_map(|t| t.equivalence.as_ref()?.value)
        .collect();
    assert_eq!(
        equivalences,
        [ConceptMapEquivalence::Equivalent, ConceptMapEquivalence::Wider]
    );
}

#[test]
fn test_family_member_history_choices() {
    let history: FamilyMemberHistory = assert_round_trip(
        r#"{
            "resourceType": "FamilyMemberHistory",
            "status": "completed",
            "patient": {"reference": "Patient/example"},
            "relationship": {"coding": [{"system": "http://hl7.org/fhir/v3/RoleCode", "code": "FTH"}]},
            "gender": "male",
            "bornDate": "1935",
            "deceasedBoolean": true,
            "condition": [
                {
                    "code": {"text": "Heart Attack"},
                    "onsetAge": {"value": 74, "unit": "yr", "system": "http://unitsofmeasure.org", "code": "a"}
                }
            ]
        }"#,
    );
    assert_eq!(history.status.value, Some(FamilyHistoryStatus::Completed));
    assert!(matches!(history.born, Some(FamilyMemberHistoryBorn::Date(_))));
    assert!(matches!(history.deceased, Some(FamilyMemberHistoryDeceased::Boolean(_))));
    assert!(history.age.is_none());
    let condition = &history.condition.as_deref().unwrap()[0];
    assert!(matches!(condition.onset, Some(FamilyMemberHistoryConditionOnset::Age(_))));
}

#[test]
fn test_goal_target() {
    let goal: Goal = assert_round_trip(
        r#"{
            "resourceType": "Goal",
            "status": "on-target",
            "description": {"text": "Target weight is 160 to 180 lbs."},
            "subject": {"reference": "Patient/example"},
            "startDate": "2015-04-05",
            "target": {
                "measure": {"coding": [{"system": "http://loinc.org", "code": "3141-9"}]},
                "detailRange": {"low": {"value": 160, "unit": "lbs"}, "high": {"value": 180, "unit": "lbs"}},
                "dueDate": "2016-04-05"
            },
            "addresses": [{"reference": "Condition/12345"}]
        }"#,
    );
    assert_eq!(goal.status.value, Some(GoalStatus::OnTarget));
    assert!(matches!(goal.start, Some(GoalStart::Date(_))));
    let target = goal.target.as_ref().unwrap();
    assert!(matches!(target.detail, Some(GoalTargetDetail::Range(_))));
    assert!(matches!(target.due, Some(GoalTargetDue::Date(_))));
}

#[test]
fn test_immunization_required_fields() {
    let immunization: Immunization = assert_round_trip(
        r#"{
            "resourceType": "Immunization",
            "status": "completed",
            "notGiven": false,
            "vaccineCode": {"coding": [{"system": "urn:oid:1.2.36.1.2001.1005.17", "code": "FLUVAX"}]},
            "patient": {"reference": "Patient/example"},
            "date": "2013-01-10",
            "primarySource": true,
            "lotNumber": "AAJN11K",
            "expirationDate": "2015-02-15",
            "practitioner": [{"role": {"text": "Ordering Provider"}, "actor": {"reference": "Practitioner/example"}}],
            "explanation": {"reason": [{"text": "occupational"}]},
            "vaccinationProtocol": [
                {
                    "doseSequence": 1,
                    "series": "Vaccination Series 1",
                    "seriesDoses": 2,
                    "targetDisease": [{"text": "Influenza"}],
                    "doseStatus": {"text": "Counts"}
                }
            ]
        }"#,
    );
    assert_eq!(immunization.status.value, Some(ImmunizationStatus::Completed));
    assert_eq!(immunization.not_given.value, Some(false));
    assert_eq!(immunization.primary_source.value, Some(true));
    let protocol = &immunization.vaccination_protocol.as_deref().unwrap()[0];
    assert_eq!(protocol.dose_sequence.as_ref().and_then(|d| d.value), Some(1));

    let err = decode_err::<Immunization>(
        r#"{"resourceType":"Immunization","status":"completed","vaccineCode":{"text":"flu"},
            "patient":{"reference":"Patient/example"},"primarySource":true}"#,
    );
    assert_eq!(err, DecodeError::missing_field("notGiven"));
}

#[test]
fn test_library_content_and_requirements() {
    let library: Library = assert_round_trip(
        r#"{
            "resourceType": "Library",
            "status": "active",
            "type": {"coding": [{"code": "logic-library"}]},
            "version": "2.0.0",
            "parameter": [{"name": "Patient", "use": "out", "type": "Patient"}],
            "dataRequirement": [{"type": "Condition", "codeFilter": [{"path": "code", "valueSetString": "Other Female Reproductive Conditions"}]}],
            "content": [{"contentType": "text/cql", "url": "library-cms146-example-content.cql"}]
        }"#,
    );
    assert_eq!(library.status.value, Some(PublicationStatus::Active));
    assert_eq!(library.content.as_deref().unwrap_or_default().len(), 1);

    let err = decode_err::<Library>(r#"{"resourceType":"Library","status":"active"}"#);
    assert_eq!(err, DecodeError::missing_field("type"));
}

#[test]
fn test_medication_request_dispense() {
    let request: MedicationRequest = assert_round_trip(
        r#"{
            "resourceType": "MedicationRequest",
            "status": "active",
            "intent": "order",
            "medicationReference": {"reference": "Medication/med0316"},
            "subject": {"reference": "Patient/pat1"},
            "authoredOn": "2015-01-15",
            "requester": {"agent": {"reference": "Practitioner/f007"}},
            "dosageInstruction": [{"sequence": 1, "text": "6 mg PO daily for remission induction"}],
            "dispenseRequest": {"numberOfRepeatsAllowed": 3, "expectedSupplyDuration": {"value": 30, "unit": "days"}},
            "substitution": {"allowed": true}
        }"#,
    );
    assert_eq!(request.intent.value, Some(MedicationRequestIntent::Order));
    assert!(matches!(request.medication, MedicationRequestMedication::Reference(_)));
    assert_eq!(
        request.substitution.as_ref().and_then(|s| s.allowed.value),
        Some(true)
    );

    let err = decode_err::<MedicationRequest>(
        r#"{"resourceType":"MedicationRequest","intent":"order","subject":{"reference":"Patient/pat1"},
            "medicationCodeableConcept":{"text":"aspirin"},"requester":{"onBehalfOf":{"reference":"Organization/o1"}}}"#,
    );
    assert_eq!(err, DecodeError::missing_field("agent").within("requester"));
}

#[test]
fn test_plan_definition_keeps_nested_actions_in_order() {
    let plan: PlanDefinition = assert_round_trip(
        r#"{
            "resourceType": "PlanDefinition",
            "status": "draft",
            "goal": [{"description": {"text": "Reduce risk"}, "target": [{"detailQuantity": {"value": 2, "unit": "mg"}}]}],
            "action": [
                {
                    "title": "Screening",
                    "groupingBehavior": "logical-group",
                    "selectionBehavior": "all",
                    "action": [
                        {
                            "id": "questionnaire",
                            "title": "Questionnaire",
                            "condition": [{"kind": "applicability", "language": "text/cql", "expression": "Is Eligible"}],
                            "timingDuration": {"value": 1, "unit": "d"}
                        },
                        {
                            "title": "Follow-up",
                            "relatedAction": [{"actionId": "questionnaire", "relationship": "after-end", "offsetDuration": {"value": 7, "unit": "d"}}],
                            "action": [{"title": "Call"}, {"title": "Visit"}]
                        }
                    ]
                },
                {"title": "Report", "participant": [{"type": "practitioner"}]}
            ]
        }"#,
    );

    fn walk(actions: &[PlanDefinitionAction], depth: usize, out: &mut Vec<(usize, std::string::String)>) {
        for action in actions {
            let title = action.title.as_ref().and_then(|t| t.value.clone()).unwrap_or_default();
            out.push((depth, title));
            walk(action.action.as_deref().unwrap_or_default(), depth + 1, out);
        }
    }
    let mut visited = Vec::new();
    walk(plan.action.as_deref().unwrap_or_default(), 0, &mut visited);
    let visited: Vec<(usize, &str)> = visited.iter().map(|(d, t)| (*d, t.as_str())).collect();
    assert_eq!(
        visited,
        [
            (0, "Screening"),
            (1, "Questionnaire"),
            (1, "Follow-up"),
            (2, "Call"),
            (2, "Visit"),
            (0, "Report"),
        ]
    );

    let screening = &plan.action.as_deref().unwrap()[0];
    let follow_up = &screening.action.as_deref().unwrap()[1];
    let related = &follow_up.related_action.as_deref().unwrap()[0];
    assert_eq!(related.relationship.value, Some(ActionRelationshipType::AfterEnd));
    assert!(matches!(related.offset, Some(PlanDefinitionActionRelatedActionOffset::Duration(_))));
}

#[test]
fn test_practitioner_role_availability() {
    let role: PractitionerRole = assert_round_trip(
        r#"{
            "resourceType": "PractitionerRole",
            "active": true,
            "practitioner": {"reference": "Practitioner/example"},
            "organization": {"reference": "Organization/f001"},
            "code": [{"text": "Researcher"}],
            "availableTime": [
                {"daysOfWeek": ["mon", "tue", "wed"], "availableStartTime": "09:00:00", "availableEndTime": "16:30:00"},
                {"daysOfWeek": ["thu", "fri"], "allDay": true}
            ],
            "notAvailable": [{"description": "Adam will be on extended leave", "during": {"start": "2012-12-24", "end": "2013-01-01"}}],
            "availabilityExceptions": "Adam is generally unavailable on public holidays"
        }"#,
    );
    let days: Vec<_> = role
        .available_time
        .as_deref()
        .unwrap_or_default()
        .iter()
        .flat_map(|t| t.days_of_week.as_deref().unwrap_or_default())
        .filter_map(|d| d.value)
        .collect();
    assert_eq!(
        days,
        [DaysOfWeek::Mon, DaysOfWeek::Tue, DaysOfWeek::Wed, DaysOfWeek::Thu, DaysOfWeek::Fri]
    );

    let err = decode_err::<PractitionerRole>(
        r#"{"resourceType":"PractitionerRole","notAvailable":[{"during":{"start":"2012-12-24"}}]}"#,
    );
    assert_eq!(err, DecodeError::missing_field("description").within("notAvailable[0]"));
}

#[test]
fn test_procedure_performers() {
    let procedure: Procedure = assert_round_trip(
        r#"{
            "resourceType": "Procedure",
            "status": "completed",
            "code": {"text": "Appendectomy"},
            "subject": {"reference": "Patient/example"},
            "performedPeriod": {"start": "2013-01-28T13:31:00+01:00", "end": "2013-01-28T14:27:00+01:00"},
            "performer": [{"role": {"text": "Surgeon"}, "actor": {"reference": "Practitioner/example"}}],
            "reasonCode": [{"text": "Generalized abdominal pain"}],
            "focalDevice": [{"action": {"text": "implanted"}, "manipulated": {"reference": "Device/example-pacemaker"}}],
            "followUp": [{"text": "ROS 5 days"}]
        }"#,
    );
    assert_eq!(procedure.status.value, Some(EventStatus::Completed));
    assert!(matches!(procedure.performed, Some(ProcedurePerformed::Period(_))));
    assert_eq!(procedure.performer.as_deref().unwrap_or_default().len(), 1);
}

#[test]
fn test_provenance_agents_and_entities() {
    let provenance: Provenance = assert_round_trip(
        r#"{
            "resourceType": "Provenance",
            "target": [{"reference": "Patient/example/_history/1"}],
            "recorded": "2015-06-27T08:39:24+10:00",
            "agent": [
                {"role": [{"text": "author"}], "whoReference": {"reference": "Practitioner/xcda-author"}},
                {"whoUri": "mailto:device@example.org", "onBehalfOfReference": {"reference": "Organization/1"}}
            ],
            "entity": [{"role": "source", "whatIdentifier": {"value": "doc-1"}}]
        }"#,
    );
    assert_eq!(provenance.target.len(), 1);
    assert!(matches!(provenance.agent[0].who, ProvenanceAgentWho::Reference(_)));
    assert!(matches!(provenance.agent[1].who, ProvenanceAgentWho::Uri(_)));
    let entity = &provenance.entity.as_deref().unwrap()[0];
    assert_eq!(entity.role.value, Some(ProvenanceEntityRole::Source));
    assert!(matches!(entity.what, ProvenanceEntityWhat::Identifier(_)));

    let err = decode_err::<Provenance>(
        r#"{"resourceType":"Provenance","target":[{"reference":"Patient/example"}],
            "recorded":"2015-06-27T08:39:24+10:00","agent":[{"role":[{"text":"author"}]}]}"#,
    );
    assert_eq!(err, DecodeError::missing_choice("who").within("agent[0]"));
}

#[test]
fn test_questionnaire_items_nest() {
    let questionnaire: Questionnaire = assert_round_trip(
        r#"{
            "resourceType": "Questionnaire",
            "status": "active",
            "subjectType": ["Patient"],
            "item": [
                {
                    "linkId": "1",
                    "type": "group",
                    "item": [
                        {"linkId": "1.1", "text": "Do you have allergies?", "type": "boolean", "initialBoolean": false},
                        {
                            "linkId": "1.2",
                            "type": "choice",
                            "enableWhen": [{"question": "1.1", "answerBoolean": true}],
                            "option": [{"valueString": "food"}, {"valueCoding": {"code": "drug"}}]
                        }
                    ]
                },
                {"linkId": "2", "text": "General", "type": "display"}
            ]
        }"#,
    );
    let items = questionnaire.item.as_deref().unwrap_or_default();
    assert_eq!(items[0].r#type.value, Some(QuestionnaireItemType::Group));
    let children = items[0].item.as_deref().unwrap_or_default();
    let link_ids: Vec<_> = children.iter().filter_map(|i| i.link_id.value.as_deref()).collect();
    assert_eq!(link_ids, ["1.1", "1.2"]);
    assert!(matches!(children[0].initial, Some(QuestionnaireItemInitial::Boolean(_))));
    let options = children[1].option.as_deref().unwrap_or_default();
    assert!(matches!(options[0].value, QuestionnaireItemOptionValue::String(_)));
    assert!(matches!(options[1].value, QuestionnaireItemOptionValue::Coding(_)));
}

#[test]
fn test_value_set_compose_and_expansion() {
    let value_set: ValueSet = assert_round_trip(
        r#"{
            "resourceType": "ValueSet",
            "url": "http://hl7.org/fhir/ValueSet/example-extensional",
            "status": "draft",
            "compose": {
                "lockedDate": "2012-06-13",
                "include": [
                    {
                        "system": "http://loinc.org",
                        "concept": [{"code": "14647-2"}, {"code": "2093-3", "display": "Cholesterol"}]
                    }
                ],
                "exclude": [{"system": "http://loinc.org", "filter": [{"property": "parent", "op": "is-a", "value": "LP43571-6"}]}]
            },
            "expansion": {
                "identifier": "urn:uuid:42316ff8-2714-4680-9980-f37a6d1a71bc",
                "timestamp": "2015-06-22T13:56:07Z",
                "total": 2,
                "parameter": [{"name": "version", "valueString": "2.50"}],
                "contains": [
                    {"system": "http://loinc.org", "code": "14647-2", "contains": [{"code": "2093-3"}]}
                ]
            }
        }"#,
    );
    let compose = value_set.compose.as_ref().unwrap();
    let codes: Vec<_> = compose.include[0]
        .concept
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(|c| c.code.value.as_deref())
        .collect();
    assert_eq!(codes, ["14647-2", "2093-3"]);
    let expansion = value_set.expansion.as_ref().unwrap();
    assert_eq!(expansion.total.as_ref().and_then(|t| t.value), Some(2));

    let err = decode_err::<ValueSet>(
        r#"{"resourceType":"ValueSet","status":"draft","compose":{"include":[]}}"#,
    );
    assert_eq!(err, DecodeError::missing_field("include").within("compose"));
}

#[test]
fn test_referral_request_with_requester() {
    let referral: ReferralRequest = assert_round_trip(
        r#"{
            "resourceType": "ReferralRequest",
            "status": "active",
            "intent": "order",
            "type": {"text": "Assessment and management of obesity"},
            "priority": "urgent",
            "subject": {"reference": "Patient/pat1"},
            "occurrencePeriod": {"end": "2014-03-14"},
            "authoredOn": "2014-02-14",
            "requester": {"agent": {"reference": "Practitioner/example"}, "onBehalfOf": {"reference": "Organization/f001"}},
            "recipient": [{"reference": "Practitioner/f002"}],
            "description": "In the past 2 years Beverly has gained about 10 kg"
        }"#,
    );
    assert_eq!(referral.status.value, Some(RequestStatus::Active));
    assert_eq!(referral.intent.value, Some(RequestIntent::Order));
    assert!(matches!(referral.occurrence, Some(ReferralRequestOccurrence::Period(_))));

    let err = decode_err::<ReferralRequest>(
        r#"{"resourceType":"ReferralRequest","status":"active","intent":"order",
            "subject":{"reference":"Patient/pat1"},"requester":{}}"#,
    );
    assert_eq!(err, DecodeError::missing_field("agent").within("requester"));
}

#[test]
fn test_specimen_collection_and_containers() {
    let specimen: Specimen = assert_round_trip(
        r#"{
            "resourceType": "Specimen",
            "status": "available",
            "type": {"text": "Venous blood specimen"},
            "subject": {"reference": "Patient/example"},
            "receivedTime": "2011-03-04T07:03:00Z",
            "collection": {
                "collector": {"reference": "Practitioner/example"},
                "collectedDateTime": "2011-05-30T06:15:00Z",
                "quantity": {"value": 6, "unit": "mL"},
                "bodySite": {"text": "Right median cubital vein"}
            },
            "processing": [{"description": "Acidify to pH < 3.0", "timePeriod": {"start": "2015-08-16T07:03:00Z"}}],
            "container": [
                {
                    "identifier": [{"value": "48736-15394-75465"}],
                    "description": "Green Gel tube",
                    "capacity": {"value": 10, "unit": "mL"},
                    "additiveCodeableConcept": {"text": "Lithium/Li Heparin"}
                }
            ]
        }"#,
    );
    assert_eq!(
        specimen.status.as_ref().and_then(|s| s.value),
        Some(SpecimenStatus::Available)
    );
    let collection = specimen.collection.as_ref().unwrap();
    assert!(matches!(collection.collected, Some(SpecimenCollectionCollected::DateTime(_))));
    let processing = &specimen.processing.as_deref().unwrap()[0];
    assert!(matches!(processing.time, Some(SpecimenProcessingTime::Period(_))));
    let container = &specimen.container.as_deref().unwrap()[0];
    assert!(matches!(container.additive, Some(SpecimenContainerAdditive::CodeableConcept(_))));

    let err = decode_err::<Specimen>(r#"{"resourceType":"Specimen","status":"available"}"#);
    assert_eq!(err, DecodeError::missing_field("subject"));
}

#[test]
fn test_substance_instances_and_ingredients() {
    let substance: Substance = assert_round_trip(
        r#"{
            "resourceType": "Substance",
            "status": "active",
            "category": [{"coding": [{"system": "http://hl7.org/fhir/substance-category", "code": "chemical"}]}],
            "code": {"text": "Dextrose 5% / NaCl 0.9%"},
            "instance": [{"identifier": {"value": "AB94687"}, "expiry": "2018-01-01"}],
            "ingredient": [
                {
                    "quantity": {"numerator": {"value": 5, "unit": "g"}, "denominator": {"value": 100, "unit": "mL"}},
                    "substanceCodeableConcept": {"text": "Dextrose"}
                },
                {"substanceReference": {"reference": "Substance/f201"}}
            ]
        }"#,
    );
    assert_eq!(
        substance.status.as_ref().and_then(|s| s.value),
        Some(SubstanceStatus::Active)
    );
    let ingredients = substance.ingredient.as_deref().unwrap_or_default();
    assert!(matches!(ingredients[0].substance, SubstanceIngredientSubstance::CodeableConcept(_)));
    assert!(matches!(ingredients[1].substance, SubstanceIngredientSubstance::Reference(_)));

    let err = decode_err::<Substance>(
        r#"{"resourceType":"Substance","code":{"text":"x"},"ingredient":[{"quantity":{"numerator":{"value":1}}}]}"#,
    );
    assert_eq!(err, DecodeError::missing_choice("substance").within("ingredient[0]"));
}

#[test]
fn test_constructed_bundle_of_new_resources_survives_encode_and_decode() {
    let mut specimen = Specimen::new(Reference::to("Patient/example"));
    specimen.status = Some(SpecimenStatus::Available.into());
    specimen.container = Some(vec![SpecimenContainer {
        additive: Some(SpecimenContainerAdditive::Reference(Reference::to("Substance/heparin"))),
        ..Default::default()
    }]);

    let mut referral = ReferralRequest::new(
        RequestStatus::Draft,
        RequestIntent::Proposal,
        Reference::to("Patient/example"),
    );
    referral.requester = Some(ReferralRequestRequester::new(Reference::to("Practitioner/example")));

    let mut substance = Substance::new(CodeableConcept::from_text("Lithium heparin"));
    substance.ingredient = Some(vec![SubstanceIngredient::new(
        SubstanceIngredientSubstance::CodeableConcept(CodeableConcept::from_text("Heparin")),
    )]);

    let mut bundle = Bundle::new(BundleType::Collection);
    bundle.entry = Some(
        [
            Resource::Specimen(Box::new(specimen)),
            Resource::ReferralRequest(Box::new(referral)),
            Resource::Substance(Box::new(substance)),
        ]
        .into_iter()
        .map(|resource| BundleEntry {
            resource: Some(resource),
            ..Default::default()
        })
        .collect(),
    );

    let encoded = assert_encode_decode(&bundle);
    assert_eq!(encoded["type"], "collection");
    assert_eq!(encoded["entry"][0]["resource"]["resourceType"], "Specimen");
    assert_eq!(
        encoded["entry"][0]["resource"]["container"][0]["additiveReference"]["reference"],
        "Substance/heparin"
    );
    assert_eq!(encoded["entry"][1]["resource"]["intent"], "proposal");
    assert_eq!(
        encoded["entry"][2]["resource"]["ingredient"][0]["substanceCodeableConcept"]["text"],
        "Heparin"
    );
}

#[test]
fn test_constructed_code_system_keeps_concept_order() {
    let mut parent = CodeSystemConcept::new("limb");
    parent.concept = Some(vec![CodeSystemConcept::new("arm"), CodeSystemConcept::new("leg")]);
    let mut code_system = CodeSystem::new(PublicationStatus::Draft, CodeSystemContentMode::Complete);
    code_system.concept = Some(vec![parent, CodeSystemConcept::new("head")]);

    let encoded = assert_encode_decode(&code_system);
    assert_eq!(
        encoded["concept"],
        parse(r#"[{"code":"limb","concept":[{"code":"arm"},{"code":"leg"}]},{"code":"head"}]"#)
    );
}

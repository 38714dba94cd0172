//! Measurements and simple assertions about a patient, device or other subject.

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the effective\[x\] field in Observation
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "effective")]
pub enum ObservationEffective {
    #[fhir_serde(rename = "effectiveDateTime")]
    DateTime(DateTime),
    #[fhir_serde(rename = "effectivePeriod")]
    Period(Period),
}

/// Choice of types for the value\[x\] field in Observation
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum ObservationValue {
    #[fhir_serde(rename = "valueQuantity")]
    Quantity(Quantity),
    #[fhir_serde(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir_serde(rename = "valueString")]
    String(String),
    #[fhir_serde(rename = "valueBoolean")]
    Boolean(Boolean),
    #[fhir_serde(rename = "valueRange")]
    Range(Range),
    #[fhir_serde(rename = "valueRatio")]
    Ratio(Ratio),
    #[fhir_serde(rename = "valueSampledData")]
    SampledData(SampledData),
    #[fhir_serde(rename = "valueAttachment")]
    Attachment(Attachment),
    #[fhir_serde(rename = "valueTime")]
    Time(Time),
    #[fhir_serde(rename = "valueDateTime")]
    DateTime(DateTime),
    #[fhir_serde(rename = "valuePeriod")]
    Period(Period),
}

/// Choice of types for the value\[x\] field in ObservationComponent
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum ObservationComponentValue {
    #[fhir_serde(rename = "valueQuantity")]
    Quantity(Quantity),
    #[fhir_serde(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir_serde(rename = "valueString")]
    String(String),
    #[fhir_serde(rename = "valueRange")]
    Range(Range),
    #[fhir_serde(rename = "valueRatio")]
    Ratio(Ratio),
    #[fhir_serde(rename = "valueSampledData")]
    SampledData(SampledData),
    #[fhir_serde(rename = "valueAttachment")]
    Attachment(Attachment),
    #[fhir_serde(rename = "valueTime")]
    Time(Time),
    #[fhir_serde(rename = "valueDateTime")]
    DateTime(DateTime),
    #[fhir_serde(rename = "valuePeriod")]
    Period(Period),
}

/// Provides guide for interpretation
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ObservationReferenceRange {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Low Range, if relevant
    pub low: Option<SimpleQuantity>,
    /// High Range, if relevant
    pub high: Option<SimpleQuantity>,
    /// Reference range qualifier
    pub r#type: Option<CodeableConcept>,
    /// Reference range population
    #[fhir_serde(rename = "appliesTo")]
    pub applies_to: Option<Vec<CodeableConcept>>,
    /// Applicable age range, if relevant
    pub age: Option<Range>,
    /// Text based reference range in an observation
    pub text: Option<String>,
}

/// Resource related to this observation
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ObservationRelated {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// has-member | derived-from | sequel-to | replaces | qualified-by | interfered-by
    pub r#type: Option<Coded<ObservationRelationshipType>>,
    /// Resource that is related to this one
    pub target: Reference,
}

impl ObservationRelated {
    /// Builds an `ObservationRelated` from its required fields.
    pub fn new(target: impl Into<Reference>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            r#type: None,
            target: target.into(),
        }
    }
}

/// Component results
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ObservationComponent {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Type of component observation (code / type)
    pub code: CodeableConcept,
    /// Actual component result
    #[fhir_serde(flatten)]
    pub value: Option<ObservationComponentValue>,
    /// Why the component result is missing
    #[fhir_serde(rename = "dataAbsentReason")]
    pub data_absent_reason: Option<CodeableConcept>,
    /// High, low, normal, etc.
    pub interpretation: Option<CodeableConcept>,
    /// Provides guide for interpretation of component result
    #[fhir_serde(rename = "referenceRange")]
    pub reference_range: Option<Vec<ObservationReferenceRange>>,
}

impl ObservationComponent {
    /// Builds an `ObservationComponent` from its required fields.
    pub fn new(code: impl Into<CodeableConcept>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            code: code.into(),
            value: None,
            data_absent_reason: None,
            interpretation: None,
            reference_range: None,
        }
    }
}

/// Measurements and simple assertions made about a patient, device or other
/// subject.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_resource(domain)]
pub struct Observation {
    /// Logical id of this artifact
    pub id: Option<Id>,
    /// Metadata about the resource
    pub meta: Option<Meta>,
    /// A set of rules under which this content was created
    #[fhir_serde(rename = "implicitRules")]
    pub implicit_rules: Option<Uri>,
    /// Language of the resource content
    pub language: Option<Code>,
    /// Text summary of the resource, for human interpretation
    pub text: Option<Narrative>,
    /// Contained, inline Resources
    pub contained: Option<Vec<Resource>>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Business Identifier for observation
    pub identifier: Option<Vec<Identifier>>,
    /// Fulfills plan, proposal or order
    #[fhir_serde(rename = "basedOn")]
    pub based_on: Option<Vec<Reference>>,
    /// registered | preliminary | final | amended +
    pub status: Coded<ObservationStatus>,
    /// Classification of type of observation
    pub category: Option<Vec<CodeableConcept>>,
    /// Type of observation (code / type)
    pub code: CodeableConcept,
    /// Who and/or what this is about
    pub subject: Option<Reference>,
    /// Healthcare event during which this observation is made
    pub context: Option<Reference>,
    /// Clinically relevant time/time-period for observation
    #[fhir_serde(flatten)]
    pub effective: Option<ObservationEffective>,
    /// Date/Time this was made available
    pub issued: Option<Instant>,
    /// Who is responsible for the observation
    pub performer: Option<Vec<Reference>>,
    /// Actual result
    #[fhir_serde(flatten)]
    pub value: Option<ObservationValue>,
    /// Why the result is missing
    #[fhir_serde(rename = "dataAbsentReason")]
    pub data_absent_reason: Option<CodeableConcept>,
    /// High, low, normal, etc.
    pub interpretation: Option<CodeableConcept>,
    /// Comments about result
    pub comment: Option<String>,
    /// Observed body part
    #[fhir_serde(rename = "bodySite")]
    pub body_site: Option<CodeableConcept>,
    /// How it was done
    pub method: Option<CodeableConcept>,
    /// Specimen used for this observation
    pub specimen: Option<Reference>,
    /// (Measurement) Device
    pub device: Option<Reference>,
    /// Provides guide for interpretation
    #[fhir_serde(rename = "referenceRange")]
    pub reference_range: Option<Vec<ObservationReferenceRange>>,
    /// Resource related to this observation
    pub related: Option<Vec<ObservationRelated>>,
    /// Component results
    pub component: Option<Vec<ObservationComponent>>,
}

impl Observation {
    /// Builds an `Observation` from its required fields.
    pub fn new(
        status: impl Into<Coded<ObservationStatus>>,
        code: impl Into<CodeableConcept>,
    ) -> Self {
        Self {
            id: None,
            meta: None,
            implicit_rules: None,
            language: None,
            text: None,
            contained: None,
            extension: None,
            modifier_extension: None,
            identifier: None,
            based_on: None,
            status: status.into(),
            category: None,
            code: code.into(),
            subject: None,
            context: None,
            effective: None,
            issued: None,
            performer: None,
            value: None,
            data_absent_reason: None,
            interpretation: None,
            comment: None,
            body_site: None,
            method: None,
            specimen: None,
            device: None,
            reference_range: None,
            related: None,
            component: None,
        }
    }
}

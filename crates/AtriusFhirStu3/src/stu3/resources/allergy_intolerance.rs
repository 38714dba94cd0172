//! AllergyIntolerance: risk of a harmful or undesirable physiological response.

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the onset\[x\] field in AllergyIntolerance
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "onset")]
pub enum AllergyIntoleranceOnset {
    #[fhir_serde(rename = "onsetDateTime")]
    DateTime(DateTime),
    #[fhir_serde(rename = "onsetAge")]
    Age(Age),
    #[fhir_serde(rename = "onsetPeriod")]
    Period(Period),
    #[fhir_serde(rename = "onsetRange")]
    Range(Range),
    #[fhir_serde(rename = "onsetString")]
    String(String),
}

/// Adverse Reaction Events linked to exposure to substance
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct AllergyIntoleranceReaction {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Specific substance or pharmaceutical product considered to be responsible for event
    pub substance: Option<CodeableConcept>,
    /// Clinical symptoms/signs associated with the Event
    pub manifestation: Vec<CodeableConcept>,
    /// Description of the event as a whole
    pub description: Option<String>,
    /// Date(/time) when manifestations showed
    pub onset: Option<DateTime>,
    /// mild | moderate | severe (of event as a whole)
    pub severity: Option<Coded<AllergyIntoleranceSeverity>>,
    /// How the subject was exposed to the substance
    #[fhir_serde(rename = "exposureRoute")]
    pub exposure_route: Option<CodeableConcept>,
    /// Text about event not captured in other fields
    pub note: Option<Vec<Annotation>>,
}

impl AllergyIntoleranceReaction {
    /// Builds an `AllergyIntoleranceReaction` from its required fields.
    pub fn new(manifestation: impl Into<Vec<CodeableConcept>>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            substance: None,
            manifestation: manifestation.into(),
            description: None,
            onset: None,
            severity: None,
            exposure_route: None,
            note: None,
        }
    }
}

/// Risk of harmful or undesirable, physiological response which is unique to an
/// individual and associated with exposure to a substance.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_resource(domain)]
pub struct AllergyIntolerance {
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
    /// External ids for this item
    pub identifier: Option<Vec<Identifier>>,
    /// active | inactive | resolved
    #[fhir_serde(rename = "clinicalStatus")]
    pub clinical_status: Option<Coded<AllergyIntoleranceClinicalStatus>>,
    /// unconfirmed | confirmed | refuted | entered-in-error
    #[fhir_serde(rename = "verificationStatus")]
    pub verification_status: Coded<AllergyIntoleranceVerificationStatus>,
    /// allergy | intolerance - Underlying mechanism (if known)
    pub r#type: Option<Coded<AllergyIntoleranceType>>,
    /// food | medication | environment | biologic
    pub category: Option<Vec<Coded<AllergyIntoleranceCategory>>>,
    /// low | high | unable-to-assess
    pub criticality: Option<Coded<AllergyIntoleranceCriticality>>,
    /// Code that identifies the allergy or intolerance
    pub code: Option<CodeableConcept>,
    /// Who the sensitivity is for
    pub patient: Reference,
    /// When allergy or intolerance was identified
    #[fhir_serde(flatten)]
    pub onset: Option<AllergyIntoleranceOnset>,
    /// Date record was believed accurate
    #[fhir_serde(rename = "assertedDate")]
    pub asserted_date: Option<DateTime>,
    /// Who recorded the sensitivity
    pub recorder: Option<Reference>,
    /// Source of the information about the allergy
    pub asserter: Option<Reference>,
    /// Date(/time) of last known occurrence of a reaction
    #[fhir_serde(rename = "lastOccurrence")]
    pub last_occurrence: Option<DateTime>,
    /// Additional text not captured in other fields
    pub note: Option<Vec<Annotation>>,
    /// Adverse Reaction Events linked to exposure to substance
    pub reaction: Option<Vec<AllergyIntoleranceReaction>>,
}

impl AllergyIntolerance {
    /// Builds an `AllergyIntolerance` from its required fields.
    pub fn new(
        verification_status: impl Into<Coded<AllergyIntoleranceVerificationStatus>>,
        patient: impl Into<Reference>,
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
            clinical_status: None,
            verification_status: verification_status.into(),
            r#type: None,
            category: None,
            criticality: None,
            code: None,
            patient: patient.into(),
            onset: None,
            asserted_date: None,
            recorder: None,
            asserter: None,
            last_occurrence: None,
            note: None,
            reaction: None,
        }
    }
}

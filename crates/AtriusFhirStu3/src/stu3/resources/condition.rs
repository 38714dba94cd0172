//! Condition: a clinical condition, problem, diagnosis or other concern.

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the onset\[x\] field in Condition
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "onset")]
pub enum ConditionOnset {
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

/// Choice of types for the abatement\[x\] field in Condition
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "abatement")]
pub enum ConditionAbatement {
    #[fhir_serde(rename = "abatementDateTime")]
    DateTime(DateTime),
    #[fhir_serde(rename = "abatementAge")]
    Age(Age),
    #[fhir_serde(rename = "abatementBoolean")]
    Boolean(Boolean),
    #[fhir_serde(rename = "abatementPeriod")]
    Period(Period),
    #[fhir_serde(rename = "abatementRange")]
    Range(Range),
    #[fhir_serde(rename = "abatementString")]
    String(String),
}

/// Stage/grade, usually assessed formally
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ConditionStage {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Simple summary (disease specific)
    pub summary: Option<CodeableConcept>,
    /// Formal record of assessment
    pub assessment: Option<Vec<Reference>>,
}

/// Supporting evidence
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ConditionEvidence {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Manifestation/symptom
    pub code: Option<Vec<CodeableConcept>>,
    /// Supporting information found elsewhere
    pub detail: Option<Vec<Reference>>,
}

/// A clinical condition, problem, diagnosis, or other event, situation, issue, or
/// clinical concept that has risen to a level of concern.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_resource(domain)]
pub struct Condition {
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
    /// External Ids for this condition
    pub identifier: Option<Vec<Identifier>>,
    /// active | recurrence | inactive | remission | resolved
    #[fhir_serde(rename = "clinicalStatus")]
    pub clinical_status: Option<Coded<ConditionClinicalStatus>>,
    /// provisional | differential | confirmed | refuted | entered-in-error | unknown
    #[fhir_serde(rename = "verificationStatus")]
    pub verification_status: Option<Coded<ConditionVerificationStatus>>,
    /// problem-list-item | encounter-diagnosis
    pub category: Option<Vec<CodeableConcept>>,
    /// Subjective severity of condition
    pub severity: Option<CodeableConcept>,
    /// Identification of the condition, problem or diagnosis
    pub code: Option<CodeableConcept>,
    /// Anatomical location, if relevant
    #[fhir_serde(rename = "bodySite")]
    pub body_site: Option<Vec<CodeableConcept>>,
    /// Who has the condition?
    pub subject: Reference,
    /// Encounter or episode when condition first asserted
    pub context: Option<Reference>,
    /// Estimated or actual date, date-time, or age
    #[fhir_serde(flatten)]
    pub onset: Option<ConditionOnset>,
    /// If/when in resolution/remission
    #[fhir_serde(flatten)]
    pub abatement: Option<ConditionAbatement>,
    /// Date record was believed accurate
    #[fhir_serde(rename = "assertedDate")]
    pub asserted_date: Option<DateTime>,
    /// Person who asserts this condition
    pub asserter: Option<Reference>,
    /// Stage/grade, usually assessed formally
    pub stage: Option<ConditionStage>,
    /// Supporting evidence
    pub evidence: Option<Vec<ConditionEvidence>>,
    /// Additional information about the Condition
    pub note: Option<Vec<Annotation>>,
}

impl Condition {
    /// Builds a `Condition` from its required fields.
    pub fn new(subject: impl Into<Reference>) -> Self {
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
            verification_status: None,
            category: None,
            severity: None,
            code: None,
            body_site: None,
            subject: subject.into(),
            context: None,
            onset: None,
            abatement: None,
            asserted_date: None,
            asserter: None,
            stage: None,
            evidence: None,
            note: None,
        }
    }
}

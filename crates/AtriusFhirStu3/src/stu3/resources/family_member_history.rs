use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the born\[x\] field in FamilyMemberHistory
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "born")]
pub enum FamilyMemberHistoryBorn {
    #[fhir_serde(rename = "bornPeriod")]
    Period(Period),
    #[fhir_serde(rename = "bornDate")]
    Date(Date),
    #[fhir_serde(rename = "bornString")]
    String(String),
}

/// Choice of types for the age\[x\] field in FamilyMemberHistory
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "age")]
pub enum FamilyMemberHistoryAge {
    #[fhir_serde(rename = "ageAge")]
    Age(Age),
    #[fhir_serde(rename = "ageRange")]
    Range(Range),
    #[fhir_serde(rename = "ageString")]
    String(String),
}

/// Choice of types for the deceased\[x\] field in FamilyMemberHistory
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "deceased")]
pub enum FamilyMemberHistoryDeceased {
    #[fhir_serde(rename = "deceasedBoolean")]
    Boolean(Boolean),
    #[fhir_serde(rename = "deceasedAge")]
    Age(Age),
    #[fhir_serde(rename = "deceasedRange")]
    Range(Range),
    #[fhir_serde(rename = "deceasedDate")]
    Date(Date),
    #[fhir_serde(rename = "deceasedString")]
    String(String),
}

/// Choice of types for the onset\[x\] field in FamilyMemberHistoryCondition
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "onset")]
pub enum FamilyMemberHistoryConditionOnset {
    #[fhir_serde(rename = "onsetAge")]
    Age(Age),
    #[fhir_serde(rename = "onsetRange")]
    Range(Range),
    #[fhir_serde(rename = "onsetPeriod")]
    Period(Period),
    #[fhir_serde(rename = "onsetString")]
    String(String),
}

/// Condition that the related person had
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct FamilyMemberHistoryCondition {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Condition suffered by relation
    pub code: CodeableConcept,
    /// deceased | permanent disability | etc.
    pub outcome: Option<CodeableConcept>,
    /// When condition first manifested
    #[fhir_serde(flatten)]
    pub onset: Option<FamilyMemberHistoryConditionOnset>,
    /// Extra information about condition
    pub note: Option<Vec<Annotation>>,
}

impl FamilyMemberHistoryCondition {
    /// Builds a `FamilyMemberHistoryCondition` from its required fields.
    pub fn new(code: impl Into<CodeableConcept>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            code: code.into(),
            outcome: None,
            onset: None,
            note: None,
        }
    }
}

/// Significant health events and conditions for a person related to the patient
/// relevant in the context of care for the patient.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_resource(domain)]
pub struct FamilyMemberHistory {
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
    /// External Id(s) for this record
    pub identifier: Option<Vec<Identifier>>,
    /// Instantiates protocol or definition
    pub definition: Option<Vec<Reference>>,
    /// partial | completed | entered-in-error | health-unknown
    pub status: Coded<FamilyHistoryStatus>,
    /// The taking of a family member's history did not occur
    #[fhir_serde(rename = "notDone")]
    pub not_done: Option<Boolean>,
    /// subject-unknown | withheld | unable-to-obtain | deferred
    #[fhir_serde(rename = "notDoneReason")]
    pub not_done_reason: Option<CodeableConcept>,
    /// Patient history is about
    pub patient: Reference,
    /// When history was captured/updated
    pub date: Option<DateTime>,
    /// The family member described
    pub name: Option<String>,
    /// Relationship to the subject
    pub relationship: CodeableConcept,
    /// male | female | other | unknown
    pub gender: Option<Coded<AdministrativeGender>>,
    /// (approximate) date of birth
    #[fhir_serde(flatten)]
    pub born: Option<FamilyMemberHistoryBorn>,
    /// (approximate) age
    #[fhir_serde(flatten)]
    pub age: Option<FamilyMemberHistoryAge>,
    /// Age is estimated?
    #[fhir_serde(rename = "estimatedAge")]
    pub estimated_age: Option<Boolean>,
    /// Dead? How old/when?
    #[fhir_serde(flatten)]
    pub deceased: Option<FamilyMemberHistoryDeceased>,
    /// Why was family member history performed?
    #[fhir_serde(rename = "reasonCode")]
    pub reason_code: Option<Vec<CodeableConcept>>,
    /// Why was family member history performed?
    #[fhir_serde(rename = "reasonReference")]
    pub reason_reference: Option<Vec<Reference>>,
    /// General note about related person
    pub note: Option<Vec<Annotation>>,
    /// Condition that the related person had
    pub condition: Option<Vec<FamilyMemberHistoryCondition>>,
}

impl FamilyMemberHistory {
    /// Builds a `FamilyMemberHistory` from its required fields.
    pub fn new(
        status: impl Into<Coded<FamilyHistoryStatus>>,
        patient: impl Into<Reference>,
        relationship: impl Into<CodeableConcept>,
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
            definition: None,
            status: status.into(),
            not_done: None,
            not_done_reason: None,
            patient: patient.into(),
            date: None,
            name: None,
            relationship: relationship.into(),
            gender: None,
            born: None,
            age: None,
            estimated_age: None,
            deceased: None,
            reason_code: None,
            reason_reference: None,
            note: None,
            condition: None,
        }
    }
}

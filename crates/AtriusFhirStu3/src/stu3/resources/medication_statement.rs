use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the medication\[x\] field in MedicationStatement
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "medication")]
pub enum MedicationStatementMedication {
    #[fhir_serde(rename = "medicationCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir_serde(rename = "medicationReference")]
    Reference(Reference),
}

/// Choice of types for the effective\[x\] field in MedicationStatement
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "effective")]
pub enum MedicationStatementEffective {
    #[fhir_serde(rename = "effectiveDateTime")]
    DateTime(DateTime),
    #[fhir_serde(rename = "effectivePeriod")]
    Period(Period),
}

/// A record of a medication that is being consumed by a patient.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_resource(domain)]
pub struct MedicationStatement {
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
    /// External identifier
    pub identifier: Option<Vec<Identifier>>,
    /// Fulfils plan, proposal or order
    #[fhir_serde(rename = "basedOn")]
    pub based_on: Option<Vec<Reference>>,
    /// Part of referenced event
    #[fhir_serde(rename = "partOf")]
    pub part_of: Option<Vec<Reference>>,
    /// Encounter / Episode associated with MedicationStatement
    pub context: Option<Reference>,
    /// active | completed | entered-in-error | intended | stopped | on-hold
    pub status: Coded<MedicationStatementStatus>,
    /// Type of medication usage
    pub category: Option<CodeableConcept>,
    /// What medication was taken
    #[fhir_serde(flatten)]
    pub medication: MedicationStatementMedication,
    /// The date/time or interval when the medication was taken
    #[fhir_serde(flatten)]
    pub effective: Option<MedicationStatementEffective>,
    /// When the statement was asserted?
    #[fhir_serde(rename = "dateAsserted")]
    pub date_asserted: Option<DateTime>,
    /// Person or organization that provided the information about the taking of this medication
    #[fhir_serde(rename = "informationSource")]
    pub information_source: Option<Reference>,
    /// Who is/was taking the medication
    pub subject: Reference,
    /// Additional supporting information
    #[fhir_serde(rename = "derivedFrom")]
    pub derived_from: Option<Vec<Reference>>,
    /// y | n | unk | na
    pub taken: Coded<MedicationStatementTaken>,
    /// True if asserting medication was not given
    #[fhir_serde(rename = "reasonNotTaken")]
    pub reason_not_taken: Option<Vec<CodeableConcept>>,
    /// Reason for why the medication is being/was taken
    #[fhir_serde(rename = "reasonCode")]
    pub reason_code: Option<Vec<CodeableConcept>>,
    /// Condition or observation that supports why the medication is being/was taken
    #[fhir_serde(rename = "reasonReference")]
    pub reason_reference: Option<Vec<Reference>>,
    /// Further information about the statement
    pub note: Option<Vec<Annotation>>,
    /// Details of how medication is/was taken or should be taken
    pub dosage: Option<Vec<Dosage>>,
}

impl MedicationStatement {
    /// Builds a `MedicationStatement` from its required fields.
    pub fn new(
        status: impl Into<Coded<MedicationStatementStatus>>,
        medication: impl Into<MedicationStatementMedication>,
        subject: impl Into<Reference>,
        taken: impl Into<Coded<MedicationStatementTaken>>,
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
            part_of: None,
            context: None,
            status: status.into(),
            category: None,
            medication: medication.into(),
            effective: None,
            date_asserted: None,
            information_source: None,
            subject: subject.into(),
            derived_from: None,
            taken: taken.into(),
            reason_not_taken: None,
            reason_code: None,
            reason_reference: None,
            note: None,
            dosage: None,
        }
    }
}

//! Procedure: an action performed on or for a patient.

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the performed\[x\] field in Procedure
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "performed")]
pub enum ProcedurePerformed {
    #[fhir_serde(rename = "performedDateTime")]
    DateTime(DateTime),
    #[fhir_serde(rename = "performedPeriod")]
    Period(Period),
}

/// The people who performed the procedure
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ProcedurePerformer {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The role the actor was in
    pub role: Option<CodeableConcept>,
    /// The reference to the practitioner
    pub actor: Reference,
    /// Organization the device or practitioner was acting for
    #[fhir_serde(rename = "onBehalfOf")]
    pub on_behalf_of: Option<Reference>,
}

impl ProcedurePerformer {
    /// Builds a `ProcedurePerformer` from its required fields.
    pub fn new(actor: impl Into<Reference>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            role: None,
            actor: actor.into(),
            on_behalf_of: None,
        }
    }
}

/// Device changed in procedure
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ProcedureFocalDevice {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Kind of change to device
    pub action: Option<CodeableConcept>,
    /// Device that was changed
    pub manipulated: Reference,
}

impl ProcedureFocalDevice {
    /// Builds a `ProcedureFocalDevice` from its required fields.
    pub fn new(manipulated: impl Into<Reference>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            action: None,
            manipulated: manipulated.into(),
        }
    }
}

/// An action that is or was performed on a patient.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_resource(domain)]
pub struct Procedure {
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
    /// External Identifiers for this procedure
    pub identifier: Option<Vec<Identifier>>,
    /// Instantiates protocol or definition
    pub definition: Option<Vec<Reference>>,
    /// A request for this procedure
    #[fhir_serde(rename = "basedOn")]
    pub based_on: Option<Vec<Reference>>,
    /// Part of referenced event
    #[fhir_serde(rename = "partOf")]
    pub part_of: Option<Vec<Reference>>,
    /// preparation | in-progress | suspended | aborted | completed | entered-in-error | unknown
    pub status: Coded<EventStatus>,
    /// True if procedure was not performed as scheduled
    #[fhir_serde(rename = "notDone")]
    pub not_done: Option<Boolean>,
    /// Reason procedure was not performed
    #[fhir_serde(rename = "notDoneReason")]
    pub not_done_reason: Option<CodeableConcept>,
    /// Classification of the procedure
    pub category: Option<CodeableConcept>,
    /// Identification of the procedure
    pub code: Option<CodeableConcept>,
    /// Who the procedure was performed on
    pub subject: Reference,
    /// Encounter or episode associated with the procedure
    pub context: Option<Reference>,
    /// Date/Period the procedure was performed
    #[fhir_serde(flatten)]
    pub performed: Option<ProcedurePerformed>,
    /// The people who performed the procedure
    pub performer: Option<Vec<ProcedurePerformer>>,
    /// Where the procedure happened
    pub location: Option<Reference>,
    /// Coded reason procedure performed
    #[fhir_serde(rename = "reasonCode")]
    pub reason_code: Option<Vec<CodeableConcept>>,
    /// Condition that is the reason the procedure performed
    #[fhir_serde(rename = "reasonReference")]
    pub reason_reference: Option<Vec<Reference>>,
    /// Target body sites
    #[fhir_serde(rename = "bodySite")]
    pub body_site: Option<Vec<CodeableConcept>>,
    /// The result of procedure
    pub outcome: Option<CodeableConcept>,
    /// Any report resulting from the procedure
    pub report: Option<Vec<Reference>>,
    /// Complication following the procedure
    pub complication: Option<Vec<CodeableConcept>>,
    /// A condition that is a result of the procedure
    #[fhir_serde(rename = "complicationDetail")]
    pub complication_detail: Option<Vec<Reference>>,
    /// Instructions for follow up
    #[fhir_serde(rename = "followUp")]
    pub follow_up: Option<Vec<CodeableConcept>>,
    /// Additional information about the procedure
    pub note: Option<Vec<Annotation>>,
    /// Device changed in procedure
    #[fhir_serde(rename = "focalDevice")]
    pub focal_device: Option<Vec<ProcedureFocalDevice>>,
    /// Items used during procedure
    #[fhir_serde(rename = "usedReference")]
    pub used_reference: Option<Vec<Reference>>,
    /// Coded items used during the procedure
    #[fhir_serde(rename = "usedCode")]
    pub used_code: Option<Vec<CodeableConcept>>,
}

impl Procedure {
    /// Builds a `Procedure` from its required fields.
    pub fn new(status: impl Into<Coded<EventStatus>>, subject: impl Into<Reference>) -> Self {
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
            based_on: None,
            part_of: None,
            status: status.into(),
            not_done: None,
            not_done_reason: None,
            category: None,
            code: None,
            subject: subject.into(),
            context: None,
            performed: None,
            performer: None,
            location: None,
            reason_code: None,
            reason_reference: None,
            body_site: None,
            outcome: None,
            report: None,
            complication: None,
            complication_detail: None,
            follow_up: None,
            note: None,
            focal_device: None,
            used_reference: None,
            used_code: None,
        }
    }
}

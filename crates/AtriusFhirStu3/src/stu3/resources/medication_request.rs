//! MedicationRequest: an order or request for the supply and administration of a
//! medication.

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the medication\[x\] field in MedicationRequest
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "medication")]
pub enum MedicationRequestMedication {
    #[fhir_serde(rename = "medicationCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir_serde(rename = "medicationReference")]
    Reference(Reference),
}

/// Who/What requested the Request
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct MedicationRequestRequester {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Who ordered the initial medication(s)
    pub agent: Reference,
    /// Organization agent is acting for
    #[fhir_serde(rename = "onBehalfOf")]
    pub on_behalf_of: Option<Reference>,
}

impl MedicationRequestRequester {
    /// Builds a `MedicationRequestRequester` from its required fields.
    pub fn new(agent: impl Into<Reference>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            agent: agent.into(),
            on_behalf_of: None,
        }
    }
}

/// Medication supply authorization
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct MedicationRequestDispenseRequest {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Time period supply is authorized for
    #[fhir_serde(rename = "validityPeriod")]
    pub validity_period: Option<Period>,
    /// Number of refills authorized
    #[fhir_serde(rename = "numberOfRepeatsAllowed")]
    pub number_of_repeats_allowed: Option<PositiveInt>,
    /// Amount of medication to supply per dispense
    pub quantity: Option<SimpleQuantity>,
    /// Number of days supply per dispense
    #[fhir_serde(rename = "expectedSupplyDuration")]
    pub expected_supply_duration: Option<Duration>,
    /// Intended dispenser
    pub performer: Option<Reference>,
}

/// Any restrictions on medication substitution
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct MedicationRequestSubstitution {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Whether substitution is allowed or not
    pub allowed: Boolean,
    /// Why should (not) substitution be made
    pub reason: Option<CodeableConcept>,
}

impl MedicationRequestSubstitution {
    /// Builds a `MedicationRequestSubstitution` from its required fields.
    pub fn new(allowed: impl Into<Boolean>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            allowed: allowed.into(),
            reason: None,
        }
    }
}

/// An order or request for both supply of the medication and the instructions for
/// administration of the medication to a patient.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_resource(domain)]
pub struct MedicationRequest {
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
    /// External ids for this request
    pub identifier: Option<Vec<Identifier>>,
    /// Protocol or definition
    pub definition: Option<Vec<Reference>>,
    /// What request fulfills
    #[fhir_serde(rename = "basedOn")]
    pub based_on: Option<Vec<Reference>>,
    /// Composite request this is part of
    #[fhir_serde(rename = "groupIdentifier")]
    pub group_identifier: Option<Identifier>,
    /// active | on-hold | cancelled | completed | entered-in-error | stopped | draft | unknown
    pub status: Option<Coded<MedicationRequestStatus>>,
    /// proposal | plan | order | instance-order
    pub intent: Coded<MedicationRequestIntent>,
    /// Type of medication usage
    pub category: Option<CodeableConcept>,
    /// routine | urgent | stat | asap
    pub priority: Option<Coded<RequestPriority>>,
    /// Medication to be taken
    #[fhir_serde(flatten)]
    pub medication: MedicationRequestMedication,
    /// Who or group medication request is for
    pub subject: Reference,
    /// Created during encounter/admission/stay
    pub context: Option<Reference>,
    /// Information to support ordering of the medication
    #[fhir_serde(rename = "supportingInformation")]
    pub supporting_information: Option<Vec<Reference>>,
    /// When request was initially authored
    #[fhir_serde(rename = "authoredOn")]
    pub authored_on: Option<DateTime>,
    /// Who/What requested the Request
    pub requester: Option<MedicationRequestRequester>,
    /// Person who entered the request
    pub recorder: Option<Reference>,
    /// Reason or indication for writing the prescription
    #[fhir_serde(rename = "reasonCode")]
    pub reason_code: Option<Vec<CodeableConcept>>,
    /// Condition or Observation that supports why the prescription is being written
    #[fhir_serde(rename = "reasonReference")]
    pub reason_reference: Option<Vec<Reference>>,
    /// Information about the prescription
    pub note: Option<Vec<Annotation>>,
    /// How the medication should be taken
    #[fhir_serde(rename = "dosageInstruction")]
    pub dosage_instruction: Option<Vec<Dosage>>,
    /// Medication supply authorization
    #[fhir_serde(rename = "dispenseRequest")]
    pub dispense_request: Option<MedicationRequestDispenseRequest>,
    /// Any restrictions on medication substitution
    pub substitution: Option<MedicationRequestSubstitution>,
    /// An order/prescription that is being replaced
    #[fhir_serde(rename = "priorPrescription")]
    pub prior_prescription: Option<Reference>,
    /// Clinical Issue with action
    #[fhir_serde(rename = "detectedIssue")]
    pub detected_issue: Option<Vec<Reference>>,
    /// A list of events of interest in the lifecycle
    #[fhir_serde(rename = "eventHistory")]
    pub event_history: Option<Vec<Reference>>,
}

impl MedicationRequest {
    /// Builds a `MedicationRequest` from its required fields.
    pub fn new(
        intent: impl Into<Coded<MedicationRequestIntent>>,
        medication: impl Into<MedicationRequestMedication>,
        subject: impl Into<Reference>,
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
            based_on: None,
            group_identifier: None,
            status: None,
            intent: intent.into(),
            category: None,
            priority: None,
            medication: medication.into(),
            subject: subject.into(),
            context: None,
            supporting_information: None,
            authored_on: None,
            requester: None,
            recorder: None,
            reason_code: None,
            reason_reference: None,
            note: None,
            dosage_instruction: None,
            dispense_request: None,
            substitution: None,
            prior_prescription: None,
            detected_issue: None,
            event_history: None,
        }
    }
}

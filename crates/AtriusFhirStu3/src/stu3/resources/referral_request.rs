//! ReferralRequest: a request for referral or transfer of care.

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the occurrence\[x\] field in ReferralRequest
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "occurrence")]
pub enum ReferralRequestOccurrence {
    #[fhir_serde(rename = "occurrenceDateTime")]
    DateTime(DateTime),
    #[fhir_serde(rename = "occurrencePeriod")]
    Period(Period),
}

/// Who/what is requesting service
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ReferralRequestRequester {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Individual making the request
    pub agent: Reference,
    /// Organization agent is acting for
    #[fhir_serde(rename = "onBehalfOf")]
    pub on_behalf_of: Option<Reference>,
}

impl ReferralRequestRequester {
    /// Builds a `ReferralRequestRequester` from its required fields.
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

/// Used to record and send details about a request for referral service or transfer of a patient to the care of
/// another provider or provider organization.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_resource(domain)]
pub struct ReferralRequest {
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
    /// Business identifier
    pub identifier: Option<Vec<Identifier>>,
    /// Instantiates protocol or definition
    pub definition: Option<Vec<Reference>>,
    /// Request fulfilled by this request
    #[fhir_serde(rename = "basedOn")]
    pub based_on: Option<Vec<Reference>>,
    /// Request(s) replaced by this request
    pub replaces: Option<Vec<Reference>>,
    /// Composite request this is part of
    #[fhir_serde(rename = "groupIdentifier")]
    pub group_identifier: Option<Identifier>,
    /// draft | active | suspended | cancelled | completed | entered-in-error | unknown
    pub status: Coded<RequestStatus>,
    /// proposal | plan | order
    pub intent: Coded<RequestIntent>,
    /// Referral/Transition of care request type
    pub r#type: Option<CodeableConcept>,
    /// Urgency of referral / transfer of care request
    pub priority: Option<Coded<RequestPriority>>,
    /// Actions requested as part of the referral
    #[fhir_serde(rename = "serviceRequested")]
    pub service_requested: Option<Vec<CodeableConcept>>,
    /// Patient referred to care or transfer
    pub subject: Reference,
    /// Originating encounter
    pub context: Option<Reference>,
    /// When the service(s) requested in the referral should occur
    #[fhir_serde(flatten)]
    pub occurrence: Option<ReferralRequestOccurrence>,
    /// Date of creation/activation
    #[fhir_serde(rename = "authoredOn")]
    pub authored_on: Option<DateTime>,
    /// Who/what is requesting service
    pub requester: Option<ReferralRequestRequester>,
    /// The clinical specialty (discipline) that the referral is requested for
    pub specialty: Option<CodeableConcept>,
    /// Receiver of referral / transfer of care request
    pub recipient: Option<Vec<Reference>>,
    /// Reason for referral / transfer of care request
    #[fhir_serde(rename = "reasonCode")]
    pub reason_code: Option<Vec<CodeableConcept>>,
    /// Why is service needed?
    #[fhir_serde(rename = "reasonReference")]
    pub reason_reference: Option<Vec<Reference>>,
    /// A textual description of the referral
    pub description: Option<String>,
    /// Additonal information to support referral or transfer of care request
    #[fhir_serde(rename = "supportingInfo")]
    pub supporting_info: Option<Vec<Reference>>,
    /// Comments made about referral request
    pub note: Option<Vec<Annotation>>,
    /// Key events in history of request
    #[fhir_serde(rename = "relevantHistory")]
    pub relevant_history: Option<Vec<Reference>>,
}

impl ReferralRequest {
    /// Builds a `ReferralRequest` from its required fields.
    pub fn new(
        status: impl Into<Coded<RequestStatus>>,
        intent: impl Into<Coded<RequestIntent>>,
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
            replaces: None,
            group_identifier: None,
            status: status.into(),
            intent: intent.into(),
            r#type: None,
            priority: None,
            service_requested: None,
            subject: subject.into(),
            context: None,
            occurrence: None,
            authored_on: None,
            requester: None,
            specialty: None,
            recipient: None,
            reason_code: None,
            reason_reference: None,
            description: None,
            supporting_info: None,
            note: None,
            relevant_history: None,
        }
    }
}

//! CarePlan: how practitioners intend to deliver care for a patient or group.

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the scheduled\[x\] field in CarePlanActivityDetail
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "scheduled")]
pub enum CarePlanActivityDetailScheduled {
    #[fhir_serde(rename = "scheduledTiming")]
    Timing(Timing),
    #[fhir_serde(rename = "scheduledPeriod")]
    Period(Period),
    #[fhir_serde(rename = "scheduledString")]
    String(String),
}

/// Choice of types for the product\[x\] field in CarePlanActivityDetail
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "product")]
pub enum CarePlanActivityDetailProduct {
    #[fhir_serde(rename = "productCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir_serde(rename = "productReference")]
    Reference(Reference),
}

/// In-line definition of activity
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct CarePlanActivityDetail {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// diet | drug | encounter | observation | procedure | supply | other
    pub category: Option<CodeableConcept>,
    /// Protocol or definition
    pub definition: Option<Reference>,
    /// Detail type of activity
    pub code: Option<CodeableConcept>,
    /// Why activity should be done or why activity was prohibited
    #[fhir_serde(rename = "reasonCode")]
    pub reason_code: Option<Vec<CodeableConcept>>,
    /// Condition triggering need for activity
    #[fhir_serde(rename = "reasonReference")]
    pub reason_reference: Option<Vec<Reference>>,
    /// Goals this activity relates to
    pub goal: Option<Vec<Reference>>,
    /// not-started | scheduled | in-progress | on-hold | completed | cancelled | unknown
    pub status: Coded<CarePlanActivityStatus>,
    /// Reason for current status
    #[fhir_serde(rename = "statusReason")]
    pub status_reason: Option<String>,
    /// Do NOT do
    pub prohibited: Option<Boolean>,
    /// When activity is to occur
    #[fhir_serde(flatten)]
    pub scheduled: Option<CarePlanActivityDetailScheduled>,
    /// Where it should happen
    pub location: Option<Reference>,
    /// Who will be responsible?
    pub performer: Option<Vec<Reference>>,
    /// What is to be administered/supplied
    #[fhir_serde(flatten)]
    pub product: Option<CarePlanActivityDetailProduct>,
    /// How to consume/day?
    #[fhir_serde(rename = "dailyAmount")]
    pub daily_amount: Option<SimpleQuantity>,
    /// How much to administer/supply/consume
    pub quantity: Option<SimpleQuantity>,
    /// Extra info describing activity to perform
    pub description: Option<String>,
}

impl CarePlanActivityDetail {
    /// Builds a `CarePlanActivityDetail` from its required fields.
    pub fn new(status: impl Into<Coded<CarePlanActivityStatus>>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            category: None,
            definition: None,
            code: None,
            reason_code: None,
            reason_reference: None,
            goal: None,
            status: status.into(),
            status_reason: None,
            prohibited: None,
            scheduled: None,
            location: None,
            performer: None,
            product: None,
            daily_amount: None,
            quantity: None,
            description: None,
        }
    }
}

/// Action to occur as part of plan
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct CarePlanActivity {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Results of the activity
    #[fhir_serde(rename = "outcomeCodeableConcept")]
    pub outcome_codeable_concept: Option<Vec<CodeableConcept>>,
    /// Appointment, Encounter, Procedure, etc.
    #[fhir_serde(rename = "outcomeReference")]
    pub outcome_reference: Option<Vec<Reference>>,
    /// Comments about the activity status/progress
    pub progress: Option<Vec<Annotation>>,
    /// Activity details defined in specific resource
    pub reference: Option<Reference>,
    /// In-line definition of activity
    pub detail: Option<CarePlanActivityDetail>,
}

/// Describes the intention of how one or more practitioners intend to deliver care
/// for a particular patient, group or community for a period of time, possibly
/// limited to care for a specific condition or set of conditions.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_resource(domain)]
pub struct CarePlan {
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
    /// External Ids for this plan
    pub identifier: Option<Vec<Identifier>>,
    /// Protocol or definition
    pub definition: Option<Vec<Reference>>,
    /// Fulfills care plan
    #[fhir_serde(rename = "basedOn")]
    pub based_on: Option<Vec<Reference>>,
    /// CarePlan replaced by this CarePlan
    pub replaces: Option<Vec<Reference>>,
    /// Part of referenced CarePlan
    #[fhir_serde(rename = "partOf")]
    pub part_of: Option<Vec<Reference>>,
    /// draft | active | suspended | completed | entered-in-error | cancelled | unknown
    pub status: Coded<CarePlanStatus>,
    /// proposal | plan | order | option
    pub intent: Coded<CarePlanIntent>,
    /// Type of plan
    pub category: Option<Vec<CodeableConcept>>,
    /// Human-friendly name for the CarePlan
    pub title: Option<String>,
    /// Summary of nature of plan
    pub description: Option<String>,
    /// Who care plan is for
    pub subject: Reference,
    /// Created in context of
    pub context: Option<Reference>,
    /// Time period plan covers
    pub period: Option<Period>,
    /// Who is responsible for contents of the plan
    pub author: Option<Vec<Reference>>,
    /// Who's involved in plan?
    #[fhir_serde(rename = "careTeam")]
    pub care_team: Option<Vec<Reference>>,
    /// Health issues this plan addresses
    pub addresses: Option<Vec<Reference>>,
    /// Information considered as part of plan
    #[fhir_serde(rename = "supportingInfo")]
    pub supporting_info: Option<Vec<Reference>>,
    /// Desired outcome of plan
    pub goal: Option<Vec<Reference>>,
    /// Action to occur as part of plan
    pub activity: Option<Vec<CarePlanActivity>>,
    /// Comments about the plan
    pub note: Option<Vec<Annotation>>,
}

impl CarePlan {
    /// Builds a `CarePlan` from its required fields.
    pub fn new(
        status: impl Into<Coded<CarePlanStatus>>,
        intent: impl Into<Coded<CarePlanIntent>>,
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
            part_of: None,
            status: status.into(),
            intent: intent.into(),
            category: None,
            title: None,
            description: None,
            subject: subject.into(),
            context: None,
            period: None,
            author: None,
            care_team: None,
            addresses: None,
            supporting_info: None,
            goal: None,
            activity: None,
            note: None,
        }
    }
}

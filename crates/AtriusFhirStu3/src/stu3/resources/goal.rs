use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the start\[x\] field in Goal
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "start")]
pub enum GoalStart {
    #[fhir_serde(rename = "startDate")]
    Date(Date),
    #[fhir_serde(rename = "startCodeableConcept")]
    CodeableConcept(CodeableConcept),
}

/// Choice of types for the detail\[x\] field in GoalTarget
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "detail")]
pub enum GoalTargetDetail {
    #[fhir_serde(rename = "detailQuantity")]
    Quantity(Quantity),
    #[fhir_serde(rename = "detailRange")]
    Range(Range),
    #[fhir_serde(rename = "detailCodeableConcept")]
    CodeableConcept(CodeableConcept),
}

/// Choice of types for the due\[x\] field in GoalTarget
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "due")]
pub enum GoalTargetDue {
    #[fhir_serde(rename = "dueDate")]
    Date(Date),
    #[fhir_serde(rename = "dueDuration")]
    Duration(Duration),
}

/// Target outcome for the goal
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct GoalTarget {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The parameter whose value is being tracked
    pub measure: Option<CodeableConcept>,
    /// The target value to be achieved
    #[fhir_serde(flatten)]
    pub detail: Option<GoalTargetDetail>,
    /// Reach goal on or before
    #[fhir_serde(flatten)]
    pub due: Option<GoalTargetDue>,
}

/// Describes the intended objective(s) for a patient, group or organization care,
/// for example, weight loss, restoring an activity of daily living, obtaining herd
/// immunity via immunization, meeting a process improvement objective, etc.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_resource(domain)]
pub struct Goal {
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
    /// External Ids for this goal
    pub identifier: Option<Vec<Identifier>>,
    /// proposed | accepted | planned | in-progress | on-target | ahead-of-target | behind-target | sustaining | achieved | on-hold | cancelled | entered-in-error | rejected
    pub status: Coded<GoalStatus>,
    /// E.g. Treatment, dietary, behavioral, etc.
    pub category: Option<Vec<CodeableConcept>>,
    /// high-priority | medium-priority | low-priority
    pub priority: Option<CodeableConcept>,
    /// Code or text describing goal
    pub description: CodeableConcept,
    /// Who this goal is intended for
    pub subject: Option<Reference>,
    /// When goal pursuit begins
    #[fhir_serde(flatten)]
    pub start: Option<GoalStart>,
    /// Target outcome for the goal
    pub target: Option<GoalTarget>,
    /// When goal status took effect
    #[fhir_serde(rename = "statusDate")]
    pub status_date: Option<Date>,
    /// Reason for current status
    #[fhir_serde(rename = "statusReason")]
    pub status_reason: Option<String>,
    /// Who's responsible for creating Goal?
    #[fhir_serde(rename = "expressedBy")]
    pub expressed_by: Option<Reference>,
    /// Issues addressed by this goal
    pub addresses: Option<Vec<Reference>>,
    /// Comments about the goal
    pub note: Option<Vec<Annotation>>,
    /// What result was achieved regarding the goal?
    #[fhir_serde(rename = "outcomeCode")]
    pub outcome_code: Option<Vec<CodeableConcept>>,
    /// Observation that resulted from goal
    #[fhir_serde(rename = "outcomeReference")]
    pub outcome_reference: Option<Vec<Reference>>,
}

impl Goal {
    /// Builds a `Goal` from its required fields.
    pub fn new(
        status: impl Into<Coded<GoalStatus>>,
        description: impl Into<CodeableConcept>,
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
            status: status.into(),
            category: None,
            priority: None,
            description: description.into(),
            subject: None,
            start: None,
            target: None,
            status_date: None,
            status_reason: None,
            expressed_by: None,
            addresses: None,
            note: None,
            outcome_code: None,
            outcome_reference: None,
        }
    }
}

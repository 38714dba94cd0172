//! PlanDefinition: a pre-defined group of actions, such as an order set or protocol.

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the detail\[x\] field in PlanDefinitionGoalTarget
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "detail")]
pub enum PlanDefinitionGoalTargetDetail {
    #[fhir_serde(rename = "detailQuantity")]
    Quantity(Quantity),
    #[fhir_serde(rename = "detailRange")]
    Range(Range),
    #[fhir_serde(rename = "detailCodeableConcept")]
    CodeableConcept(CodeableConcept),
}

/// Choice of types for the offset\[x\] field in PlanDefinitionActionRelatedAction
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "offset")]
pub enum PlanDefinitionActionRelatedActionOffset {
    #[fhir_serde(rename = "offsetDuration")]
    Duration(Duration),
    #[fhir_serde(rename = "offsetRange")]
    Range(Range),
}

/// Choice of types for the timing\[x\] field in PlanDefinitionAction
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "timing")]
pub enum PlanDefinitionActionTiming {
    #[fhir_serde(rename = "timingDateTime")]
    DateTime(DateTime),
    #[fhir_serde(rename = "timingPeriod")]
    Period(Period),
    #[fhir_serde(rename = "timingDuration")]
    Duration(Duration),
    #[fhir_serde(rename = "timingRange")]
    Range(Range),
    #[fhir_serde(rename = "timingTiming")]
    Timing(Timing),
}

/// Target outcome for the goal
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct PlanDefinitionGoalTarget {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The parameter whose value is to be tracked
    pub measure: Option<CodeableConcept>,
    /// The target value to be achieved
    #[fhir_serde(flatten)]
    pub detail: Option<PlanDefinitionGoalTargetDetail>,
    /// Reach goal within
    pub due: Option<Duration>,
}

/// What the plan is trying to accomplish
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct PlanDefinitionGoal {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// E.g. Treatment, dietary, behavioral, etc.
    pub category: Option<CodeableConcept>,
    /// Code or text describing the goal
    pub description: CodeableConcept,
    /// high-priority | medium-priority | low-priority
    pub priority: Option<CodeableConcept>,
    /// When goal pursuit begins
    pub start: Option<CodeableConcept>,
    /// What does the goal address
    pub addresses: Option<Vec<CodeableConcept>>,
    /// Supporting documentation for the goal
    pub documentation: Option<Vec<RelatedArtifact>>,
    /// Target outcome for the goal
    pub target: Option<Vec<PlanDefinitionGoalTarget>>,
}

impl PlanDefinitionGoal {
    /// Builds a `PlanDefinitionGoal` from its required fields.
    pub fn new(description: impl Into<CodeableConcept>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            category: None,
            description: description.into(),
            priority: None,
            start: None,
            addresses: None,
            documentation: None,
            target: None,
        }
    }
}

/// Whether or not the action is applicable
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct PlanDefinitionActionCondition {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// applicability | start | stop
    pub kind: Coded<ActionConditionKind>,
    /// Natural language description of the condition
    pub description: Option<String>,
    /// Language of the expression
    pub language: Option<String>,
    /// Boolean-valued expression
    pub expression: Option<String>,
}

impl PlanDefinitionActionCondition {
    /// Builds a `PlanDefinitionActionCondition` from its required fields.
    pub fn new(kind: impl Into<Coded<ActionConditionKind>>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            kind: kind.into(),
            description: None,
            language: None,
            expression: None,
        }
    }
}

/// Relationship to another action
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct PlanDefinitionActionRelatedAction {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// What action is this related to
    #[fhir_serde(rename = "actionId")]
    pub action_id: Id,
    /// before-start | before | before-end | concurrent-with-start | concurrent | concurrent-with-end | after-start | after | after-end
    pub relationship: Coded<ActionRelationshipType>,
    /// Time offset for the relationship
    #[fhir_serde(flatten)]
    pub offset: Option<PlanDefinitionActionRelatedActionOffset>,
}

impl PlanDefinitionActionRelatedAction {
    /// Builds a `PlanDefinitionActionRelatedAction` from its required fields.
    pub fn new(
        action_id: impl Into<Id>,
        relationship: impl Into<Coded<ActionRelationshipType>>,
    ) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            action_id: action_id.into(),
            relationship: relationship.into(),
            offset: None,
        }
    }
}

/// Who should participate in the action
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct PlanDefinitionActionParticipant {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// patient | practitioner | related-person
    pub r#type: Coded<ActionParticipantType>,
    /// E.g. Nurse, Surgeon, Parent, etc.
    pub role: Option<CodeableConcept>,
}

impl PlanDefinitionActionParticipant {
    /// Builds a `PlanDefinitionActionParticipant` from its required fields.
    pub fn new(r#type: impl Into<Coded<ActionParticipantType>>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            r#type: r#type.into(),
            role: None,
        }
    }
}

/// Dynamic aspects of the definition
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct PlanDefinitionActionDynamicValue {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Natural language description of the dynamic value
    pub description: Option<String>,
    /// The path to the element to be set dynamically
    pub path: Option<String>,
    /// Language of the expression
    pub language: Option<String>,
    /// An expression that provides the dynamic value for the customization
    pub expression: Option<String>,
}

/// Action defined by the plan
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct PlanDefinitionAction {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// User-visible label for the action (e.g. 1. or A.)
    pub label: Option<String>,
    /// User-visible title
    pub title: Option<String>,
    /// Short description of the action
    pub description: Option<String>,
    /// Static text equivalent of the action, used if the dynamic aspects cannot be interpreted by the receiving system
    #[fhir_serde(rename = "textEquivalent")]
    pub text_equivalent: Option<String>,
    /// Code representing the meaning of the action or sub-actions
    pub code: Option<Vec<CodeableConcept>>,
    /// Why the action should be performed
    pub reason: Option<Vec<CodeableConcept>>,
    /// Supporting documentation for the intended performer of the action
    pub documentation: Option<Vec<RelatedArtifact>>,
    /// What goals this action supports
    #[fhir_serde(rename = "goalId")]
    pub goal_id: Option<Vec<Id>>,
    /// When the action should be triggered
    #[fhir_serde(rename = "triggerDefinition")]
    pub trigger_definition: Option<Vec<TriggerDefinition>>,
    /// Whether or not the action is applicable
    pub condition: Option<Vec<PlanDefinitionActionCondition>>,
    /// Input data requirements
    pub input: Option<Vec<DataRequirement>>,
    /// Output data definition
    pub output: Option<Vec<DataRequirement>>,
    /// Relationship to another action
    #[fhir_serde(rename = "relatedAction")]
    pub related_action: Option<Vec<PlanDefinitionActionRelatedAction>>,
    /// When the action should take place
    #[fhir_serde(flatten)]
    pub timing: Option<PlanDefinitionActionTiming>,
    /// Who should participate in the action
    pub participant: Option<Vec<PlanDefinitionActionParticipant>>,
    /// create | update | remove | fire-event
    pub r#type: Option<Coding>,
    /// visual-group | logical-group | sentence-group
    #[fhir_serde(rename = "groupingBehavior")]
    pub grouping_behavior: Option<Coded<ActionGroupingBehavior>>,
    /// any | all | all-or-none | exactly-one | at-most-one | one-or-more
    #[fhir_serde(rename = "selectionBehavior")]
    pub selection_behavior: Option<Coded<ActionSelectionBehavior>>,
    /// must | could | must-unless-documented
    #[fhir_serde(rename = "requiredBehavior")]
    pub required_behavior: Option<Coded<ActionRequiredBehavior>>,
    /// yes | no
    #[fhir_serde(rename = "precheckBehavior")]
    pub precheck_behavior: Option<Coded<ActionPrecheckBehavior>>,
    /// single | multiple
    #[fhir_serde(rename = "cardinalityBehavior")]
    pub cardinality_behavior: Option<Coded<ActionCardinalityBehavior>>,
    /// Description of the activity to be performed
    pub definition: Option<Reference>,
    /// Transform to apply the template
    pub transform: Option<Reference>,
    /// Dynamic aspects of the definition
    #[fhir_serde(rename = "dynamicValue")]
    pub dynamic_value: Option<Vec<PlanDefinitionActionDynamicValue>>,
    /// A sub-action
    pub action: Option<Vec<PlanDefinitionAction>>,
}

/// This resource allows for the definition of various types of plans as a
/// sharable, consumable, and executable artifact.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_resource(domain)]
pub struct PlanDefinition {
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
    /// Logical URI to reference this plan definition (globally unique)
    pub url: Option<Uri>,
    /// Additional identifier for the plan definition
    pub identifier: Option<Vec<Identifier>>,
    /// Business version of the plan definition
    pub version: Option<String>,
    /// Name for this plan definition (computer friendly)
    pub name: Option<String>,
    /// Name for this plan definition (human friendly)
    pub title: Option<String>,
    /// order-set | protocol | eca-rule
    pub r#type: Option<CodeableConcept>,
    /// draft | active | retired | unknown
    pub status: Coded<PublicationStatus>,
    /// For testing purposes, not real usage
    pub experimental: Option<Boolean>,
    /// Date this was last changed
    pub date: Option<DateTime>,
    /// Name of the publisher (organization or individual)
    pub publisher: Option<String>,
    /// Natural language description of the plan definition
    pub description: Option<Markdown>,
    /// Why this plan definition is defined
    pub purpose: Option<Markdown>,
    /// Describes the clinical usage of the asset
    pub usage: Option<String>,
    /// When the plan definition was approved by publisher
    #[fhir_serde(rename = "approvalDate")]
    pub approval_date: Option<Date>,
    /// When the plan definition was last reviewed
    #[fhir_serde(rename = "lastReviewDate")]
    pub last_review_date: Option<Date>,
    /// When the plan definition is expected to be used
    #[fhir_serde(rename = "effectivePeriod")]
    pub effective_period: Option<Period>,
    /// Context the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for plan definition (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// E.g. Education, Treatment, Assessment, etc.
    pub topic: Option<Vec<CodeableConcept>>,
    /// A content contributor
    pub contributor: Option<Vec<Contributor>>,
    /// Contact details for the publisher
    pub contact: Option<Vec<ContactDetail>>,
    /// Use and/or publishing restrictions
    pub copyright: Option<Markdown>,
    /// Related artifacts for the asset
    #[fhir_serde(rename = "relatedArtifact")]
    pub related_artifact: Option<Vec<RelatedArtifact>>,
    /// Logic used by the plan definition
    pub library: Option<Vec<Reference>>,
    /// What the plan is trying to accomplish
    pub goal: Option<Vec<PlanDefinitionGoal>>,
    /// Action defined by the plan
    pub action: Option<Vec<PlanDefinitionAction>>,
}

impl PlanDefinition {
    /// Builds a `PlanDefinition` from its required fields.
    pub fn new(status: impl Into<Coded<PublicationStatus>>) -> Self {
        Self {
            id: None,
            meta: None,
            implicit_rules: None,
            language: None,
            text: None,
            contained: None,
            extension: None,
            modifier_extension: None,
            url: None,
            identifier: None,
            version: None,
            name: None,
            title: None,
            r#type: None,
            status: status.into(),
            experimental: None,
            date: None,
            publisher: None,
            description: None,
            purpose: None,
            usage: None,
            approval_date: None,
            last_review_date: None,
            effective_period: None,
            use_context: None,
            jurisdiction: None,
            topic: None,
            contributor: None,
            contact: None,
            copyright: None,
            related_artifact: None,
            library: None,
            goal: None,
            action: None,
        }
    }
}

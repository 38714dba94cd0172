use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the definition\[x\] field in Task
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "definition")]
pub enum TaskDefinition {
    #[fhir_serde(rename = "definitionUri")]
    Uri(Uri),
    #[fhir_serde(rename = "definitionReference")]
    Reference(Reference),
}

open_choice! {
    /// Choice of types for the value\[x\] field in TaskInput
    TaskInputValue, "value"
}

open_choice! {
    /// Choice of types for the value\[x\] field in TaskOutput
    TaskOutputValue, "value"
}

/// Who is asking for task to be done
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct TaskRequester {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Individual asking for task
    pub agent: Reference,
    /// Organization individual is acting for
    #[fhir_serde(rename = "onBehalfOf")]
    pub on_behalf_of: Option<Reference>,
}

impl TaskRequester {
    /// Builds a `TaskRequester` from its required fields.
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

/// Constraints on fulfillment tasks
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct TaskRestriction {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// How many times to repeat
    pub repetitions: Option<PositiveInt>,
    /// When fulfillment sought
    pub period: Option<Period>,
    /// For whom is fulfillment sought?
    pub recipient: Option<Vec<Reference>>,
}

/// Information used to perform task
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct TaskInput {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Label for the input
    pub r#type: CodeableConcept,
    /// Content to use in performing the task
    #[fhir_serde(flatten)]
    pub value: TaskInputValue,
}

impl TaskInput {
    /// Builds a `TaskInput` from its required fields.
    pub fn new(r#type: impl Into<CodeableConcept>, value: impl Into<TaskInputValue>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            r#type: r#type.into(),
            value: value.into(),
        }
    }
}

/// Information produced as part of task
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct TaskOutput {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Label for output
    pub r#type: CodeableConcept,
    /// Result of output
    #[fhir_serde(flatten)]
    pub value: TaskOutputValue,
}

impl TaskOutput {
    /// Builds a `TaskOutput` from its required fields.
    pub fn new(r#type: impl Into<CodeableConcept>, value: impl Into<TaskOutputValue>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            r#type: r#type.into(),
            value: value.into(),
        }
    }
}

/// A task to be performed.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_resource(domain)]
pub struct Task {
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
    /// Task Instance Identifier
    pub identifier: Option<Vec<Identifier>>,
    /// Formal definition of task
    #[fhir_serde(flatten)]
    pub definition: Option<TaskDefinition>,
    /// Request fulfilled by this task
    #[fhir_serde(rename = "basedOn")]
    pub based_on: Option<Vec<Reference>>,
    /// Requisition or grouper id
    #[fhir_serde(rename = "groupIdentifier")]
    pub group_identifier: Option<Identifier>,
    /// Composite task
    #[fhir_serde(rename = "partOf")]
    pub part_of: Option<Vec<Reference>>,
    /// draft | requested | received | accepted | +
    pub status: Coded<TaskStatus>,
    /// Reason for current status
    #[fhir_serde(rename = "statusReason")]
    pub status_reason: Option<CodeableConcept>,
    /// E.g. "Specimen collected", "IV prepped"
    #[fhir_serde(rename = "businessStatus")]
    pub business_status: Option<CodeableConcept>,
    /// proposal | plan | order +
    pub intent: Coded<RequestIntent>,
    /// routine | urgent | asap | stat
    pub priority: Option<Coded<RequestPriority>>,
    /// Task Type
    pub code: Option<CodeableConcept>,
    /// Human-readable explanation of task
    pub description: Option<String>,
    /// What task is acting on
    pub focus: Option<Reference>,
    /// Beneficiary of the Task
    pub r#for: Option<Reference>,
    /// Healthcare event during which this task originated
    pub context: Option<Reference>,
    /// Start and end time of execution
    #[fhir_serde(rename = "executionPeriod")]
    pub execution_period: Option<Period>,
    /// Task Creation Date
    #[fhir_serde(rename = "authoredOn")]
    pub authored_on: Option<DateTime>,
    /// Task Last Modified Date
    #[fhir_serde(rename = "lastModified")]
    pub last_modified: Option<DateTime>,
    /// Who is asking for task to be done
    pub requester: Option<TaskRequester>,
    /// requester | dispatcher | scheduler | performer | monitor | manager | acquirer | reviewer
    #[fhir_serde(rename = "performerType")]
    pub performer_type: Option<Vec<CodeableConcept>>,
    /// Responsible individual
    pub owner: Option<Reference>,
    /// Why task is needed
    pub reason: Option<CodeableConcept>,
    /// Comments made about the task
    pub note: Option<Vec<Annotation>>,
    /// Key events in history of the Task
    #[fhir_serde(rename = "relevantHistory")]
    pub relevant_history: Option<Vec<Reference>>,
    /// Constraints on fulfillment tasks
    pub restriction: Option<TaskRestriction>,
    /// Information used to perform task
    pub input: Option<Vec<TaskInput>>,
    /// Information produced as part of task
    pub output: Option<Vec<TaskOutput>>,
}

impl Task {
    /// Builds a `Task` from its required fields.
    pub fn new(
        status: impl Into<Coded<TaskStatus>>,
        intent: impl Into<Coded<RequestIntent>>,
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
            part_of: None,
            status: status.into(),
            status_reason: None,
            business_status: None,
            intent: intent.into(),
            priority: None,
            code: None,
            description: None,
            focus: None,
            r#for: None,
            context: None,
            execution_period: None,
            authored_on: None,
            last_modified: None,
            requester: None,
            performer_type: None,
            owner: None,
            reason: None,
            note: None,
            relevant_history: None,
            restriction: None,
            input: None,
            output: None,
        }
    }
}

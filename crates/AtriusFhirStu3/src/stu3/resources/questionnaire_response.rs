//! QuestionnaireResponse: a completed or partially completed set of answers.

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the value\[x\] field in QuestionnaireResponseItemAnswer
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum QuestionnaireResponseItemAnswerValue {
    #[fhir_serde(rename = "valueBoolean")]
    Boolean(Boolean),
    #[fhir_serde(rename = "valueDecimal")]
    Decimal(Decimal),
    #[fhir_serde(rename = "valueInteger")]
    Integer(Integer),
    #[fhir_serde(rename = "valueDate")]
    Date(Date),
    #[fhir_serde(rename = "valueDateTime")]
    DateTime(DateTime),
    #[fhir_serde(rename = "valueTime")]
    Time(Time),
    #[fhir_serde(rename = "valueString")]
    String(String),
    #[fhir_serde(rename = "valueUri")]
    Uri(Uri),
    #[fhir_serde(rename = "valueAttachment")]
    Attachment(Attachment),
    #[fhir_serde(rename = "valueCoding")]
    Coding(Coding),
    #[fhir_serde(rename = "valueQuantity")]
    Quantity(Quantity),
    #[fhir_serde(rename = "valueReference")]
    Reference(Reference),
}

/// The response(s) to the question
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct QuestionnaireResponseItemAnswer {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Single-valued answer to the question
    #[fhir_serde(flatten)]
    pub value: Option<QuestionnaireResponseItemAnswerValue>,
    /// Nested groups and questions
    pub item: Option<Vec<QuestionnaireResponseItem>>,
}

/// Groups and questions
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct QuestionnaireResponseItem {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Pointer to specific item from Questionnaire
    #[fhir_serde(rename = "linkId")]
    pub link_id: String,
    /// ElementDefinition - details for the item
    pub definition: Option<Uri>,
    /// Name for group or question text
    pub text: Option<String>,
    /// The subject this group's answers are about
    pub subject: Option<Reference>,
    /// The response(s) to the question
    pub answer: Option<Vec<QuestionnaireResponseItemAnswer>>,
    /// Nested questionnaire response items
    pub item: Option<Vec<QuestionnaireResponseItem>>,
}

impl QuestionnaireResponseItem {
    /// Builds a `QuestionnaireResponseItem` from its required fields.
    pub fn new(link_id: impl Into<String>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            link_id: link_id.into(),
            definition: None,
            text: None,
            subject: None,
            answer: None,
            item: None,
        }
    }
}

/// A structured set of questions and their answers.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_resource(domain)]
pub struct QuestionnaireResponse {
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
    /// Unique id for this set of answers
    pub identifier: Option<Identifier>,
    /// Request fulfilled by this QuestionnaireResponse
    #[fhir_serde(rename = "basedOn")]
    pub based_on: Option<Vec<Reference>>,
    /// Part of this action
    pub parent: Option<Vec<Reference>>,
    /// Form being answered
    pub questionnaire: Option<Reference>,
    /// in-progress | completed | amended | entered-in-error | stopped
    pub status: Coded<QuestionnaireResponseStatus>,
    /// The subject of the questions
    pub subject: Option<Reference>,
    /// Encounter or Episode during which questionnaire was completed
    pub context: Option<Reference>,
    /// Date the answers were gathered
    pub authored: Option<DateTime>,
    /// Person who received and recorded the answers
    pub author: Option<Reference>,
    /// The person who answered the questions
    pub source: Option<Reference>,
    /// Groups and questions
    pub item: Option<Vec<QuestionnaireResponseItem>>,
}

impl QuestionnaireResponse {
    /// Builds a `QuestionnaireResponse` from its required fields.
    pub fn new(status: impl Into<Coded<QuestionnaireResponseStatus>>) -> Self {
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
            parent: None,
            questionnaire: None,
            status: status.into(),
            subject: None,
            context: None,
            authored: None,
            author: None,
            source: None,
            item: None,
        }
    }
}

//! Questionnaire: an organized set of questions for gathering answers.

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the answer\[x\] field in QuestionnaireItemEnableWhen
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "answer")]
pub enum QuestionnaireItemEnableWhenAnswer {
    #[fhir_serde(rename = "answerBoolean")]
    Boolean(Boolean),
    #[fhir_serde(rename = "answerDecimal")]
    Decimal(Decimal),
    #[fhir_serde(rename = "answerInteger")]
    Integer(Integer),
    #[fhir_serde(rename = "answerDate")]
    Date(Date),
    #[fhir_serde(rename = "answerDateTime")]
    DateTime(DateTime),
    #[fhir_serde(rename = "answerTime")]
    Time(Time),
    #[fhir_serde(rename = "answerString")]
    String(String),
    #[fhir_serde(rename = "answerUri")]
    Uri(Uri),
    #[fhir_serde(rename = "answerAttachment")]
    Attachment(Attachment),
    #[fhir_serde(rename = "answerCoding")]
    Coding(Coding),
    #[fhir_serde(rename = "answerQuantity")]
    Quantity(Quantity),
    #[fhir_serde(rename = "answerReference")]
    Reference(Reference),
}

/// Choice of types for the value\[x\] field in QuestionnaireItemOption
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum QuestionnaireItemOptionValue {
    #[fhir_serde(rename = "valueInteger")]
    Integer(Integer),
    #[fhir_serde(rename = "valueDate")]
    Date(Date),
    #[fhir_serde(rename = "valueTime")]
    Time(Time),
    #[fhir_serde(rename = "valueString")]
    String(String),
    #[fhir_serde(rename = "valueCoding")]
    Coding(Coding),
}

/// Choice of types for the initial\[x\] field in QuestionnaireItem
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "initial")]
pub enum QuestionnaireItemInitial {
    #[fhir_serde(rename = "initialBoolean")]
    Boolean(Boolean),
    #[fhir_serde(rename = "initialDecimal")]
    Decimal(Decimal),
    #[fhir_serde(rename = "initialInteger")]
    Integer(Integer),
    #[fhir_serde(rename = "initialDate")]
    Date(Date),
    #[fhir_serde(rename = "initialDateTime")]
    DateTime(DateTime),
    #[fhir_serde(rename = "initialTime")]
    Time(Time),
    #[fhir_serde(rename = "initialString")]
    String(String),
    #[fhir_serde(rename = "initialUri")]
    Uri(Uri),
    #[fhir_serde(rename = "initialAttachment")]
    Attachment(Attachment),
    #[fhir_serde(rename = "initialCoding")]
    Coding(Coding),
    #[fhir_serde(rename = "initialQuantity")]
    Quantity(Quantity),
    #[fhir_serde(rename = "initialReference")]
    Reference(Reference),
}

/// Only allow data when
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct QuestionnaireItemEnableWhen {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Question that determines whether item is enabled
    pub question: String,
    /// Enable when answered or not
    #[fhir_serde(rename = "hasAnswer")]
    pub has_answer: Option<Boolean>,
    /// Value question must have
    #[fhir_serde(flatten)]
    pub answer: Option<QuestionnaireItemEnableWhenAnswer>,
}

impl QuestionnaireItemEnableWhen {
    /// Builds a `QuestionnaireItemEnableWhen` from its required fields.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            question: question.into(),
            has_answer: None,
            answer: None,
        }
    }
}

/// Permitted answer
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct QuestionnaireItemOption {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Answer value
    #[fhir_serde(flatten)]
    pub value: QuestionnaireItemOptionValue,
}

impl QuestionnaireItemOption {
    /// Builds a `QuestionnaireItemOption` from its required fields.
    pub fn new(value: impl Into<QuestionnaireItemOptionValue>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            value: value.into(),
        }
    }
}

/// Questions and sections within the Questionnaire
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct QuestionnaireItem {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Unique id for item in questionnaire
    #[fhir_serde(rename = "linkId")]
    pub link_id: String,
    /// ElementDefinition - details for the item
    pub definition: Option<Uri>,
    /// Corresponding concept for this item in a terminology
    pub code: Option<Vec<Coding>>,
    /// E.g. "1(a)", "2.5.3"
    pub prefix: Option<String>,
    /// Primary text for the item
    pub text: Option<String>,
    /// group | display | boolean | decimal | integer | date | dateTime +
    pub r#type: Coded<QuestionnaireItemType>,
    /// Only allow data when
    #[fhir_serde(rename = "enableWhen")]
    pub enable_when: Option<Vec<QuestionnaireItemEnableWhen>>,
    /// Whether the item must be included in data results
    pub required: Option<Boolean>,
    /// Whether the item may repeat
    pub repeats: Option<Boolean>,
    /// Don't allow human editing
    #[fhir_serde(rename = "readOnly")]
    pub read_only: Option<Boolean>,
    /// No more than this many characters
    #[fhir_serde(rename = "maxLength")]
    pub max_length: Option<Integer>,
    /// Valueset containing permitted answers
    pub options: Option<Reference>,
    /// Permitted answer
    pub option: Option<Vec<QuestionnaireItemOption>>,
    /// Default value when item is first rendered
    #[fhir_serde(flatten)]
    pub initial: Option<QuestionnaireItemInitial>,
    /// Nested questionnaire items
    pub item: Option<Vec<QuestionnaireItem>>,
}

impl QuestionnaireItem {
    /// Builds a `QuestionnaireItem` from its required fields.
    pub fn new(
        link_id: impl Into<String>,
        r#type: impl Into<Coded<QuestionnaireItemType>>,
    ) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            link_id: link_id.into(),
            definition: None,
            code: None,
            prefix: None,
            text: None,
            r#type: r#type.into(),
            enable_when: None,
            required: None,
            repeats: None,
            read_only: None,
            max_length: None,
            options: None,
            option: None,
            initial: None,
            item: None,
        }
    }
}

/// A structured set of questions intended to guide the collection of answers from
/// end-users.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_resource(domain)]
pub struct Questionnaire {
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
    /// Logical URI to reference this questionnaire (globally unique)
    pub url: Option<Uri>,
    /// Additional identifier for the questionnaire
    pub identifier: Option<Vec<Identifier>>,
    /// Business version of the questionnaire
    pub version: Option<String>,
    /// Name for this questionnaire (computer friendly)
    pub name: Option<String>,
    /// Name for this questionnaire (human friendly)
    pub title: Option<String>,
    /// draft | active | retired | unknown
    pub status: Coded<PublicationStatus>,
    /// For testing purposes, not real usage
    pub experimental: Option<Boolean>,
    /// Date this was last changed
    pub date: Option<DateTime>,
    /// Name of the publisher (organization or individual)
    pub publisher: Option<String>,
    /// Natural language description of the questionnaire
    pub description: Option<Markdown>,
    /// Why this questionnaire is defined
    pub purpose: Option<Markdown>,
    /// When the questionnaire was approved by publisher
    #[fhir_serde(rename = "approvalDate")]
    pub approval_date: Option<Date>,
    /// When the questionnaire was last reviewed
    #[fhir_serde(rename = "lastReviewDate")]
    pub last_review_date: Option<Date>,
    /// When the questionnaire is expected to be used
    #[fhir_serde(rename = "effectivePeriod")]
    pub effective_period: Option<Period>,
    /// Context the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for questionnaire (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// Contact details for the publisher
    pub contact: Option<Vec<ContactDetail>>,
    /// Use and/or publishing restrictions
    pub copyright: Option<Markdown>,
    /// Concept that represents the overall questionnaire
    pub code: Option<Vec<Coding>>,
    /// Resource that can be subject of QuestionnaireResponse
    #[fhir_serde(rename = "subjectType")]
    pub subject_type: Option<Vec<Code>>,
    /// Questions and sections within the Questionnaire
    pub item: Option<Vec<QuestionnaireItem>>,
}

impl Questionnaire {
    /// Builds a `Questionnaire` from its required fields.
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
            status: status.into(),
            experimental: None,
            date: None,
            publisher: None,
            description: None,
            purpose: None,
            approval_date: None,
            last_review_date: None,
            effective_period: None,
            use_context: None,
            jurisdiction: None,
            contact: None,
            copyright: None,
            code: None,
            subject_type: None,
            item: None,
        }
    }
}

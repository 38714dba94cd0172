//! Library: shared logic, parameter definitions and data requirements.

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// The Library resource is a general-purpose container for knowledge asset
/// definitions.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_resource(domain)]
pub struct Library {
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
    /// Logical URI to reference this library (globally unique)
    pub url: Option<Uri>,
    /// Additional identifier for the library
    pub identifier: Option<Vec<Identifier>>,
    /// Business version of the library
    pub version: Option<String>,
    /// Name for this library (computer friendly)
    pub name: Option<String>,
    /// Name for this library (human friendly)
    pub title: Option<String>,
    /// draft | active | retired | unknown
    pub status: Coded<PublicationStatus>,
    /// For testing purposes, not real usage
    pub experimental: Option<Boolean>,
    /// logic-library | model-definition | asset-collection | module-definition
    pub r#type: CodeableConcept,
    /// Date this was last changed
    pub date: Option<DateTime>,
    /// Name of the publisher (organization or individual)
    pub publisher: Option<String>,
    /// Natural language description of the library
    pub description: Option<Markdown>,
    /// Why this library is defined
    pub purpose: Option<Markdown>,
    /// Describes the clinical usage of the library
    pub usage: Option<String>,
    /// When the library was approved by publisher
    #[fhir_serde(rename = "approvalDate")]
    pub approval_date: Option<Date>,
    /// When the library was last reviewed
    #[fhir_serde(rename = "lastReviewDate")]
    pub last_review_date: Option<Date>,
    /// When the library is expected to be used
    #[fhir_serde(rename = "effectivePeriod")]
    pub effective_period: Option<Period>,
    /// Context the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for library (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// E.g. Education, Treatment, Assessment, etc.
    pub topic: Option<Vec<CodeableConcept>>,
    /// A content contributor
    pub contributor: Option<Vec<Contributor>>,
    /// Contact details for the publisher
    pub contact: Option<Vec<ContactDetail>>,
    /// Use and/or publishing restrictions
    pub copyright: Option<Markdown>,
    /// Additional documentation, citations, etc.
    #[fhir_serde(rename = "relatedArtifact")]
    pub related_artifact: Option<Vec<RelatedArtifact>>,
    /// Parameters defined by the library
    pub parameter: Option<Vec<ParameterDefinition>>,
    /// What data is referenced by this library
    #[fhir_serde(rename = "dataRequirement")]
    pub data_requirement: Option<Vec<DataRequirement>>,
    /// Contents of the library, either embedded or referenced
    pub content: Option<Vec<Attachment>>,
}

impl Library {
    /// Builds a `Library` from its required fields.
    pub fn new(
        status: impl Into<Coded<PublicationStatus>>,
        r#type: impl Into<CodeableConcept>,
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
            url: None,
            identifier: None,
            version: None,
            name: None,
            title: None,
            status: status.into(),
            experimental: None,
            r#type: r#type.into(),
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
            parameter: None,
            data_requirement: None,
            content: None,
        }
    }
}

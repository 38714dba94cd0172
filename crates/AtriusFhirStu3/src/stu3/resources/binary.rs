use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// A binary resource can contain any content, whether text, image, pdf, zip archive,
/// etc.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_resource]
pub struct Binary {
    /// Logical id of this artifact
    pub id: Option<Id>,
    /// Metadata about the resource
    pub meta: Option<Meta>,
    /// A set of rules under which this content was created
    #[fhir_serde(rename = "implicitRules")]
    pub implicit_rules: Option<Uri>,
    /// Language of the resource content
    pub language: Option<Code>,
    /// MimeType of the binary content
    #[fhir_serde(rename = "contentType")]
    pub content_type: Code,
    /// Access Control Management
    #[fhir_serde(rename = "securityContext")]
    pub security_context: Option<Reference>,
    /// The actual content
    pub content: Base64Binary,
}

impl Binary {
    /// Builds a `Binary` from its required fields.
    pub fn new(content_type: impl Into<Code>, content: impl Into<Base64Binary>) -> Self {
        Self {
            id: None,
            meta: None,
            implicit_rules: None,
            language: None,
            content_type: content_type.into(),
            security_context: None,
            content: content.into(),
        }
    }
}

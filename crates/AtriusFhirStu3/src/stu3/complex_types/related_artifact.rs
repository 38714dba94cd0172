use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Related artifacts for a knowledge resource.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct RelatedArtifact {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// documentation | justification | citation | predecessor | successor |
    /// derived-from | depends-on | composed-of
    pub r#type: Coded<RelatedArtifactType>,
    /// Brief description of the related artifact
    pub display: Option<String>,
    /// Bibliographic citation for the artifact
    pub citation: Option<String>,
    /// Where the artifact can be accessed
    pub url: Option<Uri>,
    /// What document is being referenced
    pub document: Option<Attachment>,
    /// What resource is being referenced
    pub resource: Option<Reference>,
}

impl RelatedArtifact {
    /// Builds a `RelatedArtifact` from its required fields.
    pub fn new(r#type: impl Into<Coded<RelatedArtifactType>>) -> Self {
        Self {
            id: None,
            extension: None,
            r#type: r#type.into(),
            display: None,
            citation: None,
            url: None,
            document: None,
            resource: None,
        }
    }
}

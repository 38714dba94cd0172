use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the author\[x\] field in Annotation
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "author")]
pub enum AnnotationAuthor {
    /// Variant accepting the Reference type.
    #[fhir_serde(rename = "authorReference")]
    Reference(Reference),
    /// Variant accepting the String type.
    #[fhir_serde(rename = "authorString")]
    String(String),
}

/// Text node with attribution.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct Annotation {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// Individual responsible for the annotation
    #[fhir_serde(flatten)]
    pub author: Option<AnnotationAuthor>,
    /// When the annotation was made
    pub time: Option<DateTime>,
    /// The annotation - text content
    pub text: String,
}

impl Annotation {
    /// Builds an `Annotation` from its required fields.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            extension: None,
            author: None,
            time: None,
            text: text.into(),
        }
    }
}

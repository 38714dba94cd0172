use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Concept - reference to a terminology or just text.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct CodeableConcept {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// Code defined by a terminology system
    pub coding: Option<Vec<Coding>>,
    /// Plain text representation of the concept
    pub text: Option<String>,
}

impl CodeableConcept {
    pub fn from_text(text: &str) -> Self {
        CodeableConcept {
            text: Some(text.into()),
            ..Default::default()
        }
    }
}

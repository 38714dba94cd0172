use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// A human-readable formatted text, including images.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct Narrative {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// generated | extensions | additional | empty
    pub status: Coded<NarrativeStatus>,
    /// Limited xhtml content
    pub div: Xhtml,
}

impl Narrative {
    /// Builds a `Narrative` from its required fields.
    pub fn new(status: impl Into<Coded<NarrativeStatus>>, div: impl Into<Xhtml>) -> Self {
        Self {
            id: None,
            extension: None,
            status: status.into(),
            div: div.into(),
        }
    }
}

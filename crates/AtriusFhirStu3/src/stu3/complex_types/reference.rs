use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// A reference from one resource to another.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Reference {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// Literal reference, Relative, internal or absolute URL
    pub reference: Option<String>,
    /// Logical reference, when literal reference is not known
    pub identifier: Option<Identifier>,
    /// Text alternative for the resource
    pub display: Option<String>,
}

impl Reference {
    pub fn to(reference: &str) -> Self {
        Reference {
            reference: Some(reference.into()),
            ..Default::default()
        }
    }

    /// The id of a contained resource this reference points at, if it is a
    /// local `#id` reference.
    pub fn contained_id(&self) -> Option<&str> {
        self.reference.as_ref()?.value.as_deref()?.strip_prefix('#')
    }
}

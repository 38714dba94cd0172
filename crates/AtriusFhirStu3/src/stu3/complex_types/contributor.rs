use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Contributor information.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct Contributor {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// author | editor | reviewer | endorser
    pub r#type: Coded<ContributorType>,
    /// Who contributed the content
    pub name: String,
    /// Contact details of the contributor
    pub contact: Option<Vec<ContactDetail>>,
}

impl Contributor {
    /// Builds a `Contributor` from its required fields.
    pub fn new(r#type: impl Into<Coded<ContributorType>>, name: impl Into<String>) -> Self {
        Self {
            id: None,
            extension: None,
            r#type: r#type.into(),
            name: name.into(),
            contact: None,
        }
    }
}

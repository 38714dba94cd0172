use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Contact information.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ContactDetail {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// Name of an individual to contact
    pub name: Option<String>,
    /// Contact details for individual or organization
    pub telecom: Option<Vec<ContactPoint>>,
}

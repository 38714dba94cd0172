use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Details of a Technology mediated contact point (phone, fax, email, etc.).
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ContactPoint {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub system: Option<Coded<ContactPointSystem>>,
    /// The actual contact point details
    pub value: Option<String>,
    #[fhir_serde(rename = "use")]
    pub r#use: Option<Coded<ContactPointUse>>,
    /// Specify preferred order of use (1 = highest)
    pub rank: Option<PositiveInt>,
    /// Time period when the contact point was/is in use
    pub period: Option<Period>,
}

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Metadata about a resource.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Meta {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// Version specific identifier
    #[fhir_serde(rename = "versionId")]
    pub version_id: Option<Id>,
    /// When the resource version last changed
    #[fhir_serde(rename = "lastUpdated")]
    pub last_updated: Option<Instant>,
    /// Profiles this resource claims to conform to
    pub profile: Option<Vec<Uri>>,
    /// Security Labels applied to this resource
    pub security: Option<Vec<Coding>>,
    /// Tags applied to this resource
    pub tag: Option<Vec<Coding>>,
}

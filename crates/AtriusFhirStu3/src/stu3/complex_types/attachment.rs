use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Content in a format defined elsewhere.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Attachment {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// Mime type of the content, with charset etc.
    #[fhir_serde(rename = "contentType")]
    pub content_type: Option<Code>,
    /// Human language of the content (BCP-47)
    pub language: Option<Code>,
    /// Data inline, base64ed
    pub data: Option<Base64Binary>,
    /// Uri where the data can be found
    pub url: Option<Uri>,
    /// Number of bytes of content (if url provided)
    pub size: Option<UnsignedInt>,
    /// Hash of the data (sha-1, base64ed)
    pub hash: Option<Base64Binary>,
    /// Label to display in place of the data
    pub title: Option<String>,
    /// Date attachment was first created
    pub creation: Option<DateTime>,
}

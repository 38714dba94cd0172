use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the who\[x\] field in Signature
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "who")]
pub enum SignatureWho {
    #[fhir_serde(rename = "whoUri")]
    Uri(Uri),
    #[fhir_serde(rename = "whoReference")]
    Reference(Reference),
}

/// Choice of types for the onBehalfOf\[x\] field in Signature
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "onBehalfOf")]
pub enum SignatureOnBehalfOf {
    #[fhir_serde(rename = "onBehalfOfUri")]
    Uri(Uri),
    #[fhir_serde(rename = "onBehalfOfReference")]
    Reference(Reference),
}

/// A digital signature along with supporting context.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct Signature {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// Indication of the reason the entity signed the object(s)
    pub r#type: Vec<Coding>,
    /// When the signature was created
    pub when: Instant,
    /// Who signed
    #[fhir_serde(flatten)]
    pub who: SignatureWho,
    /// The party represented
    #[fhir_serde(flatten)]
    pub on_behalf_of: Option<SignatureOnBehalfOf>,
    /// The technical format of the signature
    #[fhir_serde(rename = "contentType")]
    pub content_type: Option<Code>,
    /// The actual signature content (XML DigSig. JWT, picture, etc.)
    pub blob: Option<Base64Binary>,
}

impl Signature {
    /// Builds a `Signature` from its required fields.
    pub fn new(
        r#type: impl Into<Vec<Coding>>,
        when: impl Into<Instant>,
        who: impl Into<SignatureWho>,
    ) -> Self {
        Self {
            id: None,
            extension: None,
            r#type: r#type.into(),
            when: when.into(),
            who: who.into(),
            on_behalf_of: None,
            content_type: None,
            blob: None,
        }
    }
}

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

open_choice! {
    /// Choice of types for the value\[x\] field in Extension
    ExtensionValue, "value"
}

/// Optional Extension Element - found in all resources.
///
/// `url` identifies the meaning of the extension; it is a plain string
/// because it can never be extended itself. An extension either carries a
/// `value[x]` or nested `extension`s, never both.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct Extension {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub url: std::string::String,
    #[fhir_serde(flatten)]
    pub value: Option<ExtensionValue>,
}

impl Extension {
    pub fn new(url: impl Into<std::string::String>, value: ExtensionValue) -> Self {
        Extension {
            id: None,
            extension: None,
            url: url.into(),
            value: Some(value),
        }
    }

    /// A complex extension: no value of its own, only nested extensions.
    pub fn nested(url: impl Into<std::string::String>, extension: Vec<Extension>) -> Self {
        Extension {
            id: None,
            extension: Some(extension),
            url: url.into(),
            value: None,
        }
    }
}

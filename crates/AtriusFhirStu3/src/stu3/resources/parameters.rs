//! Operation request and response parameters.

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

open_choice! {
    /// Choice of types for the value\[x\] field in ParametersParameter
    ParametersParameterValue, "value"
}

/// Operation Parameter
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ParametersParameter {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Name from the definition
    pub name: String,
    /// If parameter is a data type
    #[fhir_serde(flatten)]
    pub value: Option<ParametersParameterValue>,
    /// If parameter is a whole resource
    pub resource: Option<Resource>,
    /// Named part of a multi-part parameter
    pub part: Option<Vec<ParametersParameter>>,
}

impl ParametersParameter {
    /// Builds a `ParametersParameter` from its required fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            name: name.into(),
            value: None,
            resource: None,
            part: None,
        }
    }
}

/// This special resource type is used to represent an operation request and
/// response. It has no other use, and there is no RESTful endpoint associated with
/// it.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_resource]
pub struct Parameters {
    /// Logical id of this artifact
    pub id: Option<Id>,
    /// Metadata about the resource
    pub meta: Option<Meta>,
    /// A set of rules under which this content was created
    #[fhir_serde(rename = "implicitRules")]
    pub implicit_rules: Option<Uri>,
    /// Language of the resource content
    pub language: Option<Code>,
    /// Operation Parameter
    pub parameter: Option<Vec<ParametersParameter>>,
}

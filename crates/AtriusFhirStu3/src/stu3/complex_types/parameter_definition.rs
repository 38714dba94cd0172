use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Definition of a parameter to a module.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ParameterDefinition {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// Name used to access the parameter value
    pub name: Option<Code>,
    /// in | out
    #[fhir_serde(rename = "use")]
    pub r#use: Coded<OperationParameterUse>,
    /// Minimum cardinality
    pub min: Option<Integer>,
    /// Maximum cardinality (a number of *)
    pub max: Option<String>,
    /// A brief description of the parameter
    pub documentation: Option<String>,
    /// What type of value
    pub r#type: Code,
    /// What profile the value is expected to be
    pub profile: Option<Reference>,
}

impl ParameterDefinition {
    /// Builds a `ParameterDefinition` from its required fields.
    pub fn new(r#use: impl Into<Coded<OperationParameterUse>>, r#type: impl Into<Code>) -> Self {
        Self {
            id: None,
            extension: None,
            name: None,
            r#use: r#use.into(),
            min: None,
            max: None,
            documentation: None,
            r#type: r#type.into(),
            profile: None,
        }
    }
}

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the value\[x\] field in UsageContext
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum UsageContextValue {
    #[fhir_serde(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir_serde(rename = "valueQuantity")]
    Quantity(Quantity),
    #[fhir_serde(rename = "valueRange")]
    Range(Range),
}

/// Describes the context of use for a conformance or knowledge resource.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct UsageContext {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// Type of context being specified
    pub code: Coding,
    /// Value that defines the context
    #[fhir_serde(flatten)]
    pub value: UsageContextValue,
}

impl UsageContext {
    /// Builds an `UsageContext` from its required fields.
    pub fn new(code: impl Into<Coding>, value: impl Into<UsageContextValue>) -> Self {
        Self {
            id: None,
            extension: None,
            code: code.into(),
            value: value.into(),
        }
    }
}

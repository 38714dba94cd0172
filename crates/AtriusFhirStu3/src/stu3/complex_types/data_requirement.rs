use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the valueSet\[x\] field in DataRequirementCodeFilter
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "valueSet")]
pub enum DataRequirementCodeFilterValueSet {
    #[fhir_serde(rename = "valueSetString")]
    String(String),
    #[fhir_serde(rename = "valueSetReference")]
    Reference(Reference),
}

/// What codes are expected
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct DataRequirementCodeFilter {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// The code-valued attribute of the filter
    pub path: String,
    /// Valueset for the filter
    #[fhir_serde(flatten)]
    pub value_set: Option<DataRequirementCodeFilterValueSet>,
    /// What code is expected
    #[fhir_serde(rename = "valueCode")]
    pub value_code: Option<Vec<Code>>,
    /// What Coding is expected
    #[fhir_serde(rename = "valueCoding")]
    pub value_coding: Option<Vec<Coding>>,
    /// What CodeableConcept is expected
    #[fhir_serde(rename = "valueCodeableConcept")]
    pub value_codeable_concept: Option<Vec<CodeableConcept>>,
}

impl DataRequirementCodeFilter {
    /// Builds a `DataRequirementCodeFilter` from its required fields.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            id: None,
            extension: None,
            path: path.into(),
            value_set: None,
            value_code: None,
            value_coding: None,
            value_codeable_concept: None,
        }
    }
}

/// Choice of types for the value\[x\] field in DataRequirementDateFilter
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum DataRequirementDateFilterValue {
    #[fhir_serde(rename = "valueDateTime")]
    DateTime(DateTime),
    #[fhir_serde(rename = "valuePeriod")]
    Period(Period),
    #[fhir_serde(rename = "valueDuration")]
    Duration(Duration),
}

/// What dates/date ranges are expected
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct DataRequirementDateFilter {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// The date-valued attribute of the filter
    pub path: String,
    /// The value of the filter, as a Period, DateTime, or Duration value
    #[fhir_serde(flatten)]
    pub value: Option<DataRequirementDateFilterValue>,
}

impl DataRequirementDateFilter {
    /// Builds a `DataRequirementDateFilter` from its required fields.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            id: None,
            extension: None,
            path: path.into(),
            value: None,
        }
    }
}

/// Describes a required data item.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct DataRequirement {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// The type of the required data
    pub r#type: Code,
    /// The profile of the required data
    pub profile: Option<Vec<Uri>>,
    /// Indicates that specific structure elements are referenced by the
    /// knowledge module
    #[fhir_serde(rename = "mustSupport")]
    pub must_support: Option<Vec<String>>,
    #[fhir_serde(rename = "codeFilter")]
    pub code_filter: Option<Vec<DataRequirementCodeFilter>>,
    #[fhir_serde(rename = "dateFilter")]
    pub date_filter: Option<Vec<DataRequirementDateFilter>>,
}

impl DataRequirement {
    /// Builds a `DataRequirement` from its required fields.
    pub fn new(r#type: impl Into<Code>) -> Self {
        Self {
            id: None,
            extension: None,
            r#type: r#type.into(),
            profile: None,
            must_support: None,
            code_filter: None,
            date_filter: None,
        }
    }
}

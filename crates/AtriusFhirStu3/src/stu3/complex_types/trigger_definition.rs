use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the eventTiming\[x\] field in TriggerDefinition
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "eventTiming")]
pub enum TriggerDefinitionEventTiming {
    #[fhir_serde(rename = "eventTimingTiming")]
    Timing(Timing),
    #[fhir_serde(rename = "eventTimingReference")]
    Reference(Reference),
    #[fhir_serde(rename = "eventTimingDate")]
    Date(Date),
    #[fhir_serde(rename = "eventTimingDateTime")]
    DateTime(DateTime),
}

/// Defines an expected trigger for a module.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct TriggerDefinition {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub r#type: Coded<TriggerType>,
    /// Triggering event name
    #[fhir_serde(rename = "eventName")]
    pub event_name: Option<String>,
    /// Timing of the event
    #[fhir_serde(flatten)]
    pub event_timing: Option<TriggerDefinitionEventTiming>,
    /// Triggering data of the event
    #[fhir_serde(rename = "eventData")]
    pub event_data: Option<DataRequirement>,
}

impl TriggerDefinition {
    /// Builds a `TriggerDefinition` from its required fields.
    pub fn new(r#type: impl Into<Coded<TriggerType>>) -> Self {
        Self {
            id: None,
            extension: None,
            r#type: r#type.into(),
            event_name: None,
            event_timing: None,
            event_data: None,
        }
    }
}

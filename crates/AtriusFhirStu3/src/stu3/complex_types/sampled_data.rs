use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// A series of measurements taken by a device.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct SampledData {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// Zero value and units
    pub origin: SimpleQuantity,
    /// Number of milliseconds between samples
    pub period: Decimal,
    /// Multiply data by this before adding to origin
    pub factor: Option<Decimal>,
    /// Lower limit of detection
    #[fhir_serde(rename = "lowerLimit")]
    pub lower_limit: Option<Decimal>,
    /// Upper limit of detection
    #[fhir_serde(rename = "upperLimit")]
    pub upper_limit: Option<Decimal>,
    /// Number of sample points at each time point
    pub dimensions: PositiveInt,
    /// Decimal values with spaces, or "E" | "U" | "L"
    pub data: String,
}

impl SampledData {
    /// Builds a `SampledData` from its required fields.
    pub fn new(
        origin: impl Into<SimpleQuantity>,
        period: impl Into<Decimal>,
        dimensions: impl Into<PositiveInt>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            extension: None,
            origin: origin.into(),
            period: period.into(),
            factor: None,
            lower_limit: None,
            upper_limit: None,
            dimensions: dimensions.into(),
            data: data.into(),
        }
    }
}

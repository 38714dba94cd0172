use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Set of values bounded by low and high.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Range {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// Low limit
    pub low: Option<SimpleQuantity>,
    /// High limit
    pub high: Option<SimpleQuantity>,
}

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// A ratio of two Quantity values - a numerator and a denominator.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Ratio {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub numerator: Option<Quantity>,
    pub denominator: Option<Quantity>,
}

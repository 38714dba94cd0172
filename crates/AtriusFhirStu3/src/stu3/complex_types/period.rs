use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Time range defined by start and end date/time.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Period {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// Starting time with inclusive boundary
    pub start: Option<DateTime>,
    /// End time with inclusive boundary, if not ongoing
    pub end: Option<DateTime>,
}

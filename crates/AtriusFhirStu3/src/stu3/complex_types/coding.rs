use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// A reference to a code defined by a terminology system.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Coding {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// Identity of the terminology system
    pub system: Option<Uri>,
    /// Version of the system - if relevant
    pub version: Option<String>,
    /// Symbol in syntax defined by the system
    pub code: Option<Code>,
    /// Representation defined by the system
    pub display: Option<String>,
    /// If this coding was chosen directly by the user
    #[fhir_serde(rename = "userSelected")]
    pub user_selected: Option<Boolean>,
}

impl Coding {
    pub fn new(system: &str, code: &str) -> Self {
        Coding {
            system: Some(system.into()),
            code: Some(code.into()),
            ..Default::default()
        }
    }
}

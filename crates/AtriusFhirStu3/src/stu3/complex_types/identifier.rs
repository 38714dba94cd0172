use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// An identifier intended for computation.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Identifier {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// usual | official | temp | secondary (If known)
    #[fhir_serde(rename = "use")]
    pub r#use: Option<Coded<IdentifierUse>>,
    /// Description of identifier
    pub r#type: Option<CodeableConcept>,
    /// The namespace for the identifier value
    pub system: Option<Uri>,
    /// The value that is unique
    pub value: Option<String>,
    /// Time period when id is/was valid for use
    pub period: Option<Period>,
    /// Organization that issued id (may be just text)
    pub assigner: Option<Box<Reference>>,
}

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Qualifications obtained by training and certification
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct PractitionerQualification {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// An identifier for this qualification for the practitioner
    pub identifier: Option<Vec<Identifier>>,
    /// Coded representation of the qualification
    pub code: CodeableConcept,
    /// Period during which the qualification is valid
    pub period: Option<Period>,
    /// Organization that regulates and issues the qualification
    pub issuer: Option<Reference>,
}

impl PractitionerQualification {
    /// Builds a `PractitionerQualification` from its required fields.
    pub fn new(code: impl Into<CodeableConcept>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            identifier: None,
            code: code.into(),
            period: None,
            issuer: None,
        }
    }
}

/// A person who is directly or indirectly involved in the provisioning of
/// healthcare.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_resource(domain)]
pub struct Practitioner {
    /// Logical id of this artifact
    pub id: Option<Id>,
    /// Metadata about the resource
    pub meta: Option<Meta>,
    /// A set of rules under which this content was created
    #[fhir_serde(rename = "implicitRules")]
    pub implicit_rules: Option<Uri>,
    /// Language of the resource content
    pub language: Option<Code>,
    /// Text summary of the resource, for human interpretation
    pub text: Option<Narrative>,
    /// Contained, inline Resources
    pub contained: Option<Vec<Resource>>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// A identifier for the person as this agent
    pub identifier: Option<Vec<Identifier>>,
    /// Whether this practitioner's record is in active use
    pub active: Option<Boolean>,
    /// The name(s) associated with the practitioner
    pub name: Option<Vec<HumanName>>,
    /// A contact detail for the practitioner (that apply to all roles)
    pub telecom: Option<Vec<ContactPoint>>,
    /// Address(es) of the practitioner that are not role specific (typically home address)
    pub address: Option<Vec<Address>>,
    /// male | female | other | unknown
    pub gender: Option<Coded<AdministrativeGender>>,
    /// The date on which the practitioner was born
    #[fhir_serde(rename = "birthDate")]
    pub birth_date: Option<Date>,
    /// Image of the person
    pub photo: Option<Vec<Attachment>>,
    /// Qualifications obtained by training and certification
    pub qualification: Option<Vec<PractitionerQualification>>,
    /// A language the practitioner is able to use in patient communication
    pub communication: Option<Vec<CodeableConcept>>,
}

//! Demographics and administrative information about a person receiving care.

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the deceased\[x\] field in Patient
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "deceased")]
pub enum PatientDeceased {
    #[fhir_serde(rename = "deceasedBoolean")]
    Boolean(Boolean),
    #[fhir_serde(rename = "deceasedDateTime")]
    DateTime(DateTime),
}

/// Choice of types for the multipleBirth\[x\] field in Patient
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "multipleBirth")]
pub enum PatientMultipleBirth {
    #[fhir_serde(rename = "multipleBirthBoolean")]
    Boolean(Boolean),
    #[fhir_serde(rename = "multipleBirthInteger")]
    Integer(Integer),
}

/// A contact party (e.g. guardian, partner, friend) for the patient
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct PatientContact {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The kind of relationship
    pub relationship: Option<Vec<CodeableConcept>>,
    /// A name associated with the contact person
    pub name: Option<HumanName>,
    /// A contact detail for the person
    pub telecom: Option<Vec<ContactPoint>>,
    /// Address for the contact person
    pub address: Option<Address>,
    /// male | female | other | unknown
    pub gender: Option<Coded<AdministrativeGender>>,
    /// Organization that is associated with the contact
    pub organization: Option<Reference>,
    /// The period during which this contact person or organization is valid to be contacted relating to this patient
    pub period: Option<Period>,
}

/// This patient is known to be an animal (non-human)
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct PatientAnimal {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// E.g. Dog, Cow
    pub species: CodeableConcept,
    /// E.g. Poodle, Angus
    pub breed: Option<CodeableConcept>,
    /// E.g. Neutered, Intact
    #[fhir_serde(rename = "genderStatus")]
    pub gender_status: Option<CodeableConcept>,
}

impl PatientAnimal {
    /// Builds a `PatientAnimal` from its required fields.
    pub fn new(species: impl Into<CodeableConcept>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            species: species.into(),
            breed: None,
            gender_status: None,
        }
    }
}

/// A list of Languages which may be used to communicate with the patient about his or her health
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct PatientCommunication {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The language which can be used to communicate with the patient about his or her health
    pub language: CodeableConcept,
    /// Language preference indicator
    pub preferred: Option<Boolean>,
}

impl PatientCommunication {
    /// Builds a `PatientCommunication` from its required fields.
    pub fn new(language: impl Into<CodeableConcept>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            language: language.into(),
            preferred: None,
        }
    }
}

/// Link to another patient resource that concerns the same actual person
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct PatientLink {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The other patient or related person resource that the link refers to
    pub other: Reference,
    /// replaced-by | replaces | refer | seealso - type of link
    pub r#type: Coded<LinkType>,
}

impl PatientLink {
    /// Builds a `PatientLink` from its required fields.
    pub fn new(other: impl Into<Reference>, r#type: impl Into<Coded<LinkType>>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            other: other.into(),
            r#type: r#type.into(),
        }
    }
}

/// Demographics and other administrative information about an individual or animal
/// receiving care or other health-related services.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_resource(domain)]
pub struct Patient {
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
    /// An identifier for this patient
    pub identifier: Option<Vec<Identifier>>,
    /// Whether this patient's record is in active use
    pub active: Option<Boolean>,
    /// A name associated with the patient
    pub name: Option<Vec<HumanName>>,
    /// A contact detail for the individual
    pub telecom: Option<Vec<ContactPoint>>,
    /// male | female | other | unknown
    pub gender: Option<Coded<AdministrativeGender>>,
    /// The date of birth for the individual
    #[fhir_serde(rename = "birthDate")]
    pub birth_date: Option<Date>,
    /// Indicates if the individual is deceased or not
    #[fhir_serde(flatten)]
    pub deceased: Option<PatientDeceased>,
    /// Addresses for the individual
    pub address: Option<Vec<Address>>,
    /// Marital (civil) status of a patient
    #[fhir_serde(rename = "maritalStatus")]
    pub marital_status: Option<CodeableConcept>,
    /// Whether patient is part of a multiple birth
    #[fhir_serde(flatten)]
    pub multiple_birth: Option<PatientMultipleBirth>,
    /// Image of the patient
    pub photo: Option<Vec<Attachment>>,
    /// A contact party (e.g. guardian, partner, friend) for the patient
    pub contact: Option<Vec<PatientContact>>,
    /// This patient is known to be an animal (non-human)
    pub animal: Option<PatientAnimal>,
    /// A list of Languages which may be used to communicate with the patient about his or her health
    pub communication: Option<Vec<PatientCommunication>>,
    /// Patient's nominated primary care provider
    #[fhir_serde(rename = "generalPractitioner")]
    pub general_practitioner: Option<Vec<Reference>>,
    /// Organization that is the custodian of the patient record
    #[fhir_serde(rename = "managingOrganization")]
    pub managing_organization: Option<Reference>,
    /// Link to another patient resource that concerns the same actual person
    pub link: Option<Vec<PatientLink>>,
}

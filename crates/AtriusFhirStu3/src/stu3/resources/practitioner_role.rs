use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Times the Service Site is available
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct PractitionerRoleAvailableTime {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// mon | tue | wed | thu | fri | sat | sun
    #[fhir_serde(rename = "daysOfWeek")]
    pub days_of_week: Option<Vec<Coded<DaysOfWeek>>>,
    /// Always available? e.g. 24 hour service
    #[fhir_serde(rename = "allDay")]
    pub all_day: Option<Boolean>,
    /// Opening time of day (ignored if allDay = true)
    #[fhir_serde(rename = "availableStartTime")]
    pub available_start_time: Option<Time>,
    /// Closing time of day (ignored if allDay = true)
    #[fhir_serde(rename = "availableEndTime")]
    pub available_end_time: Option<Time>,
}

/// Not available during this time due to provided reason
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct PractitionerRoleNotAvailable {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Reason presented to the user explaining why time not available
    pub description: String,
    /// Service not available from this date
    pub during: Option<Period>,
}

impl PractitionerRoleNotAvailable {
    /// Builds a `PractitionerRoleNotAvailable` from its required fields.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            description: description.into(),
            during: None,
        }
    }
}

/// A specific set of Roles/Locations/specialties/services that a practitioner may
/// perform at an organization for a period of time.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_resource(domain)]
pub struct PractitionerRole {
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
    /// Business Identifiers that are specific to a role/location
    pub identifier: Option<Vec<Identifier>>,
    /// Whether this practitioner's record is in active use
    pub active: Option<Boolean>,
    /// The period during which the practitioner is authorized to perform in these role(s)
    pub period: Option<Period>,
    /// Practitioner that is able to provide the defined services for the organization
    pub practitioner: Option<Reference>,
    /// Organization where the roles are available
    pub organization: Option<Reference>,
    /// Roles which this practitioner may perform
    pub code: Option<Vec<CodeableConcept>>,
    /// Specific specialty of the practitioner
    pub specialty: Option<Vec<CodeableConcept>>,
    /// The location(s) at which this practitioner provides care
    pub location: Option<Vec<Reference>>,
    /// The list of healthcare services that this worker provides for this role's Organization/Location(s)
    #[fhir_serde(rename = "healthcareService")]
    pub healthcare_service: Option<Vec<Reference>>,
    /// Contact details that are specific to the role/location/service
    pub telecom: Option<Vec<ContactPoint>>,
    /// Times the Service Site is available
    #[fhir_serde(rename = "availableTime")]
    pub available_time: Option<Vec<PractitionerRoleAvailableTime>>,
    /// Not available during this time due to provided reason
    #[fhir_serde(rename = "notAvailable")]
    pub not_available: Option<Vec<PractitionerRoleNotAvailable>>,
    /// Description of availability exceptions
    #[fhir_serde(rename = "availabilityExceptions")]
    pub availability_exceptions: Option<String>,
    /// Technical endpoints providing access to services operated for the practitioner with this role
    pub endpoint: Option<Vec<Reference>>,
}

//! Immunization: the event of a patient being administered a vaccine.

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Who performed event
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ImmunizationPractitioner {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// What type of performance was done
    pub role: Option<CodeableConcept>,
    /// Individual who was performing
    pub actor: Reference,
}

impl ImmunizationPractitioner {
    /// Builds an `ImmunizationPractitioner` from its required fields.
    pub fn new(actor: impl Into<Reference>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            role: None,
            actor: actor.into(),
        }
    }
}

/// Administration/non-administration reasons
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ImmunizationExplanation {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Why immunization occurred
    pub reason: Option<Vec<CodeableConcept>>,
    /// Why immunization did not occur
    #[fhir_serde(rename = "reasonNotGiven")]
    pub reason_not_given: Option<Vec<CodeableConcept>>,
}

/// Details of a reaction that follows immunization
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ImmunizationReaction {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// When reaction started
    pub date: Option<DateTime>,
    /// Additional information on reaction
    pub detail: Option<Reference>,
    /// Indicates self-reported reaction
    pub reported: Option<Boolean>,
}

/// What protocol was followed
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ImmunizationVaccinationProtocol {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Dose number within series
    #[fhir_serde(rename = "doseSequence")]
    pub dose_sequence: Option<PositiveInt>,
    /// Details of vaccine protocol
    pub description: Option<String>,
    /// Who is responsible for protocol
    pub authority: Option<Reference>,
    /// Name of vaccine series
    pub series: Option<String>,
    /// Recommended number of doses for immunity
    #[fhir_serde(rename = "seriesDoses")]
    pub series_doses: Option<PositiveInt>,
    /// Disease immunized against
    #[fhir_serde(rename = "targetDisease")]
    pub target_disease: Vec<CodeableConcept>,
    /// Indicates if dose counts towards immunity
    #[fhir_serde(rename = "doseStatus")]
    pub dose_status: CodeableConcept,
    /// Why dose does (not) count
    #[fhir_serde(rename = "doseStatusReason")]
    pub dose_status_reason: Option<CodeableConcept>,
}

impl ImmunizationVaccinationProtocol {
    /// Builds an `ImmunizationVaccinationProtocol` from its required fields.
    pub fn new(
        target_disease: impl Into<Vec<CodeableConcept>>,
        dose_status: impl Into<CodeableConcept>,
    ) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            dose_sequence: None,
            description: None,
            authority: None,
            series: None,
            series_doses: None,
            target_disease: target_disease.into(),
            dose_status: dose_status.into(),
            dose_status_reason: None,
        }
    }
}

/// Describes the event of a patient being administered a vaccination or a record
/// of a vaccination as reported by a patient, a clinician or another party and may
/// include vaccine reaction information and what vaccination protocol was followed.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_resource(domain)]
pub struct Immunization {
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
    /// Business identifier
    pub identifier: Option<Vec<Identifier>>,
    /// completed | entered-in-error
    pub status: Coded<ImmunizationStatus>,
    /// Flag for whether immunization was given
    #[fhir_serde(rename = "notGiven")]
    pub not_given: Boolean,
    /// Vaccine product administered
    #[fhir_serde(rename = "vaccineCode")]
    pub vaccine_code: CodeableConcept,
    /// Who was immunized
    pub patient: Reference,
    /// Encounter administered as part of
    pub encounter: Option<Reference>,
    /// Vaccination administration date
    pub date: Option<DateTime>,
    /// Indicates context the data was recorded in
    #[fhir_serde(rename = "primarySource")]
    pub primary_source: Boolean,
    /// Indicates the source of a secondarily reported record
    #[fhir_serde(rename = "reportOrigin")]
    pub report_origin: Option<CodeableConcept>,
    /// Where vaccination occurred
    pub location: Option<Reference>,
    /// Vaccine manufacturer
    pub manufacturer: Option<Reference>,
    /// Vaccine lot number
    #[fhir_serde(rename = "lotNumber")]
    pub lot_number: Option<String>,
    /// Vaccine expiration date
    #[fhir_serde(rename = "expirationDate")]
    pub expiration_date: Option<Date>,
    /// Body site vaccine was administered
    pub site: Option<CodeableConcept>,
    /// How vaccine entered body
    pub route: Option<CodeableConcept>,
    /// Amount of vaccine administered
    #[fhir_serde(rename = "doseQuantity")]
    pub dose_quantity: Option<SimpleQuantity>,
    /// Who performed event
    pub practitioner: Option<Vec<ImmunizationPractitioner>>,
    /// Vaccination notes
    pub note: Option<Vec<Annotation>>,
    /// Administration/non-administration reasons
    pub explanation: Option<ImmunizationExplanation>,
    /// Details of a reaction that follows immunization
    pub reaction: Option<Vec<ImmunizationReaction>>,
    /// What protocol was followed
    #[fhir_serde(rename = "vaccinationProtocol")]
    pub vaccination_protocol: Option<Vec<ImmunizationVaccinationProtocol>>,
}

impl Immunization {
    /// Builds an `Immunization` from its required fields.
    pub fn new(
        status: impl Into<Coded<ImmunizationStatus>>,
        not_given: impl Into<Boolean>,
        vaccine_code: impl Into<CodeableConcept>,
        patient: impl Into<Reference>,
        primary_source: impl Into<Boolean>,
    ) -> Self {
        Self {
            id: None,
            meta: None,
            implicit_rules: None,
            language: None,
            text: None,
            contained: None,
            extension: None,
            modifier_extension: None,
            identifier: None,
            status: status.into(),
            not_given: not_given.into(),
            vaccine_code: vaccine_code.into(),
            patient: patient.into(),
            encounter: None,
            date: None,
            primary_source: primary_source.into(),
            report_origin: None,
            location: None,
            manufacturer: None,
            lot_number: None,
            expiration_date: None,
            site: None,
            route: None,
            dose_quantity: None,
            practitioner: None,
            note: None,
            explanation: None,
            reaction: None,
            vaccination_protocol: None,
        }
    }
}

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the effective\[x\] field in DiagnosticReport
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "effective")]
pub enum DiagnosticReportEffective {
    #[fhir_serde(rename = "effectiveDateTime")]
    DateTime(DateTime),
    #[fhir_serde(rename = "effectivePeriod")]
    Period(Period),
}

/// Participants in producing the report
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct DiagnosticReportPerformer {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Type of performer
    pub role: Option<CodeableConcept>,
    /// Practitioner or Organization participant
    pub actor: Reference,
}

impl DiagnosticReportPerformer {
    /// Builds a `DiagnosticReportPerformer` from its required fields.
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

/// Key images associated with this report
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct DiagnosticReportImage {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Comment about the image (e.g. explanation)
    pub comment: Option<String>,
    /// Reference to the image source
    pub link: Reference,
}

impl DiagnosticReportImage {
    /// Builds a `DiagnosticReportImage` from its required fields.
    pub fn new(link: impl Into<Reference>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            comment: None,
            link: link.into(),
        }
    }
}

/// The findings and interpretation of diagnostic tests performed on patients,
/// groups of patients, devices, and locations, and/or specimens derived from these.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_resource(domain)]
pub struct DiagnosticReport {
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
    /// Business identifier for report
    pub identifier: Option<Vec<Identifier>>,
    /// What was requested
    #[fhir_serde(rename = "basedOn")]
    pub based_on: Option<Vec<Reference>>,
    /// registered | partial | preliminary | final +
    pub status: Coded<DiagnosticReportStatus>,
    /// Service category
    pub category: Option<CodeableConcept>,
    /// Name/Code for this diagnostic report
    pub code: CodeableConcept,
    /// The subject of the report - usually, but not always, the patient
    pub subject: Option<Reference>,
    /// Health care event when test ordered
    pub context: Option<Reference>,
    /// Clinically relevant time/time-period for report
    #[fhir_serde(flatten)]
    pub effective: Option<DiagnosticReportEffective>,
    /// DateTime this version was released
    pub issued: Option<Instant>,
    /// Participants in producing the report
    pub performer: Option<Vec<DiagnosticReportPerformer>>,
    /// Specimens this report is based on
    pub specimen: Option<Vec<Reference>>,
    /// Observations - simple, or complex nested groups
    pub result: Option<Vec<Reference>>,
    /// Reference to full details of imaging associated with the diagnostic report
    #[fhir_serde(rename = "imagingStudy")]
    pub imaging_study: Option<Vec<Reference>>,
    /// Key images associated with this report
    pub image: Option<Vec<DiagnosticReportImage>>,
    /// Clinical Interpretation of test results
    pub conclusion: Option<String>,
    /// Codes for the conclusion
    #[fhir_serde(rename = "codedDiagnosis")]
    pub coded_diagnosis: Option<Vec<CodeableConcept>>,
    /// Entire report as issued
    #[fhir_serde(rename = "presentedForm")]
    pub presented_form: Option<Vec<Attachment>>,
}

impl DiagnosticReport {
    /// Builds a `DiagnosticReport` from its required fields.
    pub fn new(
        status: impl Into<Coded<DiagnosticReportStatus>>,
        code: impl Into<CodeableConcept>,
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
            based_on: None,
            status: status.into(),
            category: None,
            code: code.into(),
            subject: None,
            context: None,
            effective: None,
            issued: None,
            performer: None,
            specimen: None,
            result: None,
            imaging_study: None,
            image: None,
            conclusion: None,
            coded_diagnosis: None,
            presented_form: None,
        }
    }
}
